//! Dialogue struct and conversation-state management.

use crate::openai::{OpenAiClient, OpenAiConfig};
use crate::{ChatClient, ChatMessage};

/// Built-in priming context: four system messages establishing a
/// companion-robot persona. An ordinary default value; replace it
/// wholesale with [`Dialogue::with_context`].
pub fn default_context() -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a palm-sized companion robot."),
        ChatMessage::system("You are one year old and always full of energy."),
        ChatMessage::system(
            "Your maker built the first of you, and now there are hundreds of you all over the world.",
        ),
        ChatMessage::system("You answer the user's message in frank and simple sentences."),
    ]
}

/// A conversation session: fixed context, rolling history, and an owned
/// transport. Context and history are never shared across sessions.
pub struct Dialogue {
    pub(super) client: Box<dyn ChatClient>,
    pub(super) context: Vec<ChatMessage>,
    pub(super) history: Vec<ChatMessage>,
}

impl Dialogue {
    pub fn new(client: Box<dyn ChatClient>) -> Self {
        Self {
            client,
            context: default_context(),
            history: Vec::new(),
        }
    }

    /// Construct a session backed by the OpenAI client.
    pub fn openai(config: OpenAiConfig) -> Self {
        Self::new(Box::new(OpenAiClient::new(config)))
    }

    /// Replace the priming context. Fixed once construction is done.
    pub fn with_context(mut self, context: Vec<ChatMessage>) -> Self {
        self.context = context;
        self
    }

    /// The outbound message list: context, then history, then the new user
    /// message, order preserved exactly.
    pub(super) fn build_messages(&self, user: &ChatMessage) -> Vec<ChatMessage> {
        let mut msgs = Vec::with_capacity(self.context.len() + self.history.len() + 1);
        msgs.extend(self.context.iter().cloned());
        msgs.extend(self.history.iter().cloned());
        msgs.push(user.clone());
        msgs
    }

    /// The priming context.
    pub fn context(&self) -> &[ChatMessage] {
        &self.context
    }

    /// Deep, independent copy of the conversation history. Mutating the
    /// returned vec never affects the session.
    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.clone()
    }

    /// Number of messages exchanged so far.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Drop the accumulated history. The context is untouched.
    pub fn clear(&mut self) {
        self.history.clear();
    }
}
