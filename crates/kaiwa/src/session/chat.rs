//! Async post method for Dialogue.

use tracing::debug;

use crate::{ChatMessage, PostError};

use super::manager::Dialogue;

impl Dialogue {
    /// Post a user message and await the assistant's reply.
    ///
    /// On success the user message and the reply are appended to history,
    /// in that order, and the reply's text content is returned. On any
    /// failure history is left exactly as it was.
    pub async fn post(&mut self, message: impl Into<String>) -> Result<String, PostError> {
        let user = ChatMessage::user(message);
        let messages = self.build_messages(&user);

        debug!(history = self.history.len(), "posting user message");

        let reply = self.client.send_message(&messages).await?;

        let content = reply.content.clone();
        self.history.push(user);
        self.history.push(reply);
        Ok(content)
    }
}
