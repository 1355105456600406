//! OpenAI client struct, request building, and response parsing.

use crate::{ChatError, ChatMessage};

use super::config::OpenAiConfig;

pub(crate) const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// OpenAI chat-completions API client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .expect("failed to build HTTP client");
        Self { config, http }
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    /// Build the JSON request body. The message list is sent exactly in the
    /// order given; the session is responsible for assembling it.
    pub(crate) fn build_request_body(&self, messages: &[ChatMessage]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
        })
    }

    /// Extract `choices[0].message` from the response and gate it through
    /// the well-formedness check. Any shape mismatch collapses to
    /// [`ChatError::MalformedMessage`].
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<ChatMessage, ChatError> {
        ChatMessage::from_value(&json["choices"][0]["message"])
            .ok_or(ChatError::MalformedMessage)
    }
}
