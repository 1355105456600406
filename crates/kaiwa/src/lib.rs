//! Conversation client for chat-completion APIs.
//!
//! Provides an OpenAI-compatible HTTP client and a [`Dialogue`] session
//! that keeps a fixed priming context plus a rolling message history,
//! replaying both on every request:
//! - One request/response exchange per [`Dialogue::post`], no retries
//! - History grows by two messages (user, assistant) per successful post
//! - Deep-copy history snapshots, so callers can never mutate session state

pub mod openai;
pub mod session;

use std::fmt;

use async_trait::async_trait;

pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{default_context, Dialogue};

/// Transport seam for sending a message list and receiving the assistant's
/// reply. Implemented by [`OpenAiClient`]; tests substitute mocks here.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError>;
}

/// A role-tagged unit of conversation content.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Well-formedness check for messages arriving from the API: an object
    /// with a `role` of `system`, `user`, or `assistant` and a string
    /// `content`. Anything else is rejected before it can reach history.
    pub fn from_value(value: &serde_json::Value) -> Option<Self> {
        let role = match value.get("role")?.as_str()? {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => return None,
        };
        let content = value.get("content")?.as_str()?.to_string();
        Some(Self { role, content })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error: HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("rate limited")]
    RateLimited,

    #[error("response parse error: {0}")]
    Parse(String),

    #[error("malformed chat message in response")]
    MalformedMessage,

    #[error("request timed out")]
    Timeout,

    #[error("configuration error: {0}")]
    Config(String),
}

/// Failure result of [`Dialogue::post`]. Displays the fixed diagnostic
/// reason; the underlying [`ChatError`] is reachable via `source()` or
/// [`PostError::cause`].
#[derive(Debug, thiserror::Error)]
#[error("posting message failed")]
pub struct PostError {
    source: ChatError,
}

impl PostError {
    pub fn cause(&self) -> &ChatError {
        &self.source
    }
}

impl From<ChatError> for PostError {
    fn from(source: ChatError) -> Self {
        Self { source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_value_accepts_all_three_roles() {
        for role in ["system", "user", "assistant"] {
            let value = serde_json::json!({ "role": role, "content": "hi" });
            let msg = ChatMessage::from_value(&value).unwrap();
            assert_eq!(msg.role.to_string(), role);
            assert_eq!(msg.content, "hi");
        }
    }

    #[test]
    fn from_value_rejects_unknown_role() {
        let value = serde_json::json!({ "role": "tool", "content": "hi" });
        assert!(ChatMessage::from_value(&value).is_none());
    }

    #[test]
    fn from_value_rejects_missing_fields() {
        assert!(ChatMessage::from_value(&serde_json::Value::Null).is_none());
        assert!(ChatMessage::from_value(&serde_json::json!({})).is_none());
        assert!(ChatMessage::from_value(&serde_json::json!({ "role": "user" })).is_none());
        assert!(ChatMessage::from_value(&serde_json::json!({ "content": "hi" })).is_none());
    }

    #[test]
    fn from_value_rejects_non_string_content() {
        let value = serde_json::json!({ "role": "assistant", "content": 42 });
        assert!(ChatMessage::from_value(&value).is_none());

        let value = serde_json::json!({ "role": 1, "content": "hi" });
        assert!(ChatMessage::from_value(&value).is_none());
    }

    #[test]
    fn role_serializes_lowercase() {
        let msg = ChatMessage::user("Hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json, serde_json::json!({ "role": "user", "content": "Hello" }));
    }

    #[test]
    fn chat_error_display() {
        let err = ChatError::Network("connection refused".into());
        assert_eq!(err.to_string(), "network error: connection refused");

        let err = ChatError::Api {
            status: 500,
            body: "oops".into(),
        };
        assert_eq!(err.to_string(), "API error: HTTP 500: oops");

        let err = ChatError::MalformedMessage;
        assert_eq!(err.to_string(), "malformed chat message in response");

        let err = ChatError::Timeout;
        assert_eq!(err.to_string(), "request timed out");
    }

    #[test]
    fn post_error_display_is_fixed_reason() {
        let err: PostError = ChatError::RateLimited.into();
        assert_eq!(err.to_string(), "posting message failed");
        assert!(matches!(err.cause(), ChatError::RateLimited));

        use std::error::Error;
        assert_eq!(err.source().unwrap().to_string(), "rate limited");
    }
}
