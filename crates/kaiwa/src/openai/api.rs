//! ChatClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::{ChatClient, ChatError, ChatMessage};

use super::client::OpenAiClient;

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn send_message(&self, messages: &[ChatMessage]) -> Result<ChatMessage, ChatError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, count = messages.len(), "chat completions request");

        let response = self
            .http
            .post(&self.config.api_url)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ChatError::Timeout
                } else {
                    ChatError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        debug!(%status, url = %self.config.api_url, "chat completions response");
        for (name, value) in response.headers() {
            trace!("{name}: {}", value.to_str().unwrap_or("<non-ascii>"));
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ChatError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ChatError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
