//! OpenAI-compatible chat-completions client.
//!
//! Implements the [`ChatClient`](crate::ChatClient) trait against the
//! `POST /v1/chat/completions` endpoint
//! (https://api.openai.com/v1/chat/completions by default).

mod api;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;
