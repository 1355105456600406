//! Conversation session management.
//!
//! A [`Dialogue`] holds the fixed priming context and the rolling message
//! history, and replays both ahead of every new user message.

mod chat;
mod manager;

pub use manager::{default_context, Dialogue};
