//! Client for the chat inference endpoint.

mod client;
mod error;

pub use client::{ChatBackend, ChatRequest, HealthStatus, HttpChatClient};
pub use error::RequestError;
