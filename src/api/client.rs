use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::RequestError;

/// Status value the backend uses for a completed turn.
const SUCCESS_STATUS: &str = "success";

/// Body of `POST /chat`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatRequest {
    pub prompt: String,
    pub model: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    status: String,
    #[serde(default)]
    response: Option<String>,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub model: Option<String>,
}

/// Something that can turn a prompt into a reply.
///
/// The session controller only talks to the network through this trait, so
/// tests can drive it with scripted replies.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, RequestError>;
}

pub struct HttpChatClient {
    client: Client,
    base_url: String,
}

impl HttpChatClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.trim_end_matches('/'))
    }

    /// Queries the backend's health endpoint.
    pub async fn health(&self) -> Result<HealthStatus, RequestError> {
        let url = self.url("health");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| RequestError::Transport {
                url: url.clone(),
                source,
            })?;

        if !response.status().is_success() {
            return Err(RequestError::Status(response.status().as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|source| RequestError::Transport { url, source })?;

        serde_json::from_str(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ChatBackend for HttpChatClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, RequestError> {
        let url = self.url("chat");
        debug!(%url, model = %request.model, "sending chat request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|source| RequestError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|source| RequestError::Transport { url, source })?;

        parse_chat_response(&body)
    }
}

fn parse_chat_response(body: &str) -> Result<String, RequestError> {
    let parsed: ChatResponse =
        serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))?;

    if parsed.status != SUCCESS_STATUS {
        return Err(RequestError::Rejected {
            status: parsed.status,
            detail: parsed.response.unwrap_or_default(),
        });
    }

    parsed
        .response
        .ok_or_else(|| RequestError::Decode("missing 'response' field".to_string()))
}
