use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::api::{ChatBackend, ChatRequest, RequestError};

/// Replays canned replies and records every request it receives.
///
/// Once the script runs out every request fails with HTTP 503.
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, RequestError>>>,
    requests: Mutex<Vec<ChatRequest>>,
}

impl ScriptedBackend {
    pub fn replying(replies: Vec<Result<String, RequestError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::default(),
        }
    }

    #[allow(clippy::unwrap_used)]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatBackend for ScriptedBackend {
    #[allow(clippy::unwrap_used)]
    async fn complete(&self, request: &ChatRequest) -> Result<String, RequestError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(RequestError::Status(503)))
    }
}

/// Never answers.
pub struct SilentBackend;

#[async_trait]
impl ChatBackend for SilentBackend {
    async fn complete(&self, _request: &ChatRequest) -> Result<String, RequestError> {
        std::future::pending().await
    }
}
