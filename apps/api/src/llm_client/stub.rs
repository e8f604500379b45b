//! Test double for `CompletionService`: returns a canned reply and records every request.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{CompletionRequest, CompletionService, LlmError};

#[derive(Debug, Clone)]
pub enum StubReply {
    Text(String),
    Api(u16),
    UnexpectedShape,
    MissingApiKey,
}

pub struct StubCompletion {
    reply: StubReply,
    requests: Mutex<Vec<CompletionRequest>>,
}

impl StubCompletion {
    pub fn text(text: impl Into<String>) -> Self {
        Self::replying(StubReply::Text(text.into()))
    }

    pub fn replying(reply: StubReply) -> Self {
        Self {
            reply,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionService for StubCompletion {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        match &self.reply {
            StubReply::Text(text) => Ok(text.clone()),
            StubReply::Api(status) => Err(LlmError::Api { status: *status }),
            StubReply::UnexpectedShape => Err(LlmError::UnexpectedShape),
            StubReply::MissingApiKey => Err(LlmError::MissingApiKey),
        }
    }
}
