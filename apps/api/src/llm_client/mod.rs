//! LLM client: the single point of entry for all chat-completion calls in the Outreach API.
//!
//! ARCHITECTURAL RULE: No other module may call the completion API directly.
//! Handlers receive an `Arc<dyn CompletionService>` through `AppState`, so tests can
//! swap in a stub without touching the network.
//!
//! Model: gpt-4o-mini (hardcoded, not configurable).

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, error};

#[cfg(test)]
pub mod stub;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
/// The model used for every completion call.
pub const MODEL: &str = "gpt-4o-mini";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx reply. The upstream body is logged where it is received, never carried
    /// back to the caller.
    #[error("Completion API error: {status}")]
    Api { status: u16 },

    #[error("Unexpected completion response format")]
    UnexpectedShape,

    #[error("Failed to parse completion response as JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
        /// Unparsed model output, kept for server-side logging only.
        raw: String,
    },
}

/// One single-turn completion: a system instruction, a user prompt and a sampling temperature.
/// The reply is always requested as a JSON object.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system: String,
    pub prompt: String,
    pub temperature: f32,
}

/// Anything that can turn a `CompletionRequest` into the model's raw text reply.
///
/// `LlmClient` talks to the real API; tests implement this with canned replies.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError>;
}

/// Calls the completion service and deserializes the reply text as JSON.
pub async fn complete_json<T: DeserializeOwned>(
    llm: &dyn CompletionService,
    request: &CompletionRequest,
) -> Result<T, LlmError> {
    let raw = llm.complete(request).await?;
    serde_json::from_str(&raw).map_err(|source| LlmError::Parse { source, raw })
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    response_format: ResponseFormat,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

impl<'a> ChatRequest<'a> {
    fn from_completion(request: &'a CompletionRequest) -> Self {
        Self {
            model: MODEL,
            temperature: request.temperature,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &request.system,
                },
                ChatMessage {
                    role: "user",
                    content: &request.prompt,
                },
            ],
        }
    }
}

/// Pulls `choices[0].message.content` out of a chat-completion reply.
fn extract_content(body: &Value) -> Option<&str> {
    body.pointer("/choices/0/message/content")
        .and_then(Value::as_str)
}

/// Chat-completion client for an OpenAI-compatible API.
///
/// No retries and no explicit timeout: a call runs until the transport gives up.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[async_trait]
impl CompletionService for LlmClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        debug!(model = MODEL, temperature = request.temperature, "Completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&ChatRequest::from_completion(request))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Completion API error: {body}");
            return Err(LlmError::Api {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        let body: Value = match serde_json::from_str(&text) {
            Ok(body) => body,
            Err(e) => {
                error!("Completion response is not JSON ({e}): {text}");
                return Err(LlmError::UnexpectedShape);
            }
        };

        match extract_content(&body) {
            Some(content) => Ok(content.to_string()),
            None => {
                error!("Unexpected completion response shape: {body}");
                Err(LlmError::UnexpectedShape)
            }
        }
    }
}
