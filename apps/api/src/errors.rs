use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `500 {"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Llm(#[from] LlmError),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::InvalidBody(msg) => tracing::error!("Rejected request body: {msg}"),
            AppError::Llm(LlmError::Parse { source, raw }) => {
                tracing::error!("Failed to parse completion response ({source}): {raw}")
            }
            AppError::Llm(e) => tracing::error!("LLM error: {e}"),
        }

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
