//! Axum route handlers for journalist discovery.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::journalists::finder::find_journalists;
use crate::journalists::models::CompanyContext;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct FindJournalistsResponse {
    pub journalists: Vec<Value>,
}

/// POST /functions/v1/find-journalists
///
/// Returns `{journalists: [...]}`, possibly empty, or a `{error}` envelope.
pub async fn handle_find_journalists(
    State(state): State<AppState>,
    payload: Result<Json<CompanyContext>, JsonRejection>,
) -> Result<Json<FindJournalistsResponse>, AppError> {
    let Json(company) = payload?;
    info!(
        company = %company.company_name,
        website = %company.website,
        "Finding journalists"
    );

    let journalists = find_journalists(state.llm.as_ref(), &company).await?;

    info!(count = journalists.len(), "Found journalists");
    Ok(Json(FindJournalistsResponse { journalists }))
}
