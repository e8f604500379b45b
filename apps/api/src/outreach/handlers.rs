//! Axum route handlers for outreach drafting.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use tracing::info;

use crate::errors::AppError;
use crate::outreach::drafter::draft_outreach;
use crate::outreach::models::{OutreachDraft, OutreachRequest};
use crate::state::AppState;

/// POST /functions/v1/generate-outreach
///
/// Returns the five-channel `OutreachDraft`, or a `{error}` envelope.
pub async fn handle_generate_outreach(
    State(state): State<AppState>,
    payload: Result<Json<OutreachRequest>, JsonRejection>,
) -> Result<Json<OutreachDraft>, AppError> {
    let Json(request) = payload?;
    info!(journalist = %request.journalist.name, "Generating outreach");

    let draft = draft_outreach(state.llm.as_ref(), &request.journalist, &request.company)
        .await?;

    info!(journalist = %request.journalist.name, "Generated outreach messages");
    Ok(Json(draft))
}
