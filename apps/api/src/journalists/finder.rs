//! Journalist discovery: asks the completion service for leads and passes them through.

use serde_json::Value;
use tracing::warn;

use crate::journalists::models::CompanyContext;
use crate::journalists::prompts::{build_finder_prompt, FINDER_SYSTEM, FINDER_TEMPERATURE};
use crate::llm_client::{complete_json, CompletionRequest, CompletionService, LlmError};

fn finder_request(company: &CompanyContext) -> CompletionRequest {
    CompletionRequest {
        system: FINDER_SYSTEM.to_string(),
        prompt: build_finder_prompt(company),
        temperature: FINDER_TEMPERATURE,
    }
}

/// Returns the leads exactly as the model produced them.
///
/// Upstream, shape and parse failures are errors. A reply that parses but has no
/// `journalists` array yields an empty list.
pub async fn find_journalists(
    llm: &dyn CompletionService,
    company: &CompanyContext,
) -> Result<Vec<Value>, LlmError> {
    let parsed: Value = complete_json(llm, &finder_request(company)).await?;
    Ok(extract_journalists(parsed))
}

/// Takes the top-level `journalists` array, or nothing.
pub fn extract_journalists(parsed: Value) -> Vec<Value> {
    match parsed {
        Value::Object(mut fields) => match fields.remove("journalists") {
            Some(Value::Array(journalists)) => journalists,
            Some(other) => {
                warn!("`journalists` is not an array ({other}); returning no leads");
                Vec::new()
            }
            None => {
                warn!("Completion reply has no `journalists` field; returning no leads");
                Vec::new()
            }
        },
        other => {
            warn!("Completion reply is not a JSON object ({other}); returning no leads");
            Vec::new()
        }
    }
}
