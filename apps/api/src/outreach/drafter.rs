//! Outreach drafting: one journalist, five channel-specific drafts.

use crate::journalists::models::{CompanyContext, JournalistLead};
use crate::llm_client::{complete_json, CompletionRequest, CompletionService, LlmError};
use crate::outreach::models::OutreachDraft;
use crate::outreach::prompts::{build_outreach_prompt, DRAFTER_SYSTEM, DRAFTER_TEMPERATURE};

/// Generates the five drafts. A reply missing any channel is a parse failure;
/// individual channels are never recovered on their own.
pub async fn draft_outreach(
    llm: &dyn CompletionService,
    journalist: &JournalistLead,
    company: &CompanyContext,
) -> Result<OutreachDraft, LlmError> {
    let request = CompletionRequest {
        system: DRAFTER_SYSTEM.to_string(),
        prompt: build_outreach_prompt(journalist, company),
        temperature: DRAFTER_TEMPERATURE,
    };
    complete_json(llm, &request).await
}
