// Outreach drafting: one lead plus company context in, five channel drafts out.
// All LLM calls go through llm_client.

pub mod drafter;
pub mod handlers;
pub mod models;
pub mod prompts;
