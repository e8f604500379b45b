// Journalist discovery: company context in, model-sourced leads out.
// All LLM calls go through llm_client.

pub mod finder;
pub mod handlers;
pub mod models;
pub mod prompts;
