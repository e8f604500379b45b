use serde::{Deserialize, Serialize};

use crate::journalists::models::{CompanyContext, JournalistLead};

/// Body of `POST /functions/v1/generate-outreach`.
#[derive(Debug, Clone, Deserialize)]
pub struct OutreachRequest {
    pub journalist: JournalistLead,
    #[serde(flatten)]
    pub company: CompanyContext,
}

/// Five drafts of the same pitch, one per channel. Every field is required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutreachDraft {
    pub email: String,
    pub x_direct_message: String,
    pub x_public_post: String,
    pub linked_in_direct_message: String,
    pub linked_in_public_post: String,
}
