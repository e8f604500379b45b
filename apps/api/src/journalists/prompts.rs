// LLM prompt text for journalist discovery.

use crate::journalists::models::CompanyContext;

/// How many leads the model is asked for. Not enforced on the reply.
pub const TARGET_JOURNALIST_COUNT: usize = 20;

/// Low temperature: lead lists should be repeatable, not creative.
pub const FINDER_TEMPERATURE: f32 = 0.3;

pub const FINDER_SYSTEM: &str = "You are a meticulous media researcher who only responds \
    with valid JSON and never includes commentary outside of the JSON object.";

/// Builds the discovery prompt for one company.
pub fn build_finder_prompt(company: &CompanyContext) -> String {
    let count = TARGET_JOURNALIST_COUNT;
    format!(
        r#"You are an expert at finding PR leads for tech startups. You are provided with [Customer company name], [company description], and [URL] which needs media outreach. They need to be covered by premier journalists in prominent media such as WSJ, Forbes, TechCrunch, BusinessInsider, WaPo, NYTimes etc. Find and search {count} different journalists who have covered a product like the one specified in the URL. If the URL is not descriptive enough, use the company description text instead. Search for the journalist's email, their LinkedIn address, their X handle, and their instagram.

While doing the search, indicate your sources, and the relevance score.

Return the data as JSON with a top-level "journalists" array of exactly {count} entries. Each entry MUST match the following schema and use null when data is unavailable:
{{
  "name": string,
  "parentMediaOrganization": string,
  "coverageSummary": string,
  "coverageLink": string (absolute URL),
  "email": string | null,
  "linkedIn": string | null,
  "twitter": string | null,
  "instagram": string | null,
  "relevanceScore": number (0-100),
  "sources": [
    {{ "description": string, "url": string (absolute URL) }}
  ]
}}

Customer company name: {company_name}
Company description: {company_description}
URL: {website}

Ensure that: (1) at least one source with a working link is provided per journalist, (2) relevanceScore is a whole number between 0 and 100, and (3) coverageSummary references the linked article. Do not include any extra commentary outside of the JSON."#,
        company_name = company.company_name,
        company_description = company.company_description,
        website = company.website,
    )
}
