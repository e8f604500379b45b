// LLM prompt text for outreach drafting.
//
// The journalist context block is assembled from optional fields: each section is
// present only when it has something to say.

use crate::journalists::models::{CompanyContext, JournalistLead};

pub const DRAFTER_TEMPERATURE: f32 = 0.4;

pub const DRAFTER_SYSTEM: &str = "You are a concise PR copywriter who only responds with \
    valid JSON matching the requested schema.";

const OBJECTIVES: &str = "Your objectives:
- Be personalised and extremely concise. Hook the journalist in the opening line.
- Demonstrate familiarity with their previous coverage referenced above.
- Pitch a compelling, exclusive angle that aligns with their beat.
- Offer an exclusive interview or angle for the story.
- Produce five separate outreach messages tailored to these channels: email cold reach, X direct message, X public post (mention their handle directly), LinkedIn direct message, LinkedIn public post (mention their profile/handle directly).
- Do not use any em dashes or arrows in the responses.";

const OUTPUT_SHAPE: &str = r#"Return the result as JSON with this exact shape:
{
  "email": string,
  "xDirectMessage": string,
  "xPublicPost": string,
  "linkedInDirectMessage": string,
  "linkedInPublicPost": string
}

Ensure each value is a single concise message for the specified channel, ready to send."#;

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Social handles in fixed order: X, Instagram, LinkedIn. Absent or empty ones are
/// skipped; the rest are quoted as given.
pub fn handle_lines(journalist: &JournalistLead) -> Vec<String> {
    [
        ("X handle", &journalist.twitter),
        ("Instagram handle", &journalist.instagram),
        ("LinkedIn profile", &journalist.linked_in),
    ]
    .into_iter()
    .filter_map(|(label, value)| present(value).map(|v| format!("{label}: {v}")))
    .collect()
}

/// Citations numbered from 1.
pub fn source_lines(journalist: &JournalistLead) -> Vec<String> {
    journalist
        .sources
        .iter()
        .enumerate()
        .map(|(i, source)| format!("{}. {} ({})", i + 1, source.description, source.url))
        .collect()
}

/// Ordered fragments of the "important context" block, one per line.
pub fn journalist_context(journalist: &JournalistLead) -> Vec<String> {
    let mut fragments = vec![
        format!("- Recent coverage summary: {}", journalist.coverage_summary),
        format!("- Article link: {}", journalist.coverage_link),
    ];

    let handles = handle_lines(journalist);
    if !handles.is_empty() {
        fragments.push("- Handles:".to_string());
        fragments.extend(handles);
    }

    let sources = source_lines(journalist);
    if !sources.is_empty() {
        fragments.push("- Additional sources:".to_string());
        fragments.extend(sources);
    }

    fragments
}

/// Builds the drafting prompt for one journalist and company.
pub fn build_outreach_prompt(journalist: &JournalistLead, company: &CompanyContext) -> String {
    format!(
        "Draft a personalised outreach plan for journalist {name} at {outlet}. \
         The startup is {company_name} ({website}) with this description: {description}.\n\n\
         Important context about the journalist:\n{context}\n\n{OBJECTIVES}\n\n{OUTPUT_SHAPE}",
        name = journalist.name,
        outlet = journalist.parent_media_organization,
        company_name = company.company_name,
        website = company.website,
        description = company.company_description,
        context = journalist_context(journalist).join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journalists::models::Source;

    fn bare_journalist() -> JournalistLead {
        JournalistLead {
            name: "Jane Doe".to_string(),
            parent_media_organization: "TechDaily".to_string(),
            coverage_summary: "Wrote about warehouse robots.".to_string(),
            coverage_link: "https://techdaily.example/robots".to_string(),
            linked_in: None,
            twitter: None,
            instagram: None,
            sources: vec![],
        }
    }

    fn acme() -> CompanyContext {
        CompanyContext {
            company_name: "Acme".to_string(),
            company_description: "logistics AI".to_string(),
            website: "https://acme.dev".to_string(),
        }
    }

    #[test]
    fn test_no_handles_no_sources_omits_sections() {
        let context = journalist_context(&bare_journalist());
        assert_eq!(
            context,
            vec![
                "- Recent coverage summary: Wrote about warehouse robots.",
                "- Article link: https://techdaily.example/robots",
            ]
        );
    }

    #[test]
    fn test_handles_in_fixed_order() {
        let journalist = JournalistLead {
            linked_in: Some("https://linkedin.com/in/janedoe".to_string()),
            twitter: Some("@janedoe".to_string()),
            instagram: Some("@jane.snaps".to_string()),
            ..bare_journalist()
        };

        assert_eq!(
            handle_lines(&journalist),
            vec![
                "X handle: @janedoe",
                "Instagram handle: @jane.snaps",
                "LinkedIn profile: https://linkedin.com/in/janedoe",
            ]
        );
    }

    #[test]
    fn test_only_present_handles_listed() {
        let journalist = JournalistLead {
            twitter: Some(String::new()),
            linked_in: Some("janedoe".to_string()),
            ..bare_journalist()
        };

        assert_eq!(handle_lines(&journalist), vec!["LinkedIn profile: janedoe"]);
        let context = journalist_context(&journalist);
        assert_eq!(context[2], "- Handles:");
        assert_eq!(context[3], "LinkedIn profile: janedoe");
        assert_eq!(context.len(), 4);
    }

    #[test]
    fn test_handles_are_quoted_verbatim() {
        let journalist = JournalistLead {
            instagram: Some(" @jane.snaps ".to_string()),
            ..bare_journalist()
        };

        assert_eq!(handle_lines(&journalist), vec!["Instagram handle:  @jane.snaps "]);
    }

    #[test]
    fn test_sources_numbered_from_one() {
        let journalist = JournalistLead {
            sources: vec![
                Source {
                    description: "Robots piece".to_string(),
                    url: "https://techdaily.example/robots".to_string(),
                },
                Source {
                    description: "Author page".to_string(),
                    url: "https://techdaily.example/jane".to_string(),
                },
            ],
            ..bare_journalist()
        };

        let context = journalist_context(&journalist);
        assert_eq!(
            &context[2..],
            &[
                "- Additional sources:",
                "1. Robots piece (https://techdaily.example/robots)",
                "2. Author page (https://techdaily.example/jane)",
            ]
        );
    }

    #[test]
    fn test_prompt_names_journalist_company_and_channels() {
        let prompt = build_outreach_prompt(&bare_journalist(), &acme());

        assert!(prompt.starts_with(
            "Draft a personalised outreach plan for journalist Jane Doe at TechDaily. \
             The startup is Acme (https://acme.dev) with this description: logistics AI."
        ));
        assert!(prompt.contains(
            "Important context about the journalist:\n- Recent coverage summary: Wrote about warehouse robots.\n"
        ));
        assert!(prompt.contains("Do not use any em dashes or arrows"));
        for field in [
            "\"email\": string",
            "\"xDirectMessage\": string",
            "\"xPublicPost\": string",
            "\"linkedInDirectMessage\": string",
            "\"linkedInPublicPost\": string",
        ] {
            assert!(prompt.contains(field), "missing {field}");
        }
        assert!(!prompt.contains("- Handles:"));
        assert!(!prompt.contains("- Additional sources:"));
    }
}
