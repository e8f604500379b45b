use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Identifies the company pitching for coverage. Input only; never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyContext {
    pub company_name: String,
    pub company_description: String,
    pub website: String,
}

/// A citation backing a lead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub url: String,
}

/// The parts of a lead that outreach drafting reads, as the client sends it back.
///
/// Leads are model output passed through untouched, so the shape is not trusted:
/// only the `name` key is mandatory, a text field holding anything but a string reads
/// as empty (or absent, for handles), and fields the prompt never uses are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalistLead {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub parent_media_organization: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub coverage_summary: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub coverage_link: String,
    #[serde(default, deserialize_with = "lenient_handle")]
    pub linked_in: Option<String>,
    #[serde(default, deserialize_with = "lenient_handle")]
    pub twitter: Option<String>,
    #[serde(default, deserialize_with = "lenient_handle")]
    pub instagram: Option<String>,
    #[serde(default, deserialize_with = "lenient_sources")]
    pub sources: Vec<Source>,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        _ => String::new(),
    })
}

fn lenient_handle<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(handle) => Some(handle),
        _ => None,
    })
}

/// Keeps the entries that are objects; anything else in or instead of the list is dropped.
fn lenient_sources<'de, D>(deserializer: D) -> Result<Vec<Source>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
