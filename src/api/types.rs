//! Backend Payload Types
//!
//! Raw project cards as the search backend serves them. Field presence and
//! types are not guaranteed, so every field deserializes leniently.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Indicator name -> `{ "total": "...", "<section>": "...", ... }`, in backend order
pub type ApiIndicators = Map<String, Value>;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiResponsiblePerson {
    #[serde(deserialize_with = "lenient_string")]
    pub fio: String,
    #[serde(deserialize_with = "lenient_string")]
    pub position: String,
    #[serde(deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiDocumentLink {
    #[serde(deserialize_with = "lenient_string")]
    pub document_type: String,
    #[serde(deserialize_with = "lenient_string")]
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiProjectCard {
    #[serde(deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(deserialize_with = "lenient_string")]
    pub address: String,
    #[serde(deserialize_with = "lenient_string")]
    pub start_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub end_date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub indicators: ApiIndicators,
    #[serde(deserialize_with = "null_as_default")]
    pub responsible_persons: Vec<ApiResponsiblePerson>,
    #[serde(deserialize_with = "null_as_default")]
    pub document_links: Vec<ApiDocumentLink>,
}

/// Query parameters of `/api/v1/projects/search`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchParams {
    pub q: String,
}

impl SearchParams {
    pub fn new(q: impl Into<String>) -> Self {
        Self { q: q.into() }
    }
}

/// Accept strings, numbers and booleans as text; anything else becomes empty.
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
