use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;

/// Technology categories declared on a profile. Each category is a set, so
/// duplicate entries in upstream data collapse on load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TechStack {
    #[serde(deserialize_with = "null_as_empty")]
    pub languages: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub frameworks: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub tools: BTreeSet<String>,
    #[serde(deserialize_with = "null_as_empty")]
    pub databases: BTreeSet<String>,
}

impl TechStack {
    /// Languages plus frameworks. Tools and databases never count here.
    pub fn headline_count(&self) -> usize {
        self.languages.len() + self.frameworks.len()
    }
}

/// A raw profile as served by the profile store. Everything past `id` may be
/// absent, null or of the wrong type; such fields load as missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRecord {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub stack: TechStack,
    #[serde(default, deserialize_with = "lenient")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub size: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub ring_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub like_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient")]
    pub view_count: Option<u64>,
}

impl ProfileRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            stack: TechStack::default(),
            color: None,
            size: None,
            ring_count: None,
            like_count: None,
            view_count: None,
        }
    }
}

// Upstream sends `null` for empty collections as often as it omits them, and
// occasionally a scalar where a list belongs.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Any value that does not decode as `T` (null, wrong type, out of range)
/// becomes `None`. Only syntactically broken JSON fails.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
