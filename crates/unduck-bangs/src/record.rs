//! Bang record

use serde::{Deserialize, Serialize};

/// Placeholder replaced with the encoded query in [`BangRecord::url_template`].
pub const QUERY_PLACEHOLDER: &str = "{{{s}}}";

/// A single bang definition.
///
/// Field names on the wire follow the compact DuckDuckGo bang dump format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BangRecord {
    /// Token typed after (or before) the `!`, e.g. `gh`
    #[serde(rename = "t")]
    pub token: String,
    /// Display name, e.g. `GitHub`
    #[serde(rename = "s")]
    pub short_name: String,
    /// Bare host used for bang-only queries
    #[serde(rename = "d")]
    pub domain: String,
    /// Search URL containing [`QUERY_PLACEHOLDER`]
    #[serde(rename = "u")]
    pub url_template: String,
    #[serde(rename = "c", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "sc", default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(rename = "r", default)]
    pub rank: u64,
}

impl BangRecord {
    pub fn new(token: &str, short_name: &str, domain: &str, url_template: &str) -> Self {
        Self {
            token: token.to_string(),
            short_name: short_name.to_string(),
            domain: domain.to_string(),
            url_template: url_template.to_string(),
            category: None,
            subcategory: None,
            rank: 0,
        }
    }

    pub fn has_placeholder(&self) -> bool {
        self.url_template.contains(QUERY_PLACEHOLDER)
    }
}
