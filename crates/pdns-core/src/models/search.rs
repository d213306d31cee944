//! Search results

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::record::RRType;

/// Restricts `GET /search-data` to one kind of object
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchObjectType {
    #[default]
    All,
    Zone,
    Record,
    Comment,
}

impl SearchObjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Zone => "zone",
            Self::Record => "record",
            Self::Comment => "comment",
        }
    }
}

/// One hit of a search query
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub content: Option<String>,
    pub disabled: Option<bool>,
    pub name: Option<String>,
    pub object_type: Option<String>,
    pub zone_id: Option<String>,
    pub zone: Option<String>,
    #[serde(rename = "type")]
    pub rr_type: Option<RRType>,
    pub ttl: Option<u32>,
}
