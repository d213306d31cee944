//! Server statistics
//!
//! PowerDNS reports three shapes of statistic: a plain `StatisticItem`
//! whose value is a string, and `MapStatisticItem` / `RingStatisticItem`
//! whose value is a list of name/value entries.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistic {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub statistic_type: Option<String>,
    /// Ring size, only set for ring statistics
    pub size: Option<String>,
    pub value: Option<StatisticValue>,
}

/// Value of a statistic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatisticValue {
    Single(String),
    Entries(Vec<StatisticEntry>),
}

impl StatisticValue {
    /// The value of a plain statistic
    pub fn as_single(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Entries(_) => None,
        }
    }

    /// The entries of a map or ring statistic
    pub fn entries(&self) -> &[StatisticEntry] {
        match self {
            Self::Single(_) => &[],
            Self::Entries(entries) => entries,
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticEntry {
    pub name: Option<String>,
    pub value: Option<String>,
}
