//! TSIG keys

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A TSIG key shared with other DNS servers
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigKey {
    pub name: Option<String>,
    pub id: Option<String>,
    /// e.g. `hmac-sha256`
    pub algorithm: Option<String>,
    /// Base64 secret; an empty key asks the server to generate one
    pub key: Option<String>,
    #[serde(rename = "type")]
    pub key_type: Option<String>,
}

impl TsigKey {
    pub fn new(name: impl Into<String>, algorithm: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            algorithm: Some(algorithm.into()),
            key: Some(key.into()),
            ..Self::default()
        }
    }
}
