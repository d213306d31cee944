//! DNSSEC cryptokeys

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A DNSSEC key of a zone
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cryptokey {
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    pub id: Option<u64>,
    /// `ksk`, `zsk` or `csk`
    pub keytype: Option<String>,
    pub active: Option<bool>,
    pub published: Option<bool>,
    pub dnskey: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ds: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cds: Vec<String>,
    pub privatekey: Option<String>,
    pub algorithm: Option<String>,
    pub bits: Option<u64>,
}

/// Body of `PUT /zones/{id}/cryptokeys/{key_id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CryptokeyActivation {
    pub active: bool,
}
