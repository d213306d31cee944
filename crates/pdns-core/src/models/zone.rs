//! Zone resources

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::record::RRset;
use crate::domain::canonical_domain;

string_enum! {
    /// Zone kind
    ZoneKind {
        Native => "Native",
        Master => "Master",
        Slave => "Slave",
        Producer => "Producer",
        Consumer => "Consumer",
    }
}

string_enum! {
    /// Object type of a zone; the server always reports `Zone`
    ZoneType {
        Zone => "Zone",
    }
}

/// A DNS zone, identified by its canonical name
///
/// The name server, master and TSIG key lists are `Some(vec![])` to clear
/// them in a PUT and `None` to leave them unchanged.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub zone_type: Option<ZoneType>,
    pub url: Option<String>,
    pub kind: Option<ZoneKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rrsets: Vec<RRset>,
    pub serial: Option<u32>,
    pub notified_serial: Option<u32>,
    pub edited_serial: Option<u32>,
    pub masters: Option<Vec<String>>,
    pub dnssec: Option<bool>,
    pub nsec3param: Option<String>,
    pub nsec3narrow: Option<bool>,
    pub presigned: Option<bool>,
    pub soa_edit: Option<String>,
    pub soa_edit_api: Option<String>,
    pub api_rectify: Option<bool>,
    pub zone: Option<String>,
    pub catalog: Option<String>,
    pub account: Option<String>,
    pub nameservers: Option<Vec<String>>,
    pub master_tsig_key_ids: Option<Vec<String>>,
    pub slave_tsig_key_ids: Option<Vec<String>>,
}

impl Zone {
    /// A zone of the given kind with a canonical name
    pub fn new(name: &str, kind: ZoneKind) -> Self {
        Self {
            name: Some(canonical_domain(name)),
            zone_type: Some(ZoneType::Zone),
            kind: Some(kind),
            ..Self::default()
        }
    }

    /// A native zone served with the given name servers
    pub fn native<I, S>(name: &str, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nameservers: Some(nameservers.into_iter().map(Into::into).collect()),
            ..Self::new(name, ZoneKind::Native)
        }
    }

    /// A master zone served with the given name servers
    pub fn master<I, S>(name: &str, nameservers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            nameservers: Some(nameservers.into_iter().map(Into::into).collect()),
            ..Self::new(name, ZoneKind::Master)
        }
    }

    /// A slave zone transferred from the given masters
    pub fn slave<I, S>(name: &str, masters: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            masters: Some(masters.into_iter().map(Into::into).collect()),
            ..Self::new(name, ZoneKind::Slave)
        }
    }
}

/// Response of `PUT /zones/{id}/notify`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifyResult {
    pub result: Option<String>,
}

/// Response of `PUT /zones/{id}/axfr-retrieve`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxfrRetrieveResult {
    pub result: Option<String>,
}
