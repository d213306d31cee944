// # Resource Record Sets
//
// An RRset is the unit PowerDNS accepts in a zone PATCH:
//
// ```json
// {"rrsets": [{"name": "www.example.com.", "type": "A", "ttl": 300,
//              "changetype": "REPLACE",
//              "records": [{"content": "192.0.2.1", "disabled": false, "set-ptr": false}]}]}
// ```
//
// ## Hostname targets
//
// The server requires canonical names as the content of CNAME and MX
// records. [`RRset::canonicalize`] rewrites those before a PATCH body is
// serialized.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::domain::canonical_domain;

string_enum! {
    @ignore_case
    /// DNS resource record type
    #[allow(clippy::upper_case_acronyms)]
    RRType {
        A => "A",
        AAAA => "AAAA",
        AFSDB => "AFSDB",
        ALIAS => "ALIAS",
        CAA => "CAA",
        CERT => "CERT",
        CDNSKEY => "CDNSKEY",
        CDS => "CDS",
        CNAME => "CNAME",
        DNSKEY => "DNSKEY",
        DNAME => "DNAME",
        DS => "DS",
        HINFO => "HINFO",
        HTTPS => "HTTPS",
        KEY => "KEY",
        LOC => "LOC",
        MX => "MX",
        NAPTR => "NAPTR",
        NS => "NS",
        NSEC => "NSEC",
        NSEC3 => "NSEC3",
        NSEC3PARAM => "NSEC3PARAM",
        OPENPGPKEY => "OPENPGPKEY",
        PTR => "PTR",
        RP => "RP",
        RRSIG => "RRSIG",
        SOA => "SOA",
        SPF => "SPF",
        SSHFP => "SSHFP",
        SRV => "SRV",
        SVCB => "SVCB",
        TKEY => "TKEY",
        TSIG => "TSIG",
        TLSA => "TLSA",
        SMIMEA => "SMIMEA",
        TXT => "TXT",
        URI => "URI",
    }
}

impl RRType {
    /// Record types whose content is a host name the server wants in
    /// canonical form
    pub fn has_hostname_target(&self) -> bool {
        matches!(self, RRType::CNAME | RRType::MX)
    }
}

/// How a PATCH treats an RRset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    /// Replace all records of the set (creating it if needed)
    Replace,
    /// Remove the set
    Delete,
}

/// A single resource record
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: Option<String>,
    pub disabled: Option<bool>,
    #[serde(rename = "set-ptr")]
    pub set_ptr: Option<bool>,
}

impl Record {
    /// An enabled record that does not touch PTR records
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            disabled: Some(false),
            set_ptr: Some(false),
        }
    }
}

/// A comment attached to an RRset
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: Option<String>,
    pub account: Option<String>,
    /// Unix timestamp (seconds)
    pub modified_at: Option<u64>,
}

impl Comment {
    /// A comment stamped with the current time
    pub fn new(content: impl Into<String>, account: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            account: Some(account.into()),
            modified_at: Some(Utc::now().timestamp().max(0) as u64),
        }
    }

    /// `modified_at` as a UTC timestamp
    pub fn modified_at_utc(&self) -> Option<DateTime<Utc>> {
        let secs = i64::try_from(self.modified_at?).ok()?;
        DateTime::from_timestamp(secs, 0)
    }
}

/// A named, typed group of records sharing a TTL
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRset {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub rr_type: Option<RRType>,
    pub ttl: Option<u32>,
    pub changetype: Option<ChangeType>,
    #[serde(default)]
    pub records: Vec<Record>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<Comment>,
}

impl RRset {
    /// An RRset that replaces `name`/`rr_type` with the given contents
    pub fn replace<I, S>(name: &str, rr_type: RRType, ttl: u32, contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: Some(canonical_domain(name)),
            rr_type: Some(rr_type),
            ttl: Some(ttl),
            changetype: Some(ChangeType::Replace),
            records: contents.into_iter().map(Record::new).collect(),
            comments: Vec::new(),
        }
    }

    /// An RRset that deletes `name`/`rr_type`
    pub fn delete(name: &str, rr_type: RRType) -> Self {
        Self {
            name: Some(canonical_domain(name)),
            rr_type: Some(rr_type),
            changetype: Some(ChangeType::Delete),
            ..Self::default()
        }
    }

    /// Attach comments to the set
    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }

    /// Bring the set into the form the server expects in a PATCH body:
    /// a canonical name and, for CNAME and MX, canonical record contents.
    pub fn canonicalize(&mut self) {
        if let Some(name) = self.name.as_mut() {
            *name = canonical_domain(name);
        }

        if self.rr_type.as_ref().is_some_and(RRType::has_hostname_target) {
            canonical_record_values(&mut self.records);
        }
    }
}

/// Rewrite every record content to canonical form
pub fn canonical_record_values(records: &mut [Record]) {
    for content in records.iter_mut().filter_map(|r| r.content.as_mut()) {
        *content = canonical_domain(content);
    }
}

/// PATCH body wrapper: `{"rrsets": [...]}`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RRsets {
    #[serde(rename = "rrsets", default)]
    pub sets: Vec<RRset>,
}

impl From<Vec<RRset>> for RRsets {
    fn from(sets: Vec<RRset>) -> Self {
        Self { sets }
    }
}

impl From<RRset> for RRsets {
    fn from(set: RRset) -> Self {
        Self { sets: vec![set] }
    }
}
