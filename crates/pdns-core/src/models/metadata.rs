//! Per-zone metadata

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

string_enum! {
    /// Metadata kind
    MetadataKind {
        /// IP ranges allowed to perform AXFR
        AllowAxfrFrom => "ALLOW-AXFR-FROM",
        /// TSIG keys allowed to perform AXFR
        TsigAllowAxfr => "TSIG-ALLOW-AXFR",
        /// TSIG key used for AXFR retrieval
        AxfrMasterTsig => "AXFR-MASTER-TSIG",
        SoaEdit => "SOA-EDIT",
        SoaEditApi => "SOA-EDIT-API",
        Nsec3Param => "NSEC3PARAM",
        Presigned => "PRESIGNED",
        LuaAxfrScript => "LUA-AXFR-SCRIPT",
        ApiRectify => "API-RECTIFY",
        PublishCdnskey => "PUBLISH-CDNSKEY",
        PublishCds => "PUBLISH-CDS",
        SlaveRenotify => "SLAVE-RENOTIFY",
        AxfrSource => "AXFR-SOURCE",
        NotifyDnsUpdate => "NOTIFY-DNSUPDATE",
        AlsoNotify => "ALSO-NOTIFY",
        ForwardDnsUpdate => "FORWARD-DNSUPDATE",
        AllowDnsUpdateFrom => "ALLOW-DNSUPDATE-FROM",
        TsigAllowDnsUpdate => "TSIG-ALLOW-DNSUPDATE",
        Ixfr => "IXFR",
    }
}

/// A metadata kind and its values
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: Option<MetadataKind>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
}

impl Metadata {
    pub fn new<I, S>(kind: MetadataKind, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            kind: Some(kind),
            metadata: values.into_iter().map(Into::into).collect(),
        }
    }
}
