//! Server resources

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// A server instance (virtual host) exposed by the API
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "type")]
    pub server_type: Option<String>,
    pub id: Option<String>,
    /// `authoritative` for PowerDNS Authoritative
    pub daemon_type: Option<String>,
    pub version: Option<String>,
    pub url: Option<String>,
    pub config_url: Option<String>,
    pub zones_url: Option<String>,
}

/// Response of `PUT /servers/{vhost}/cache/flush`
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheFlushResult {
    /// Number of flushed cache entries
    pub count: Option<u32>,
    pub result: Option<String>,
}
