//! Client configuration
//!
//! - [`BaseUrl`]: scheme/host/port of the PowerDNS webserver
//! - [`ClientConfig`]: serde-friendly description of a client, loadable
//!   from `PDNS_*` environment variables

use pdns_core::{Error, Result};
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;

/// Path prefix of every API endpoint
pub const API_ROOT: &str = "api/v1";

/// Scheme, host and port of the PowerDNS webserver
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl {
    scheme: String,
    hostname: String,
    port: u16,
}

impl BaseUrl {
    /// Parse a base URL such as `https://pdns.example.com:8081`
    ///
    /// A missing port defaults to 80 for `http` and 443 otherwise. IPv6
    /// literals must be bracketed (`http://[::1]:8081`); the returned
    /// hostname has no brackets.
    pub fn parse(base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)
            .map_err(|e| Error::config(format!("base URL {base_url:?} is not a valid URL: {e}")))?;

        let host = url
            .host_str()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| Error::config(format!("base URL {base_url:?} has no host")))?;

        let hostname = host
            .strip_prefix('[')
            .and_then(|h| h.strip_suffix(']'))
            .unwrap_or(host)
            .to_string();

        // Url drops ports that match the scheme default, so fall back here
        let port = url.port().unwrap_or(match url.scheme() {
            "http" => 80,
            _ => 443,
        });

        Ok(Self {
            scheme: url.scheme().to_string(),
            hostname,
            port,
        })
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// `host:port`, with IPv6 literals bracketed
    pub fn authority(&self) -> String {
        if self.hostname.contains(':') {
            format!("[{}]:{}", self.hostname, self.port)
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }

    /// Absolute URL of an API endpoint
    ///
    /// `path_fragment` is relative to `/api/v1/`; empty segments (duplicate,
    /// leading or trailing slashes) are dropped. The query is only attached
    /// when non-empty.
    pub fn api_url(&self, path_fragment: &str, query: &[(&str, &str)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}://{}/", self.scheme, self.authority()))
            .map_err(|e| Error::request(format!("cannot compose API URL: {e}")))?;

        url.path_segments_mut()
            .map_err(|_| Error::request("base URL cannot carry a path"))?
            .clear()
            .extend(
                API_ROOT
                    .split('/')
                    .chain(path_fragment.split('/'))
                    .filter(|segment| !segment.is_empty()),
            );

        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

/// Client configuration
///
/// # Security
///
/// The `Debug` implementation never prints the API key.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the PowerDNS webserver, e.g. `http://localhost:8081`
    pub base_url: String,

    /// Virtual host; empty means `localhost`
    #[serde(default)]
    pub vhost: String,

    /// Value of the `X-API-Key` header
    #[serde(default)]
    pub api_key: Option<String>,

    /// Static headers attached to every request
    #[serde(default)]
    pub headers: HashMap<String, String>,

    /// Request timeout for the default HTTP transport
    ///
    /// Unset means no timeout. Ignored when a custom transport is supplied.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("vhost", &self.vhost)
            .field("api_key", &self.api_key.as_ref().map(|_| "<REDACTED>"))
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Create a configuration for the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Set the virtual host
    pub fn with_vhost(mut self, vhost: impl Into<String>) -> Self {
        self.vhost = vhost.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add a static header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Load configuration from environment variables
    ///
    /// - `PDNS_BASE_URL` (required)
    /// - `PDNS_VHOST`
    /// - `PDNS_API_KEY`
    /// - `PDNS_TIMEOUT_SECS`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let base_url = lookup("PDNS_BASE_URL")
            .ok_or_else(|| Error::config("PDNS_BASE_URL is not set"))?;

        let timeout_secs = lookup("PDNS_TIMEOUT_SECS")
            .map(|s| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|e| Error::config(format!("PDNS_TIMEOUT_SECS {s:?}: {e}")))
            })
            .transpose()?;

        let config = Self {
            base_url,
            vhost: lookup("PDNS_VHOST").unwrap_or_default(),
            api_key: lookup("PDNS_API_KEY").filter(|k| !k.is_empty()),
            headers: HashMap::new(),
            timeout_secs,
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            return Err(Error::config("base URL cannot be empty"));
        }

        BaseUrl::parse(&self.base_url)?;

        if self.api_key.as_deref() == Some("") {
            return Err(Error::config("API key cannot be empty"));
        }

        if self.timeout_secs == Some(0) {
            return Err(Error::config("timeout must be > 0"));
        }

        Ok(())
    }
}
