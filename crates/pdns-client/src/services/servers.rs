//! `servers`

use pdns_core::models::{CacheFlushResult, Server};
use pdns_core::{Result, canonical_domain};
use reqwest::Method;

use crate::Client;

/// Server endpoints
///
/// These address any virtual host by name, not only the client's own.
#[derive(Debug, Clone)]
pub struct ServersService {
    client: Client,
}

impl ServersService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Server>> {
        let request = self.client.new_request(Method::GET, "servers", &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn get(&self, vhost: &str) -> Result<Server> {
        let request = self
            .client
            .new_request(Method::GET, &format!("servers/{vhost}"), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Flush the packet cache entries of `domain`
    pub async fn cache_flush(&self, vhost: &str, domain: &str) -> Result<CacheFlushResult> {
        let domain = canonical_domain(domain);
        let request = self.client.new_request(
            Method::PUT,
            &format!("servers/{vhost}/cache/flush"),
            &[("domain", domain.as_str())],
        )?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }
}
