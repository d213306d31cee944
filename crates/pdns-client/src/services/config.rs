//! `servers/{vhost}/config`

use pdns_core::models::ConfigSetting;
use pdns_core::Result;
use reqwest::Method;

use crate::Client;

/// Read-only view of the server configuration
#[derive(Debug, Clone)]
pub struct ConfigService {
    client: Client,
}

impl ConfigService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<ConfigSetting>> {
        let request = self
            .client
            .new_request(Method::GET, &self.client.vhost_path("config"), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }
}
