//! `servers/{vhost}/tsigkeys`

use pdns_core::models::TsigKey;
use pdns_core::Result;
use reqwest::Method;

use crate::Client;

/// TSIG key endpoints
#[derive(Debug, Clone)]
pub struct TsigKeysService {
    client: Client,
}

impl TsigKeysService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn keys_path(&self) -> String {
        self.client.vhost_path("tsigkeys")
    }

    fn key_path(&self, id: &str) -> String {
        self.client.vhost_path(&format!("tsigkeys/{id}"))
    }

    /// All keys, without their secrets
    pub async fn list(&self) -> Result<Vec<TsigKey>> {
        let request = self.client.new_request(Method::GET, &self.keys_path(), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn get(&self, id: &str) -> Result<TsigKey> {
        let request = self.client.new_request(Method::GET, &self.key_path(id), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Create a key; an empty `key` lets the server generate the secret
    pub async fn create(&self, name: &str, algorithm: &str, key: &str) -> Result<TsigKey> {
        let body = TsigKey::new(name, algorithm, key);
        let request = self
            .client
            .new_json_request(Method::POST, &self.keys_path(), &[], &body)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Rename a key or replace its algorithm or secret
    pub async fn change(&self, id: &str, key: &TsigKey) -> Result<TsigKey> {
        let request = self
            .client
            .new_json_request(Method::PUT, &self.key_path(id), &[], key)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let request = self.client.new_request(Method::DELETE, &self.key_path(id), &[])?;
        self.client.send_empty(request).await
    }
}
