//! `servers/{vhost}/zones/{zone}/cryptokeys`

use pdns_core::models::{Cryptokey, CryptokeyActivation};
use pdns_core::{Result, canonical_domain};
use reqwest::Method;

use crate::Client;

/// DNSSEC key endpoints
#[derive(Debug, Clone)]
pub struct CryptokeysService {
    client: Client,
}

impl CryptokeysService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn keys_path(&self, domain: &str) -> String {
        self.client
            .vhost_path(&format!("zones/{}/cryptokeys", canonical_domain(domain)))
    }

    fn key_path(&self, domain: &str, id: u64) -> String {
        format!("{}/{}", self.keys_path(domain), id)
    }

    pub async fn list(&self, domain: &str) -> Result<Vec<Cryptokey>> {
        let request = self.client.new_request(Method::GET, &self.keys_path(domain), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// One key, including its private key material
    pub async fn get(&self, domain: &str, id: u64) -> Result<Cryptokey> {
        let request = self.client.new_request(Method::GET, &self.key_path(domain, id), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn activate(&self, domain: &str, id: u64) -> Result<()> {
        self.set_active(domain, id, true).await
    }

    pub async fn deactivate(&self, domain: &str, id: u64) -> Result<()> {
        self.set_active(domain, id, false).await
    }

    async fn set_active(&self, domain: &str, id: u64, active: bool) -> Result<()> {
        let request = self.client.new_json_request(
            Method::PUT,
            &self.key_path(domain, id),
            &[],
            &CryptokeyActivation { active },
        )?;
        self.client.send_empty(request).await
    }

    pub async fn delete(&self, domain: &str, id: u64) -> Result<()> {
        let request = self.client.new_request(Method::DELETE, &self.key_path(domain, id), &[])?;
        self.client.send_empty(request).await
    }
}
