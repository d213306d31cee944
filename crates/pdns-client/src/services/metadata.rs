//! `servers/{vhost}/zones/{zone}/metadata`

use pdns_core::models::{Metadata, MetadataKind};
use pdns_core::{Result, canonical_domain};
use reqwest::Method;

use crate::Client;

/// Zone metadata endpoints
#[derive(Debug, Clone)]
pub struct MetadataService {
    client: Client,
}

impl MetadataService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn metadata_path(&self, domain: &str) -> String {
        self.client
            .vhost_path(&format!("zones/{}/metadata", canonical_domain(domain)))
    }

    fn kind_path(&self, domain: &str, kind: &MetadataKind) -> String {
        format!("{}/{}", self.metadata_path(domain), kind)
    }

    pub async fn list(&self, domain: &str) -> Result<Vec<Metadata>> {
        let request = self.client.new_request(Method::GET, &self.metadata_path(domain), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Add values to a metadata kind, keeping the existing ones
    pub async fn create<I, S>(&self, domain: &str, kind: MetadataKind, values: I) -> Result<Metadata>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let metadata = Metadata::new(kind, values);
        let request = self
            .client
            .new_json_request(Method::POST, &self.metadata_path(domain), &[], &metadata)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn get(&self, domain: &str, kind: &MetadataKind) -> Result<Metadata> {
        let request = self.client.new_request(Method::GET, &self.kind_path(domain, kind), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Replace all values of a metadata kind
    pub async fn set<I, S>(&self, domain: &str, kind: MetadataKind, values: I) -> Result<Metadata>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let path = self.kind_path(domain, &kind);
        let metadata = Metadata::new(kind, values);
        let request = self
            .client
            .new_json_request(Method::PUT, &path, &[], &metadata)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    pub async fn delete(&self, domain: &str, kind: &MetadataKind) -> Result<()> {
        let request = self.client.new_request(Method::DELETE, &self.kind_path(domain, kind), &[])?;
        self.client.send_empty(request).await
    }
}
