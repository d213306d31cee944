//! RRset changes through `PATCH servers/{vhost}/zones/{zone}`

use pdns_core::models::{RRType, RRset, RRsets, Zone};
use pdns_core::{Result, canonical_domain};
use reqwest::Method;

use crate::Client;

/// Resource record endpoints
#[derive(Debug, Clone)]
pub struct RecordsService {
    client: Client,
}

impl RecordsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn zone_path(&self, domain: &str) -> String {
        self.client
            .vhost_path(&format!("zones/{}", canonical_domain(domain)))
    }

    /// Add records; same as [`change`](Self::change), the set is replaced
    pub async fn add<I, S>(&self, domain: &str, name: &str, rr_type: RRType, ttl: u32, contents: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.change(domain, name, rr_type, ttl, contents).await
    }

    /// Replace the RRset `name`/`rr_type` with `contents`
    pub async fn change<I, S>(&self, domain: &str, name: &str, rr_type: RRType, ttl: u32, contents: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.patch_rrset(domain, RRset::replace(name, rr_type, ttl, contents))
            .await
    }

    /// Delete the RRset `name`/`rr_type`
    pub async fn delete(&self, domain: &str, name: &str, rr_type: RRType) -> Result<()> {
        self.patch_rrset(domain, RRset::delete(name, rr_type)).await
    }

    /// RRsets of `domain` named `name`, optionally restricted to one type
    pub async fn get(&self, domain: &str, name: &str, rr_type: Option<RRType>) -> Result<Vec<RRset>> {
        let name = canonical_domain(name);

        let mut query = vec![("rrset_name", name.as_str())];
        if let Some(rr_type) = &rr_type {
            query.push(("rrset_type", rr_type.as_str()));
        }

        let request = self
            .client
            .new_request(Method::GET, &self.zone_path(domain), &query)?;
        let zone: Zone = self.client.send_json(request).await?.unwrap_or_default();

        // Servers without rrset filtering return every set of the zone
        Ok(zone
            .rrsets
            .into_iter()
            .filter(|set| set.name.as_deref() == Some(name.as_str()))
            .filter(|set| rr_type.is_none() || set.rr_type == rr_type)
            .collect())
    }

    /// Apply a single RRset change
    pub async fn patch_rrset(&self, domain: &str, rrset: RRset) -> Result<()> {
        self.patch(domain, rrset.into()).await
    }

    /// Apply several RRset changes atomically
    pub async fn patch(&self, domain: &str, rrsets: RRsets) -> Result<()> {
        let mut rrsets = rrsets;
        rrsets.sets.iter_mut().for_each(RRset::canonicalize);

        tracing::debug!(
            "Patching {} RRset(s) in zone {}",
            rrsets.sets.len(),
            canonical_domain(domain)
        );

        let request = self
            .client
            .new_json_request(Method::PATCH, &self.zone_path(domain), &[], &rrsets)?;
        self.client.send_empty(request).await
    }
}
