//! `servers/{vhost}/zones`

use pdns_core::models::{AxfrRetrieveResult, NotifyResult, Zone, ZoneType};
use pdns_core::{Error, Result, canonical_domain};
use reqwest::Method;

use crate::Client;

/// Zone endpoints
#[derive(Debug, Clone)]
pub struct ZonesService {
    client: Client,
}

impl ZonesService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    fn zones_path(&self) -> String {
        self.client.vhost_path("zones")
    }

    fn zone_path(&self, domain: &str, action: &str) -> String {
        self.client
            .vhost_path(&format!("zones/{}/{}", canonical_domain(domain), action))
    }

    /// All zones of the virtual host
    pub async fn list(&self) -> Result<Vec<Zone>> {
        let request = self.client.new_request(Method::GET, &self.zones_path(), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// One zone including its RRsets
    pub async fn get(&self, domain: &str) -> Result<Zone> {
        let request = self.client.new_request(Method::GET, &self.zone_path(domain, ""), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Create `zone`
    ///
    /// The name is canonicalized and the object type defaults to `Zone`.
    pub async fn add(&self, zone: Zone) -> Result<Zone> {
        let mut zone = zone;
        let name = zone
            .name
            .as_deref()
            .map(canonical_domain)
            .ok_or_else(|| Error::request("zone name is required"))?;
        zone.name = Some(name);
        zone.zone_type.get_or_insert(ZoneType::Zone);

        tracing::info!("Creating zone {}", zone.name.as_deref().unwrap_or_default());

        let request = self
            .client
            .new_json_request(Method::POST, &self.zones_path(), &[], &zone)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Create a native zone served by `nameservers`
    pub async fn add_native(&self, domain: &str, nameservers: &[&str]) -> Result<Zone> {
        self.add(Zone::native(domain, nameservers.iter().copied())).await
    }

    /// Create a master zone served by `nameservers`
    pub async fn add_master(&self, domain: &str, nameservers: &[&str]) -> Result<Zone> {
        self.add(Zone::master(domain, nameservers.iter().copied())).await
    }

    /// Create a slave zone transferred from `masters`
    pub async fn add_slave(&self, domain: &str, masters: &[&str]) -> Result<Zone> {
        self.add(Zone::slave(domain, masters.iter().copied())).await
    }

    /// Update zone properties; only the fields set in `zone` change
    ///
    /// A name set in `zone` is sent in canonical form.
    pub async fn change(&self, domain: &str, zone: &Zone) -> Result<()> {
        let mut zone = zone.clone();
        if let Some(name) = zone.name.as_mut() {
            *name = canonical_domain(name);
        }

        let request = self
            .client
            .new_json_request(Method::PUT, &self.zone_path(domain, ""), &[], &zone)?;
        self.client.send_empty(request).await
    }

    /// Delete a zone with all its records
    pub async fn delete(&self, domain: &str) -> Result<()> {
        tracing::info!("Deleting zone {}", canonical_domain(domain));
        let request = self.client.new_request(Method::DELETE, &self.zone_path(domain, ""), &[])?;
        self.client.send_empty(request).await
    }

    /// Send a DNS NOTIFY to the zone's slaves
    pub async fn notify(&self, domain: &str) -> Result<NotifyResult> {
        let request = self
            .client
            .new_request(Method::PUT, &self.zone_path(domain, "notify"), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// Retrieve a slave zone from its master
    pub async fn axfr_retrieve(&self, domain: &str) -> Result<AxfrRetrieveResult> {
        let request = self
            .client
            .new_request(Method::PUT, &self.zone_path(domain, "axfr-retrieve"), &[])?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }

    /// The zone in AXFR (zone file) format
    pub async fn export(&self, domain: &str) -> Result<String> {
        let request = self
            .client
            .new_request(Method::GET, &self.zone_path(domain, "export"), &[])?;
        self.client.send_text(request).await
    }

    /// Rectify a DNSSEC-signed zone
    pub async fn rectify(&self, domain: &str) -> Result<()> {
        let request = self
            .client
            .new_request(Method::PUT, &self.zone_path(domain, "rectify"), &[])?;
        self.client.send_empty(request).await
    }
}
