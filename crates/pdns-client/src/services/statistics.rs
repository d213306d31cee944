//! `servers/{vhost}/statistics`

use pdns_core::models::Statistic;
use pdns_core::Result;
use reqwest::Method;

use crate::Client;

/// Statistics endpoints
#[derive(Debug, Clone)]
pub struct StatisticsService {
    client: Client,
}

impl StatisticsService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Statistic>> {
        self.fetch(&[]).await
    }

    /// A single statistic; the server answers with a one-element list
    pub async fn get(&self, name: &str) -> Result<Vec<Statistic>> {
        self.fetch(&[("statistic", name)]).await
    }

    async fn fetch(&self, query: &[(&str, &str)]) -> Result<Vec<Statistic>> {
        let request = self
            .client
            .new_request(Method::GET, &self.client.vhost_path("statistics"), query)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }
}
