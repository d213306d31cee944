//! `servers/{vhost}/search-data`

use pdns_core::models::{SearchObjectType, SearchResult};
use pdns_core::Result;
use reqwest::Method;

use crate::Client;

/// Full-text search over zones, records and comments
#[derive(Debug, Clone)]
pub struct SearchService {
    client: Client,
}

impl SearchService {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Search for `query` (`*` and `?` are wildcards), returning at most
    /// `max` results
    pub async fn search(
        &self,
        query: &str,
        max: usize,
        object_type: Option<SearchObjectType>,
    ) -> Result<Vec<SearchResult>> {
        let max = max.to_string();
        let mut params = vec![("q", query), ("max", max.as_str())];
        if let Some(object_type) = object_type {
            params.push(("object_type", object_type.as_str()));
        }

        let request = self
            .client
            .new_request(Method::GET, &self.client.vhost_path("search-data"), &params)?;
        Ok(self.client.send_json(request).await?.unwrap_or_default())
    }
}
