//! HTTP transport seam
//!
//! The client never talks to the network directly; it hands a fully built
//! [`reqwest::Request`] to a [`Transport`] and gets a [`reqwest::Response`]
//! back. `reqwest::Client` is the production implementation. Tests swap in
//! a recording double.

use async_trait::async_trait;
use pdns_core::TransportError;

/// Executes one HTTP request
///
/// Implementations must not retry, cache or rewrite the request.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    /// Send `request` and return the raw response, whatever its status
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: reqwest::Request) -> Result<reqwest::Response, TransportError> {
        self.execute(request).await.map_err(transport_error)
    }
}

/// Classify a reqwest failure
pub(crate) fn transport_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::timeout(err)
    } else {
        TransportError::connection(err)
    }
}
