//! The PowerDNS API client
//!
//! [`Client`] owns the base URL, virtual host, static headers and the
//! transport. It builds requests against `/api/v1/`, dispatches them and
//! classifies the responses; the resource services in [`crate::services`]
//! are thin wrappers that only choose paths and bodies.
//!
//! A `Client` is cheap to clone and safe to share across tasks.

use std::sync::Arc;
use std::time::Duration;

use pdns_core::{Error, Result, TransportError, normalize_vhost};
use reqwest::header::HeaderMap;
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::config::{BaseUrl, ClientConfig};
use crate::request;
use crate::response;
use crate::services::{
    ConfigService, CryptokeysService, MetadataService, RecordsService, SearchService, ServersService,
    StatisticsService, TsigKeysService, ZonesService,
};
use crate::transport::Transport;

struct Inner {
    base: BaseUrl,
    vhost: String,
    headers: HeaderMap,
    transport: Arc<dyn Transport>,
}

/// Client for one PowerDNS server and virtual host
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
    cancel: Option<CancellationToken>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.inner.base)
            .field("vhost", &self.inner.vhost)
            .field("headers", &self.inner.headers.keys().collect::<Vec<_>>())
            .field("cancellable", &self.cancel.is_some())
            .finish()
    }
}

impl Client {
    /// Create a client with the default HTTP transport and no API key
    pub fn new(base_url: &str, vhost: &str) -> Result<Self> {
        Self::builder(base_url).vhost(vhost).build()
    }

    /// Start building a client for `base_url`
    pub fn builder(base_url: impl Into<String>) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    /// Create a client from a [`ClientConfig`]
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Self::builder(config.base_url.clone())
            .vhost(config.vhost.clone())
            .headers(config.headers.clone());

        if let Some(api_key) = &config.api_key {
            builder = builder.api_key(api_key.clone());
        }
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// A handle sharing this client's configuration whose calls abort as
    /// soon as `token` is cancelled
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.inner.base
    }

    pub fn scheme(&self) -> &str {
        self.inner.base.scheme()
    }

    pub fn hostname(&self) -> &str {
        self.inner.base.hostname()
    }

    pub fn port(&self) -> u16 {
        self.inner.base.port()
    }

    pub fn vhost(&self) -> &str {
        &self.inner.vhost
    }

    // Services

    pub fn zones(&self) -> ZonesService {
        ZonesService::new(self.clone())
    }

    pub fn records(&self) -> RecordsService {
        RecordsService::new(self.clone())
    }

    pub fn cryptokeys(&self) -> CryptokeysService {
        CryptokeysService::new(self.clone())
    }

    pub fn metadata(&self) -> MetadataService {
        MetadataService::new(self.clone())
    }

    pub fn tsig_keys(&self) -> TsigKeysService {
        TsigKeysService::new(self.clone())
    }

    pub fn servers(&self) -> ServersService {
        ServersService::new(self.clone())
    }

    pub fn statistics(&self) -> StatisticsService {
        StatisticsService::new(self.clone())
    }

    pub fn search(&self) -> SearchService {
        SearchService::new(self.clone())
    }

    pub fn config(&self) -> ConfigService {
        ConfigService::new(self.clone())
    }

    /// `servers/{vhost}/{suffix}`
    pub(crate) fn vhost_path(&self, suffix: &str) -> String {
        format!("servers/{}/{}", self.inner.vhost, suffix)
    }

    // Request pipeline

    /// Build a body-less request for `/api/v1/{path}`
    ///
    /// `method` may be a [`Method`] or a string token; an invalid token is a
    /// [`Error::Request`].
    pub fn new_request<M>(&self, method: M, path: &str, query: &[(&str, &str)]) -> Result<reqwest::Request>
    where
        Method: TryFrom<M>,
        <Method as TryFrom<M>>::Error: std::fmt::Display,
    {
        let method = request::parse_method(method)?;
        request::build(&self.inner.base, &self.inner.headers, method, path, query, None)
    }

    /// Build a request for `/api/v1/{path}` carrying `body` as JSON
    pub fn new_json_request<M, B>(
        &self,
        method: M,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<reqwest::Request>
    where
        Method: TryFrom<M>,
        <Method as TryFrom<M>>::Error: std::fmt::Display,
        B: Serialize + ?Sized,
    {
        let method = request::parse_method(method)?;
        let body = serde_json::to_vec(body)
            .map_err(|e| Error::request(format!("failed to encode request body: {e}")))?;
        request::build(&self.inner.base, &self.inner.headers, method, path, query, Some(body))
    }

    /// Send `request` and decode the JSON answer
    ///
    /// `Ok(None)` means the server answered `204 No Content`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: reqwest::Request) -> Result<Option<T>> {
        self.cancellable(request, response::decode).await
    }

    /// Send `request` and discard any 2xx body
    pub async fn send_empty(&self, request: reqwest::Request) -> Result<()> {
        self.cancellable(request, |_| async { Ok(()) }).await
    }

    /// Send `request` and return the 2xx body as text
    pub async fn send_text(&self, request: reqwest::Request) -> Result<String> {
        self.cancellable(request, response::text).await
    }

    /// Run dispatch, classification and body read as one unit that the
    /// cancellation token can interrupt at any point
    async fn cancellable<T, F, Fut>(&self, request: reqwest::Request, read: F) -> Result<T>
    where
        F: FnOnce(reqwest::Response) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let method = request.method().clone();
        let url = request.url().clone();

        let call = async {
            let response = self.dispatch(request).await?;
            read(response).await
        };

        match &self.cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => {
                    tracing::debug!("{} {} cancelled", method, url);
                    Err(TransportError::Cancelled.into())
                }
                result = call => result,
            },
            None => call.await,
        }
    }

    async fn dispatch(&self, request: reqwest::Request) -> Result<reqwest::Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        tracing::debug!("{} {}", method, url);

        let response = self.inner.transport.send(request).await.inspect_err(|e| {
            tracing::warn!("{} {} failed: {}", method, url, e);
        })?;

        response::check_status(response).await.inspect_err(|e| {
            tracing::warn!("{} {} returned error: {}", method, url, e);
        })
    }
}

/// Builder for [`Client`]
pub struct ClientBuilder {
    base_url: String,
    vhost: String,
    api_key: Option<String>,
    headers: Vec<(String, String)>,
    transport: Option<Arc<dyn Transport>>,
    timeout: Option<Duration>,
    cancel: Option<CancellationToken>,
}

impl ClientBuilder {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            vhost: String::new(),
            api_key: None,
            headers: Vec::new(),
            transport: None,
            timeout: None,
            cancel: None,
        }
    }

    /// Virtual host; empty means `localhost`
    pub fn vhost(mut self, vhost: impl Into<String>) -> Self {
        self.vhost = vhost.into();
        self
    }

    /// Send `X-API-Key` with every request
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Add a static header; it overrides any header the client sets itself
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Add several static headers
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Use a preconfigured `reqwest::Client`
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(client)
    }

    /// Use a custom transport
    pub fn transport(mut self, transport: impl Transport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    /// Request timeout of the default transport
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Abort every call of the built client once `token` is cancelled
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn build(self) -> Result<Client> {
        let base = BaseUrl::parse(&self.base_url)?;

        let headers = request::static_headers(
            self.api_key.as_deref(),
            self.headers.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                let client = builder
                    .build()
                    .map_err(|e| Error::config(format!("failed to create HTTP client: {e}")))?;
                Arc::new(client) as Arc<dyn Transport>
            }
        };

        let vhost = normalize_vhost(&self.vhost);
        tracing::debug!("PowerDNS client for {} (vhost {})", base.authority(), vhost);

        Ok(Client {
            inner: Arc::new(Inner {
                base,
                vhost,
                headers,
                transport,
            }),
            cancel: self.cancel,
        })
    }
}
