// # pdns-client
//
// Async client for the PowerDNS Authoritative Server HTTP API (`/api/v1`).
//
// ## Architecture Overview
//
// - **config**: base URL parsing and [`ClientConfig`]
// - **request**: URL and header assembly for every call
// - **transport**: the [`Transport`] seam; `reqwest::Client` in production
// - **response**: status classification and JSON decoding
// - **client**: [`Client`], the builder and the dispatcher
// - **services**: one service per resource group (zones, records, keys, ...)
//
// ## Pipeline
//
// ```text
// service call -> new_request / new_json_request -> Transport::send
//              -> check_status -> decode
// ```
//
// Exactly one HTTP request per call. Nothing is retried, cached or run in
// the background; cancellation is per call through a `CancellationToken`.
//
// ## Security
//
// - The API key is sent as `X-API-Key`, marked sensitive
// - The API key never appears in logs or `Debug` output
//
// ## Example
//
// ```no_run
// use pdns_client::{Client, models::RRType};
//
// # async fn run() -> pdns_client::Result<()> {
// let client = Client::builder("http://localhost:8081")
//     .api_key("secret")
//     .build()?;
//
// client.zones().add_native("example.com", &["ns1.example.com."]).await?;
// client
//     .records()
//     .add("example.com", "www.example.com", RRType::A, 300, ["127.0.0.1"])
//     .await?;
// # Ok(())
// # }
// ```

pub mod client;
pub mod config;
pub mod request;
mod response;
pub mod services;
pub mod transport;

pub use client::{Client, ClientBuilder};
pub use config::{BaseUrl, ClientConfig};
pub use transport::Transport;

pub use pdns_core::{
    ApiError, DEFAULT_VHOST, Error, Result, TransportError, canonical_domain, models, normalize_vhost,
    trim_domain,
};
pub use tokio_util::sync::CancellationToken;
