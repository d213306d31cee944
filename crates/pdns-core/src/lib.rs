// # pdns-core
//
// Core types for the PowerDNS Authoritative Server HTTP API client.
//
// ## Architecture Overview
//
// This crate holds everything that does not touch the network:
// - **Error**: the error taxonomy shared by every API call
// - **domain**: trimmed/canonical domain name helpers
// - **vhost**: virtual host normalization
// - **models**: JSON resource models (zones, RRsets, keys, metadata, ...)
//
// The HTTP pipeline and the resource services live in `pdns-client`.
//
// ## Design Principles
//
// 1. **Canonical at the wire**: domain names are canonicalized right before
//    they are placed in a path, query or body
// 2. **Optional means Option**: absent JSON fields stay absent on the wire
// 3. **No hidden behavior**: no retries, no caching, no background work

pub mod domain;
pub mod error;
pub mod models;
pub mod vhost;

// Re-export core types for convenience
pub use domain::{canonical_domain, trim_domain};
pub use error::{ApiError, Error, Result, TransportError};
pub use vhost::{DEFAULT_VHOST, normalize_vhost};
