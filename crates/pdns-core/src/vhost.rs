//! Virtual host normalization
//!
//! The virtual host is the server instance name used in
//! `/api/v1/servers/{vhost}/...`. PowerDNS Authoritative only ever exposes
//! `localhost`, which is also the default when none is configured.

/// Virtual host used when none is configured
pub const DEFAULT_VHOST: &str = "localhost";

/// Default an empty virtual host to [`DEFAULT_VHOST`].
pub fn normalize_vhost(vhost: &str) -> String {
    if vhost.is_empty() {
        DEFAULT_VHOST.to_string()
    } else {
        vhost.to_string()
    }
}
