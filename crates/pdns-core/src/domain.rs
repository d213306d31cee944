//! Domain name helpers
//!
//! The PowerDNS API treats `example.com` and `example.com.` as different
//! strings in some places (RRset names in PATCH bodies) and requires the
//! trailing dot in others (zone identifiers). These helpers convert between
//! the two forms.

/// Remove at most one trailing dot from a domain name.
///
/// ```
/// use pdns_core::trim_domain;
///
/// assert_eq!(trim_domain("example.com."), "example.com");
/// assert_eq!(trim_domain("example.com"), "example.com");
/// ```
pub fn trim_domain(domain: &str) -> &str {
    domain.strip_suffix('.').unwrap_or(domain)
}

/// Return the canonical (trailing dot) form of a domain name.
///
/// Applying this twice yields the same result as applying it once.
///
/// ```
/// use pdns_core::canonical_domain;
///
/// assert_eq!(canonical_domain("example.com"), "example.com.");
/// assert_eq!(canonical_domain("example.com."), "example.com.");
/// ```
pub fn canonical_domain(domain: &str) -> String {
    format!("{}.", trim_domain(domain))
}
