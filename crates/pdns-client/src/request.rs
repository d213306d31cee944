//! Outgoing request construction
//!
//! Header precedence, lowest to highest:
//! 1. `User-Agent`
//! 2. `Content-Type` / `Accept` (only when a body is present)
//! 3. `X-API-Key` and the caller's static headers, caller headers winning

use pdns_core::{Error, Result};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use reqwest::Method;

use crate::config::BaseUrl;

/// `User-Agent` sent with every request
pub const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const API_KEY_HEADER: &str = "x-api-key";
const JSON: &str = "application/json";

/// Build the header set attached to every request
pub(crate) fn static_headers<'a>(
    api_key: Option<&str>,
    headers: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<HeaderMap> {
    let mut map = HeaderMap::new();

    if let Some(key) = api_key {
        let mut value = HeaderValue::from_str(key)
            .map_err(|_| Error::config("API key is not a valid header value"))?;
        value.set_sensitive(true);
        map.insert(HeaderName::from_static(API_KEY_HEADER), value);
    }

    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| Error::config(format!("invalid header name {name:?}: {e}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|e| Error::config(format!("invalid value for header {name:?}: {e}")))?;
        map.insert(header_name, header_value);
    }

    Ok(map)
}

/// Parse a caller-supplied method token
pub(crate) fn parse_method<M>(method: M) -> Result<Method>
where
    Method: TryFrom<M>,
    <Method as TryFrom<M>>::Error: std::fmt::Display,
{
    Method::try_from(method).map_err(|e| Error::request(format!("invalid HTTP method: {e}")))
}

/// Assemble a request against `/api/v1/{path}`
pub(crate) fn build(
    base: &BaseUrl,
    static_headers: &HeaderMap,
    method: Method,
    path: &str,
    query: &[(&str, &str)],
    body: Option<Vec<u8>>,
) -> Result<reqwest::Request> {
    let url = base.api_url(path, query)?;
    let mut request = reqwest::Request::new(method, url);

    let headers = request.headers_mut();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    if body.is_some() {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(JSON));
    }
    for (name, value) in static_headers {
        headers.insert(name.clone(), value.clone());
    }

    *request.body_mut() = body.map(Into::into);

    Ok(request)
}
