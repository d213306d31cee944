//! Response classification and decoding

use pdns_core::error::ErrorEnvelope;
use pdns_core::{ApiError, Error, Result};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::transport::transport_error;

/// Turn every non-2xx response into an [`ApiError`]
///
/// - 401 always yields the fixed `Unauthorized` message; the body is not read
/// - a JSON body is decoded as `{"error": "..."}`, falling back to the raw
///   body when it does not match that shape
/// - any other body is used verbatim
pub(crate) async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    if status == StatusCode::UNAUTHORIZED {
        return Err(ApiError::unauthorized(status.to_string()).into());
    }

    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));

    let body = response.text().await.map_err(transport_error)?;

    let message = if is_json {
        serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|envelope| envelope.error)
            .unwrap_or(body)
    } else {
        body
    };

    Err(ApiError::new(status.to_string(), status.as_u16(), message).into())
}

/// Decode a 2xx body; `204 No Content` yields `None`
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<Option<T>> {
    if response.status() == StatusCode::NO_CONTENT {
        return Ok(None);
    }

    let bytes = response.bytes().await.map_err(transport_error)?;
    let value = serde_json::from_slice(&bytes).map_err(Error::Decode)?;
    Ok(Some(value))
}

/// Read a 2xx body as text
pub(crate) async fn text(response: reqwest::Response) -> Result<String> {
    Ok(response.text().await.map_err(transport_error)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> reqwest::Response {
        let mut builder = http::Response::builder().status(status);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        reqwest::Response::from(builder.body(body.to_string()).unwrap())
    }

    fn api_error(err: Error) -> ApiError {
        match err {
            Error::Api(api) => api,
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_success_passes_through() {
        let checked = check_status(response(200, None, "ok")).await.unwrap();
        assert_eq!(checked.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unauthorized_ignores_body() {
        let err = check_status(response(401, Some("application/json"), r#"{"error":"bad key"}"#))
            .await
            .unwrap_err();
        let api = api_error(err);
        assert_eq!(api.message, "Unauthorized");
        assert_eq!(api.status_code, 401);
        assert_eq!(api.status, "401 Unauthorized");
    }

    #[tokio::test]
    async fn test_json_envelope() {
        let err = check_status(response(404, Some("application/json; charset=utf-8"), r#"{"error":"Not Found"}"#))
            .await
            .unwrap_err();
        let api = api_error(err);
        assert_eq!(api.message, "Not Found");
        assert_eq!(api.status, "404 Not Found");
        assert_eq!(api.to_string(), "Not Found");
    }

    #[tokio::test]
    async fn test_malformed_json_envelope_falls_back_to_body() {
        let err = check_status(response(500, Some("application/json"), "not json")).await.unwrap_err();
        assert_eq!(api_error(err).message, "not json");
    }

    #[tokio::test]
    async fn test_plain_text_body() {
        let err = check_status(response(422, Some("text/plain"), "Invalid RRset")).await.unwrap_err();
        let api = api_error(err);
        assert_eq!(api.status_code, 422);
        assert_eq!(api.message, "Invalid RRset");
    }

    #[tokio::test]
    async fn test_decode_no_content() {
        let value: Option<Value> = decode(response(204, None, "")).await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_decode_invalid_body() {
        let err = decode::<Value>(response(200, Some("application/json"), "{")).await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
