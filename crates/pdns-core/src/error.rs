//! Error types for the PowerDNS API client
//!
//! Every API call returns [`Result`]. Exactly one of the variants below is
//! produced per failed call; the library never retries.

use serde::Deserialize;
use thiserror::Error;

/// Result type alias for PowerDNS API operations
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used as the source of transport failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for the PowerDNS API client
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid client configuration (base URL, headers, ...)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The outgoing request could not be built
    #[error("Request construction error: {0}")]
    Request(String),

    /// Connection, DNS, timeout or cancellation failure
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Non-2xx response from the PowerDNS API
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A 2xx response body that is not the expected JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a request construction error
    pub fn request(msg: impl Into<String>) -> Self {
        Self::Request(msg.into())
    }

    /// Create a transport error from any underlying cause
    pub fn transport(err: impl Into<BoxError>) -> Self {
        Self::Transport(TransportError::connection(err))
    }

    /// HTTP status code, if this is an API error
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status_code),
            _ => None,
        }
    }

    /// The API error, if any
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Whether the API answered 404
    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    /// Whether the API rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status_code() == Some(401)
    }

    /// Whether the call was aborted through its cancellation token
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Transport(TransportError::Cancelled))
    }
}

/// Transport-level failures, surfaced verbatim and never retried
#[derive(Error, Debug)]
pub enum TransportError {
    /// The caller's cancellation token fired before a response arrived
    #[error("request cancelled")]
    Cancelled,

    /// The transport gave up waiting
    #[error("request timed out: {0}")]
    Timeout(#[source] BoxError),

    /// Connection refused, name resolution failure, broken pipe, ...
    #[error("{0}")]
    Connection(#[source] BoxError),
}

impl TransportError {
    /// Wrap a connection-level failure
    pub fn connection(err: impl Into<BoxError>) -> Self {
        Self::Connection(err.into())
    }

    /// Wrap a timeout
    pub fn timeout(err: impl Into<BoxError>) -> Self {
        Self::Timeout(err.into())
    }
}

/// Structured error returned for every non-2xx response
///
/// `Display` renders the message only, so a 401 prints as `Unauthorized`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// HTTP status line, e.g. `404 Not Found`
    pub status: String,
    /// HTTP status code
    pub status_code: u16,
    /// Message from the `{"error": "..."}` envelope or the raw body
    pub message: String,
}

impl ApiError {
    /// Create an API error
    pub fn new(status: impl Into<String>, status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            status_code,
            message: message.into(),
        }
    }

    /// The fixed error for 401 responses; the body is never consulted
    pub fn unauthorized(status: impl Into<String>) -> Self {
        Self::new(status, 401, "Unauthorized")
    }
}

/// JSON error body sent by PowerDNS: `{"error": "<message>"}`
#[derive(Debug, Default, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub error: String,
}
