//! Error types for jamf-client.

use std::time::Duration;

/// Result type alias for jamf-client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for jamf-client operations.
#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional source error.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    /// Create a new error with the given kind.
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// Create a new error with the given kind and source.
    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Shorthand for a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration(message.into()))
    }

    /// Shorthand for a protocol error wrapping the parser failure.
    pub fn protocol(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        let message = source.to_string();
        Self::with_source(ErrorKind::Protocol(message), source)
    }

    /// HTTP status carried by a `RequestFailed` error.
    pub fn status(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body carried by a `RequestFailed` error.
    pub fn response_body(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::RequestFailed { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns true if the target API answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the call deadline was exceeded.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout(_))
    }

    /// Returns true if this is an authentication error.
    pub fn is_auth_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication(_))
    }

    /// Returns true if this is a configuration error.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Configuration(_))
    }

    /// Returns true if the response body could not be decoded.
    pub fn is_protocol_error(&self) -> bool {
        matches!(self.kind, ErrorKind::Protocol(_))
    }
}

/// The kind of error that occurred.
///
/// None of these are retried by the dispatch layer.
#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// Missing base URL, missing credential, or a payload sent under the
    /// wrong API generation.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The token bootstrap call was rejected.
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// The target API answered with a non-2xx status.
    #[error("Request failed: HTTP {status}")]
    RequestFailed { status: u16, body: String },

    /// The response body could not be decoded in the expected format.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The call deadline was exceeded.
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Transport failure with no HTTP status (DNS, refused, TLS).
    #[error("Connection error: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            ErrorKind::Timeout(Duration::ZERO)
        } else if err.is_decode() {
            ErrorKind::Protocol(err.to_string())
        } else if err.is_builder() {
            ErrorKind::Configuration(err.to_string())
        } else {
            ErrorKind::Connection(err.to_string())
        };

        Error::with_source(kind, err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::with_source(
            ErrorKind::Configuration(format!("Invalid base URL: {}", err)),
            err,
        )
    }
}
