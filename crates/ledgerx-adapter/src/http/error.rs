/*
[INPUT]:  Error sources (transport, exchange status, serialization, config)
[OUTPUT]: Structured error type surfaced by every endpoint
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the LedgerX adapter
#[derive(Error, Debug)]
pub enum LedgerxError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Exchange answered with a 4xx/5xx status
    #[error("API error (status {status}): {message}")]
    Api { status: StatusCode, message: String },

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Caller-supplied value cannot be used as a URL path segment
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Response body was not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LedgerxError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        LedgerxError::Api {
            status,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            LedgerxError::Api { status, .. } => Some(*status),
            LedgerxError::Http(err) => err.status(),
            _ => None,
        }
    }

    /// Check if the exchange rejected the JWT
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status(),
            Some(StatusCode::UNAUTHORIZED) | Some(StatusCode::FORBIDDEN)
        )
    }

    /// Check if the endpoint rate limit was hit
    pub fn is_rate_limited(&self) -> bool {
        self.status() == Some(StatusCode::TOO_MANY_REQUESTS)
    }
}

/// Result type alias for LedgerX operations
pub type Result<T> = std::result::Result<T, LedgerxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_creation() {
        let err = LedgerxError::api_error(StatusCode::BAD_REQUEST, "invalid contract");
        match err {
            LedgerxError::Api { status, ref message } => {
                assert_eq!(status.as_u16(), 400);
                assert_eq!(message, "invalid contract");
            }
            _ => panic!("Expected Api error variant"),
        }
        assert_eq!(err.to_string(), "API error (status 400 Bad Request): invalid contract");
    }

    #[test]
    fn test_error_classification() {
        assert!(LedgerxError::api_error(StatusCode::UNAUTHORIZED, "").is_auth_error());
        assert!(LedgerxError::api_error(StatusCode::FORBIDDEN, "").is_auth_error());
        assert!(!LedgerxError::api_error(StatusCode::BAD_REQUEST, "").is_auth_error());

        assert!(LedgerxError::api_error(StatusCode::TOO_MANY_REQUESTS, "").is_rate_limited());
        assert!(!LedgerxError::Config("missing jwt".into()).is_rate_limited());
        assert_eq!(LedgerxError::InvalidResponse("x".into()).status(), None);
        assert_eq!(LedgerxError::InvalidArgument("..".into()).status(), None);
    }
}
