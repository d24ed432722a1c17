//! Top-level API error type.

use super::{AuthError, ClientError, ConfigError, RequestError, ValidationError};
use thiserror::Error;

/// Top-level error type for all catalog operations.
///
/// This enum aggregates all error categories, enabling unified error handling
/// while preserving the ability to match on specific error types when needed.
///
/// ## Examples
///
/// ```rust,ignore
/// use catalog_client::ApiError;
///
/// fn handle_error(err: ApiError) {
///     match err {
///         ApiError::Request(e) => eprintln!("Fix the input and retry: {e}"),
///         ApiError::Client(e) => eprintln!("Transport or HTTP error: {e}"),
///         ApiError::Validation(e) => eprintln!("Unreadable response: {e}"),
///         ApiError::Auth(e) => eprintln!("Credentials: {e}"),
///         ApiError::Config(e) => eprintln!("Configuration: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be built; nothing was sent.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// HTTP client errors (network, timeout, non-success status).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response decoding errors.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Authentication errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Configuration errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ApiError {
    /// Returns `true` if the error was raised before any network I/O.
    ///
    /// Local errors are deterministic: the same input fails the same way
    /// and no remote side effect has happened.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Auth(_) | Self::Config(_))
    }

    /// Returns the HTTP status code when the service answered with one.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            _ => None,
        }
    }

    /// Returns `true` if the transport considers this error transient.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Client(e) => e.is_retryable(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;

    #[test]
    fn test_from_request_error_is_local() {
        let err: ApiError = RequestError::MissingRequired {
            operation: "GetCatalog",
            field: "catalog_identifier".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::Request(_)));
        assert!(err.is_local());
        assert_eq!(err.status_code(), None);
    }

    #[test]
    fn test_from_client_error_is_remote() {
        let err: ApiError = ClientError::HttpStatus {
            status: 404,
            message: "not found".to_string(),
            headers: HeaderMap::new(),
        }
        .into();
        assert!(!err.is_local());
        assert_eq!(err.status_code(), Some(404));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_error_display_is_transparent() {
        let err = ApiError::Auth(AuthError::MissingCredential {
            auth_type: "bearerToken",
            field: "BEARER_TOKEN",
        });
        assert_eq!(
            err.to_string(),
            "Missing credential BEARER_TOKEN for bearerToken authentication"
        );
    }
}
