//! HTTP client and network errors.

use reqwest::header::HeaderMap;
use thiserror::Error;

/// Errors from the HTTP transport layer.
///
/// Non-success responses are surfaced as [`ClientError::HttpStatus`] with
/// the status code, the response body and the raw response headers, so
/// callers can branch on the status themselves.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// The response body (or the status reason when the body is unreadable).
        message: String,
        /// The response headers.
        headers: HeaderMap,
    },

    /// Request exceeded the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout {
        /// The timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// The request body could not be gzip-compressed.
    #[error("Request body compression failed: {0}")]
    Compression(#[source] std::io::Error),
}

impl ClientError {
    /// Returns `true` if this error is retryable.
    ///
    /// Timeouts and connection failures are retryable. Of the HTTP
    /// statuses, 429 and every 5xx except 501 are.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::HttpStatus { status, .. } => is_retryable_status(*status),
            Self::Request(e) => e.is_timeout() || e.is_connect(),
            Self::Compression(_) => false,
        }
    }

    /// Returns the HTTP status code if the server answered.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns the response headers of an HTTP status error.
    pub fn headers(&self) -> Option<&HeaderMap> {
        match self {
            Self::HttpStatus { headers, .. } => Some(headers),
            _ => None,
        }
    }
}

/// Returns `true` for statuses the transport may retry.
pub(crate) fn is_retryable_status(status: u16) -> bool {
    status == 429 || (status >= 500 && status != 501)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16) -> ClientError {
        ClientError::HttpStatus {
            status,
            message: String::new(),
            headers: HeaderMap::new(),
        }
    }

    #[test]
    fn test_timeout_is_retryable() {
        let err = ClientError::Timeout { duration_ms: 5000 };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_5xx_is_retryable() {
        assert!(status(500).is_retryable());
        assert!(status(503).is_retryable());
    }

    #[test]
    fn test_501_not_retryable() {
        assert!(!status(501).is_retryable());
    }

    #[test]
    fn test_429_is_retryable() {
        assert!(status(429).is_retryable());
    }

    #[test]
    fn test_400_not_retryable() {
        assert!(!status(400).is_retryable());
        assert!(!status(412).is_retryable());
    }

    #[test]
    fn test_compression_not_retryable() {
        let err = ClientError::Compression(std::io::Error::other("boom"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_status_code_and_headers() {
        let mut headers = HeaderMap::new();
        headers.insert("etag", "\"1-abc\"".parse().unwrap());
        let err = ClientError::HttpStatus {
            status: 409,
            message: "conflict".to_string(),
            headers,
        };
        assert_eq!(err.status_code(), Some(409));
        assert_eq!(
            err.headers().and_then(|h| h.get("etag")).unwrap(),
            "\"1-abc\""
        );

        let timeout = ClientError::Timeout { duration_ms: 1000 };
        assert_eq!(timeout.status_code(), None);
        assert!(timeout.headers().is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(status(404).to_string(), "HTTP 404: ");
    }
}
