//! Response decoding errors.

use thiserror::Error;

/// Errors during response parsing.
///
/// These occur when a successful response body cannot be decoded into the
/// operation's result type.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Response content doesn't match the expected format.
    #[error("Unexpected content type: expected {expected}, got {actual}")]
    ContentTypeMismatch {
        /// The expected content type.
        expected: String,
        /// What was received.
        actual: String,
    },

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}

impl ValidationError {
    /// Returns `true` if this is a format mismatch error.
    pub fn is_format_mismatch(&self) -> bool {
        matches!(self, Self::ContentTypeMismatch { .. })
    }

    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_mismatch() {
        let err = ValidationError::ContentTypeMismatch {
            expected: "valid UTF-8 text".to_string(),
            actual: "invalid UTF-8".to_string(),
        };
        assert!(err.is_format_mismatch());
        assert!(!err.is_parse_error());
    }

    #[test]
    fn test_json_parse_is_parse_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err = ValidationError::JsonParse(json_err);
        assert!(err.is_parse_error());
        assert!(!err.is_format_mismatch());
    }

    #[test]
    fn test_empty_body_display() {
        assert_eq!(ValidationError::EmptyBody.to_string(), "Empty response body");
    }
}
