//! Local request construction errors.

use thiserror::Error;

/// Errors raised while building a request, before any I/O.
///
/// A `RequestError` guarantees nothing was sent: the caller can fix the
/// input and retry immediately.
#[derive(Debug, Error)]
pub enum RequestError {
    /// A required parameter was not supplied.
    #[error("{operation}: missing required parameter `{field}`")]
    MissingRequired {
        /// The operation id.
        operation: &'static str,
        /// The parameter wire name.
        field: String,
    },

    /// A required string parameter was supplied but empty.
    #[error("{operation}: required parameter `{field}` must not be empty")]
    EmptyRequired {
        /// The operation id.
        operation: &'static str,
        /// The parameter wire name.
        field: String,
    },

    /// A `{placeholder}` in the path template had no value.
    #[error("{operation}: unresolved path parameter `{{{name}}}`")]
    UnresolvedPathParam {
        /// The operation id.
        operation: &'static str,
        /// The placeholder name.
        name: String,
    },

    /// A header name or value is not valid HTTP.
    #[error("invalid header `{name}`")]
    InvalidHeader {
        /// The offending header name.
        name: String,
    },

    /// The request body could not be serialized.
    #[error("request serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A JSON Patch source did not serialize to a JSON object.
    #[error("patch source must serialize to a JSON object")]
    InvalidPatchSource,
}

impl RequestError {
    /// Returns the parameter name involved, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingRequired { field, .. } | Self::EmptyRequired { field, .. } => Some(field),
            Self::UnresolvedPathParam { name, .. } | Self::InvalidHeader { name } => Some(name),
            Self::Serialization(_) | Self::InvalidPatchSource => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_display() {
        let err = RequestError::MissingRequired {
            operation: "UpdateOffering",
            field: "If-Match".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "UpdateOffering: missing required parameter `If-Match`"
        );
        assert_eq!(err.field(), Some("If-Match"));
    }

    #[test]
    fn test_empty_required_display() {
        let err = RequestError::EmptyRequired {
            operation: "GetOffering",
            field: "catalog_identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GetOffering: required parameter `catalog_identifier` must not be empty"
        );
    }

    #[test]
    fn test_unresolved_display() {
        let err = RequestError::UnresolvedPathParam {
            operation: "GetRepo",
            name: "type".to_string(),
        };
        assert_eq!(err.to_string(), "GetRepo: unresolved path parameter `{type}`");
    }

    #[test]
    fn test_serialization_has_no_field() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = RequestError::Serialization(json_err);
        assert_eq!(err.field(), None);
    }
}
