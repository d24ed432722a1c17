//! Service and client configuration errors.

use catalog_define::DefinitionError;
use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while constructing a client or loading its settings from
/// the environment, typically indicating a setup mistake.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The URL parsed but cannot carry a path (e.g. `mailto:`).
    #[error("Service URL cannot be used as a base: {0}")]
    UnsupportedServiceUrl(String),

    /// A required configuration field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },

    /// A configuration value could not be interpreted.
    #[error("Invalid value for {key}: {value:?} ({reason})")]
    InvalidValue {
        /// The configuration key.
        key: String,
        /// The raw value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The configured authentication type is not supported.
    #[error("Unsupported authentication type: {0}")]
    UnsupportedAuthType(String),

    /// The endpoint table is inconsistent.
    #[error("Invalid endpoint definition: {0}")]
    InvalidEndpoint(#[from] DefinitionError),
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }

    /// Creates an invalid value error.
    pub fn invalid_value(
        key: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field() {
        let err = ConfigError::missing_field("CATALOG_MANAGEMENT_BEARER_TOKEN");
        assert_eq!(
            err.to_string(),
            "Missing required field: CATALOG_MANAGEMENT_BEARER_TOKEN"
        );
    }

    #[test]
    fn test_invalid_url() {
        let url_err = url::Url::parse("not-a-url").unwrap_err();
        let err = ConfigError::InvalidUrl(url_err);
        assert!(err.to_string().contains("Invalid URL"));
    }

    #[test]
    fn test_invalid_value() {
        let err = ConfigError::invalid_value("CATALOG_MANAGEMENT_MAX_RETRIES", "many", "expected an integer");
        assert_eq!(
            err.to_string(),
            "Invalid value for CATALOG_MANAGEMENT_MAX_RETRIES: \"many\" (expected an integer)"
        );
    }

    #[test]
    fn test_invalid_endpoint_from_definition() {
        let err: ConfigError = DefinitionError::DuplicateEndpoint("GetCatalog").into();
        assert_eq!(
            err.to_string(),
            "Invalid endpoint definition: duplicate endpoint id: GetCatalog"
        );
    }
}
