//! Service configuration from the environment.
//!
//! Settings are read from variables prefixed with the upper-cased service
//! name, e.g. `CATALOG_MANAGEMENT_URL` for `catalog_management`. A `.env`
//! file in the working directory is loaded first when present.

use std::str::FromStr;
use std::time::Duration;

use strum::{Display, EnumString};
use url::Url;

use crate::auth::Authenticator;
use crate::client::{ApiClient, ApiClientBuilder, RetryPolicy};
use crate::error::ConfigError;

/// Header used for API key authentication when none is configured.
pub const DEFAULT_APIKEY_HEADER: &str = "X-API-Key";

/// Authentication types selectable through `<PREFIX>_AUTH_TYPE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum AuthType {
    /// A caller-held bearer token.
    #[strum(serialize = "bearerToken")]
    BearerToken,
    /// HTTP basic authentication.
    #[strum(serialize = "basic")]
    Basic,
    /// No authentication.
    #[strum(serialize = "noAuth")]
    NoAuth,
    /// A key sent in a named header.
    #[strum(serialize = "apikey")]
    ApiKey,
}

/// Client settings for one service.
///
/// ## Examples
///
/// ```
/// use std::collections::HashMap;
/// use catalog_client::{Authenticator, ServiceConfig};
///
/// let env = HashMap::from([
///     ("CATALOG_MANAGEMENT_AUTH_TYPE", "bearerToken"),
///     ("CATALOG_MANAGEMENT_BEARER_TOKEN", "token"),
///     ("CATALOG_MANAGEMENT_ENABLE_GZIP", "true"),
/// ]);
/// let config = ServiceConfig::from_lookup("catalog_management", |key| {
///     env.get(key).map(|v| v.to_string())
/// })
/// .unwrap();
///
/// assert_eq!(config.authenticator, Authenticator::BearerToken("token".to_string()));
/// assert!(config.gzip);
/// assert!(config.retry.is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    /// The service name the settings were read for.
    pub service_name: String,
    /// Service URL override.
    pub url: Option<String>,
    /// Credentials to attach.
    pub authenticator: Authenticator,
    /// Whether request bodies are gzip-compressed.
    pub gzip: bool,
    /// Retry policy, when enabled.
    pub retry: Option<RetryPolicy>,
    /// Per-attempt timeout override.
    pub timeout: Option<Duration>,
}

impl ServiceConfig {
    /// Returns the environment prefix for a service name.
    ///
    /// ```
    /// use catalog_client::ServiceConfig;
    ///
    /// assert_eq!(ServiceConfig::env_prefix("catalog-management"), "CATALOG_MANAGEMENT");
    /// ```
    pub fn env_prefix(service_name: &str) -> String {
        service_name.to_ascii_uppercase().replace('-', "_")
    }

    /// Reads settings from the process environment, after loading `.env`.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] for missing credentials or unparseable values.
    pub fn from_env(service_name: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(service_name, |key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a full variable name to
    /// its value.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] for missing credentials or unparseable values.
    pub fn from_lookup<F>(service_name: &str, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let prefix = Self::env_prefix(service_name);
        let var = |suffix: &str| {
            let key = format!("{prefix}_{suffix}");
            let value = lookup(&key).filter(|v| !v.trim().is_empty());
            (key, value)
        };

        let (_, url) = var("URL");
        let authenticator = read_authenticator(&var)?;

        let gzip = match var("ENABLE_GZIP") {
            (key, Some(value)) => parse_bool(&key, &value)?,
            (_, None) => false,
        };

        let retries_enabled = match var("ENABLE_RETRIES") {
            (key, Some(value)) => parse_bool(&key, &value)?,
            (_, None) => false,
        };
        let retry = if retries_enabled {
            let max_retries = match var("MAX_RETRIES") {
                (key, Some(value)) => parse_number(&key, &value)?,
                (_, None) => RetryPolicy::DEFAULT_MAX_RETRIES,
            };
            let max_interval = match var("RETRY_INTERVAL") {
                (key, Some(value)) => Duration::from_secs(parse_number(&key, &value)?),
                (_, None) => RetryPolicy::DEFAULT_MAX_INTERVAL,
            };
            Some(RetryPolicy::new(max_retries, max_interval))
        } else {
            None
        };

        let timeout = match var("TIMEOUT") {
            (key, Some(value)) => Some(Duration::from_secs(parse_number(&key, &value)?)),
            (_, None) => None,
        };

        Ok(Self {
            service_name: service_name.to_string(),
            url,
            authenticator,
            gzip,
            retry,
            timeout,
        })
    }

    /// Creates a client builder from these settings.
    ///
    /// `default_url` is used when no URL is configured.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if the URL does not parse.
    pub fn into_builder(self, default_url: &str) -> Result<ApiClientBuilder, ConfigError> {
        let url = Url::parse(self.url.as_deref().unwrap_or(default_url))?;

        let mut builder = ApiClient::builder(url)
            .authenticator(self.authenticator)
            .gzip(self.gzip);
        if let Some(retry) = self.retry {
            builder = builder.retries(retry);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder)
    }
}

fn read_authenticator<V>(var: &V) -> Result<Authenticator, ConfigError>
where
    V: Fn(&str) -> (String, Option<String>),
{
    let required = |suffix: &str| match var(suffix) {
        (_, Some(value)) => Ok(value),
        (key, None) => Err(ConfigError::missing_field(key)),
    };

    let auth_type = match var("AUTH_TYPE") {
        (_, Some(value)) => {
            AuthType::from_str(value.trim()).map_err(|_| ConfigError::UnsupportedAuthType(value))?
        }
        (_, None) if var("BEARER_TOKEN").1.is_some() => AuthType::BearerToken,
        (_, None) if var("USERNAME").1.is_some() => AuthType::Basic,
        (_, None) => AuthType::NoAuth,
    };

    Ok(match auth_type {
        AuthType::NoAuth => Authenticator::None,
        AuthType::BearerToken => Authenticator::BearerToken(required("BEARER_TOKEN")?),
        AuthType::Basic => Authenticator::Basic {
            username: required("USERNAME")?,
            password: required("PASSWORD")?,
        },
        AuthType::ApiKey => Authenticator::ApiKey {
            header: var("APIKEY_HEADER")
                .1
                .unwrap_or_else(|| DEFAULT_APIKEY_HEADER.to_string()),
            key: required("APIKEY")?,
        },
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ConfigError::invalid_value(key, value, "expected true or false")),
    }
}

fn parse_number<N: FromStr>(key: &str, value: &str) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::invalid_value(key, value, "expected a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<ServiceConfig, ConfigError> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup("catalog_management", |key| env.get(key).cloned())
    }

    #[test]
    fn defaults_with_empty_environment() {
        let config = config(&[]).unwrap();
        assert_eq!(config.service_name, "catalog_management");
        assert_eq!(config.url, None);
        assert_eq!(config.authenticator, Authenticator::None);
        assert!(!config.gzip);
        assert!(config.retry.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn auth_type_is_case_insensitive() {
        let config = config(&[
            ("CATALOG_MANAGEMENT_AUTH_TYPE", "BASIC"),
            ("CATALOG_MANAGEMENT_USERNAME", "user"),
            ("CATALOG_MANAGEMENT_PASSWORD", "pass"),
        ])
        .unwrap();
        assert_eq!(
            config.authenticator,
            Authenticator::Basic {
                username: "user".to_string(),
                password: "pass".to_string()
            }
        );
    }

    #[test]
    fn bearer_token_is_inferred() {
        let config = config(&[("CATALOG_MANAGEMENT_BEARER_TOKEN", "tok")]).unwrap();
        assert_eq!(config.authenticator, Authenticator::BearerToken("tok".to_string()));
    }

    #[test]
    fn apikey_uses_default_header() {
        let config = config(&[
            ("CATALOG_MANAGEMENT_AUTH_TYPE", "apikey"),
            ("CATALOG_MANAGEMENT_APIKEY", "k"),
        ])
        .unwrap();
        assert_eq!(
            config.authenticator,
            Authenticator::ApiKey {
                header: DEFAULT_APIKEY_HEADER.to_string(),
                key: "k".to_string()
            }
        );
    }

    #[test]
    fn missing_credential_names_the_variable() {
        let err = config(&[("CATALOG_MANAGEMENT_AUTH_TYPE", "bearerToken")]).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingField { ref field } if field == "CATALOG_MANAGEMENT_BEARER_TOKEN"
        ));
    }

    #[test]
    fn unsupported_auth_type() {
        let err = config(&[("CATALOG_MANAGEMENT_AUTH_TYPE", "iam")]).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedAuthType(ref t) if t == "iam"));
    }

    #[test]
    fn retries_and_timeout() {
        let config = config(&[
            ("CATALOG_MANAGEMENT_ENABLE_RETRIES", "true"),
            ("CATALOG_MANAGEMENT_MAX_RETRIES", "2"),
            ("CATALOG_MANAGEMENT_RETRY_INTERVAL", "10"),
            ("CATALOG_MANAGEMENT_TIMEOUT", "15"),
        ])
        .unwrap();
        assert_eq!(
            config.retry,
            Some(RetryPolicy::new(2, Duration::from_secs(10)))
        );
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn retry_settings_ignored_unless_enabled() {
        let config = config(&[("CATALOG_MANAGEMENT_MAX_RETRIES", "2")]).unwrap();
        assert!(config.retry.is_none());
    }

    #[test]
    fn invalid_values_are_reported() {
        let err = config(&[("CATALOG_MANAGEMENT_ENABLE_GZIP", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref key, .. } if key == "CATALOG_MANAGEMENT_ENABLE_GZIP"));

        let err = config(&[
            ("CATALOG_MANAGEMENT_ENABLE_RETRIES", "true"),
            ("CATALOG_MANAGEMENT_MAX_RETRIES", "-1"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn into_builder_prefers_configured_url() {
        let config = config(&[("CATALOG_MANAGEMENT_URL", "https://private.example.com/api/v1-beta")])
            .unwrap();
        let client = config
            .into_builder("https://public.example.com")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(client.service_url().host_str(), Some("private.example.com"));
    }

    #[test]
    fn into_builder_rejects_bad_url() {
        let config = config(&[("CATALOG_MANAGEMENT_URL", "::nope")]).unwrap();
        assert!(matches!(
            config.into_builder("https://public.example.com"),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
