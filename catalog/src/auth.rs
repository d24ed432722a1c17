//! Request authenticators.
//!
//! An [`Authenticator`] attaches credentials a caller already holds. It
//! never exchanges or refreshes tokens.

use std::fmt;

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::AuthError;

/// How requests are authenticated.
///
/// `Debug` output redacts every secret.
///
/// ## Examples
///
/// ```
/// use catalog_client::Authenticator;
///
/// let auth = Authenticator::BearerToken("secret".to_string());
/// assert_eq!(auth.auth_type(), "bearerToken");
/// assert!(!format!("{auth:?}").contains("secret"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Authenticator {
    /// No credentials are attached.
    #[default]
    None,
    /// `Authorization: Bearer <token>`.
    BearerToken(String),
    /// `Authorization: Basic <base64(username:password)>`.
    Basic {
        /// The user name.
        username: String,
        /// The password.
        password: String,
    },
    /// A key sent verbatim in a named header.
    ApiKey {
        /// The header name, e.g. `X-Api-Key`.
        header: String,
        /// The key.
        key: String,
    },
}

impl Authenticator {
    /// The configuration name of this authenticator type.
    pub fn auth_type(&self) -> &'static str {
        match self {
            Self::None => "noAuth",
            Self::BearerToken(_) => "bearerToken",
            Self::Basic { .. } => "basic",
            Self::ApiKey { .. } => "apikey",
        }
    }

    /// Checks the credentials are present.
    ///
    /// ## Errors
    ///
    /// Returns [`AuthError::MissingCredential`] for an empty credential, or
    /// [`AuthError::InvalidKeyFormat`] for a header name that is not valid HTTP.
    pub fn validate(&self) -> Result<(), AuthError> {
        let missing = |field| AuthError::MissingCredential {
            auth_type: self.auth_type(),
            field,
        };
        match self {
            Self::None => Ok(()),
            Self::BearerToken(token) if token.is_empty() => Err(missing("BEARER_TOKEN")),
            Self::BearerToken(_) => Ok(()),
            Self::Basic { username, .. } if username.is_empty() => Err(missing("USERNAME")),
            Self::Basic { password, .. } if password.is_empty() => Err(missing("PASSWORD")),
            Self::Basic { .. } => Ok(()),
            Self::ApiKey { key, .. } if key.is_empty() => Err(missing("APIKEY")),
            Self::ApiKey { header, .. } => HeaderName::try_from(header.as_str())
                .map(|_| ())
                .map_err(|_| AuthError::InvalidKeyFormat {
                    header: header.clone(),
                }),
        }
    }

    /// Attaches credentials to a request.
    ///
    /// ## Errors
    ///
    /// Returns an [`AuthError`] when the credentials are missing or cannot
    /// be encoded as a header.
    pub fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        self.validate()?;
        match self {
            Self::None => Ok(request),
            Self::BearerToken(token) => Ok(request.bearer_auth(token)),
            Self::Basic { username, password } => Ok(request.basic_auth(username, Some(password))),
            Self::ApiKey { header, key } => {
                let invalid = || AuthError::InvalidKeyFormat {
                    header: header.clone(),
                };
                let name = HeaderName::try_from(header.as_str()).map_err(|_| invalid())?;
                let mut value = HeaderValue::try_from(key.as_str()).map_err(|_| invalid())?;
                value.set_sensitive(true);
                Ok(request.header(name, value))
            }
        }
    }
}

impl fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::BearerToken(_) => f.debug_tuple("BearerToken").field(&"<redacted>").finish(),
            Self::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"<redacted>")
                .finish(),
            Self::ApiKey { header, .. } => f
                .debug_struct("ApiKey")
                .field("header", header)
                .field("key", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(auth: &Authenticator) -> reqwest::Request {
        let request = reqwest::Client::new().get("http://localhost/catalogs");
        auth.apply(request).unwrap().build().unwrap()
    }

    #[test]
    fn bearer_sets_authorization() {
        let request = build(&Authenticator::BearerToken("tok".to_string()));
        assert_eq!(request.headers()["authorization"], "Bearer tok");
    }

    #[test]
    fn basic_sets_authorization() {
        let request = build(&Authenticator::Basic {
            username: "user".to_string(),
            password: "pass".to_string(),
        });
        // base64("user:pass")
        assert_eq!(request.headers()["authorization"], "Basic dXNlcjpwYXNz");
    }

    #[test]
    fn api_key_uses_named_header() {
        let request = build(&Authenticator::ApiKey {
            header: "X-Api-Key".to_string(),
            key: "k".to_string(),
        });
        assert_eq!(request.headers()["x-api-key"], "k");
    }

    #[test]
    fn none_attaches_nothing() {
        let request = build(&Authenticator::None);
        assert!(request.headers().get("authorization").is_none());
    }

    #[test]
    fn empty_credentials_are_rejected() {
        let err = Authenticator::BearerToken(String::new()).validate().unwrap_err();
        assert!(matches!(
            err,
            AuthError::MissingCredential {
                auth_type: "bearerToken",
                field: "BEARER_TOKEN"
            }
        ));

        let err = Authenticator::Basic {
            username: "u".to_string(),
            password: String::new(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AuthError::MissingCredential { field: "PASSWORD", .. }));
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let err = Authenticator::ApiKey {
            header: "bad header".to_string(),
            key: "k".to_string(),
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, AuthError::InvalidKeyFormat { .. }));
    }

    #[test]
    fn debug_redacts_secrets() {
        let auth = Authenticator::Basic {
            username: "user".to_string(),
            password: "hunter2".to_string(),
        };
        let debug = format!("{auth:?}");
        assert!(debug.contains("user"));
        assert!(!debug.contains("hunter2"));
    }
}
