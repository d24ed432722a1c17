//! Authentication errors.

use thiserror::Error;

/// Errors related to attaching credentials to a request.
///
/// These are raised locally, before a request is sent. A server rejecting
/// credentials surfaces as [`ClientError::HttpStatus`](super::ClientError)
/// with status 401 or 403.
#[derive(Debug, Error)]
pub enum AuthError {
    /// A credential required by the authenticator is missing or empty.
    #[error("Missing credential {field} for {auth_type} authentication")]
    MissingCredential {
        /// The authenticator type, e.g. `bearerToken`.
        auth_type: &'static str,
        /// The missing credential, e.g. `BEARER_TOKEN`.
        field: &'static str,
    },

    /// A credential cannot be encoded as an HTTP header.
    #[error("Invalid credential format for header {header}")]
    InvalidKeyFormat {
        /// The header the credential was destined for.
        header: String,
    },
}
