//! Catalog Client Runtime
//!
//! A descriptor-driven async REST dispatcher. Every remote operation is an
//! [`Operation`]: a static [`Endpoint`](catalog_define::Endpoint) plus the
//! caller's inputs. [`ApiClient::call`] is the single execution path that
//! validates inputs, resolves the URL, attaches headers, serializes the
//! body and decodes the response.
//!
//! ## Modules
//!
//! - [`client`] - The [`ApiClient`] dispatcher and [`RetryPolicy`]
//! - [`request`] - [`RequestParts`], the slot builder operations fill
//! - [`response`] - Response formats and the [`DetailedResponse`] envelope
//! - [`patch`] - RFC 6902 JSON Patch documents
//! - [`auth`] - Request [`Authenticator`]s
//! - [`config`] - [`ServiceConfig`] loaded from the environment
//! - [`error`] - Layered error types
//!
//! ## Error Classes
//!
//! Errors raised before any I/O ([`RequestError`], [`AuthError`],
//! [`ConfigError`]) are reported by [`ApiError::is_local`]. Everything
//! else came from the transport or the service and is passed through
//! unchanged.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod operation;
pub mod patch;
pub mod request;
pub mod response;

pub use auth::Authenticator;
pub use client::{ApiClient, ApiClientBuilder, RetryPolicy, SdkIdentity};
pub use config::{AuthType, ServiceConfig};
pub use error::{ApiError, AuthError, ClientError, ConfigError, RequestError, ValidationError};
pub use operation::Operation;
pub use patch::{JsonPatchOperation, PatchOp};
pub use request::{Payload, RequestParts};
pub use response::DetailedResponse;

// Re-export the descriptor crate for convenience
pub use catalog_define;
