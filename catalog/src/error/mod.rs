//! Layered error types for the catalog client.
//!
//! The error hierarchy separates failures that happen before any I/O from
//! failures reported by the transport or the remote service:
//! - [`ApiError`] - Top-level error type for all operations
//! - [`RequestError`] - Local request construction and validation errors
//! - [`ClientError`] - HTTP transport errors and non-success statuses
//! - [`ValidationError`] - Response decoding errors
//! - [`AuthError`] - Credential errors
//! - [`ConfigError`] - Service and client configuration errors

mod api_error;
mod auth_error;
mod client_error;
mod config_error;
mod request_error;
mod validation_error;

pub use api_error::ApiError;
pub use auth_error::AuthError;
pub use client_error::ClientError;
pub(crate) use client_error::is_retryable_status;
pub use config_error::ConfigError;
pub use request_error::RequestError;
pub use validation_error::ValidationError;
