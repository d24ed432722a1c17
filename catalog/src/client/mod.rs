//! HTTP client for dispatching catalog operations.
//!
//! - [`ApiClient`] - The shared dispatcher handle
//! - [`ApiClientBuilder`] - Construction-time configuration
//! - [`RetryPolicy`] - Optional retry and backoff settings

mod executor;
mod retry;

pub use executor::{ApiClient, ApiClientBuilder, SdkIdentity};
pub use retry::RetryPolicy;
