//! Catalog Management
//!
//! Typed async client for the IBM Cloud Catalog Management API: private
//! catalogs, offerings and their versions, catalog objects, cluster
//! deployment, offering and version instances, and license entitlements.
//!
//! ## Modules
//!
//! - [`endpoints`] - One static descriptor per remote operation
//! - [`operations`] - One options type per operation
//! - [`types`] - Request and response bodies
//! - [`patch`] - [`OfferingPatch`](patch::OfferingPatch), a typed JSON Patch source
//! - [`service`] - The [`CatalogManagement`](service::CatalogManagement) handle
//!
//! ## Examples
//!
//! ```rust,ignore
//! use catalog_management::prelude::*;
//!
//! let service = CatalogManagement::from_env()?;
//!
//! let offering = service
//!     .get_offering(GetOfferingOptions::new("my-catalog", "my-offering"))
//!     .await?
//!     .result;
//!
//! let patch = OfferingPatch::new().with_short_description("Updated");
//! service
//!     .update_offering(UpdateOfferingOptions::from_patch(
//!         "my-catalog",
//!         "my-offering",
//!         offering.rev.unwrap_or_default(),
//!         &patch,
//!     )?)
//!     .await?;
//! ```
//!
//! Errors raised before anything is sent (missing or empty required
//! inputs, bad configuration) satisfy
//! [`ApiError::is_local`](catalog_client::ApiError::is_local); everything
//! else came back from the transport or the service.

pub mod endpoints;
pub mod operations;
pub mod patch;
pub mod prelude;
pub mod service;
pub mod types;

pub use patch::OfferingPatch;
pub use service::{CatalogManagement, DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_URL};

pub use catalog_client;
