//! Convenient re-exports for calling the service.
//!
//! ```
//! use catalog_management::prelude::*;
//!
//! let options = GetCatalogOptions::new("my-catalog");
//! assert_eq!(options.catalog_identifier, "my-catalog");
//! ```

pub use catalog_client::{
    ApiClient, ApiError, Authenticator, DetailedResponse, JsonPatchOperation, Operation,
    RequestError, ServiceConfig,
};

pub use crate::operations::*;
pub use crate::patch::OfferingPatch;
pub use crate::service::CatalogManagement;
pub use crate::types::*;
