//! Catalog Endpoint Definition Library
//!
//! This crate provides the primitives for describing REST endpoints as
//! static data. An API is a table of [`Endpoint`] descriptors; the
//! `catalog-client` runtime consumes those descriptors to build, validate
//! and send requests through a single dispatcher.
//!
//! ## Core Types
//!
//! - [`Endpoint`] - A single endpoint: method, path template, parameters,
//!   request and response shapes
//! - [`RestMethod`] - HTTP methods (GET, POST, PUT, etc.)
//! - [`Param`] / [`ParamLocation`] - Declared inputs and where they go on the wire
//! - [`RequestBody`] - Request body shapes (JSON, JSON Patch, text, binary)
//! - [`ResponseBody`] - Response body shapes (JSON, JSON array, text, binary, empty)
//! - [`MediaType`] - The content types the catalog API negotiates
//!
//! ## Examples
//!
//! ```
//! use catalog_define::{Endpoint, Param, RequestBody, ResponseBody, RestMethod, MediaType};
//!
//! const GET_CATALOG: Endpoint = Endpoint {
//!     id: "GetCatalog",
//!     method: RestMethod::Get,
//!     path: "/catalogs/{catalog_identifier}",
//!     description: "Get a catalog",
//!     params: &[Param::path("catalog_identifier")],
//!     accept: Some(MediaType::Json),
//!     request: RequestBody::None,
//!     response: ResponseBody::Json,
//! };
//!
//! assert_eq!(GET_CATALOG.path_params(), vec!["catalog_identifier"]);
//! assert!(GET_CATALOG.validate().is_ok());
//! ```

pub mod error;
pub mod media;
pub mod param;
pub mod path;
pub mod prelude;
pub mod request;
pub mod response;
pub mod types;

// Re-export main types at crate root
pub use error::DefinitionError;
pub use media::MediaType;
pub use param::{Param, ParamLocation};
pub use request::RequestBody;
pub use response::ResponseBody;
pub use types::{Endpoint, RestMethod, validate_table};
