//! Convenient re-exports for writing endpoint tables.
//!
//! ## Examples
//!
//! ```
//! use catalog_define::prelude::*;
//!
//! const LIST_CATALOGS: Endpoint = Endpoint {
//!     id: "ListCatalogs",
//!     method: RestMethod::Get,
//!     path: "/catalogs",
//!     description: "List catalogs",
//!     params: &[],
//!     accept: Some(MediaType::Json),
//!     request: RequestBody::None,
//!     response: ResponseBody::Json,
//! };
//! ```

pub use crate::error::DefinitionError;
pub use crate::media::MediaType;
pub use crate::param::{Param, ParamLocation};
pub use crate::request::RequestBody;
pub use crate::response::ResponseBody;
pub use crate::types::{Endpoint, RestMethod, validate_table};
