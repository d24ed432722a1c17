//! The contract between an options type and the dispatcher.

use catalog_define::Endpoint;

use crate::error::RequestError;
use crate::request::RequestParts;
use crate::response::ResponseFormat;

/// One remote operation: a static descriptor plus the caller's inputs.
///
/// Implementors are the per-operation options types. They only place
/// their fields into [`RequestParts`] slots; presence checks, URL
/// resolution, headers, serialization and decoding all happen in
/// [`ApiClient::call`](crate::ApiClient::call).
///
/// ## Examples
///
/// ```rust,ignore
/// use catalog_client::{Operation, RequestParts, RequestError};
/// use catalog_client::response::JsonFormat;
///
/// impl Operation for GetCatalogOptions {
///     type Format = JsonFormat<Catalog>;
///     const ENDPOINT: &'static Endpoint = &endpoints::GET_CATALOG;
///
///     fn into_parts(self) -> Result<RequestParts, RequestError> {
///         Ok(RequestParts::new()
///             .path("catalog_identifier", self.catalog_identifier)
///             .headers(self.headers))
///     }
/// }
/// ```
pub trait Operation: Send {
    /// How the success body decodes.
    type Format: ResponseFormat;

    /// The descriptor this operation dispatches through.
    const ENDPOINT: &'static Endpoint;

    /// Places the operation's inputs into path, query, header and body slots.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::Serialization`] when the body cannot be
    /// serialized.
    fn into_parts(self) -> Result<RequestParts, RequestError>;
}
