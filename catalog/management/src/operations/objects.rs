//! Catalog objects and their access lists.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::{path_operation, with_setters};
use crate::endpoints;
use crate::types::{
    AccessListBulkResponse, AuditLog, CatalogObject, ObjectAccess, ObjectAccessListResult,
    ObjectListResult, ObjectSearchResult,
};

// =============================================================================
// Objects
// =============================================================================

/// Options for `SearchObjects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchObjectsOptions {
    /// Lucene-style query, e.g. `name:my-object`.
    pub query: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Collapse objects to their latest revision.
    pub collapse: Option<bool>,
    pub digest: Option<bool>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl SearchObjectsOptions {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_limit => limit: i64,
        with_offset => offset: i64,
        with_collapse => collapse: bool,
        with_digest => digest: bool,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for SearchObjectsOptions {
    type Format = JsonFormat<ObjectSearchResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::SEARCH_OBJECTS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .query("query", self.query)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .query_opt("collapse", self.collapse)
            .query_opt("digest", self.digest)
            .headers(self.headers))
    }
}

/// Options for `ListObjects`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListObjectsOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    pub name: Option<String>,
    pub sort: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ListObjectsOptions {
    pub fn new(catalog_identifier: impl Into<String>) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_limit => limit: i64,
        with_offset => offset: i64,
        with_name => name: String,
        with_sort => sort: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ListObjectsOptions {
    type Format = JsonFormat<ObjectListResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::LIST_OBJECTS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .query_opt("name", self.name)
            .query_opt("sort", self.sort)
            .headers(self.headers))
    }
}

/// Options for `CreateObject`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateObjectOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    pub object: CatalogObject,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CreateObjectOptions {
    pub fn new(catalog_identifier: impl Into<String>, object: CatalogObject) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            object,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateObjectOptions {
    type Format = JsonFormat<CatalogObject>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_OBJECT;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .json_body(&self.object)?
            .headers(self.headers))
    }
}

/// Options for `ReplaceObject`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceObjectOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `object_identifier` path parameter.
    pub object_identifier: String,
    /// The replacement, including its current `rev`.
    pub object: CatalogObject,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ReplaceObjectOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        object_identifier: impl Into<String>,
        object: CatalogObject,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            object_identifier: object_identifier.into(),
            object,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ReplaceObjectOptions {
    type Format = JsonFormat<CatalogObject>;
    const ENDPOINT: &'static Endpoint = &endpoints::REPLACE_OBJECT;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("object_identifier", self.object_identifier)
            .json_body(&self.object)?
            .headers(self.headers))
    }
}

path_operation! {
    /// Options for `GetObject`.
    GetObjectOptions => endpoints::GET_OBJECT, JsonFormat<CatalogObject>;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `DeleteObject`.
    DeleteObjectOptions => endpoints::DELETE_OBJECT, EmptyFormat;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `GetObjectAudit`.
    GetObjectAuditOptions => endpoints::GET_OBJECT_AUDIT, JsonFormat<AuditLog>;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `AccountPublishObject`.
    AccountPublishObjectOptions => endpoints::ACCOUNT_PUBLISH_OBJECT, EmptyFormat;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `SharedPublishObject`.
    SharedPublishObjectOptions => endpoints::SHARED_PUBLISH_OBJECT, EmptyFormat;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `IbmPublishObject`.
    IbmPublishObjectOptions => endpoints::IBM_PUBLISH_OBJECT, EmptyFormat;
    catalog_identifier, object_identifier
}

path_operation! {
    /// Options for `PublicPublishObject`.
    PublicPublishObjectOptions => endpoints::PUBLIC_PUBLISH_OBJECT, EmptyFormat;
    catalog_identifier, object_identifier
}

// =============================================================================
// Access lists
// =============================================================================

path_operation! {
    /// Options for `CreateObjectAccess`.
    CreateObjectAccessOptions => endpoints::CREATE_OBJECT_ACCESS, EmptyFormat;
    catalog_identifier, object_identifier, account_identifier
}

path_operation! {
    /// Options for `GetObjectAccess`.
    GetObjectAccessOptions => endpoints::GET_OBJECT_ACCESS, JsonFormat<ObjectAccess>;
    catalog_identifier, object_identifier, account_identifier
}

path_operation! {
    /// Options for `DeleteObjectAccess`.
    DeleteObjectAccessOptions => endpoints::DELETE_OBJECT_ACCESS, EmptyFormat;
    catalog_identifier, object_identifier, account_identifier
}

/// Options for `GetObjectAccessList`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetObjectAccessListOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `object_identifier` path parameter.
    pub object_identifier: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetObjectAccessListOptions {
    pub fn new(catalog_identifier: impl Into<String>, object_identifier: impl Into<String>) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            object_identifier: object_identifier.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_limit => limit: i64,
        with_offset => offset: i64,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetObjectAccessListOptions {
    type Format = JsonFormat<ObjectAccessListResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_OBJECT_ACCESS_LIST;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("object_identifier", self.object_identifier)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .headers(self.headers))
    }
}

/// Declares a bulk access list change; the body is a JSON array of
/// account ids.
macro_rules! access_list_operation {
    ($(#[$meta:meta])* $name:ident => $endpoint:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            /// The `catalog_identifier` path parameter.
            pub catalog_identifier: String,
            /// The `object_identifier` path parameter.
            pub object_identifier: String,
            /// Account ids.
            pub accounts: Vec<String>,
            /// Extra request headers.
            pub headers: HashMap<String, String>,
        }

        impl $name {
            pub fn new(
                catalog_identifier: impl Into<String>,
                object_identifier: impl Into<String>,
                accounts: Vec<String>,
            ) -> Self {
                Self {
                    catalog_identifier: catalog_identifier.into(),
                    object_identifier: object_identifier.into(),
                    accounts,
                    headers: HashMap::new(),
                }
            }

            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }

        impl Operation for $name {
            type Format = JsonFormat<AccessListBulkResponse>;
            const ENDPOINT: &'static Endpoint = &$endpoint;

            fn into_parts(self) -> Result<RequestParts, RequestError> {
                Ok(RequestParts::new()
                    .path("catalog_identifier", self.catalog_identifier)
                    .path("object_identifier", self.object_identifier)
                    .json_body(&self.accounts)?
                    .headers(self.headers))
            }
        }
    };
}

access_list_operation! {
    /// Options for `AddObjectAccessList`.
    AddObjectAccessListOptions => endpoints::ADD_OBJECT_ACCESS_LIST
}

access_list_operation! {
    /// Options for `DeleteObjectAccessList`.
    DeleteObjectAccessListOptions => endpoints::DELETE_OBJECT_ACCESS_LIST
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn access_list_body_is_a_plain_array() {
        let parts = AddObjectAccessListOptions::new(
            "c",
            "obj",
            vec!["acct1".to_string(), "acct2".to_string()],
        )
        .into_parts()
        .unwrap();
        assert_eq!(parts.body(), &Payload::Json(json!(["acct1", "acct2"])));
    }

    #[test]
    fn search_sends_query_first() {
        let parts = SearchObjectsOptions::new("name:foo")
            .with_collapse(true)
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.query_pairs(),
            &[
                ("query".to_string(), "name:foo".to_string()),
                ("collapse".to_string(), "true".to_string()),
            ]
        );
    }
}
