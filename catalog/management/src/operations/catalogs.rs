//! Private catalogs.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::path_operation;
use crate::endpoints;
use crate::types::{AuditLog, Catalog, CatalogSearchResult, Feature, Filters, SyndicationResource};

path_operation! {
    /// Options for `ListCatalogs`.
    ListCatalogsOptions => endpoints::LIST_CATALOGS, JsonFormat<CatalogSearchResult>;
}

path_operation! {
    /// Options for `GetCatalog`.
    GetCatalogOptions => endpoints::GET_CATALOG, JsonFormat<Catalog>;
    catalog_identifier
}

path_operation! {
    /// Options for `DeleteCatalog`.
    DeleteCatalogOptions => endpoints::DELETE_CATALOG, EmptyFormat;
    catalog_identifier
}

path_operation! {
    /// Options for `GetCatalogAudit`.
    GetCatalogAuditOptions => endpoints::GET_CATALOG_AUDIT, JsonFormat<AuditLog>;
    catalog_identifier
}

/// Options for `CreateCatalog`.
///
/// Every catalog field is optional; only the ones set are sent.
///
/// ## Examples
///
/// ```
/// use catalog_client::{Operation, Payload};
/// use catalog_management::operations::CreateCatalogOptions;
///
/// let parts = CreateCatalogOptions::new()
///     .with_label("Test")
///     .with_tags(["a", "b"])
///     .into_parts()
///     .unwrap();
///
/// let Payload::Json(body) = parts.body() else { unreachable!() };
/// assert_eq!(body.to_string(), r#"{"label":"Test","tags":["a","b"]}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateCatalogOptions {
    /// The catalog to create.
    pub catalog: Catalog,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CreateCatalogOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from a fully built catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            headers: HashMap::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.catalog.id = Some(id.into());
        self
    }

    /// Sets the display name.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.catalog.label = Some(label.into());
        self
    }

    pub fn with_short_description(mut self, description: impl Into<String>) -> Self {
        self.catalog.short_description = Some(description.into());
        self
    }

    pub fn with_catalog_icon_url(mut self, url: impl Into<String>) -> Self {
        self.catalog.catalog_icon_url = Some(url.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.catalog.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_features(mut self, features: Vec<Feature>) -> Self {
        self.catalog.features = Some(features);
        self
    }

    /// Hides the catalog from users.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.catalog.disabled = Some(disabled);
        self
    }

    pub fn with_resource_group_id(mut self, id: impl Into<String>) -> Self {
        self.catalog.resource_group_id = Some(id.into());
        self
    }

    pub fn with_owning_account(mut self, account: impl Into<String>) -> Self {
        self.catalog.owning_account = Some(account.into());
        self
    }

    pub fn with_catalog_filters(mut self, filters: Filters) -> Self {
        self.catalog.catalog_filters = Some(filters);
        self
    }

    pub fn with_syndication_settings(mut self, settings: SyndicationResource) -> Self {
        self.catalog.syndication_settings = Some(settings);
        self
    }

    /// Sets the catalog kind, e.g. `offering` or `vpe`.
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.catalog.kind = Some(kind.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateCatalogOptions {
    type Format = JsonFormat<Catalog>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_CATALOG;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .json_body(&self.catalog)?
            .headers(self.headers))
    }
}

/// Options for `ReplaceCatalog`.
///
/// The catalog replaces the stored one; include its `rev` to guard
/// against concurrent updates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceCatalogOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    pub catalog: Catalog,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ReplaceCatalogOptions {
    pub fn new(catalog_identifier: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            catalog,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ReplaceCatalogOptions {
    type Format = JsonFormat<Catalog>;
    const ENDPOINT: &'static Endpoint = &endpoints::REPLACE_CATALOG;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .json_body(&self.catalog)?
            .headers(self.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn create_body_holds_only_set_fields() {
        let parts = CreateCatalogOptions::new()
            .with_label("Test")
            .with_tags(["a", "b"])
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"label": "Test", "tags": ["a", "b"]}))
        );
    }

    #[test]
    fn empty_create_sends_empty_object() {
        let parts = CreateCatalogOptions::default().into_parts().unwrap();
        assert_eq!(parts.body(), &Payload::Json(json!({})));
    }

    #[test]
    fn replace_carries_revision() {
        let catalog = Catalog {
            id: Some("abc".to_string()),
            rev: Some("2-x".to_string()),
            ..Default::default()
        };
        let parts = ReplaceCatalogOptions::new("abc", catalog).into_parts().unwrap();
        assert_eq!(parts.path_value("catalog_identifier"), Some("abc"));
        assert_eq!(parts.body(), &Payload::Json(json!({"id": "abc", "_rev": "2-x"})));
    }
}
