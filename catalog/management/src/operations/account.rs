//! Account-level settings.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::path_operation;
use crate::endpoints;
use crate::types::{Account, AccumulatedFilters, AuditLog, Filters};

path_operation! {
    /// Options for `GetCatalogAccount`.
    GetCatalogAccountOptions => endpoints::GET_CATALOG_ACCOUNT, JsonFormat<Account>;
}

path_operation! {
    /// Options for `GetCatalogAccountAudit`.
    GetCatalogAccountAuditOptions => endpoints::GET_CATALOG_ACCOUNT_AUDIT, JsonFormat<AuditLog>;
}

/// Options for `UpdateCatalogAccount`.
///
/// Only the fields set on `account` are sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateCatalogAccountOptions {
    /// The new account settings.
    pub account: Account,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateCatalogAccountOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.account.id = Some(id.into());
        self
    }

    /// Hides the public catalog in this account.
    pub fn with_hide_ibm_cloud_catalog(mut self, hide: bool) -> Self {
        self.account.hide_ibm_cloud_catalog = Some(hide);
        self
    }

    pub fn with_account_filters(mut self, filters: Filters) -> Self {
        self.account.account_filters = Some(filters);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for UpdateCatalogAccountOptions {
    type Format = EmptyFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::UPDATE_CATALOG_ACCOUNT;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .json_body(&self.account)?
            .headers(self.headers))
    }
}

/// Options for `GetCatalogAccountFilters`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetCatalogAccountFiltersOptions {
    /// Restricts the result to one catalog's filters.
    pub catalog: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetCatalogAccountFiltersOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(mut self, catalog: impl Into<String>) -> Self {
        self.catalog = Some(catalog.into());
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetCatalogAccountFiltersOptions {
    type Format = JsonFormat<AccumulatedFilters>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_CATALOG_ACCOUNT_FILTERS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .query_opt("catalog", self.catalog)
            .headers(self.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn update_sends_only_set_fields() {
        let parts = UpdateCatalogAccountOptions::new()
            .with_hide_ibm_cloud_catalog(true)
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"hide_IBM_cloud_catalog": true}))
        );
    }

    #[test]
    fn filters_catalog_is_optional() {
        let parts = GetCatalogAccountFiltersOptions::new().into_parts().unwrap();
        assert!(parts.query_pairs().is_empty());

        let parts = GetCatalogAccountFiltersOptions::new()
            .with_catalog("abc")
            .into_parts()
            .unwrap();
        assert_eq!(parts.query_pairs(), &[("catalog".to_string(), "abc".to_string())]);
    }
}
