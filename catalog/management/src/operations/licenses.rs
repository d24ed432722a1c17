//! License entitlements.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::with_setters;
use crate::endpoints;
use crate::types::LicenseEntitlement;

/// Options for `CreateLicenseEntitlement`.
///
/// The options serialize themselves as the body; `account_id` goes to the
/// query string instead.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateLicenseEntitlementOptions {
    pub name: Option<String>,
    pub effective_from: Option<String>,
    pub effective_until: Option<String>,
    pub version_id: Option<String>,
    pub license_id: Option<String>,
    pub license_owner_id: Option<String>,
    pub license_provider_id: Option<String>,
    pub license_product_id: Option<String>,
    /// Account to create the entitlement in, when not the caller's.
    #[serde(skip)]
    pub account_id: Option<String>,
    /// Extra request headers.
    #[serde(skip)]
    pub headers: HashMap<String, String>,
}

impl CreateLicenseEntitlementOptions {
    pub fn new() -> Self {
        Self::default()
    }

    with_setters! {
        with_name => name: String,
        with_effective_from => effective_from: String,
        with_effective_until => effective_until: String,
        with_version_id => version_id: String,
        with_license_id => license_id: String,
        with_license_owner_id => license_owner_id: String,
        with_license_provider_id => license_provider_id: String,
        with_license_product_id => license_product_id: String,
        with_account_id => account_id: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateLicenseEntitlementOptions {
    type Format = JsonFormat<LicenseEntitlement>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_LICENSE_ENTITLEMENT;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .json_body(&self)?
            .query_opt("account_id", self.account_id)
            .headers(self.headers))
    }
}

/// Options for `DeleteLicenseEntitlement`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteLicenseEntitlementOptions {
    /// The `entitlement_id` path parameter.
    pub entitlement_id: String,
    pub account_id: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteLicenseEntitlementOptions {
    pub fn new(entitlement_id: impl Into<String>) -> Self {
        Self {
            entitlement_id: entitlement_id.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_account_id => account_id: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for DeleteLicenseEntitlementOptions {
    type Format = EmptyFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::DELETE_LICENSE_ENTITLEMENT;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("entitlement_id", self.entitlement_id)
            .query_opt("account_id", self.account_id)
            .headers(self.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn entitlement_body_leaves_account_to_the_query() {
        let parts = CreateLicenseEntitlementOptions::new()
            .with_name("ent")
            .with_license_id("lic1")
            .with_account_id("acct1")
            .into_parts()
            .unwrap();

        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"name": "ent", "license_id": "lic1"}))
        );
        assert_eq!(
            parts.query_pairs(),
            &[("account_id".to_string(), "acct1".to_string())]
        );
    }

    #[test]
    fn empty_entitlement_sends_an_empty_object() {
        let parts = CreateLicenseEntitlementOptions::new().into_parts().unwrap();
        assert_eq!(parts.body(), &Payload::Json(json!({})));
        assert!(parts.query_pairs().is_empty());
    }
}
