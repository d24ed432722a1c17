//! Catalog object and access list types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::{Metadata, State};

// =============================================================================
// Objects
// =============================================================================

/// Publish approvals of a catalog object.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishObject {
    pub permit_ibm_public_publish: Option<bool>,
    pub ibm_approved: Option<bool>,
    pub public_approved: Option<bool>,
    pub portal_approval_record: Option<String>,
    pub portal_url: Option<String>,
}

/// A generic catalog-scoped content item.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogObject {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub crn: Option<String>,
    pub url: Option<String>,
    pub parent_id: Option<String>,
    /// Translated labels.
    pub label_i18n: Option<String>,
    pub label: Option<String>,
    pub tags: Option<Vec<String>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub short_description_i18n: Option<String>,
    /// Object kind, e.g. `vpe` or `terraform`.
    pub kind: Option<String>,
    pub publish: Option<PublishObject>,
    pub state: Option<State>,
    pub catalog_id: Option<String>,
    pub catalog_name: Option<String>,
    /// Kind-specific payload.
    pub data: Option<Metadata>,
}

/// A page of objects from a cross-catalog search.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectSearchResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub resources: Option<Vec<CatalogObject>>,
}

/// A page of objects within one catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectListResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub resources: Option<Vec<CatalogObject>>,
}

// =============================================================================
// Access lists
// =============================================================================

/// One account on an object's access list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectAccess {
    pub id: Option<String>,
    pub account: Option<String>,
    pub catalog_id: Option<String>,
    pub target_id: Option<String>,
    pub create: Option<DateTime<Utc>>,
}

/// A page of an object's access list.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectAccessListResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub resources: Option<Vec<ObjectAccess>>,
}

/// Per-account failures of a bulk access list change.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessListBulkResponse {
    /// Error message keyed by account id.
    pub errors: Option<HashMap<String, String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_with_state_round_trips() {
        let object = CatalogObject {
            name: Some("obj".to_string()),
            kind: Some("terraform".to_string()),
            publish: Some(PublishObject {
                ibm_approved: Some(false),
                ..Default::default()
            }),
            state: Some(State {
                current: Some("new".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };

        let value = serde_json::to_value(&object).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "obj",
                "kind": "terraform",
                "publish": {"ibm_approved": false},
                "state": {"current": "new"}
            })
        );
        assert_eq!(serde_json::from_value::<CatalogObject>(value).unwrap(), object);
    }

    #[test]
    fn bulk_errors_keyed_by_account() {
        let response: AccessListBulkResponse =
            serde_json::from_value(json!({"errors": {"acct1": "not found"}})).unwrap();
        assert_eq!(response.errors.unwrap()["acct1"], "not found");
    }
}
