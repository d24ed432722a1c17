//! License entitlement types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// One change recorded against an entitlement.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseEntitlementHistoryItem {
    pub action: Option<String>,
    pub user: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

/// An offering the entitlement applies to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseOfferingReference {
    pub id: Option<String>,
    pub name: Option<String>,
    pub label: Option<String>,
    pub offering_icon_url: Option<String>,
    pub account_id: Option<String>,
    pub catalog_id: Option<String>,
}

/// A license an account holds for an offering.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LicenseEntitlement {
    pub name: Option<String>,
    pub id: Option<String>,
    pub crn: Option<String>,
    pub url: Option<String>,
    pub offering_type: Option<String>,
    pub state: Option<String>,
    pub effective_from: Option<String>,
    pub effective_until: Option<String>,
    pub account_id: Option<String>,
    pub owner_id: Option<String>,
    pub version_id: Option<String>,
    pub license_offering_id: Option<String>,
    pub license_id: Option<String>,
    pub license_owner_id: Option<String>,
    pub license_type: Option<String>,
    pub license_provider_id: Option<String>,
    pub license_provider_url: Option<String>,
    pub license_product_id: Option<String>,
    pub namespace_repository: Option<String>,
    pub apikey: Option<String>,
    pub create_by: Option<String>,
    pub update_by: Option<String>,
    pub create_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub history: Option<Vec<LicenseEntitlementHistoryItem>>,
    pub offering_list: Option<Vec<LicenseOfferingReference>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entitlement_decodes_history_and_offerings() {
        let entitlement: LicenseEntitlement = serde_json::from_value(json!({
            "id": "ent1",
            "state": "active",
            "history": [{"action": "create", "user": "u1", "date": "2021-06-01T00:00:00Z"}],
            "offering_list": [{"id": "off1", "catalog_id": "cat1"}]
        }))
        .unwrap();

        assert_eq!(entitlement.id.as_deref(), Some("ent1"));
        let history = entitlement.history.unwrap();
        assert_eq!(history[0].action.as_deref(), Some("create"));
        assert!(history[0].date.is_some());
        assert_eq!(
            entitlement.offering_list.unwrap()[0].catalog_id.as_deref(),
            Some("cat1")
        );
        assert_eq!(entitlement.license_id, None);
    }
}
