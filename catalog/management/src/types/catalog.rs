//! Catalog and syndication types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Filters;

// =============================================================================
// Syndication
// =============================================================================

/// A cluster a catalog is syndicated to.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationCluster {
    pub region: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub resource_group_name: Option<String>,
    /// Cluster type, e.g. `iks`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub namespaces: Option<Vec<String>>,
    pub all_namespaces: Option<bool>,
}

/// When and where the last syndication ran.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationHistory {
    pub namespaces: Option<Vec<String>>,
    pub clusters: Option<Vec<SyndicationCluster>>,
    pub last_run: Option<DateTime<Utc>>,
}

/// Credentials used for syndication.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationAuthorization {
    pub token: Option<String>,
    pub last_run: Option<DateTime<Utc>>,
}

/// Syndication settings of a catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SyndicationResource {
    pub remove_related_components: Option<bool>,
    pub clusters: Option<Vec<SyndicationCluster>>,
    pub history: Option<SyndicationHistory>,
    pub authorization: Option<SyndicationAuthorization>,
}

// =============================================================================
// Catalog
// =============================================================================

/// A feature highlight.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// A private catalog.
///
/// ## Examples
///
/// ```
/// use catalog_management::types::Catalog;
///
/// let catalog = Catalog {
///     label: Some("Test".to_string()),
///     tags: Some(vec!["a".to_string(), "b".to_string()]),
///     ..Default::default()
/// };
/// assert_eq!(
///     serde_json::to_string(&catalog).unwrap(),
///     r#"{"label":"Test","tags":["a","b"]}"#
/// );
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Unique id.
    pub id: Option<String>,
    /// Cloudant revision.
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    /// Display name.
    pub label: Option<String>,
    pub short_description: Option<String>,
    /// URL of the catalog icon.
    pub catalog_icon_url: Option<String>,
    pub tags: Option<Vec<String>>,
    /// URL of this catalog.
    pub url: Option<String>,
    pub crn: Option<String>,
    /// URL of the catalog's offering list.
    pub offerings_url: Option<String>,
    pub features: Option<Vec<Feature>>,
    /// Whether the catalog is hidden from users.
    pub disabled: Option<bool>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub resource_group_id: Option<String>,
    /// Account that owns the catalog.
    pub owning_account: Option<String>,
    pub catalog_filters: Option<Filters>,
    pub syndication_settings: Option<SyndicationResource>,
    /// Catalog kind, e.g. `offering` or `vpe`.
    pub kind: Option<String>,
}

/// Result of listing catalogs.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSearchResult {
    pub total_count: Option<i64>,
    pub resources: Option<Vec<Catalog>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sparse_catalog_decodes_with_everything_else_absent() {
        let catalog: Catalog = serde_json::from_str(r#"{"id":"123","tags":["x"]}"#).unwrap();
        assert_eq!(
            catalog,
            Catalog {
                id: Some("123".to_string()),
                tags: Some(vec!["x".to_string()]),
                ..Default::default()
            }
        );
    }

    #[test]
    fn rev_uses_underscore_wire_name() {
        let catalog = Catalog {
            rev: Some("1-abc".to_string()),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&catalog).unwrap(), json!({"_rev": "1-abc"}));
    }

    #[test]
    fn catalog_survives_a_round_trip() {
        let catalog = Catalog {
            id: Some("c1".to_string()),
            rev: Some("2-x".to_string()),
            label: Some("Label".to_string()),
            disabled: Some(false),
            created: "2019-01-01T12:00:00Z".parse().ok(),
            catalog_filters: Some(Filters {
                include_all: Some(true),
                ..Default::default()
            }),
            syndication_settings: Some(SyndicationResource {
                clusters: Some(vec![SyndicationCluster {
                    kind: Some("iks".to_string()),
                    namespaces: Some(vec!["default".to_string()]),
                    ..Default::default()
                }]),
                ..Default::default()
            }),
            ..Default::default()
        };

        let json = serde_json::to_string(&catalog).unwrap();
        let back: Catalog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, catalog);
        assert!(json.contains(r#""type":"iks""#));
    }
}
