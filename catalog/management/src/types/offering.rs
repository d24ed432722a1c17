//! Offering, kind, version and plan types.
//!
//! The containment tree is Offering → [`Kind`] → [`Version`] / [`Plan`] →
//! [`Deployment`]. Nothing here enforces it; it is just nested JSON.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::{base64::Base64, serde_as, skip_serializing_none};

use super::{Feature, Metadata};

// =============================================================================
// Version building blocks
// =============================================================================

/// A deployment configuration value.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    pub key: Option<String>,
    /// Value type, e.g. `string` or `boolean`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// `Some(None)` is an explicit `null` default, kept apart from an absent one.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "::serde_with::rust::double_option"
    )]
    pub default_value: Option<Option<serde_json::Value>>,
    /// Constraint the value must satisfy.
    pub value_constraint: Option<String>,
    pub description: Option<String>,
    pub required: Option<bool>,
    /// Allowed values.
    pub options: Option<Vec<serde_json::Value>>,
    pub hidden: Option<bool>,
}

/// Validation state of a version.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Validation {
    pub validated: Option<DateTime<Utc>>,
    pub requested: Option<DateTime<Utc>>,
    pub state: Option<String>,
    pub last_operation: Option<String>,
    /// Where the validation ran.
    pub target: Option<Metadata>,
    pub message: Option<String>,
}

/// A resource requirement, e.g. memory or a minimum Kubernetes version.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// `mem`, `disk`, `cores`, `targetVersion`, `nodes` and so on.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// A JSON `null` reads back as `None`.
    pub value: Option<serde_json::Value>,
}

/// An install or pre-install script.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub instructions: Option<String>,
    pub script: Option<String>,
    pub script_permission: Option<String>,
    pub delete_script: Option<String>,
    pub scope: Option<String>,
}

/// Entitlement information of a version.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionEntitlement {
    pub provider_name: Option<String>,
    pub provider_id: Option<String>,
    pub product_id: Option<String>,
    pub part_numbers: Option<Vec<String>>,
    pub image_repo_name: Option<String>,
}

/// A license a version ships with.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct License {
    pub id: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// Lifecycle state snapshot, owned by the service.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct State {
    pub current: Option<String>,
    pub current_entered: Option<DateTime<Utc>>,
    pub pending: Option<String>,
    pub pending_requested: Option<DateTime<Utc>>,
    pub previous: Option<String>,
}

// =============================================================================
// Version, Plan, Kind
// =============================================================================

/// One release of a kind's content.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Version {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub crn: Option<String>,
    /// Semantic version.
    pub version: Option<String>,
    /// Content digest.
    pub sha: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub offering_id: Option<String>,
    pub catalog_id: Option<String>,
    pub kind_id: Option<String>,
    pub tags: Option<Vec<String>>,
    pub repo_url: Option<String>,
    pub source_url: Option<String>,
    pub tgz_url: Option<String>,
    pub configuration: Option<Vec<Configuration>>,
    pub metadata: Option<Metadata>,
    pub validation: Option<Validation>,
    pub required_resources: Option<Vec<Resource>>,
    pub single_instance: Option<bool>,
    pub install: Option<Script>,
    pub pre_install: Option<Vec<Script>>,
    pub entitlement: Option<VersionEntitlement>,
    pub licenses: Option<Vec<License>>,
    pub image_manifest_url: Option<String>,
    pub deprecated: Option<bool>,
    pub package_version: Option<String>,
    pub state: Option<State>,
    /// Dotted `<catalog_id>.<version_id>` locator.
    pub version_locator: Option<String>,
    pub console_url: Option<String>,
    pub long_description: Option<String>,
    /// Accounts allowed to see the version.
    pub whitelisted_accounts: Option<Vec<String>>,
}

/// A deployment under a plan.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Deployment {
    pub id: Option<String>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub metadata: Option<Metadata>,
    pub tags: Option<Vec<String>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

/// A pricing plan.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub id: Option<String>,
    pub label: Option<String>,
    pub name: Option<String>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub metadata: Option<Metadata>,
    pub tags: Option<Vec<String>>,
    pub additional_features: Option<Vec<Feature>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub deployments: Option<Vec<Deployment>>,
}

/// A content format and target pairing, e.g. a helm chart for IKS.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Kind {
    pub id: Option<String>,
    /// Content format, e.g. `helm` or `terraform`.
    pub format_kind: Option<String>,
    /// Install target, e.g. `iks` or `roks`.
    pub target_kind: Option<String>,
    pub metadata: Option<Metadata>,
    pub install_description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub additional_features: Option<Vec<Feature>>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub versions: Option<Vec<Version>>,
    pub plans: Option<Vec<Plan>>,
}

// =============================================================================
// Offering
// =============================================================================

/// Star counts.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub one_star_count: Option<i64>,
    pub two_star_count: Option<i64>,
    pub three_star_count: Option<i64>,
    pub four_star_count: Option<i64>,
}

/// Source repository credentials.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RepoInfo {
    pub token: Option<String>,
    /// Repository type, e.g. `public_git`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// Who provides an offering.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderInfo {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Support details.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Support {
    pub url: Option<String>,
    pub process: Option<String>,
    pub locations: Option<Vec<String>>,
}

/// An image or video shown with an offering.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: Option<String>,
    pub caption: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub thumbnail_url: Option<String>,
}

/// A publishable product entry within a catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub url: Option<String>,
    pub crn: Option<String>,
    pub label: Option<String>,
    /// Programmatic name.
    pub name: Option<String>,
    pub offering_icon_url: Option<String>,
    pub offering_docs_url: Option<String>,
    pub offering_support_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub rating: Option<Rating>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub kinds: Option<Vec<Kind>>,
    /// The offering may request IBM public publishing.
    pub permit_request_ibm_public_publish: Option<bool>,
    pub ibm_publish_approved: Option<bool>,
    pub public_publish_approved: Option<bool>,
    pub public_original_crn: Option<String>,
    pub publish_public_crn: Option<String>,
    pub portal_approval_record: Option<String>,
    pub portal_ui_url: Option<String>,
    pub catalog_id: Option<String>,
    pub catalog_name: Option<String>,
    pub metadata: Option<Metadata>,
    pub disclaimer: Option<String>,
    pub hidden: Option<bool>,
    pub provider: Option<String>,
    pub provider_info: Option<ProviderInfo>,
    pub repo_info: Option<RepoInfo>,
    pub support: Option<Support>,
    pub media: Option<Vec<MediaItem>>,
}

/// A page of offerings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingSearchResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub resources: Option<Vec<Offering>>,
}

// =============================================================================
// Operation results and bodies
// =============================================================================

/// Publish approvals after an approval change.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApprovalResult {
    pub allow_request: Option<bool>,
    pub ibm: Option<bool>,
    pub public: Option<bool>,
    /// Whether anything changed.
    pub changed: Option<bool>,
}

/// An update available for an installed version.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionUpdateDescriptor {
    pub version_locator: Option<String>,
    pub version: Option<String>,
    pub state: Option<State>,
    pub required_resources: Option<Vec<Resource>>,
    pub package_version: Option<String>,
    pub sha: Option<String>,
    pub can_update: Option<bool>,
    /// Reasons the update cannot be applied, keyed by check.
    pub messages: Option<HashMap<String, String>>,
}

/// A container image reference.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub image: Option<String>,
}

/// The container images a version uses.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageManifest {
    pub description: Option<String>,
    pub images: Option<Vec<Image>>,
}

/// Content sent to import, reload or copy a version.
///
/// `content` is raw archive bytes and travels base64 encoded.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImportContent {
    pub tags: Option<Vec<String>>,
    pub target_kinds: Option<Vec<String>>,
    #[serde_as(as = "Option<Base64>")]
    pub content: Option<Vec<u8>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_version() -> Version {
        Version {
            id: Some("v1".to_string()),
            version: Some("1.0.0".to_string()),
            version_locator: Some("cat.v1".to_string()),
            created: "2019-01-01T12:00:00Z".parse().ok(),
            configuration: Some(vec![Configuration {
                key: Some("replicas".to_string()),
                kind: Some("number".to_string()),
                default_value: Some(Some(json!(3))),
                ..Default::default()
            }]),
            required_resources: Some(vec![Resource {
                kind: Some("mem".to_string()),
                value: Some(json!("1Gi")),
            }]),
            state: Some(State {
                current: Some("new".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn null_default_value_is_kept_apart_from_absent() {
        let explicit: Configuration =
            serde_json::from_value(json!({"key": "token", "default_value": null})).unwrap();
        assert_eq!(explicit.default_value, Some(None));
        assert_eq!(
            serde_json::to_value(&explicit).unwrap(),
            json!({"key": "token", "default_value": null})
        );

        let absent: Configuration = serde_json::from_value(json!({"key": "token"})).unwrap();
        assert_eq!(absent.default_value, None);
        assert_eq!(serde_json::to_value(&absent).unwrap(), json!({"key": "token"}));
    }

    #[test]
    fn version_survives_a_round_trip() {
        let version = sample_version();
        let json = serde_json::to_string(&version).unwrap();
        assert_eq!(serde_json::from_str::<Version>(&json).unwrap(), version);
    }

    #[test]
    fn offering_survives_a_round_trip() {
        let offering = Offering {
            id: Some("o1".to_string()),
            rev: Some("3-abc".to_string()),
            label: Some("Node-RED".to_string()),
            rating: Some(Rating {
                one_star_count: Some(2),
                ..Default::default()
            }),
            kinds: Some(vec![Kind {
                target_kind: Some("roks".to_string()),
                versions: Some(vec![sample_version()]),
                plans: Some(vec![Plan {
                    name: Some("lite".to_string()),
                    deployments: Some(vec![Deployment::default()]),
                    ..Default::default()
                }]),
                ..Default::default()
            }]),
            repo_info: Some(RepoInfo {
                kind: Some("public_git".to_string()),
                token: None,
            }),
            ..Default::default()
        };

        let json = serde_json::to_value(&offering).unwrap();
        assert_eq!(json["repo_info"], json!({"type": "public_git"}));
        assert_eq!(serde_json::from_value::<Offering>(json).unwrap(), offering);
    }

    #[test]
    fn import_content_is_base64() {
        let content = ImportContent {
            target_kinds: Some(vec!["roks".to_string()]),
            content: Some(b"hi".to_vec()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&content).unwrap(),
            json!({"target_kinds": ["roks"], "content": "aGk="})
        );
    }
}
