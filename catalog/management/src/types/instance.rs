//! Offering and version instance types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Metadata;

/// Last recorded operation on an offering instance.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingInstanceLastOperation {
    pub operation: Option<String>,
    /// Remote state, e.g. `in progress` or `succeeded`.
    pub state: Option<String>,
    pub message: Option<String>,
    pub transaction_id: Option<String>,
    pub updated: Option<DateTime<Utc>>,
}

/// A provisioned deployment of an offering.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OfferingInstance {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub url: Option<String>,
    pub crn: Option<String>,
    pub label: Option<String>,
    pub catalog_id: Option<String>,
    pub offering_id: Option<String>,
    /// Format of the installed kind, e.g. `helm`.
    pub kind_format: Option<String>,
    pub version: Option<String>,
    pub cluster_id: Option<String>,
    pub cluster_region: Option<String>,
    pub cluster_namespaces: Option<Vec<String>>,
    pub cluster_all_namespaces: Option<bool>,
    pub schematics_workspace_id: Option<String>,
    pub resource_group_id: Option<String>,
    /// `automatic` or `manual`.
    pub install_plan: Option<String>,
    pub channel: Option<String>,
    pub metadata: Option<Metadata>,
    pub last_operation: Option<OfferingInstanceLastOperation>,
}

/// A deployment of one version onto a cluster.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionInstance {
    pub id: Option<String>,
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    pub url: Option<String>,
    pub crn: Option<String>,
    pub label: Option<String>,
    pub catalog_id: Option<String>,
    pub offering_id: Option<String>,
    pub kind_format: Option<String>,
    pub version: Option<String>,
    pub cluster_id: Option<String>,
    pub cluster_region: Option<String>,
    pub cluster_namespaces: Option<Vec<String>>,
    pub cluster_all_namespaces: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn last_operation_decodes() {
        let instance: OfferingInstance = serde_json::from_value(json!({
            "id": "i1",
            "_rev": "1-a",
            "cluster_namespaces": ["ns"],
            "last_operation": {"state": "succeeded", "updated": "2021-03-04T05:06:07Z"}
        }))
        .unwrap();

        assert_eq!(instance.rev.as_deref(), Some("1-a"));
        let last = instance.last_operation.unwrap();
        assert_eq!(last.state.as_deref(), Some("succeeded"));
        assert!(last.updated.is_some());
    }

    #[test]
    fn version_instance_sends_only_set_fields() {
        let instance = VersionInstance {
            label: Some("my-release".to_string()),
            cluster_all_namespaces: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&instance).unwrap(),
            json!({"label": "my-release", "cluster_all_namespaces": false})
        );
    }
}
