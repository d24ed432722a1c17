//! Cluster, operator and install types.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Metadata;

// =============================================================================
// Clusters
// =============================================================================

/// A Kubernetes cluster.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterInfo {
    pub resource_group_id: Option<String>,
    pub resource_group_name: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
}

/// A page of namespace names.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NamespaceSearchResult {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
    pub total_count: Option<i64>,
    pub resource_count: Option<i64>,
    pub first: Option<String>,
    pub last: Option<String>,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub resources: Option<Vec<String>>,
}

/// State of one deployed operator.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorDeployResult {
    pub phase: Option<String>,
    pub message: Option<String>,
    /// Link to the operator's status page.
    pub link: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub namespace: Option<String>,
    pub package_name: Option<String>,
    pub catalog_id: Option<String>,
}

// =============================================================================
// Install
// =============================================================================

/// Schematics workspace settings for an install.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeployRequestBodySchematics {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tags: Option<Vec<String>>,
    pub resource_group_id: Option<String>,
}

/// Where an install ran.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusMetadata {
    pub cluster_id: Option<String>,
    pub region: Option<String>,
    pub namespace: Option<String>,
    pub workspace_id: Option<String>,
    pub workspace_name: Option<String>,
}

/// Kubernetes objects created by an install.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusRelease {
    pub deployments: Option<Vec<Metadata>>,
    pub replicasets: Option<Vec<Metadata>>,
    pub statefulsets: Option<Vec<Metadata>>,
    pub pods: Option<Vec<Metadata>>,
    pub errors: Option<Vec<Metadata>>,
}

/// Content management pods and errors of an install.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatusContentMgmt {
    pub pods: Option<Vec<Metadata>>,
    pub errors: Option<Vec<Metadata>>,
}

/// Status of an install or pre-install.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InstallStatus {
    pub metadata: Option<InstallStatusMetadata>,
    pub release: Option<InstallStatusRelease>,
    pub content_mgmt: Option<InstallStatusContentMgmt>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn install_status_decodes_nested_objects() {
        let status: InstallStatus = serde_json::from_value(json!({
            "metadata": {"cluster_id": "c1", "namespace": "default"},
            "release": {"pods": [{"name": "web-0"}]},
            "content_mgmt": {"errors": []}
        }))
        .unwrap();

        assert_eq!(status.metadata.unwrap().cluster_id.as_deref(), Some("c1"));
        assert_eq!(status.release.unwrap().pods.unwrap()[0]["name"], "web-0");
        assert_eq!(status.content_mgmt.unwrap().errors, Some(vec![]));
    }
}
