//! Cluster deployment: clusters, namespaces, OLM operators and installs.
//!
//! Every operation here except `GetOverrideValues` forwards the caller's
//! refresh token as `X-Auth-Refresh-Token`. The body-carrying options
//! serialize themselves; path and header fields are skipped.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonArrayFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;
use serde::Serialize;
use serde_with::skip_serializing_none;

use super::{path_operation, with_setters};
use crate::endpoints::{self, AUTH_REFRESH_TOKEN};
use crate::types::{
    ClusterInfo, DeployRequestBodySchematics, InstallStatus, Metadata, NamespaceSearchResult,
    OperatorDeployResult,
};

// =============================================================================
// Clusters
// =============================================================================

/// Options for `GetCluster`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetClusterOptions {
    /// The `cluster_id` path parameter.
    pub cluster_id: String,
    pub region: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetClusterOptions {
    pub fn new(
        cluster_id: impl Into<String>,
        region: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            region: region.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetClusterOptions {
    type Format = JsonFormat<ClusterInfo>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_CLUSTER;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("cluster_id", self.cluster_id)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .query("region", self.region)
            .headers(self.headers))
    }
}

/// Options for `GetNamespaces`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetNamespacesOptions {
    /// The `cluster_id` path parameter.
    pub cluster_id: String,
    pub region: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetNamespacesOptions {
    pub fn new(
        cluster_id: impl Into<String>,
        region: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            cluster_id: cluster_id.into(),
            region: region.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
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

impl Operation for GetNamespacesOptions {
    type Format = JsonFormat<NamespaceSearchResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_NAMESPACES;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("cluster_id", self.cluster_id)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .query("region", self.region)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .headers(self.headers))
    }
}

// =============================================================================
// Operators
// =============================================================================

/// Declares an options type whose body names a cluster and the operator
/// version to deploy there.
macro_rules! operator_body_operation {
    ($(#[$meta:meta])* $name:ident => $endpoint:path) => {
        $(#[$meta])*
        #[skip_serializing_none]
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct $name {
            /// Sent as `X-Auth-Refresh-Token`.
            #[serde(skip)]
            pub x_auth_refresh_token: String,
            pub cluster_id: Option<String>,
            pub region: Option<String>,
            pub namespaces: Option<Vec<String>>,
            /// Target every namespace of the cluster.
            pub all_namespaces: Option<bool>,
            pub version_locator_id: Option<String>,
            /// Extra request headers.
            #[serde(skip)]
            pub headers: HashMap<String, String>,
        }

        impl $name {
            pub fn new(x_auth_refresh_token: impl Into<String>) -> Self {
                Self {
                    x_auth_refresh_token: x_auth_refresh_token.into(),
                    ..Default::default()
                }
            }

            with_setters! {
                with_cluster_id => cluster_id: String,
                with_region => region: String,
                with_namespaces => namespaces: Vec<String>,
                with_all_namespaces => all_namespaces: bool,
                with_version_locator_id => version_locator_id: String,
            }

            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }

        impl Operation for $name {
            type Format = JsonArrayFormat<OperatorDeployResult>;
            const ENDPOINT: &'static Endpoint = &$endpoint;

            fn into_parts(self) -> Result<RequestParts, RequestError> {
                Ok(RequestParts::new()
                    .json_body(&self)?
                    .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
                    .headers(self.headers))
            }
        }
    };
}

/// Declares an options type that names operators by query parameters.
macro_rules! operator_query_operation {
    ($(#[$meta:meta])* $name:ident => $endpoint:path, $format:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            /// Sent as `X-Auth-Refresh-Token`.
            pub x_auth_refresh_token: String,
            pub cluster: String,
            pub region: String,
            pub version_locator_id: String,
            /// Extra request headers.
            pub headers: HashMap<String, String>,
        }

        impl $name {
            pub fn new(
                x_auth_refresh_token: impl Into<String>,
                cluster: impl Into<String>,
                region: impl Into<String>,
                version_locator_id: impl Into<String>,
            ) -> Self {
                Self {
                    x_auth_refresh_token: x_auth_refresh_token.into(),
                    cluster: cluster.into(),
                    region: region.into(),
                    version_locator_id: version_locator_id.into(),
                    headers: HashMap::new(),
                }
            }

            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }

        impl Operation for $name {
            type Format = $format;
            const ENDPOINT: &'static Endpoint = &$endpoint;

            fn into_parts(self) -> Result<RequestParts, RequestError> {
                Ok(RequestParts::new()
                    .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
                    .query("cluster", self.cluster)
                    .query("region", self.region)
                    .query("version_locator_id", self.version_locator_id)
                    .headers(self.headers))
            }
        }
    };
}

operator_body_operation! {
    /// Options for `DeployOperators`.
    DeployOperatorsOptions => endpoints::DEPLOY_OPERATORS
}

operator_body_operation! {
    /// Options for `ReplaceOperators`.
    ReplaceOperatorsOptions => endpoints::REPLACE_OPERATORS
}

operator_query_operation! {
    /// Options for `ListOperators`.
    ListOperatorsOptions => endpoints::LIST_OPERATORS, JsonArrayFormat<OperatorDeployResult>
}

operator_query_operation! {
    /// Options for `DeleteOperators`.
    DeleteOperatorsOptions => endpoints::DELETE_OPERATORS, EmptyFormat
}

// =============================================================================
// Installs
// =============================================================================

/// Declares an options type carrying an install request body.
macro_rules! install_operation {
    ($(#[$meta:meta])* $name:ident => $endpoint:path) => {
        $(#[$meta])*
        #[skip_serializing_none]
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct $name {
            /// The `version_loc_id` path parameter.
            #[serde(skip)]
            pub version_loc_id: String,
            /// Sent as `X-Auth-Refresh-Token`.
            #[serde(skip)]
            pub x_auth_refresh_token: String,
            pub cluster_id: Option<String>,
            pub region: Option<String>,
            pub namespace: Option<String>,
            /// Values merged over the chart defaults.
            pub override_values: Option<Metadata>,
            pub entitlement_apikey: Option<String>,
            pub schematics: Option<DeployRequestBodySchematics>,
            pub script: Option<String>,
            pub script_id: Option<String>,
            pub version_locator_id: Option<String>,
            pub vcenter_id: Option<String>,
            pub vcenter_user: Option<String>,
            pub vcenter_password: Option<String>,
            pub vcenter_location: Option<String>,
            pub vcenter_datastore: Option<String>,
            /// Extra request headers.
            #[serde(skip)]
            pub headers: HashMap<String, String>,
        }

        impl $name {
            pub fn new(
                version_loc_id: impl Into<String>,
                x_auth_refresh_token: impl Into<String>,
            ) -> Self {
                Self {
                    version_loc_id: version_loc_id.into(),
                    x_auth_refresh_token: x_auth_refresh_token.into(),
                    ..Default::default()
                }
            }

            with_setters! {
                with_cluster_id => cluster_id: String,
                with_region => region: String,
                with_namespace => namespace: String,
                with_override_values => override_values: Metadata,
                with_entitlement_apikey => entitlement_apikey: String,
                with_schematics => schematics: DeployRequestBodySchematics,
                with_script => script: String,
                with_script_id => script_id: String,
                with_version_locator_id => version_locator_id: String,
                with_vcenter_id => vcenter_id: String,
                with_vcenter_user => vcenter_user: String,
                with_vcenter_password => vcenter_password: String,
                with_vcenter_location => vcenter_location: String,
                with_vcenter_datastore => vcenter_datastore: String,
            }

            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }

        impl Operation for $name {
            type Format = EmptyFormat;
            const ENDPOINT: &'static Endpoint = &$endpoint;

            fn into_parts(self) -> Result<RequestParts, RequestError> {
                Ok(RequestParts::new()
                    .json_body(&self)?
                    .path("version_loc_id", self.version_loc_id)
                    .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
                    .headers(self.headers))
            }
        }
    };
}

install_operation! {
    /// Options for `InstallVersion`.
    InstallVersionOptions => endpoints::INSTALL_VERSION
}

install_operation! {
    /// Options for `PreinstallVersion`.
    PreinstallVersionOptions => endpoints::PREINSTALL_VERSION
}

install_operation! {
    /// Options for `ValidateInstall`.
    ValidateInstallOptions => endpoints::VALIDATE_INSTALL
}

/// Options for `GetPreinstall`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPreinstallOptions {
    /// The `version_loc_id` path parameter.
    pub version_loc_id: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    pub cluster_id: Option<String>,
    pub region: Option<String>,
    pub namespace: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetPreinstallOptions {
    pub fn new(version_loc_id: impl Into<String>, x_auth_refresh_token: impl Into<String>) -> Self {
        Self {
            version_loc_id: version_loc_id.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_cluster_id => cluster_id: String,
        with_region => region: String,
        with_namespace => namespace: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetPreinstallOptions {
    type Format = JsonFormat<InstallStatus>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_PREINSTALL;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("version_loc_id", self.version_loc_id)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .query_opt("cluster_id", self.cluster_id)
            .query_opt("region", self.region)
            .query_opt("namespace", self.namespace)
            .headers(self.headers))
    }
}

/// Options for `GetValidationStatus`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetValidationStatusOptions {
    /// The `version_loc_id` path parameter.
    pub version_loc_id: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetValidationStatusOptions {
    pub fn new(version_loc_id: impl Into<String>, x_auth_refresh_token: impl Into<String>) -> Self {
        Self {
            version_loc_id: version_loc_id.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetValidationStatusOptions {
    type Format = JsonFormat<InstallStatus>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_VALIDATION_STATUS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("version_loc_id", self.version_loc_id)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .headers(self.headers))
    }
}

path_operation! {
    /// Options for `GetOverrideValues`.
    GetOverrideValuesOptions => endpoints::GET_OVERRIDE_VALUES, JsonFormat<Metadata>;
    version_loc_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn install_body_skips_path_and_header_fields() {
        let parts = InstallVersionOptions::new("cat.ver", "token")
            .with_cluster_id("cl")
            .with_region("us-south")
            .with_namespace("default")
            .with_header("X-Trace", "1")
            .into_parts()
            .unwrap();

        assert_eq!(
            parts.body(),
            &Payload::Json(json!({
                "cluster_id": "cl",
                "region": "us-south",
                "namespace": "default"
            }))
        );
        assert_eq!(parts.path_value("version_loc_id"), Some("cat.ver"));
        assert_eq!(
            parts.header_pairs(),
            &[
                (AUTH_REFRESH_TOKEN.to_string(), "token".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn install_override_values_nest() {
        let mut values = Metadata::new();
        values.insert("replicas".to_string(), json!(2));
        let parts = PreinstallVersionOptions::new("cat.ver", "token")
            .with_override_values(values)
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"override_values": {"replicas": 2}}))
        );
    }

    #[test]
    fn operator_body_lists_namespaces() {
        let parts = DeployOperatorsOptions::new("token")
            .with_cluster_id("cl")
            .with_namespaces(vec!["a".to_string(), "b".to_string()])
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"cluster_id": "cl", "namespaces": ["a", "b"]}))
        );
    }

    #[test]
    fn operator_query_requires_every_locator_field() {
        let parts = DeleteOperatorsOptions::new("token", "cl", "us-south", "")
            .into_parts()
            .unwrap();
        let err = parts.check_required(&endpoints::DELETE_OPERATORS).unwrap_err();
        assert_eq!(err.field(), Some("version_locator_id"));
    }

    #[test]
    fn missing_token_is_reported_by_header_name() {
        let parts = GetValidationStatusOptions::new("cat.ver", "").into_parts().unwrap();
        let err = parts
            .check_required(&endpoints::GET_VALIDATION_STATUS)
            .unwrap_err();
        assert_eq!(err.field(), Some(AUTH_REFRESH_TOKEN));
    }
}
