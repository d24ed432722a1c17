//! Version lifecycle: publishing, deprecation, working copies and updates.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonArrayFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::{path_operation, with_setters};
use crate::endpoints::{self, AUTH_REFRESH_TOKEN};
use crate::types::{ImportContent, Offering, Version, VersionUpdateDescriptor};

path_operation! {
    /// Options for `DeprecateVersion`.
    DeprecateVersionOptions => endpoints::DEPRECATE_VERSION, EmptyFormat;
    version_loc_id
}

path_operation! {
    /// Options for `AccountPublishVersion`.
    AccountPublishVersionOptions => endpoints::ACCOUNT_PUBLISH_VERSION, EmptyFormat;
    version_loc_id
}

path_operation! {
    /// Options for `IbmPublishVersion`.
    IbmPublishVersionOptions => endpoints::IBM_PUBLISH_VERSION, EmptyFormat;
    version_loc_id
}

path_operation! {
    /// Options for `PublicPublishVersion`.
    PublicPublishVersionOptions => endpoints::PUBLIC_PUBLISH_VERSION, EmptyFormat;
    version_loc_id
}

path_operation! {
    /// Options for `CommitVersion`.
    CommitVersionOptions => endpoints::COMMIT_VERSION, EmptyFormat;
    version_loc_id
}

path_operation! {
    /// Options for `GetOfferingWorkingCopy`. Returns the new working copy.
    GetOfferingWorkingCopyOptions => endpoints::GET_OFFERING_WORKING_COPY, JsonFormat<Version>;
    version_loc_id
}

path_operation! {
    /// Options for `GetVersion`.
    ///
    /// The result is the owning offering, trimmed to the kind and version
    /// the locator names.
    GetVersionOptions => endpoints::GET_VERSION, JsonFormat<Offering>;
    version_loc_id
}

path_operation! {
    /// Options for `DeleteVersion`.
    DeleteVersionOptions => endpoints::DELETE_VERSION, EmptyFormat;
    version_loc_id
}

/// Options for `CopyVersion`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CopyVersionOptions {
    /// The `version_loc_id` path parameter.
    pub version_loc_id: String,
    pub content: ImportContent,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CopyVersionOptions {
    pub fn new(version_loc_id: impl Into<String>) -> Self {
        Self {
            version_loc_id: version_loc_id.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_tags => content.tags: Vec<String>,
        /// Kinds to copy the version into, e.g. `roks`.
        with_target_kinds => content.target_kinds: Vec<String>,
        with_content => content.content: Vec<u8>,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CopyVersionOptions {
    type Format = EmptyFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::COPY_VERSION;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("version_loc_id", self.version_loc_id)
            .json_body(&self.content)?
            .headers(self.headers))
    }
}

/// Options for `GetVersionUpdates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetVersionUpdatesOptions {
    /// The `version_loc_id` path parameter.
    pub version_loc_id: String,
    pub cluster_id: String,
    pub region: String,
    /// Sent as `X-Auth-Refresh-Token` when set.
    pub x_auth_refresh_token: Option<String>,
    pub resource_group_id: Option<String>,
    pub namespace: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetVersionUpdatesOptions {
    pub fn new(
        version_loc_id: impl Into<String>,
        cluster_id: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            version_loc_id: version_loc_id.into(),
            cluster_id: cluster_id.into(),
            region: region.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_x_auth_refresh_token => x_auth_refresh_token: String,
        with_resource_group_id => resource_group_id: String,
        with_namespace => namespace: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetVersionUpdatesOptions {
    type Format = JsonArrayFormat<VersionUpdateDescriptor>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_VERSION_UPDATES;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("version_loc_id", self.version_loc_id)
            .header_opt(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .query("cluster_id", self.cluster_id)
            .query("region", self.region)
            .query_opt("resource_group_id", self.resource_group_id)
            .query_opt("namespace", self.namespace)
            .headers(self.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn copy_encodes_archive_as_base64() {
        let parts = CopyVersionOptions::new("cat.ver")
            .with_target_kinds(vec!["roks".to_string()])
            .with_content(b"hi".to_vec())
            .into_parts()
            .unwrap();
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"target_kinds": ["roks"], "content": "aGk="}))
        );
    }

    #[test]
    fn version_updates_token_is_optional() {
        let parts = GetVersionUpdatesOptions::new("cat.ver", "cl", "us-south")
            .into_parts()
            .unwrap();
        assert!(parts.header_pairs().is_empty());
        parts.check_required(&endpoints::GET_VERSION_UPDATES).unwrap();
    }

    #[test]
    fn version_updates_require_cluster() {
        let err = GetVersionUpdatesOptions::new("cat.ver", "", "us-south")
            .into_parts()
            .unwrap()
            .check_required(&endpoints::GET_VERSION_UPDATES)
            .unwrap_err();
        assert_eq!(err.field(), Some("cluster_id"));
    }
}
