//! Offerings: CRUD, imports, approvals, updates and content downloads.

use std::collections::HashMap;

use catalog_client::response::{BinaryFormat, EmptyFormat, JsonArrayFormat, JsonFormat, TextFormat};
use catalog_client::{JsonPatchOperation, Operation, RequestError, RequestParts};
use catalog_define::Endpoint;
use strum::{AsRefStr, Display, EnumString};

use super::{path_operation, with_setters};
use crate::endpoints::{self, AUTH_REFRESH_TOKEN, AUTH_TOKEN, IF_MATCH};
use crate::patch::OfferingPatch;
use crate::types::{
    ApprovalResult, AuditLog, ImageManifest, ImportContent, Offering, OfferingSearchResult,
    VersionUpdateDescriptor,
};

// =============================================================================
// Listing
// =============================================================================

/// Options for `GetConsumptionOfferings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetConsumptionOfferingsOptions {
    /// Return a digest with fewer fields.
    pub digest: Option<bool>,
    /// Restrict to one catalog.
    pub catalog: Option<String>,
    /// `all`, `public` or `private`.
    pub select: Option<String>,
    pub include_hidden: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetConsumptionOfferingsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    with_setters! {
        with_digest => digest: bool,
        with_catalog => catalog: String,
        with_select => select: String,
        with_include_hidden => include_hidden: bool,
        with_limit => limit: i64,
        with_offset => offset: i64,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetConsumptionOfferingsOptions {
    type Format = JsonFormat<OfferingSearchResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_CONSUMPTION_OFFERINGS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .query_opt("digest", self.digest)
            .query_opt("catalog", self.catalog)
            .query_opt("select", self.select)
            .query_opt("includeHidden", self.include_hidden)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .headers(self.headers))
    }
}

/// Options for `ListOfferings`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOfferingsOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    pub digest: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
    /// Only offerings with this programmatic name.
    pub name: Option<String>,
    /// Sort field, `-` prefixed for descending.
    pub sort: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ListOfferingsOptions {
    pub fn new(catalog_identifier: impl Into<String>) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_digest => digest: bool,
        with_limit => limit: i64,
        with_offset => offset: i64,
        with_name => name: String,
        with_sort => sort: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ListOfferingsOptions {
    type Format = JsonFormat<OfferingSearchResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::LIST_OFFERINGS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .query_opt("digest", self.digest)
            .query_opt("limit", self.limit)
            .query_opt("offset", self.offset)
            .query_opt("name", self.name)
            .query_opt("sort", self.sort)
            .headers(self.headers))
    }
}

// =============================================================================
// CRUD
// =============================================================================

path_operation! {
    /// Options for `GetOffering`.
    GetOfferingOptions => endpoints::GET_OFFERING, JsonFormat<Offering>;
    catalog_identifier, offering_id
}

path_operation! {
    /// Options for `DeleteOffering`.
    DeleteOfferingOptions => endpoints::DELETE_OFFERING, EmptyFormat;
    catalog_identifier, offering_id
}

path_operation! {
    /// Options for `GetOfferingAudit`.
    GetOfferingAuditOptions => endpoints::GET_OFFERING_AUDIT, JsonFormat<AuditLog>;
    catalog_identifier, offering_id
}

/// Options for `CreateOffering`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOfferingOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The offering to create. Only set fields are sent.
    pub offering: Offering,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CreateOfferingOptions {
    pub fn new(catalog_identifier: impl Into<String>, offering: Offering) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateOfferingOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_OFFERING;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .json_body(&self.offering)?
            .headers(self.headers))
    }
}

/// Options for `ReplaceOffering`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReplaceOfferingOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    /// The replacement, including its current `rev`.
    pub offering: Offering,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ReplaceOfferingOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        offering: Offering,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            offering,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ReplaceOfferingOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::REPLACE_OFFERING;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .json_body(&self.offering)?
            .headers(self.headers))
    }
}

/// Options for `UpdateOffering`: a JSON Patch applied under an etag.
///
/// ## Examples
///
/// ```
/// use catalog_management::operations::UpdateOfferingOptions;
/// use catalog_management::patch::OfferingPatch;
///
/// let patch = OfferingPatch::new().with_label("Renamed");
/// let options = UpdateOfferingOptions::from_patch("cat", "off", "\"etag\"", &patch).unwrap();
///
/// assert_eq!(options.updates.len(), 1);
/// assert_eq!(options.updates[0].path, "/label");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateOfferingOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    /// The offering's current etag, sent as `If-Match`.
    pub if_match: String,
    /// Patch operations in application order.
    pub updates: Vec<JsonPatchOperation>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateOfferingOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        if_match: impl Into<String>,
        updates: Vec<JsonPatchOperation>,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            if_match: if_match.into(),
            updates,
            headers: HashMap::new(),
        }
    }

    /// Builds the patch from the fields set on `patch`.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::Serialization`] if a patch value cannot be serialized.
    pub fn from_patch(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        if_match: impl Into<String>,
        patch: &OfferingPatch,
    ) -> Result<Self, RequestError> {
        Ok(Self::new(
            catalog_identifier,
            offering_id,
            if_match,
            patch.to_operations()?,
        ))
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for UpdateOfferingOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::UPDATE_OFFERING;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .header(IF_MATCH, self.if_match)
            .patch_body(&self.updates)?
            .headers(self.headers))
    }
}

// =============================================================================
// Imports
// =============================================================================

/// Options for `ImportOfferingVersion`.
///
/// The source is either `zipurl` or archive bytes in `content`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOfferingVersionOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    /// URL of the archive to import.
    pub zipurl: Option<String>,
    pub target_version: Option<String>,
    /// Import the configuration of the archive as well.
    pub include_config: Option<bool>,
    pub is_vsi: Option<bool>,
    /// `helm`, `git` or similar.
    pub repo_type: Option<String>,
    pub content: ImportContent,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ImportOfferingVersionOptions {
    pub fn new(catalog_identifier: impl Into<String>, offering_id: impl Into<String>) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_zipurl => zipurl: String,
        with_target_version => target_version: String,
        with_include_config => include_config: bool,
        with_is_vsi => is_vsi: bool,
        with_repo_type => repo_type: String,
        with_tags => content.tags: Vec<String>,
        with_target_kinds => content.target_kinds: Vec<String>,
        /// Raw archive bytes, sent base64 encoded.
        with_content => content.content: Vec<u8>,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ImportOfferingVersionOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::IMPORT_OFFERING_VERSION;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .query_opt("zipurl", self.zipurl)
            .query_opt("targetVersion", self.target_version)
            .query_opt("includeConfig", self.include_config)
            .query_opt("isVSI", self.is_vsi)
            .query_opt("repoType", self.repo_type)
            .json_body(&self.content)?
            .headers(self.headers))
    }
}

/// Options for `ImportOffering`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportOfferingOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// Token for a private repository, sent as `X-Auth-Token`.
    pub x_auth_token: Option<String>,
    pub zipurl: Option<String>,
    /// Re-import into an existing offering.
    pub offering_id: Option<String>,
    pub target_version: Option<String>,
    pub include_config: Option<bool>,
    pub is_vsi: Option<bool>,
    pub repo_type: Option<String>,
    pub content: ImportContent,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ImportOfferingOptions {
    pub fn new(catalog_identifier: impl Into<String>) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_x_auth_token => x_auth_token: String,
        with_zipurl => zipurl: String,
        with_offering_id => offering_id: String,
        with_target_version => target_version: String,
        with_include_config => include_config: bool,
        with_is_vsi => is_vsi: bool,
        with_repo_type => repo_type: String,
        with_tags => content.tags: Vec<String>,
        with_target_kinds => content.target_kinds: Vec<String>,
        with_content => content.content: Vec<u8>,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ImportOfferingOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::IMPORT_OFFERING;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .header_opt(AUTH_TOKEN, self.x_auth_token)
            .query_opt("zipurl", self.zipurl)
            .query_opt("offeringID", self.offering_id)
            .query_opt("targetVersion", self.target_version)
            .query_opt("includeConfig", self.include_config)
            .query_opt("isVSI", self.is_vsi)
            .query_opt("repoType", self.repo_type)
            .json_body(&self.content)?
            .headers(self.headers))
    }
}

/// Options for `ReloadOffering`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReloadOfferingOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    /// The existing version to reload.
    pub target_version: String,
    pub zipurl: Option<String>,
    pub repo_type: Option<String>,
    pub content: ImportContent,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl ReloadOfferingOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        target_version: impl Into<String>,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            target_version: target_version.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_zipurl => zipurl: String,
        with_repo_type => repo_type: String,
        with_tags => content.tags: Vec<String>,
        with_target_kinds => content.target_kinds: Vec<String>,
        with_content => content.content: Vec<u8>,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for ReloadOfferingOptions {
    type Format = JsonFormat<Offering>;
    const ENDPOINT: &'static Endpoint = &endpoints::RELOAD_OFFERING;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .query("targetVersion", self.target_version)
            .query_opt("zipurl", self.zipurl)
            .query_opt("repoType", self.repo_type)
            .json_body(&self.content)?
            .headers(self.headers))
    }
}

// =============================================================================
// Icon and approvals
// =============================================================================

path_operation! {
    /// Options for `ReplaceOfferingIcon`.
    ReplaceOfferingIconOptions => endpoints::REPLACE_OFFERING_ICON, JsonFormat<Offering>;
    catalog_identifier, offering_id, file_name
}

/// Which publish approval an [`UpdateOfferingIbmOptions`] changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ApprovalType {
    /// The offering may request IBM publishing.
    AllowRequest,
    /// Visible to IBMers.
    Ibm,
    /// Visible to everyone.
    Public,
}

/// Options for `UpdateOfferingIbm`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateOfferingIbmOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    pub approval_type: ApprovalType,
    /// Grant (`true`) or revoke (`false`) the approval.
    pub approved: bool,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateOfferingIbmOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        approval_type: ApprovalType,
        approved: bool,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            approval_type,
            approved,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for UpdateOfferingIbmOptions {
    type Format = JsonFormat<ApprovalResult>;
    const ENDPOINT: &'static Endpoint = &endpoints::UPDATE_OFFERING_IBM;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .path("approval_type", self.approval_type.as_ref())
            .path("approved", self.approved.to_string())
            .headers(self.headers))
    }
}

// =============================================================================
// Updates
// =============================================================================

/// Options for `GetOfferingUpdates`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOfferingUpdatesOptions {
    /// The `catalog_identifier` path parameter.
    pub catalog_identifier: String,
    /// The `offering_id` path parameter.
    pub offering_id: String,
    /// Kind format of the installation, e.g. `helm`.
    pub kind: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// The installed version.
    pub version: Option<String>,
    pub cluster_id: Option<String>,
    pub region: Option<String>,
    pub resource_group_id: Option<String>,
    pub namespace: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetOfferingUpdatesOptions {
    pub fn new(
        catalog_identifier: impl Into<String>,
        offering_id: impl Into<String>,
        kind: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            catalog_identifier: catalog_identifier.into(),
            offering_id: offering_id.into(),
            kind: kind.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_version => version: String,
        with_cluster_id => cluster_id: String,
        with_region => region: String,
        with_resource_group_id => resource_group_id: String,
        with_namespace => namespace: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetOfferingUpdatesOptions {
    type Format = JsonArrayFormat<VersionUpdateDescriptor>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_OFFERING_UPDATES;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("catalog_identifier", self.catalog_identifier)
            .path("offering_id", self.offering_id)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .query("kind", self.kind)
            .query_opt("version", self.version)
            .query_opt("cluster_id", self.cluster_id)
            .query_opt("region", self.region)
            .query_opt("resource_group_id", self.resource_group_id)
            .query_opt("namespace", self.namespace)
            .headers(self.headers))
    }
}

// =============================================================================
// Content
// =============================================================================

/// Options for `GetOfferingSource`.
///
/// The archive is returned as raw bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOfferingSourceOptions {
    /// Version of the source to download.
    pub version: String,
    pub catalog_id: Option<String>,
    /// Offering name.
    pub name: Option<String>,
    /// Offering id.
    pub id: Option<String>,
    /// Kind format, e.g. `helm`.
    pub kind: Option<String>,
    pub channel: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetOfferingSourceOptions {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_catalog_id => catalog_id: String,
        with_name => name: String,
        with_id => id: String,
        with_kind => kind: String,
        with_channel => channel: String,
    }

    /// Adds a request header, e.g. `Accept: application/x-gzip`.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetOfferingSourceOptions {
    type Format = BinaryFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_OFFERING_SOURCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .query("version", self.version)
            .query_opt("catalogID", self.catalog_id)
            .query_opt("name", self.name)
            .query_opt("id", self.id)
            .query_opt("kind", self.kind)
            .query_opt("channel", self.channel)
            .headers(self.headers))
    }
}

/// Options for `GetOfferingSourceUrl`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetOfferingSourceUrlOptions {
    /// The `key_identifier` path parameter.
    pub key_identifier: String,
    pub catalog_id: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetOfferingSourceUrlOptions {
    pub fn new(key_identifier: impl Into<String>) -> Self {
        Self {
            key_identifier: key_identifier.into(),
            ..Default::default()
        }
    }

    with_setters! {
        with_catalog_id => catalog_id: String,
        with_name => name: String,
        with_id => id: String,
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetOfferingSourceUrlOptions {
    type Format = BinaryFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_OFFERING_SOURCE_URL;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("key_identifier", self.key_identifier)
            .query_opt("catalogID", self.catalog_id)
            .query_opt("name", self.name)
            .query_opt("id", self.id)
            .headers(self.headers))
    }
}

path_operation! {
    /// Options for `GetOfferingAbout`. The readme comes back as markdown.
    GetOfferingAboutOptions => endpoints::GET_OFFERING_ABOUT, TextFormat;
    version_loc_id
}

path_operation! {
    /// Options for `GetOfferingLicense`.
    GetOfferingLicenseOptions => endpoints::GET_OFFERING_LICENSE, TextFormat;
    version_loc_id, license_id
}

path_operation! {
    /// Options for `GetOfferingContainerImages`.
    GetOfferingContainerImagesOptions => endpoints::GET_OFFERING_CONTAINER_IMAGES, JsonFormat<ImageManifest>;
    version_loc_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    fn query(parts: &RequestParts) -> Vec<(&str, &str)> {
        parts
            .query_pairs()
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }

    #[test]
    fn unset_query_options_are_omitted() {
        let parts = GetConsumptionOfferingsOptions::new()
            .with_include_hidden(true)
            .with_limit(10)
            .into_parts()
            .unwrap();
        assert_eq!(query(&parts), vec![("includeHidden", "true"), ("limit", "10")]);
    }

    #[test]
    fn approval_path_values() {
        let parts = UpdateOfferingIbmOptions::new("c", "o", ApprovalType::AllowRequest, false)
            .into_parts()
            .unwrap();
        assert_eq!(parts.path_value("approval_type"), Some("allow_request"));
        assert_eq!(parts.path_value("approved"), Some("false"));
    }

    #[test]
    fn approval_type_parses() {
        assert_eq!("ibm".parse::<ApprovalType>().unwrap(), ApprovalType::Ibm);
        assert_eq!(ApprovalType::Public.to_string(), "public");
    }

    #[test]
    fn update_sends_etag_and_patch_array() {
        let parts = UpdateOfferingOptions::new(
            "c",
            "o",
            "\"1-abc\"",
            vec![JsonPatchOperation::replace("/label", json!("New"))],
        )
        .into_parts()
        .unwrap();

        assert!(
            parts
                .header_pairs()
                .contains(&(IF_MATCH.to_string(), "\"1-abc\"".to_string()))
        );
        assert_eq!(
            parts.body(),
            &Payload::Json(json!([{"op": "replace", "path": "/label", "value": "New"}]))
        );
    }

    #[test]
    fn import_splits_query_and_body() {
        let parts = ImportOfferingOptions::new("c")
            .with_zipurl("https://example.com/chart.tgz")
            .with_x_auth_token("repo-token")
            .with_target_kinds(vec!["roks".to_string()])
            .into_parts()
            .unwrap();

        assert_eq!(query(&parts), vec![("zipurl", "https://example.com/chart.tgz")]);
        assert_eq!(
            parts.header_pairs(),
            &[(AUTH_TOKEN.to_string(), "repo-token".to_string())]
        );
        assert_eq!(parts.body(), &Payload::Json(json!({"target_kinds": ["roks"]})));
    }

    #[test]
    fn reload_always_sends_target_version() {
        let parts = ReloadOfferingOptions::new("c", "o", "2.0.0").into_parts().unwrap();
        assert_eq!(query(&parts), vec![("targetVersion", "2.0.0")]);
    }

    #[test]
    fn updates_use_wire_names() {
        let parts = GetOfferingUpdatesOptions::new("c", "o", "helm", "token")
            .with_cluster_id("cl")
            .into_parts()
            .unwrap();
        assert_eq!(query(&parts), vec![("kind", "helm"), ("cluster_id", "cl")]);
        assert_eq!(
            parts.header_pairs(),
            &[(AUTH_REFRESH_TOKEN.to_string(), "token".to_string())]
        );
    }

    #[test]
    fn source_download_uses_camel_case_catalog_id() {
        let parts = GetOfferingSourceOptions::new("1.0.0")
            .with_catalog_id("c")
            .with_name("my-chart")
            .into_parts()
            .unwrap();
        assert_eq!(
            query(&parts),
            vec![("version", "1.0.0"), ("catalogID", "c"), ("name", "my-chart")]
        );
    }
}
