//! Typed JSON Patch source for offerings.
//!
//! [`OfferingPatch`] mirrors the writable fields of
//! [`Offering`](crate::types::Offering). Every field set becomes one `add`
//! operation at `/<wire name>`; unset fields produce nothing.

use catalog_client::patch::patch_from_model;
use catalog_client::{JsonPatchOperation, RequestError};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::operations::with_setters;
use crate::types::{Feature, Kind, MediaItem, Metadata, ProviderInfo, Rating, RepoInfo, Support};

/// Changes to apply to an offering through `UpdateOffering`.
///
/// ## Examples
///
/// ```
/// use catalog_management::patch::OfferingPatch;
/// use serde_json::json;
///
/// let ops = OfferingPatch::new()
///     .with_label("Renamed")
///     .with_hidden(true)
///     .to_operations()
///     .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&ops).unwrap(),
///     json!([
///         {"op": "add", "path": "/hidden", "value": true},
///         {"op": "add", "path": "/label", "value": "Renamed"}
///     ])
/// );
/// ```
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OfferingPatch {
    pub label: Option<String>,
    pub name: Option<String>,
    pub offering_icon_url: Option<String>,
    pub offering_docs_url: Option<String>,
    pub offering_support_url: Option<String>,
    pub tags: Option<Vec<String>>,
    pub keywords: Option<Vec<String>>,
    pub rating: Option<Rating>,
    pub short_description: Option<String>,
    pub long_description: Option<String>,
    pub features: Option<Vec<Feature>>,
    pub kinds: Option<Vec<Kind>>,
    pub permit_request_ibm_public_publish: Option<bool>,
    pub ibm_publish_approved: Option<bool>,
    pub public_publish_approved: Option<bool>,
    pub portal_approval_record: Option<String>,
    pub portal_ui_url: Option<String>,
    pub metadata: Option<Metadata>,
    pub disclaimer: Option<String>,
    pub hidden: Option<bool>,
    pub provider: Option<String>,
    pub provider_info: Option<ProviderInfo>,
    pub repo_info: Option<RepoInfo>,
    pub support: Option<Support>,
    pub media: Option<Vec<MediaItem>>,
}

impl OfferingPatch {
    pub fn new() -> Self {
        Self::default()
    }

    with_setters! {
        with_label => label: String,
        with_name => name: String,
        with_offering_icon_url => offering_icon_url: String,
        with_offering_docs_url => offering_docs_url: String,
        with_offering_support_url => offering_support_url: String,
        with_tags => tags: Vec<String>,
        with_keywords => keywords: Vec<String>,
        with_rating => rating: Rating,
        with_short_description => short_description: String,
        with_long_description => long_description: String,
        with_features => features: Vec<Feature>,
        with_kinds => kinds: Vec<Kind>,
        with_permit_request_ibm_public_publish => permit_request_ibm_public_publish: bool,
        with_ibm_publish_approved => ibm_publish_approved: bool,
        with_public_publish_approved => public_publish_approved: bool,
        with_portal_approval_record => portal_approval_record: String,
        with_portal_ui_url => portal_ui_url: String,
        with_metadata => metadata: Metadata,
        with_disclaimer => disclaimer: String,
        with_hidden => hidden: bool,
        with_provider => provider: String,
        with_provider_info => provider_info: ProviderInfo,
        with_repo_info => repo_info: RepoInfo,
        with_support => support: Support,
        with_media => media: Vec<MediaItem>,
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Converts the set fields into `add` operations, sorted by wire name.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::Serialization`] if a value cannot be serialized.
    pub fn to_operations(&self) -> Result<Vec<JsonPatchOperation>, RequestError> {
        patch_from_model(self)
    }
}
