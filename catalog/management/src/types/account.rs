//! Account, enterprise and filter types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

// =============================================================================
// Filters
// =============================================================================

/// A list of filter terms.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterTerms {
    /// Terms, e.g. `["iam-compatible"]`.
    pub filter_terms: Option<Vec<String>>,
}

/// Filter on one category.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// `true` to include matches, `false` to exclude them.
    pub include: Option<bool>,
    /// Terms to match.
    pub filter: Option<FilterTerms>,
}

/// Include and exclude filters on offering ids.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdFilter {
    /// Ids to include.
    pub include: Option<FilterTerms>,
    /// Ids to exclude.
    pub exclude: Option<FilterTerms>,
}

/// Filters applied to the offerings of a catalog or account.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Filters {
    /// Include everything not explicitly excluded.
    pub include_all: Option<bool>,
    /// Filters keyed by category name.
    pub category_filters: Option<HashMap<String, CategoryFilter>>,
    /// Filters on offering ids.
    pub id_filters: Option<IdFilter>,
}

// =============================================================================
// Account
// =============================================================================

/// Account level catalog settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<String>,
    /// Hide the public catalog in this account.
    #[serde(rename = "hide_IBM_cloud_catalog")]
    pub hide_ibm_cloud_catalog: Option<bool>,
    pub account_filters: Option<Filters>,
}

/// The catalog a set of accumulated filters came from.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCatalog {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// Filters of one catalog, as part of [`AccumulatedFilters`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedFiltersCatalogFilters {
    pub catalog: Option<FilterCatalog>,
    pub filters: Option<Filters>,
}

/// Every filter in effect for an account: its own plus those of each catalog.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedFilters {
    pub account_filters: Option<Vec<Filters>>,
    pub catalog_filters: Option<Vec<AccumulatedFiltersCatalogFilters>>,
}

// =============================================================================
// Enterprise
// =============================================================================

/// Filters for a group of accounts in an enterprise.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountGroup {
    pub id: Option<String>,
    pub account_filters: Option<Filters>,
}

/// The account groups of an enterprise.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnterpriseAccountGroups {
    pub keys: Option<AccountGroup>,
}

/// Enterprise level catalog settings.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enterprise {
    pub id: Option<String>,
    /// Cloudant revision.
    #[serde(rename = "_rev")]
    pub rev: Option<String>,
    #[serde(rename = "hide_IBM_cloud_catalog")]
    pub hide_ibm_cloud_catalog: Option<bool>,
    pub account_filters: Option<Filters>,
    pub account_groups: Option<EnterpriseAccountGroups>,
}
