//! Helm repository types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::Metadata;

/// A chart maintainer.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Maintainers {
    pub email: Option<String>,
    pub name: Option<String>,
}

/// One chart entry of a helm repository index.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelmRepoListChart {
    pub api_version: Option<String>,
    pub created: Option<DateTime<Utc>>,
    pub description: Option<String>,
    pub deprecated: Option<bool>,
    pub digest: Option<String>,
    pub home: Option<String>,
    pub icon: Option<String>,
    pub keywords: Option<Vec<String>>,
    pub maintainers: Option<Vec<Maintainers>>,
    pub name: Option<String>,
    pub tiller_version: Option<String>,
    pub urls: Option<Vec<String>>,
    pub sources: Option<Vec<String>>,
    pub version: Option<String>,
    pub app_version: Option<String>,
}

/// Charts of a helm repository.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelmRepoList {
    pub chart: Option<HelmRepoListChart>,
}

/// Details of one packaged chart.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelmPackageChart {
    pub name: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub version: Option<String>,
    pub app_version: Option<String>,
    /// Parsed `values.yaml`.
    pub values: Option<Metadata>,
    pub values_metadata: Option<Metadata>,
    pub license: Option<String>,
    pub readme: Option<String>,
}

/// A helm package.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelmPackage {
    pub chart: Option<HelmPackageChart>,
}
