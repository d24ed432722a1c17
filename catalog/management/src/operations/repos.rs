//! Helm repository lookups.

use std::collections::HashMap;

use catalog_client::response::JsonFormat;
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use crate::endpoints;
use crate::types::{HelmPackage, HelmRepoList};

/// Options for `GetRepos`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetReposOptions {
    /// Repository type, sent as the `type` path parameter. Only `helm` is
    /// supported remotely.
    pub repo_type: String,
    /// URL of the repository index.
    pub repourl: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetReposOptions {
    pub fn new(repo_type: impl Into<String>, repourl: impl Into<String>) -> Self {
        Self {
            repo_type: repo_type.into(),
            repourl: repourl.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetReposOptions {
    type Format = JsonFormat<HelmRepoList>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_REPOS;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("type", self.repo_type)
            .query("repourl", self.repourl)
            .headers(self.headers))
    }
}

/// Options for `GetRepo`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetRepoOptions {
    /// Repository type, sent as the `type` path parameter.
    pub repo_type: String,
    /// URL of the packaged chart.
    pub charturl: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl GetRepoOptions {
    pub fn new(repo_type: impl Into<String>, charturl: impl Into<String>) -> Self {
        Self {
            repo_type: repo_type.into(),
            charturl: charturl.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for GetRepoOptions {
    type Format = JsonFormat<HelmPackage>;
    const ENDPOINT: &'static Endpoint = &endpoints::GET_REPO;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("type", self.repo_type)
            .query("charturl", self.charturl)
            .headers(self.headers))
    }
}
