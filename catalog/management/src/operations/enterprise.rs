//! Enterprise-level settings.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::path_operation;
use crate::endpoints;
use crate::types::{AuditLog, Enterprise};

path_operation! {
    /// Options for `GetEnterprise`.
    GetEnterpriseOptions => endpoints::GET_ENTERPRISE, JsonFormat<Enterprise>;
    enterprise_id
}

path_operation! {
    /// Options for `GetEnterpriseAudit`.
    GetEnterpriseAuditOptions => endpoints::GET_ENTERPRISE_AUDIT, JsonFormat<AuditLog>;
    enterprise_id
}

/// Options for `UpdateEnterprise`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEnterpriseOptions {
    /// The `enterprise_id` path parameter.
    pub enterprise_id: String,
    /// The new settings. Only set fields are sent.
    pub enterprise: Enterprise,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl UpdateEnterpriseOptions {
    pub fn new(enterprise_id: impl Into<String>, enterprise: Enterprise) -> Self {
        Self {
            enterprise_id: enterprise_id.into(),
            enterprise,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for UpdateEnterpriseOptions {
    type Format = EmptyFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::UPDATE_ENTERPRISE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("enterprise_id", self.enterprise_id)
            .json_body(&self.enterprise)?
            .headers(self.headers))
    }
}
