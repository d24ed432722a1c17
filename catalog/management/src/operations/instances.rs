//! Offering and version instances.

use std::collections::HashMap;

use catalog_client::response::{EmptyFormat, JsonFormat};
use catalog_client::{Operation, RequestError, RequestParts};
use catalog_define::Endpoint;

use super::path_operation;
use crate::endpoints::{self, AUTH_REFRESH_TOKEN};
use crate::types::{OfferingInstance, VersionInstance};

path_operation! {
    /// Options for `GetOfferingInstance`.
    GetOfferingInstanceOptions => endpoints::GET_OFFERING_INSTANCE, JsonFormat<OfferingInstance>;
    instance_identifier
}

/// Options for `CreateOfferingInstance`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateOfferingInstanceOptions {
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    pub instance: OfferingInstance,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CreateOfferingInstanceOptions {
    pub fn new(x_auth_refresh_token: impl Into<String>, instance: OfferingInstance) -> Self {
        Self {
            x_auth_refresh_token: x_auth_refresh_token.into(),
            instance,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateOfferingInstanceOptions {
    type Format = JsonFormat<OfferingInstance>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_OFFERING_INSTANCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .json_body(&self.instance)?
            .headers(self.headers))
    }
}

/// Options for `PutOfferingInstance`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutOfferingInstanceOptions {
    /// The `instance_identifier` path parameter.
    pub instance_identifier: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// The replacement, including its current `rev`.
    pub instance: OfferingInstance,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl PutOfferingInstanceOptions {
    pub fn new(
        instance_identifier: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
        instance: OfferingInstance,
    ) -> Self {
        Self {
            instance_identifier: instance_identifier.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            instance,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for PutOfferingInstanceOptions {
    type Format = JsonFormat<OfferingInstance>;
    const ENDPOINT: &'static Endpoint = &endpoints::PUT_OFFERING_INSTANCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("instance_identifier", self.instance_identifier)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .json_body(&self.instance)?
            .headers(self.headers))
    }
}

/// Options for `DeleteOfferingInstance`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeleteOfferingInstanceOptions {
    /// The `instance_identifier` path parameter.
    pub instance_identifier: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl DeleteOfferingInstanceOptions {
    pub fn new(
        instance_identifier: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            instance_identifier: instance_identifier.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for DeleteOfferingInstanceOptions {
    type Format = EmptyFormat;
    const ENDPOINT: &'static Endpoint = &endpoints::DELETE_OFFERING_INSTANCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("instance_identifier", self.instance_identifier)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .headers(self.headers))
    }
}

// =============================================================================
// Version instances
// =============================================================================

path_operation! {
    /// Options for `GetVersionInstance`.
    GetVersionInstanceOptions => endpoints::GET_VERSION_INSTANCE, JsonFormat<VersionInstance>;
    instance_identifier
}

path_operation! {
    /// Options for `DeleteVersionInstance`.
    DeleteVersionInstanceOptions => endpoints::DELETE_VERSION_INSTANCE, EmptyFormat;
    instance_identifier
}

/// Options for `CreateVersionInstance`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateVersionInstanceOptions {
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    pub instance: VersionInstance,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl CreateVersionInstanceOptions {
    pub fn new(x_auth_refresh_token: impl Into<String>, instance: VersionInstance) -> Self {
        Self {
            x_auth_refresh_token: x_auth_refresh_token.into(),
            instance,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for CreateVersionInstanceOptions {
    type Format = JsonFormat<VersionInstance>;
    const ENDPOINT: &'static Endpoint = &endpoints::CREATE_VERSION_INSTANCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .json_body(&self.instance)?
            .headers(self.headers))
    }
}

/// Options for `PutVersionInstance`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PutVersionInstanceOptions {
    /// The `instance_identifier` path parameter.
    pub instance_identifier: String,
    /// Sent as `X-Auth-Refresh-Token`.
    pub x_auth_refresh_token: String,
    /// The replacement, including its current `rev`.
    pub instance: VersionInstance,
    /// Extra request headers.
    pub headers: HashMap<String, String>,
}

impl PutVersionInstanceOptions {
    pub fn new(
        instance_identifier: impl Into<String>,
        x_auth_refresh_token: impl Into<String>,
        instance: VersionInstance,
    ) -> Self {
        Self {
            instance_identifier: instance_identifier.into(),
            x_auth_refresh_token: x_auth_refresh_token.into(),
            instance,
            headers: HashMap::new(),
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

impl Operation for PutVersionInstanceOptions {
    type Format = JsonFormat<VersionInstance>;
    const ENDPOINT: &'static Endpoint = &endpoints::PUT_VERSION_INSTANCE;

    fn into_parts(self) -> Result<RequestParts, RequestError> {
        Ok(RequestParts::new()
            .path("instance_identifier", self.instance_identifier)
            .header(AUTH_REFRESH_TOKEN, self.x_auth_refresh_token)
            .json_body(&self.instance)?
            .headers(self.headers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_client::Payload;
    use serde_json::json;

    #[test]
    fn version_instance_body_is_the_instance() {
        let instance = VersionInstance {
            rev: Some("2-b".to_string()),
            cluster_id: Some("cluster1".to_string()),
            ..Default::default()
        };
        let parts = PutVersionInstanceOptions::new("vi1", "token", instance)
            .into_parts()
            .unwrap();

        assert_eq!(parts.path_value("instance_identifier"), Some("vi1"));
        assert_eq!(
            parts.body(),
            &Payload::Json(json!({"_rev": "2-b", "cluster_id": "cluster1"}))
        );
    }

    #[test]
    fn version_instance_delete_needs_no_token() {
        let parts = DeleteVersionInstanceOptions::new("vi1").into_parts().unwrap();
        assert!(parts.header_pairs().is_empty());
        assert!(parts.check_required(&endpoints::DELETE_VERSION_INSTANCE).is_ok());
    }
}
