//! One options type per Catalog Management operation.
//!
//! Each options type holds the operation's required inputs (set through
//! `new`), its optional inputs (set through `with_*` or the public fields)
//! and a free-form `headers` map forwarded with the request. Implementing
//! [`Operation`](catalog_client::Operation) is all it takes to make a type
//! dispatchable through [`ApiClient::call`](catalog_client::ApiClient::call).

/// Declares an options type whose only inputs are path parameters.
///
/// Field names double as the placeholder names of the endpoint path.
macro_rules! path_operation {
    (
        $(#[$meta:meta])*
        $name:ident => $endpoint:path, $format:ty;
        $($field:ident),* $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq)]
        pub struct $name {
            $(
                #[doc = concat!("The `", stringify!($field), "` path parameter.")]
                pub $field: String,
            )*
            /// Extra request headers.
            pub headers: ::std::collections::HashMap<String, String>,
        }

        impl $name {
            /// Creates the options from every required input.
            pub fn new($($field: impl Into<String>),*) -> Self {
                Self {
                    $($field: $field.into(),)*
                    headers: ::std::collections::HashMap::new(),
                }
            }

            /// Adds a request header.
            pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
                self.headers.insert(name.into(), value.into());
                self
            }
        }

        impl ::catalog_client::Operation for $name {
            type Format = $format;
            const ENDPOINT: &'static ::catalog_define::Endpoint = &$endpoint;

            fn into_parts(
                self,
            ) -> Result<::catalog_client::RequestParts, ::catalog_client::RequestError> {
                Ok(::catalog_client::RequestParts::new()
                    $(.path(stringify!($field), self.$field))*
                    .headers(self.headers))
            }
        }
    };
}

pub(crate) use path_operation;

/// Builder setters for optional inputs, used inside an options `impl`.
///
/// `with_limit => limit: i64` sets `self.limit`; a dotted target such as
/// `content.tags` reaches into a nested body.
macro_rules! with_setters {
    ($($(#[$meta:meta])* $setter:ident => $($field:ident).+ : $ty:ty),* $(,)?) => {
        $(
            $(#[$meta])*
            pub fn $setter(mut self, value: impl Into<$ty>) -> Self {
                self.$($field).+ = Some(value.into());
                self
            }
        )*
    };
}

pub(crate) use with_setters;

mod account;
mod catalogs;
mod deploy;
mod enterprise;
mod instances;
mod licenses;
mod objects;
mod offerings;
mod repos;
mod versions;

pub use account::*;
pub use catalogs::*;
pub use deploy::*;
pub use enterprise::*;
pub use instances::*;
pub use licenses::*;
pub use objects::*;
pub use offerings::*;
pub use repos::*;
pub use versions::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::ALL_ENDPOINTS;
    use catalog_client::response::ResponseFormat;
    use catalog_client::{Operation, Payload, RequestError, RequestParts};
    use catalog_define::path::substitute_path_params;
    use catalog_define::{Param, ParamLocation};

    fn resolved_path<O: Operation>(operation: O) -> String {
        let parts = operation.into_parts().unwrap();
        parts.check_required(O::ENDPOINT).unwrap();
        let values: Vec<(&str, &str)> = parts
            .path_values()
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        substitute_path_params(O::ENDPOINT.path, &values)
    }

    fn rejection<O: Operation>(operation: O) -> RequestError {
        operation
            .into_parts()
            .and_then(|parts| parts.check_required(O::ENDPOINT).map(|()| parts))
            .map(|_: RequestParts| ())
            .unwrap_err()
    }

    /// Copies `parts` with one required input blanked, or dropped for body keys.
    fn without(parts: &RequestParts, param: &Param) -> RequestParts {
        let blank = |location: ParamLocation, name: &str, value: &str| {
            let hit = location == param.location
                && match location {
                    ParamLocation::Header => name.eq_ignore_ascii_case(param.name),
                    _ => name == param.name,
                };
            if hit { String::new() } else { value.to_string() }
        };

        let mut out = RequestParts::new();
        for (name, value) in parts.path_values() {
            out = out.path(name.clone(), blank(ParamLocation::Path, name, value));
        }
        for (name, value) in parts.query_pairs() {
            out = out.query(name.clone(), blank(ParamLocation::Query, name, value));
        }
        for (name, value) in parts.header_pairs() {
            out = out.header(name.clone(), blank(ParamLocation::Header, name, value));
        }

        match parts.body() {
            Payload::None => out,
            Payload::Json(serde_json::Value::Object(map)) if param.location == ParamLocation::Body => {
                let mut map = map.clone();
                map.remove(param.name);
                out.json_body(&map).unwrap()
            }
            Payload::Json(value) => out.json_body(value).unwrap(),
            Payload::Text(text) => out.text_body(text.clone()),
            Payload::Binary(bytes) => out.binary_body(Some(bytes.clone())),
        }
    }

    /// Resolves one fully populated operation and returns its endpoint id.
    ///
    /// Also checks the decoder the options type picked agrees with its
    /// descriptor, and that blanking any required input is rejected locally.
    fn check<O: Operation>(operation: O) -> &'static str {
        let id = O::ENDPOINT.id;
        assert_eq!(<O::Format as ResponseFormat>::shape(), O::ENDPOINT.response, "{id}");

        let parts = operation.into_parts().unwrap();
        for param in O::ENDPOINT.required_params() {
            let err = without(&parts, param)
                .check_required(O::ENDPOINT)
                .unwrap_err();
            assert!(
                matches!(
                    err,
                    RequestError::MissingRequired { .. } | RequestError::EmptyRequired { .. }
                ),
                "{id}: {err:?}"
            );
            assert_eq!(err.field(), Some(param.name), "{id}");
        }

        parts.check_required(O::ENDPOINT).unwrap();
        let values: Vec<(&str, &str)> = parts
            .path_values()
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        let path = substitute_path_params(O::ENDPOINT.path, &values);
        assert!(!path.contains('{'), "{id}: {path}");
        id
    }

    #[test]
    fn every_operation_resolves_and_decodes_per_its_descriptor() {
        let mut ids = vec![
            check(GetCatalogAccountOptions::new()),
            check(UpdateCatalogAccountOptions::new()),
            check(GetCatalogAccountAuditOptions::new()),
            check(GetCatalogAccountFiltersOptions::new()),
            check(ListCatalogsOptions::new()),
            check(CreateCatalogOptions::default()),
            check(GetCatalogOptions::new("c")),
            check(ReplaceCatalogOptions::new("c", Default::default())),
            check(DeleteCatalogOptions::new("c")),
            check(GetCatalogAuditOptions::new("c")),
            check(GetEnterpriseOptions::new("e")),
            check(UpdateEnterpriseOptions::new("e", Default::default())),
            check(GetEnterpriseAuditOptions::new("e")),
            check(GetConsumptionOfferingsOptions::new()),
            check(ListOfferingsOptions::new("c")),
            check(CreateOfferingOptions::new("c", Default::default())),
            check(ImportOfferingVersionOptions::new("c", "o")),
            check(ImportOfferingOptions::new("c")),
            check(ReloadOfferingOptions::new("c", "o", "1.0.0")),
            check(GetOfferingOptions::new("c", "o")),
            check(ReplaceOfferingOptions::new("c", "o", Default::default())),
            check(UpdateOfferingOptions::new("c", "o", "\"etag\"", Vec::new())),
            check(DeleteOfferingOptions::new("c", "o")),
            check(GetOfferingAuditOptions::new("c", "o")),
            check(ReplaceOfferingIconOptions::new("c", "o", "icon.png")),
            check(UpdateOfferingIbmOptions::new("c", "o", ApprovalType::AllowRequest, true)),
            check(GetOfferingUpdatesOptions::new("c", "o", "helm", "token")),
            check(GetOfferingSourceOptions::new("1.0.0")),
            check(GetOfferingSourceUrlOptions::new("key")),
            check(GetOfferingAboutOptions::new("c.v")),
            check(GetOfferingLicenseOptions::new("c.v", "l")),
            check(GetOfferingContainerImagesOptions::new("c.v")),
            check(DeprecateVersionOptions::new("c.v")),
            check(AccountPublishVersionOptions::new("c.v")),
            check(IbmPublishVersionOptions::new("c.v")),
            check(PublicPublishVersionOptions::new("c.v")),
            check(CommitVersionOptions::new("c.v")),
            check(CopyVersionOptions::new("c.v")),
            check(GetOfferingWorkingCopyOptions::new("c.v")),
            check(GetVersionOptions::new("c.v")),
            check(DeleteVersionOptions::new("c.v")),
            check(GetVersionUpdatesOptions::new("c.v", "cluster", "us-south")),
            check(GetClusterOptions::new("cluster", "us-south", "token")),
            check(GetNamespacesOptions::new("cluster", "us-south", "token")),
            check(DeployOperatorsOptions::new("token")),
            check(ListOperatorsOptions::new("token", "cluster", "us-south", "c.v")),
            check(ReplaceOperatorsOptions::new("token")),
            check(DeleteOperatorsOptions::new("token", "cluster", "us-south", "c.v")),
            check(InstallVersionOptions::new("c.v", "token")),
            check(PreinstallVersionOptions::new("c.v", "token")),
            check(GetPreinstallOptions::new("c.v", "token")),
            check(ValidateInstallOptions::new("c.v", "token")),
            check(GetValidationStatusOptions::new("c.v", "token")),
            check(GetOverrideValuesOptions::new("c.v")),
            check(SearchObjectsOptions::new("name:foo")),
            check(ListObjectsOptions::new("c")),
            check(CreateObjectOptions::new("c", Default::default())),
            check(GetObjectOptions::new("c", "obj")),
            check(ReplaceObjectOptions::new("c", "obj", Default::default())),
            check(DeleteObjectOptions::new("c", "obj")),
            check(GetObjectAuditOptions::new("c", "obj")),
            check(AccountPublishObjectOptions::new("c", "obj")),
            check(SharedPublishObjectOptions::new("c", "obj")),
            check(IbmPublishObjectOptions::new("c", "obj")),
            check(PublicPublishObjectOptions::new("c", "obj")),
            check(CreateObjectAccessOptions::new("c", "obj", "acct")),
            check(GetObjectAccessOptions::new("c", "obj", "acct")),
            check(DeleteObjectAccessOptions::new("c", "obj", "acct")),
            check(GetObjectAccessListOptions::new("c", "obj")),
            check(DeleteObjectAccessListOptions::new("c", "obj", vec!["acct".to_string()])),
            check(AddObjectAccessListOptions::new("c", "obj", vec!["acct".to_string()])),
            check(CreateOfferingInstanceOptions::new("token", Default::default())),
            check(GetOfferingInstanceOptions::new("i")),
            check(PutOfferingInstanceOptions::new("i", "token", Default::default())),
            check(DeleteOfferingInstanceOptions::new("i", "token")),
            check(CreateVersionInstanceOptions::new("token", Default::default())),
            check(GetVersionInstanceOptions::new("vi")),
            check(PutVersionInstanceOptions::new("vi", "token", Default::default())),
            check(DeleteVersionInstanceOptions::new("vi")),
            check(CreateLicenseEntitlementOptions::new()),
            check(DeleteLicenseEntitlementOptions::new("ent")),
            check(GetReposOptions::new("helm", "https://charts.example.com")),
            check(GetRepoOptions::new("helm", "https://charts.example.com/a.tgz")),
        ];

        let mut expected: Vec<_> = ALL_ENDPOINTS.iter().map(|e| e.id).collect();
        expected.sort_unstable();
        ids.sort_unstable();
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_path_parameter_is_rejected() {
        let err = rejection(GetOfferingOptions::new("", "o"));
        assert!(matches!(
            err,
            RequestError::EmptyRequired {
                operation: "GetOffering",
                ..
            }
        ));
        assert_eq!(err.field(), Some("catalog_identifier"));
    }

    #[test]
    fn empty_required_header_is_rejected() {
        let err = rejection(GetClusterOptions::new("cluster", "us-south", ""));
        assert_eq!(err.field(), Some("X-Auth-Refresh-Token"));
    }

    #[test]
    fn empty_required_query_is_rejected() {
        let err = rejection(SearchObjectsOptions::new(""));
        assert!(matches!(err, RequestError::EmptyRequired { .. }));
        assert_eq!(err.field(), Some("query"));
    }

    #[test]
    fn path_values_are_not_interpreted() {
        let path = resolved_path(GetOfferingLicenseOptions::new("cat.ver", "Apache-2.0"));
        assert_eq!(path, "/versions/cat.ver/licenses/Apache-2.0");
    }
}
