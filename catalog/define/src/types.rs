//! Core types for endpoint descriptors.
//!
//! - [`RestMethod`] - HTTP method enumeration
//! - [`Endpoint`] - A single, statically declared endpoint
//! - [`validate_table`] - Consistency check over a whole endpoint table

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::DefinitionError;
use crate::media::MediaType;
use crate::param::{Param, ParamLocation};
use crate::path::{extract_path_params, is_balanced};
use crate::request::RequestBody;
use crate::response::ResponseBody;

/// HTTP methods supported by REST APIs.
///
/// ## Examples
///
/// Parse from string:
///
/// ```
/// use std::str::FromStr;
/// use catalog_define::RestMethod;
///
/// let method = RestMethod::from_str("GET").unwrap();
/// assert_eq!(method, RestMethod::Get);
/// ```
///
/// Display as uppercase:
///
/// ```
/// use catalog_define::RestMethod;
///
/// assert_eq!(RestMethod::Patch.to_string(), "PATCH");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource
    Get,
    /// HTTP POST - Create a new resource or trigger an action
    Post,
    /// HTTP PUT - Replace a resource entirely
    Put,
    /// HTTP PATCH - Partially update a resource
    Patch,
    /// HTTP DELETE - Remove a resource
    Delete,
    /// HTTP HEAD - Get headers only (no body)
    Head,
    /// HTTP OPTIONS - Get allowed methods for a resource
    Options,
}

/// A single endpoint descriptor.
///
/// Descriptors are plain `const` data. One row describes everything the
/// dispatcher needs: method, path template, declared inputs, the
/// `Accept` header, and the request and response shapes.
///
/// ## Path Parameters
///
/// Paths use `{name}` placeholders. Every placeholder must be declared as
/// a [`Param::path`] and every path param must appear in the template;
/// [`Endpoint::validate`] enforces this.
///
/// ## Examples
///
/// ```
/// use catalog_define::{Endpoint, MediaType, Param, RequestBody, ResponseBody, RestMethod};
///
/// const UPDATE_OFFERING: Endpoint = Endpoint {
///     id: "UpdateOffering",
///     method: RestMethod::Patch,
///     path: "/catalogs/{catalog_identifier}/offerings/{offering_id}",
///     description: "Update an offering with a JSON Patch document",
///     params: &[
///         Param::path("catalog_identifier"),
///         Param::path("offering_id"),
///         Param::header("If-Match").required(),
///     ],
///     accept: Some(MediaType::Json),
///     request: RequestBody::JsonPatch,
///     response: ResponseBody::Json,
/// };
///
/// assert!(UPDATE_OFFERING.validate().is_ok());
/// assert_eq!(UPDATE_OFFERING.required_params().count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Endpoint {
    /// Operation identifier, PascalCase (e.g. `GetOffering`).
    pub id: &'static str,
    /// HTTP method for this endpoint.
    pub method: RestMethod,
    /// Path template relative to the service URL.
    pub path: &'static str,
    /// Human-readable description of what this endpoint does.
    pub description: &'static str,
    /// Declared inputs.
    pub params: &'static [Param],
    /// Value of the `Accept` header, if the endpoint returns a body.
    pub accept: Option<MediaType>,
    /// Request body shape.
    pub request: RequestBody,
    /// Response body shape.
    pub response: ResponseBody,
}

impl Endpoint {
    /// Extracts path parameter names from the template, in order.
    pub fn path_params(&self) -> Vec<&'static str> {
        extract_path_params(self.path)
    }

    /// Iterates over required parameters.
    pub fn required_params(&self) -> impl Iterator<Item = &'static Param> {
        self.params.iter().filter(|p| p.required)
    }

    /// Looks up a declared parameter.
    pub fn param(&self, location: ParamLocation, name: &str) -> Option<&'static Param> {
        self.params.iter().find(|p| p.matches(location, name))
    }

    /// Returns the request `Content-Type`, if any.
    pub fn content_type(&self) -> Option<MediaType> {
        self.request.content_type()
    }

    /// Checks the descriptor is internally consistent.
    ///
    /// ## Errors
    ///
    /// Returns the first [`DefinitionError`] found.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        if !is_balanced(self.path) {
            return Err(DefinitionError::MalformedPath {
                endpoint: self.id,
                path: self.path,
            });
        }

        let placeholders = self.path_params();
        for name in &placeholders {
            if self.param(ParamLocation::Path, name).is_none() {
                return Err(DefinitionError::UndeclaredPlaceholder {
                    endpoint: self.id,
                    name: (*name).to_string(),
                });
            }
        }

        let mut seen: HashSet<(ParamLocation, String)> = HashSet::new();
        for param in self.params {
            let key = match param.location {
                ParamLocation::Header => param.name.to_ascii_lowercase(),
                _ => param.name.to_string(),
            };
            if !seen.insert((param.location, key)) {
                return Err(DefinitionError::DuplicateParam {
                    endpoint: self.id,
                    name: param.name,
                });
            }

            match param.location {
                ParamLocation::Path => {
                    if !param.required {
                        return Err(DefinitionError::OptionalPathParam {
                            endpoint: self.id,
                            name: param.name,
                        });
                    }
                    if !placeholders.contains(&param.name) {
                        return Err(DefinitionError::UnusedPathParam {
                            endpoint: self.id,
                            name: param.name,
                        });
                    }
                }
                ParamLocation::Body if !self.request.accepts_body_params() => {
                    return Err(DefinitionError::BodyParamWithoutBody {
                        endpoint: self.id,
                        name: param.name,
                    });
                }
                _ => {}
            }
        }

        Ok(())
    }
}

/// Validates every endpoint in a table and checks ids are unique.
///
/// ## Errors
///
/// Returns the first inconsistency found.
pub fn validate_table(endpoints: &[&Endpoint]) -> Result<(), DefinitionError> {
    let mut ids = HashSet::new();
    for endpoint in endpoints {
        endpoint.validate()?;
        if !ids.insert(endpoint.id) {
            return Err(DefinitionError::DuplicateEndpoint(endpoint.id));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    const GET_OFFERING: Endpoint = Endpoint {
        id: "GetOffering",
        method: RestMethod::Get,
        path: "/catalogs/{catalog_identifier}/offerings/{offering_id}",
        description: "Get an offering",
        params: &[Param::path("catalog_identifier"), Param::path("offering_id")],
        accept: Some(MediaType::Json),
        request: RequestBody::None,
        response: ResponseBody::Json,
    };

    #[test]
    fn rest_method_display_uppercase() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Post.to_string(), "POST");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Patch.to_string(), "PATCH");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
        assert_eq!(RestMethod::Head.to_string(), "HEAD");
        assert_eq!(RestMethod::Options.to_string(), "OPTIONS");
    }

    #[test]
    fn rest_method_from_str_invalid() {
        assert!(RestMethod::from_str("INVALID").is_err());
        assert!(RestMethod::from_str("get").is_err()); // Case-sensitive
        assert!(RestMethod::from_str("").is_err());
    }

    #[test]
    fn rest_method_iter_all_variants() {
        let variants: Vec<_> = RestMethod::iter().collect();
        assert_eq!(variants.len(), 7);
    }

    #[test]
    fn rest_method_serde_roundtrip() {
        let serialized = serde_json::to_string(&RestMethod::Post).unwrap();
        assert_eq!(serialized, "\"POST\"");
        let deserialized: RestMethod = serde_json::from_str(&serialized).unwrap();
        assert_eq!(deserialized, RestMethod::Post);
    }

    #[test]
    fn valid_endpoint_passes() {
        assert!(GET_OFFERING.validate().is_ok());
        assert_eq!(
            GET_OFFERING.path_params(),
            vec!["catalog_identifier", "offering_id"]
        );
    }

    #[test]
    fn undeclared_placeholder_is_rejected() {
        const PARAMS: &[Param] = &[Param::path("catalog_identifier")];
        let endpoint = Endpoint {
            params: PARAMS,
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::UndeclaredPlaceholder { name, .. }) if name == "offering_id"
        ));
    }

    #[test]
    fn unused_path_param_is_rejected() {
        let endpoint = Endpoint {
            path: "/catalogs/{catalog_identifier}",
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::UnusedPathParam { name: "offering_id", .. })
        ));
    }

    #[test]
    fn optional_path_param_is_rejected() {
        const PARAMS: &[Param] = &[Param {
            name: "catalog_identifier",
            location: ParamLocation::Path,
            required: false,
        }];
        let endpoint = Endpoint {
            path: "/catalogs/{catalog_identifier}",
            params: PARAMS,
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::OptionalPathParam { .. })
        ));
    }

    #[test]
    fn duplicate_header_ignores_case() {
        const PARAMS: &[Param] = &[
            Param::path("catalog_identifier"),
            Param::path("offering_id"),
            Param::header("If-Match"),
            Param::header("if-match"),
        ];
        let endpoint = Endpoint {
            params: PARAMS,
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::DuplicateParam { .. })
        ));
    }

    #[test]
    fn body_params_need_json_body() {
        const PARAMS: &[Param] = &[
            Param::path("catalog_identifier"),
            Param::path("offering_id"),
            Param::body("label"),
        ];
        let endpoint = Endpoint {
            params: PARAMS,
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::BodyParamWithoutBody { name: "label", .. })
        ));
    }

    #[test]
    fn malformed_path_is_rejected() {
        let endpoint = Endpoint {
            path: "/catalogs/{catalog_identifier",
            params: &[],
            ..GET_OFFERING
        };
        assert!(matches!(
            endpoint.validate(),
            Err(DefinitionError::MalformedPath { .. })
        ));
    }

    #[test]
    fn table_rejects_duplicate_ids() {
        let copy = GET_OFFERING;
        assert_eq!(
            validate_table(&[&GET_OFFERING, &copy]),
            Err(DefinitionError::DuplicateEndpoint("GetOffering"))
        );
    }
}
