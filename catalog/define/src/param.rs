//! Declared endpoint inputs.
//!
//! Every input an operation accepts is a [`Param`]: a wire name, a
//! [`ParamLocation`] and a required flag. The runtime checks required
//! params before sending anything, so a descriptor's param list is the
//! single source of truth for local validation.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Where a parameter travels on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ParamLocation {
    /// Substituted into a `{placeholder}` of the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as an HTTP header.
    Header,
    /// A top-level key of a JSON object body.
    Body,
}

/// A single declared input of an endpoint.
///
/// ## Examples
///
/// ```
/// use catalog_define::{Param, ParamLocation};
///
/// let region = Param::query("region").required();
/// assert_eq!(region.location, ParamLocation::Query);
/// assert!(region.required);
///
/// let limit = Param::query("limit");
/// assert!(!limit.required);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Param {
    /// Wire name: placeholder name, query key, header name or JSON key.
    pub name: &'static str,
    /// Where the value is placed.
    pub location: ParamLocation,
    /// Whether the value must be present (and non-empty for strings).
    pub required: bool,
}

impl Param {
    /// A path parameter. Path parameters are always required.
    pub const fn path(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Path,
            required: true,
        }
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Query,
            required: false,
        }
    }

    /// An optional header.
    pub const fn header(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Header,
            required: false,
        }
    }

    /// An optional top-level body field.
    pub const fn body(name: &'static str) -> Self {
        Self {
            name,
            location: ParamLocation::Body,
            required: false,
        }
    }

    /// Marks the parameter as required.
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Returns `true` if this parameter matches `name` in `location`.
    ///
    /// Header names compare case-insensitively.
    pub fn matches(&self, location: ParamLocation, name: &str) -> bool {
        self.location == location
            && match location {
                ParamLocation::Header => self.name.eq_ignore_ascii_case(name),
                _ => self.name == name,
            }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_params_are_required() {
        let p = Param::path("offering_id");
        assert!(p.required);
        assert_eq!(p.location, ParamLocation::Path);
    }

    #[test]
    fn constructors_default_to_optional() {
        assert!(!Param::query("limit").required);
        assert!(!Param::header("If-Match").required);
        assert!(!Param::body("label").required);
    }

    #[test]
    fn required_is_const() {
        const TOKEN: Param = Param::header("X-Auth-Refresh-Token").required();
        assert!(TOKEN.required);
    }

    #[test]
    fn header_match_ignores_case() {
        let p = Param::header("If-Match");
        assert!(p.matches(ParamLocation::Header, "if-match"));
        assert!(!p.matches(ParamLocation::Query, "If-Match"));
    }

    #[test]
    fn query_match_is_exact() {
        let p = Param::query("targetVersion");
        assert!(p.matches(ParamLocation::Query, "targetVersion"));
        assert!(!p.matches(ParamLocation::Query, "targetversion"));
    }

    #[test]
    fn location_display_lowercase() {
        assert_eq!(ParamLocation::Path.to_string(), "path");
        assert_eq!(ParamLocation::Body.to_string(), "body");
    }
}
