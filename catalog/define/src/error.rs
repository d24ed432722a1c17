//! Errors raised when an endpoint table is internally inconsistent.

use thiserror::Error;

/// A descriptor (or a table of descriptors) that cannot be dispatched.
///
/// These are programmer errors in an endpoint table, caught by
/// [`Endpoint::validate`](crate::Endpoint::validate) and
/// [`validate_table`](crate::validate_table).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
    /// A `{placeholder}` in the path has no matching `Path` parameter.
    #[error("{endpoint}: path placeholder `{{{name}}}` has no path parameter")]
    UndeclaredPlaceholder {
        /// The endpoint id.
        endpoint: &'static str,
        /// The placeholder name.
        name: String,
    },

    /// A `Path` parameter does not appear in the path template.
    #[error("{endpoint}: path parameter `{name}` is not used by the template")]
    UnusedPathParam {
        /// The endpoint id.
        endpoint: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// Path parameters must always be required.
    #[error("{endpoint}: path parameter `{name}` must be required")]
    OptionalPathParam {
        /// The endpoint id.
        endpoint: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// Two parameters share a name and location.
    #[error("{endpoint}: parameter `{name}` declared twice")]
    DuplicateParam {
        /// The endpoint id.
        endpoint: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// Body parameters were declared on an endpoint that sends no JSON object.
    #[error("{endpoint}: body parameter `{name}` declared without a JSON body")]
    BodyParamWithoutBody {
        /// The endpoint id.
        endpoint: &'static str,
        /// The parameter name.
        name: &'static str,
    },

    /// The path template has an unbalanced brace.
    #[error("{endpoint}: malformed path template `{path}`")]
    MalformedPath {
        /// The endpoint id.
        endpoint: &'static str,
        /// The offending template.
        path: &'static str,
    },

    /// Two endpoints in a table share an id.
    #[error("duplicate endpoint id: {0}")]
    DuplicateEndpoint(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_endpoint_and_name() {
        let err = DefinitionError::UndeclaredPlaceholder {
            endpoint: "GetCatalog",
            name: "catalog_identifier".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "GetCatalog: path placeholder `{catalog_identifier}` has no path parameter"
        );
    }

    #[test]
    fn duplicate_endpoint_display() {
        let err = DefinitionError::DuplicateEndpoint("ListCatalogs");
        assert_eq!(err.to_string(), "duplicate endpoint id: ListCatalogs");
    }
}
