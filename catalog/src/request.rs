//! Request parts assembled by an operation before dispatch.
//!
//! [`RequestParts`] is a slot-based builder: path values, query pairs,
//! headers and an optional body. Optional inputs are only placed when they
//! are `Some`, so a request never carries an absent field.

use catalog_define::{Endpoint, ParamLocation};
use serde::Serialize;
use serde_json::Value;

use crate::error::RequestError;
use crate::patch::JsonPatchOperation;

/// A request body before transport encoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// No body.
    #[default]
    None,
    /// A JSON document (object, patch array or plain array).
    Json(Value),
    /// Raw text.
    Text(String),
    /// Raw bytes.
    Binary(Vec<u8>),
}

impl Payload {
    /// Returns `true` if no body was set.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// The inputs of one operation, sorted into wire slots.
///
/// ## Examples
///
/// ```
/// use catalog_client::RequestParts;
///
/// let parts = RequestParts::new()
///     .path("catalog_identifier", "abc")
///     .query_opt("digest", Some(true))
///     .query_opt("limit", None::<i64>)
///     .header_opt("X-Auth-Refresh-Token", Some("token"));
///
/// assert_eq!(parts.path_value("catalog_identifier"), Some("abc"));
/// assert_eq!(parts.query_pairs(), &[("digest".to_string(), "true".to_string())]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    path: Vec<(String, String)>,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Payload,
}

impl RequestParts {
    /// Creates empty request parts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a path placeholder value.
    pub fn path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.path.push((name.into(), value.into()));
        self
    }

    /// Adds a query pair.
    pub fn query(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((name.into(), value.to_string()));
        self
    }

    /// Adds a query pair only when the value is present.
    pub fn query_opt<V: ToString>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Adds a comma-joined list as a single query pair, when present.
    pub fn query_list<V: AsRef<str>>(self, name: impl Into<String>, values: Option<&[V]>) -> Self {
        match values {
            Some(values) => {
                let joined = values
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(",");
                self.query(name, joined)
            }
            None => self,
        }
    }

    /// Adds a header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Adds a header only when the value is present.
    pub fn header_opt<V: Into<String>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.header(name, value),
            None => self,
        }
    }

    /// Adds caller pass-through headers. Later headers win on conflict.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.headers
            .extend(headers.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Serializes `body` as the JSON body.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::Serialization`] if `body` cannot be serialized.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, RequestError> {
        self.body = Payload::Json(serde_json::to_value(body)?);
        Ok(self)
    }

    /// Sets a JSON Patch document as the body.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::Serialization`] if a patch value cannot be serialized.
    pub fn patch_body(self, operations: &[JsonPatchOperation]) -> Result<Self, RequestError> {
        self.json_body(operations)
    }

    /// Sets a raw text body.
    pub fn text_body(mut self, body: impl Into<String>) -> Self {
        self.body = Payload::Text(body.into());
        self
    }

    /// Sets a raw binary body, when present.
    pub fn binary_body(mut self, body: Option<Vec<u8>>) -> Self {
        if let Some(body) = body {
            self.body = Payload::Binary(body);
        }
        self
    }

    /// Returns the value supplied for a path placeholder.
    pub fn path_value(&self, name: &str) -> Option<&str> {
        self.path
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the path values in insertion order.
    pub fn path_values(&self) -> &[(String, String)] {
        &self.path
    }

    /// Returns the query pairs in insertion order.
    pub fn query_pairs(&self) -> &[(String, String)] {
        &self.query
    }

    /// Returns the headers in insertion order.
    pub fn header_pairs(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Returns the body.
    pub fn body(&self) -> &Payload {
        &self.body
    }

    pub(crate) fn into_body(self) -> Payload {
        self.body
    }

    /// Checks every required parameter of `endpoint` is present and non-empty.
    ///
    /// Endpoints whose request shape always carries a body (JSON Patch,
    /// JSON array, text, binary) also require one.
    ///
    /// ## Errors
    ///
    /// Returns [`RequestError::MissingRequired`] or
    /// [`RequestError::EmptyRequired`] for the first violation.
    pub fn check_required(&self, endpoint: &Endpoint) -> Result<(), RequestError> {
        for param in endpoint.required_params() {
            let value = match param.location {
                ParamLocation::Path => Presence::from_str(self.path_value(param.name)),
                ParamLocation::Query => Presence::from_str(
                    self.query
                        .iter()
                        .find(|(n, _)| n == param.name)
                        .map(|(_, v)| v.as_str()),
                ),
                ParamLocation::Header => Presence::from_str(
                    self.headers
                        .iter()
                        .rev()
                        .find(|(n, _)| n.eq_ignore_ascii_case(param.name))
                        .map(|(_, v)| v.as_str()),
                ),
                ParamLocation::Body => self.body_field(param.name),
            };

            match value {
                Presence::Missing => {
                    return Err(RequestError::MissingRequired {
                        operation: endpoint.id,
                        field: param.name.to_string(),
                    });
                }
                Presence::Empty => {
                    return Err(RequestError::EmptyRequired {
                        operation: endpoint.id,
                        field: param.name.to_string(),
                    });
                }
                Presence::Set => {}
            }
        }

        let needs_body = endpoint.request.has_body() && !endpoint.request.accepts_body_params();
        if needs_body && self.body.is_none() {
            return Err(RequestError::MissingRequired {
                operation: endpoint.id,
                field: "body".to_string(),
            });
        }

        Ok(())
    }

    fn body_field(&self, name: &str) -> Presence {
        let Payload::Json(Value::Object(map)) = &self.body else {
            return Presence::Missing;
        };
        match map.get(name) {
            None | Some(Value::Null) => Presence::Missing,
            Some(Value::String(s)) if s.is_empty() => Presence::Empty,
            Some(_) => Presence::Set,
        }
    }
}

enum Presence {
    Missing,
    Empty,
    Set,
}

impl Presence {
    fn from_str(value: Option<&str>) -> Self {
        match value {
            None => Self::Missing,
            Some("") => Self::Empty,
            Some(_) => Self::Set,
        }
    }
}
