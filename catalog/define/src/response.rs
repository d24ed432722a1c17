//! Response body shapes.
//!
//! The response shape tells readers of an endpoint table what the
//! operation returns. The runtime decodes through the operation's
//! `ResponseFormat`; table tests check the two agree.

use serde::{Deserialize, Serialize};

/// Describes the expected response from an endpoint.
///
/// ## Examples
///
/// ```
/// use catalog_define::ResponseBody;
///
/// assert!(ResponseBody::Json.is_json());
/// assert!(ResponseBody::JsonArray.is_json());
/// assert!(ResponseBody::Empty.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResponseBody {
    /// A single JSON object decoded into a typed structure.
    Json,

    /// A JSON array decoded into a `Vec` of typed structures.
    JsonArray,

    /// Text (plain or markdown) returned as a `String`.
    Text,

    /// Raw bytes returned as `Vec<u8>`.
    Binary,

    /// No body; the status code is the result.
    Empty,
}

impl ResponseBody {
    /// Returns true if this is a JSON response.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonArray)
    }

    /// Returns true if this is a binary response.
    pub fn is_binary(&self) -> bool {
        matches!(self, Self::Binary)
    }

    /// Returns true if this is a text response.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text)
    }

    /// Returns true if this is an empty response.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_json_returns_true_for_json_response() {
        let response = ResponseBody::Json;
        assert!(response.is_json());
        assert!(!response.is_binary());
        assert!(!response.is_text());
        assert!(!response.is_empty());
    }

    #[test]
    fn json_array_is_json() {
        assert!(ResponseBody::JsonArray.is_json());
    }

    #[test]
    fn is_binary_returns_true_for_binary_response() {
        let response = ResponseBody::Binary;
        assert!(!response.is_json());
        assert!(response.is_binary());
        assert!(!response.is_text());
        assert!(!response.is_empty());
    }

    #[test]
    fn is_empty_returns_true_for_empty_response() {
        let response = ResponseBody::Empty;
        assert!(!response.is_json());
        assert!(!response.is_binary());
        assert!(!response.is_text());
        assert!(response.is_empty());
    }
}
