//! Request body shapes.
//!
//! The request shape determines how the runtime serializes the body and
//! which `Content-Type` it sends.
//!
//! ## Request Shapes
//!
//! - [`RequestBody::None`] - No body (GET, DELETE and action POSTs)
//! - [`RequestBody::Json`] - A sparse JSON object built from present fields
//! - [`RequestBody::JsonPatch`] - An RFC 6902 operation array
//! - [`RequestBody::JsonArray`] - A bare JSON array (bulk account lists)
//! - [`RequestBody::Text`] - Raw text with the given media type
//! - [`RequestBody::Binary`] - Raw bytes with the given media type

use serde::{Deserialize, Serialize};

use crate::media::MediaType;

/// Describes the request body format for an endpoint.
///
/// ## Examples
///
/// ```
/// use catalog_define::{MediaType, RequestBody};
///
/// assert_eq!(RequestBody::Json.content_type(), Some(MediaType::Json));
/// assert_eq!(RequestBody::JsonPatch.content_type(), Some(MediaType::JsonPatch));
/// assert_eq!(RequestBody::None.content_type(), None);
/// assert!(RequestBody::Json.accepts_body_params());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestBody {
    /// No request body.
    None,

    /// JSON object containing only the fields the caller set.
    Json,

    /// RFC 6902 JSON Patch document.
    JsonPatch,

    /// A JSON array (for example a list of account ids).
    JsonArray,

    /// Raw text body.
    Text(MediaType),

    /// Raw binary body.
    Binary(MediaType),
}

impl RequestBody {
    /// Returns the `Content-Type` this body is sent with, if any.
    pub fn content_type(&self) -> Option<MediaType> {
        match self {
            Self::None => None,
            Self::Json | Self::JsonArray => Some(MediaType::Json),
            Self::JsonPatch => Some(MediaType::JsonPatch),
            Self::Text(media) | Self::Binary(media) => Some(*media),
        }
    }

    /// Returns `true` if the endpoint sends a body.
    pub fn has_body(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Returns `true` if `Body` params make sense for this shape.
    ///
    /// Only a JSON object has top-level keys to declare.
    pub fn accepts_body_params(&self) -> bool {
        matches!(self, Self::Json)
    }
}
