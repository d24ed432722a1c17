//! Media types negotiated by the catalog API.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// A content type used in `Accept` or `Content-Type` headers.
///
/// ## Examples
///
/// ```
/// use catalog_define::MediaType;
///
/// assert_eq!(MediaType::JsonPatch.as_str(), "application/json-patch+json");
/// assert_eq!(MediaType::Markdown.to_string(), "text/markdown");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
pub enum MediaType {
    /// `application/json`
    #[strum(serialize = "application/json")]
    #[serde(rename = "application/json")]
    Json,
    /// `application/json-patch+json` (RFC 6902 documents)
    #[strum(serialize = "application/json-patch+json")]
    #[serde(rename = "application/json-patch+json")]
    JsonPatch,
    /// `text/plain`
    #[strum(serialize = "text/plain")]
    #[serde(rename = "text/plain")]
    PlainText,
    /// `text/markdown`
    #[strum(serialize = "text/markdown")]
    #[serde(rename = "text/markdown")]
    Markdown,
    /// `application/yaml`
    #[strum(serialize = "application/yaml")]
    #[serde(rename = "application/yaml")]
    Yaml,
    /// `application/x-gzip`
    #[strum(serialize = "application/x-gzip")]
    #[serde(rename = "application/x-gzip")]
    Gzip,
    /// `application/octet-stream`
    #[strum(serialize = "application/octet-stream")]
    #[serde(rename = "application/octet-stream")]
    OctetStream,
    /// `*/*`
    #[strum(serialize = "*/*")]
    #[serde(rename = "*/*")]
    Any,
}

impl MediaType {
    /// Returns the header value for this media type.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::JsonPatch => "application/json-patch+json",
            Self::PlainText => "text/plain",
            Self::Markdown => "text/markdown",
            Self::Yaml => "application/yaml",
            Self::Gzip => "application/x-gzip",
            Self::OctetStream => "application/octet-stream",
            Self::Any => "*/*",
        }
    }

    /// Returns `true` for JSON-family media types.
    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json | Self::JsonPatch)
    }

    /// Returns `true` for textual media types.
    pub fn is_text(&self) -> bool {
        matches!(self, Self::PlainText | Self::Markdown | Self::Yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn display_matches_as_str() {
        for media in MediaType::iter() {
            assert_eq!(media.to_string(), media.as_str());
        }
    }

    #[test]
    fn parse_from_header_value() {
        assert_eq!(
            MediaType::from_str("application/json").unwrap(),
            MediaType::Json
        );
        assert_eq!(
            MediaType::from_str("application/x-gzip").unwrap(),
            MediaType::Gzip
        );
        assert!(MediaType::from_str("image/png").is_err());
    }

    #[test]
    fn serde_uses_header_value() {
        let json = serde_json::to_string(&MediaType::Yaml).unwrap();
        assert_eq!(json, "\"application/yaml\"");
    }

    #[test]
    fn classification() {
        assert!(MediaType::JsonPatch.is_json());
        assert!(MediaType::Markdown.is_text());
        assert!(!MediaType::OctetStream.is_text());
        assert!(!MediaType::Gzip.is_json());
    }
}
