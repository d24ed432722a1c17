//! Response format trait and implementations.
//!
//! The [`ResponseFormat`] trait defines how to parse HTTP responses into
//! typed values. Each response shape declared by an endpoint has one
//! implementation here.

use std::future::Future;
use std::marker::PhantomData;

use catalog_define::ResponseBody;
use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// Each format implements its own parsing logic, transforming an HTTP
/// response body into a typed output value.
///
/// ## Examples
///
/// ```rust,ignore
/// use catalog_client::response::{ResponseFormat, JsonFormat};
///
/// // The format type encodes both the parsing strategy and output type
/// type CatalogResponse = JsonFormat<Catalog>;
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send + Sync;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// The endpoint response shape this format decodes.
    fn shape() -> ResponseBody;
}

/// JSON object response format with typed deserialization.
///
/// Unknown fields are ignored and absent fields decode to `None`, as
/// governed by `T`'s serde attributes.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        parse_json(&body)
    }

    fn shape() -> ResponseBody {
        ResponseBody::Json
    }
}

/// JSON array response format.
///
/// Decodes a top-level JSON array into `Vec<T>`.
#[derive(Debug, Clone, Copy)]
pub struct JsonArrayFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonArrayFormat<T> {
    type Output = Vec<T>;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        parse_json(&body)
    }

    fn shape() -> ResponseBody {
        ResponseBody::JsonArray
    }
}

fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ValidationError::EmptyBody);
    }
    serde_json::from_slice(body).map_err(ValidationError::JsonParse)
}

/// Text response format (plain text or markdown).
///
/// Returns the response body as a UTF-8 string.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextFormat;

impl ResponseFormat for TextFormat {
    type Output = String;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        String::from_utf8(body.to_vec()).map_err(|e| ValidationError::ContentTypeMismatch {
            expected: "valid UTF-8 text".to_string(),
            actual: format!("invalid UTF-8: {e}"),
        })
    }

    fn shape() -> ResponseBody {
        ResponseBody::Text
    }
}

/// Binary response format.
///
/// Returns the raw response body bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryFormat;

impl ResponseFormat for BinaryFormat {
    type Output = Vec<u8>;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(body.to_vec())
    }

    fn shape() -> ResponseBody {
        ResponseBody::Binary
    }
}

/// Empty response format.
///
/// Any body the server sends is discarded; success is the status code.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    async fn parse(_body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(())
    }

    fn shape() -> ResponseBody {
        ResponseBody::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Catalog {
        id: Option<String>,
        label: Option<String>,
        tags: Option<Vec<String>>,
    }

    #[tokio::test]
    async fn json_ignores_unknown_and_leaves_absent_unset() {
        let body = Bytes::from_static(br#"{"id":"123","tags":["x"],"extra":true}"#);
        let catalog = JsonFormat::<Catalog>::parse(body).await.unwrap();
        assert_eq!(catalog.id.as_deref(), Some("123"));
        assert_eq!(catalog.tags, Some(vec!["x".to_string()]));
        assert!(catalog.label.is_none());
    }

    #[tokio::test]
    async fn json_empty_body_is_an_error() {
        let err = JsonFormat::<Catalog>::parse(Bytes::new()).await.unwrap_err();
        assert!(matches!(err, ValidationError::EmptyBody));

        let err = JsonFormat::<Catalog>::parse(Bytes::from_static(b"  \n"))
            .await
            .unwrap_err();
        assert!(matches!(err, ValidationError::EmptyBody));
    }

    #[tokio::test]
    async fn json_malformed_body_is_parse_error() {
        let err = JsonFormat::<Catalog>::parse(Bytes::from_static(b"{\"id\":"))
            .await
            .unwrap_err();
        assert!(err.is_parse_error());
    }

    #[tokio::test]
    async fn json_array_decodes_vec() {
        let body = Bytes::from_static(br#"[{"id":"a"},{"id":"b"}]"#);
        let items = JsonArrayFormat::<Catalog>::parse(body).await.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id.as_deref(), Some("b"));
    }

    #[tokio::test]
    async fn text_rejects_invalid_utf8() {
        let err = TextFormat::parse(Bytes::from_static(&[0xff, 0xfe]))
            .await
            .unwrap_err();
        assert!(err.is_format_mismatch());

        let text = TextFormat::parse(Bytes::from_static(b"# About")).await.unwrap();
        assert_eq!(text, "# About");
    }

    #[tokio::test]
    async fn binary_and_empty() {
        let bytes = BinaryFormat::parse(Bytes::from_static(&[1, 2, 3])).await.unwrap();
        assert_eq!(bytes, vec![1, 2, 3]);
        EmptyFormat::parse(Bytes::from_static(b"ignored")).await.unwrap();
    }

    #[test]
    fn shapes_match_response_bodies() {
        assert_eq!(JsonFormat::<Catalog>::shape(), ResponseBody::Json);
        assert_eq!(JsonArrayFormat::<Catalog>::shape(), ResponseBody::JsonArray);
        assert_eq!(TextFormat::shape(), ResponseBody::Text);
        assert_eq!(BinaryFormat::shape(), ResponseBody::Binary);
        assert_eq!(EmptyFormat::shape(), ResponseBody::Empty);
    }
}
