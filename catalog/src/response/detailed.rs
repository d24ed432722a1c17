//! The success envelope returned by every dispatched operation.

use reqwest::header::HeaderMap;

/// A decoded result together with the status and headers it arrived with.
///
/// ## Examples
///
/// ```rust,ignore
/// let response = service.get_offering(options).await?;
/// let etag = response.header("etag");
/// let offering = response.into_result();
/// ```
#[derive(Debug, Clone)]
pub struct DetailedResponse<T> {
    /// HTTP status code (always 2xx).
    pub status: u16,
    /// Raw response headers.
    pub headers: HeaderMap,
    /// The decoded body.
    pub result: T,
}

impl<T> DetailedResponse<T> {
    /// Returns a header value as a string, if present and valid UTF-8.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Consumes the envelope and returns the decoded body.
    pub fn into_result(self) -> T {
        self.result
    }

    /// Maps the decoded body, keeping status and headers.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DetailedResponse<U> {
        DetailedResponse {
            status: self.status,
            headers: self.headers,
            result: f(self.result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.insert("ETag", "\"2-def\"".parse().unwrap());
        let response = DetailedResponse {
            status: 200,
            headers,
            result: 7_u32,
        };
        assert_eq!(response.header("etag"), Some("\"2-def\""));
        assert_eq!(response.header("x-missing"), None);
        assert_eq!(response.map(|n| n * 2).into_result(), 14);
    }
}
