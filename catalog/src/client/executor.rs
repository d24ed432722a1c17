//! Request dispatch with tracing instrumentation.
//!
//! This module provides the [`ApiClient`] struct, the single generic
//! execution path every catalog operation goes through.

use std::io::Write;
use std::time::Duration;

use catalog_define::path::substitute_path_params;
use catalog_define::{Endpoint, RestMethod};
use flate2::Compression;
use flate2::write::GzEncoder;
use reqwest::header::{
    ACCEPT, CONTENT_ENCODING, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, RETRY_AFTER,
};
use tracing::{Span, debug, instrument, warn};
use url::Url;

use super::retry::RetryPolicy;
use crate::auth::Authenticator;
use crate::error::{ApiError, ClientError, ConfigError, RequestError};
use crate::operation::Operation;
use crate::request::{Payload, RequestParts};
use crate::response::{DetailedResponse, ResponseFormat};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Header carrying the SDK analytics string.
const ANALYTICS_HEADER: &str = "x-ibmcloud-sdk-analytics";

/// Identifies the SDK in the analytics header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkIdentity {
    /// Service name, e.g. `catalog_management`.
    pub service_name: String,
    /// Service API version, e.g. `V1`.
    pub service_version: String,
}

impl SdkIdentity {
    /// Creates an identity.
    pub fn new(service_name: impl Into<String>, service_version: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: service_version.into(),
        }
    }

    /// The analytics header value for one operation.
    pub fn analytics(&self, operation_id: &str) -> String {
        format!(
            "service_name={};service_version={};operation_id={operation_id}",
            self.service_name, self.service_version
        )
    }
}

/// Builder for configuring an [`ApiClient`].
#[derive(Debug)]
pub struct ApiClientBuilder {
    service_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    authenticator: Authenticator,
    gzip: bool,
    retry: Option<RetryPolicy>,
    user_agent: Option<String>,
    sdk: Option<SdkIdentity>,
}

impl ApiClientBuilder {
    /// Creates a new builder with the specified service URL.
    fn new(service_url: Url) -> Self {
        Self {
            service_url,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
            authenticator: Authenticator::None,
            gzip: false,
            retry: None,
            user_agent: None,
            sdk: None,
        }
    }

    /// Sets the per-attempt request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = ApiClient::builder(service_url)
    ///     .timeout(Duration::from_secs(30))
    ///     .build()?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Adds a default header to all requests.
    ///
    /// ## Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn default_header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, ApiError> {
        let (name, value) = parse_header(name.as_ref(), value.as_ref())?;
        self.default_headers.insert(name, value);
        Ok(self)
    }

    /// Replaces the default headers.
    pub fn default_headers(mut self, headers: HeaderMap) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sets the authenticator.
    pub fn authenticator(mut self, authenticator: Authenticator) -> Self {
        self.authenticator = authenticator;
        self
    }

    /// Enables gzip compression of request bodies.
    pub fn gzip(mut self, enabled: bool) -> Self {
        self.gzip = enabled;
        self
    }

    /// Enables retries with the given policy.
    pub fn retries(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    /// Sets the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sends the analytics header with this identity on every request.
    pub fn sdk_identity(mut self, identity: SdkIdentity) -> Self {
        self.sdk = Some(identity);
        self
    }

    /// Builds the [`ApiClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the service URL cannot carry a path, or if the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<ApiClient, ApiError> {
        ensure_base(&self.service_url)?;

        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .gzip(true)
            .pool_max_idle_per_host(10);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }
        let client = builder.build().map_err(ClientError::Request)?;

        Ok(ApiClient {
            client,
            service_url: self.service_url,
            timeout: self.timeout,
            default_headers: self.default_headers,
            authenticator: self.authenticator,
            gzip: self.gzip,
            retry: self.retry,
            sdk: self.sdk,
        })
    }
}

/// Async dispatcher for catalog operations.
///
/// The client wraps `reqwest::Client` with connection pooling and executes
/// any [`Operation`] through [`ApiClient::call`]. It is `Send + Sync`; share
/// it by reference or behind an `Arc`. The setters take `&mut self`, so
/// configuration cannot change while a call borrows the client.
///
/// ## Examples
///
/// ```rust,ignore
/// use catalog_client::{ApiClient, Authenticator};
/// use url::Url;
///
/// let client = ApiClient::builder(Url::parse("https://cm.example.com/api/v1-beta")?)
///     .authenticator(Authenticator::BearerToken(token))
///     .build()?;
///
/// let response = client.call(GetCatalogOptions::new("my-catalog")).await?;
/// println!("{} -> {:?}", response.status, response.result.label);
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    service_url: Url,
    timeout: Duration,
    default_headers: HeaderMap,
    authenticator: Authenticator,
    gzip: bool,
    retry: Option<RetryPolicy>,
    sdk: Option<SdkIdentity>,
}

impl ApiClient {
    /// Creates a new builder for configuring an API client.
    ///
    /// ## Arguments
    ///
    /// * `service_url` - The base URL every endpoint path is appended to.
    pub fn builder(service_url: Url) -> ApiClientBuilder {
        ApiClientBuilder::new(service_url)
    }

    /// Creates a new API client with default settings.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(service_url: Url) -> Result<Self, ApiError> {
        Self::builder(service_url).build()
    }

    /// Returns the service URL.
    pub fn service_url(&self) -> &Url {
        &self.service_url
    }

    /// Replaces the service URL.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError`] if `url` does not parse or cannot carry a path.
    pub fn set_service_url(&mut self, url: &str) -> Result<(), ConfigError> {
        let url = Url::parse(url)?;
        ensure_base(&url)?;
        self.service_url = url;
        Ok(())
    }

    /// Returns the per-attempt timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the default headers.
    pub fn default_headers(&self) -> &HeaderMap {
        &self.default_headers
    }

    /// Replaces the headers sent with every request.
    pub fn set_default_headers(&mut self, headers: HeaderMap) {
        self.default_headers = headers;
    }

    /// Returns `true` if request bodies are gzip-compressed.
    pub fn gzip_compression_enabled(&self) -> bool {
        self.gzip
    }

    /// Enables or disables gzip compression of request bodies.
    pub fn set_enable_gzip_compression(&mut self, enabled: bool) {
        self.gzip = enabled;
    }

    /// Returns the retry policy, if retries are enabled.
    pub fn retry_policy(&self) -> Option<RetryPolicy> {
        self.retry
    }

    /// Enables retries.
    pub fn enable_retries(&mut self, max_retries: u32, max_interval: Duration) {
        self.retry = Some(RetryPolicy::new(max_retries, max_interval));
    }

    /// Disables retries; each call sends exactly one request.
    pub fn disable_retries(&mut self) {
        self.retry = None;
    }

    /// Returns the authenticator.
    pub fn authenticator(&self) -> &Authenticator {
        &self.authenticator
    }

    /// Replaces the authenticator.
    pub fn set_authenticator(&mut self, authenticator: Authenticator) {
        self.authenticator = authenticator;
    }

    /// Dispatches one operation.
    ///
    /// Required parameters are checked against the operation's descriptor
    /// before anything is sent. On a 2xx response the body is decoded with
    /// the operation's [`ResponseFormat`].
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - A required input is missing or empty ([`RequestError`], nothing sent)
    /// - Credentials are missing ([`AuthError`](crate::AuthError), nothing sent)
    /// - The request fails (network, timeout)
    /// - The server returns a non-success status code
    /// - The response cannot be decoded
    #[instrument(
        name = "api_request",
        skip(self, operation),
        fields(
            operation = O::ENDPOINT.id,
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn call<O>(
        &self,
        operation: O,
    ) -> Result<DetailedResponse<<O::Format as ResponseFormat>::Output>, ApiError>
    where
        O: Operation,
    {
        let endpoint = O::ENDPOINT;
        Span::current().record("http.method", endpoint.method.to_string().as_str());

        let parts = operation
            .into_parts()
            .and_then(|parts| parts.check_required(endpoint).map(|()| parts))
            .inspect_err(|e| debug!(error = %e, "request rejected before sending"))?;

        let url = self.resolve_url(endpoint, &parts)?;
        Span::current().record("http.url", url.as_str());

        let request = self.build_request(endpoint, url, parts)?;
        let response = self.send_with_retries(endpoint, request).await?;

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);
        let headers = response.headers().clone();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(ClientError::HttpStatus {
                status: status_code,
                message,
                headers,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.bytes().await.map_err(ClientError::Request)?;
        let result = O::Format::parse(body).await?;

        Ok(DetailedResponse {
            status: status_code,
            headers,
            result,
        })
    }

    /// Resolves the endpoint path against the service URL.
    ///
    /// Each path segment is percent-encoded after substitution, so values
    /// containing `/` or `?` stay inside their segment.
    fn resolve_url(&self, endpoint: &Endpoint, parts: &RequestParts) -> Result<Url, ApiError> {
        if let Some(name) = endpoint
            .path_params()
            .into_iter()
            .find(|name| parts.path_value(name).is_none())
        {
            return Err(RequestError::UnresolvedPathParam {
                operation: endpoint.id,
                name: name.to_string(),
            }
            .into());
        }

        let values: Vec<(&str, &str)> = parts
            .path_values()
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
            .collect();

        let mut url = self.service_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ConfigError::UnsupportedServiceUrl(self.service_url.to_string()))?;
            segments.pop_if_empty();
            for segment in endpoint.path.split('/').filter(|s| !s.is_empty()) {
                segments.push(&substitute_path_params(segment, &values));
            }
        }

        if !parts.query_pairs().is_empty() {
            let mut query = url.query_pairs_mut();
            for (name, value) in parts.query_pairs() {
                query.append_pair(name, value);
            }
        }

        Ok(url)
    }

    /// Builds the transport request: headers, body, compression, credentials.
    fn build_request(
        &self,
        endpoint: &Endpoint,
        url: Url,
        parts: RequestParts,
    ) -> Result<reqwest::Request, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(sdk) = &self.sdk {
            let (name, value) = parse_header(ANALYTICS_HEADER, &sdk.analytics(endpoint.id))?;
            headers.insert(name, value);
        }
        headers.extend(self.default_headers.clone());
        if let Some(accept) = endpoint.accept {
            headers.insert(ACCEPT, HeaderValue::from_static(accept.as_str()));
        }
        for (name, value) in parts.header_pairs() {
            let (name, value) = parse_header(name, value)?;
            headers.insert(name, value);
        }

        let body = match parts.into_body() {
            Payload::None => None,
            Payload::Json(value) => Some(serde_json::to_vec(&value).map_err(RequestError::from)?),
            Payload::Text(text) => Some(text.into_bytes()),
            Payload::Binary(bytes) => Some(bytes),
        };

        let body = match body {
            Some(body) => {
                if let Some(content_type) = endpoint.content_type() {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type.as_str()));
                }
                if self.gzip {
                    headers.insert(CONTENT_ENCODING, HeaderValue::from_static("gzip"));
                    Some(gzip(&body)?)
                } else {
                    Some(body)
                }
            }
            None => None,
        };

        let mut request = self
            .client
            .request(http_method(endpoint.method), url)
            .headers(headers);
        if let Some(body) = body {
            request = request.body(body);
        }
        let request = self.authenticator.apply(request)?;

        Ok(request.build().map_err(ClientError::Request)?)
    }

    /// Sends a request, retrying transient failures when a policy is set.
    async fn send_with_retries(
        &self,
        endpoint: &Endpoint,
        request: reqwest::Request,
    ) -> Result<reqwest::Response, ClientError> {
        let Some(policy) = self.retry else {
            return self.send_once(request).await;
        };

        let mut attempt = 0;
        loop {
            let Some(current) = request.try_clone() else {
                return self.send_once(request).await;
            };

            let outcome = self.send_once(current).await;
            if attempt >= policy.max_retries {
                return outcome;
            }

            let delay = match &outcome {
                Ok(response) if RetryPolicy::should_retry_status(response.status().as_u16()) => {
                    policy.delay(attempt, response.headers().get(RETRY_AFTER))
                }
                Err(e) if e.is_retryable() => policy.backoff(attempt),
                _ => return outcome,
            };

            attempt += 1;
            warn!(
                operation = endpoint.id,
                attempt,
                max_retries = policy.max_retries,
                delay_ms = delay.as_millis() as u64,
                "retrying request"
            );
            tokio::time::sleep(delay).await;
        }
    }

    async fn send_once(&self, request: reqwest::Request) -> Result<reqwest::Response, ClientError> {
        self.client.execute(request).await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Timeout {
                    duration_ms: self.timeout.as_millis() as u64,
                }
            } else {
                ClientError::Request(e)
            }
        })
    }
}

fn ensure_base(url: &Url) -> Result<(), ConfigError> {
    if url.cannot_be_a_base() {
        return Err(ConfigError::UnsupportedServiceUrl(url.to_string()));
    }
    Ok(())
}

fn parse_header(name: &str, value: &str) -> Result<(HeaderName, HeaderValue), RequestError> {
    let invalid = || RequestError::InvalidHeader {
        name: name.to_string(),
    };
    let header_name = HeaderName::try_from(name).map_err(|_| invalid())?;
    let header_value = HeaderValue::try_from(value).map_err(|_| invalid())?;
    Ok((header_name, header_value))
}

fn gzip(body: &[u8]) -> Result<Vec<u8>, ClientError> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(body).map_err(ClientError::Compression)?;
    encoder.finish().map_err(ClientError::Compression)
}

fn http_method(method: RestMethod) -> reqwest::Method {
    match method {
        RestMethod::Get => reqwest::Method::GET,
        RestMethod::Post => reqwest::Method::POST,
        RestMethod::Put => reqwest::Method::PUT,
        RestMethod::Patch => reqwest::Method::PATCH,
        RestMethod::Delete => reqwest::Method::DELETE,
        RestMethod::Head => reqwest::Method::HEAD,
        RestMethod::Options => reqwest::Method::OPTIONS,
    }
}
