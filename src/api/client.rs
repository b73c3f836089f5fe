//
//  postman-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Transport for the Postman API
//!
//! This module provides the single point of HTTP interaction for every
//! resource client. Requests are built in two steps:
//!
//! 1. [`RestClient::new_request`] serializes an optional payload and returns an
//!    [`ApiRequest`] with no headers set.
//! 2. [`RestClient::execute`] (or [`execute_raw`](RestClient::execute_raw) /
//!    [`execute_discard`](RestClient::execute_discard)) applies, in order, the
//!    workspace query parameter, the `x-api-key` header, `Accept`, and
//!    `Content-Type`, sends the request, and classifies the status code.
//!
//! ## Features
//!
//! - API-key header injection on every call
//! - Optional workspace scoping through [`RequestOptions`]
//! - Dual-shape error normalization (see [`decode_error_body`])
//! - Cooperative cancellation through [`CancellationToken`]
//! - Best-effort diagnostic dump of every exchange to a caller-supplied writer
//!
//! Nothing is retried here. Each `execute*` call is exactly one round trip.

use std::fmt;
use std::fmt::Write as _;
use std::io;
use std::io::Write as _;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Request, StatusCode, Url, Version};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::value::RawValue;
use tokio_util::sync::CancellationToken;

use super::common::{decode_error_body, PostmanError, RequestOptions, Result};

/// Base URL of the public Postman API.
pub const DEFAULT_BASE_URL: &str = "https://api.getpostman.com";

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Typed "no payload" marker for [`RestClient::new_request`].
pub const NO_BODY: Option<&()> = None;

/// Serializes a request body once, for the `*_json` resource methods.
pub fn raw_body<T: Serialize + ?Sized>(value: &T) -> Result<Box<RawValue>> {
    serde_json::value::to_raw_value(value).map_err(PostmanError::Encoding)
}

type DebugSink = Arc<Mutex<Box<dyn io::Write + Send>>>;

/// The HTTP transport shared by all resource clients.
///
/// Holds the base URL, the API key, the underlying `reqwest` client, and an
/// optional diagnostic sink. It is immutable after construction, `Send + Sync`,
/// and cheap to clone: clones share the connection pool and the sink.
///
/// # Example
///
/// ```rust,no_run
/// use postman_client::api::{RestClient, RequestOptions, NO_BODY};
/// use reqwest::Method;
///
/// # async fn example() -> postman_client::api::Result<()> {
/// let client = RestClient::new("PMAK-your-key")?;
/// let request = client.new_request(Method::GET, &client.url("/me"), NO_BODY)?;
/// let me: serde_json::Value = client.execute(request, &RequestOptions::new()).await?;
/// println!("{me}");
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RestClient {
    /// The underlying HTTP client
    http: Client,
    /// The API key, pre-validated and marked sensitive
    api_key: HeaderValue,
    /// Base URL without a trailing slash
    base_url: String,
    /// Optional diagnostic writer
    debug_log: Option<DebugSink>,
}

impl fmt::Debug for RestClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RestClient")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("debug_log", &self.debug_log.is_some())
            .finish()
    }
}

/// Builder for [`RestClient`].
pub struct RestClientBuilder {
    api_key: String,
    base_url: String,
    http: Option<Client>,
    timeout: Option<Duration>,
    debug_log: Option<DebugSink>,
}

impl RestClientBuilder {
    /// Overrides the base URL (trailing slashes are trimmed).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Uses an existing `reqwest::Client`. Its own timeout and user agent apply;
    /// [`timeout`](Self::timeout) is ignored when this is set.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http = Some(client);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sends a dump of every request/response pair to `writer`.
    ///
    /// Writes are best-effort; a failing writer never changes a call's result.
    pub fn debug_log<W>(mut self, writer: W) -> Self
    where
        W: io::Write + Send + 'static,
    {
        self.debug_log = Some(Arc::new(Mutex::new(Box::new(writer))));
        self
    }

    pub fn build(self) -> Result<RestClient> {
        let mut api_key = HeaderValue::from_str(&self.api_key).map_err(PostmanError::InvalidHeader)?;
        api_key.set_sensitive(true);

        let http = match self.http {
            Some(client) => client,
            None => {
                let mut builder =
                    Client::builder().user_agent(format!("postman-client/{}", crate::VERSION));
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build().map_err(PostmanError::Transport)?
            }
        };

        Ok(RestClient {
            http,
            api_key,
            base_url: self.base_url,
            debug_log: self.debug_log,
        })
    }
}

impl RestClient {
    /// Creates a client for the public API with default settings.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::builder(api_key).build()
    }

    pub fn builder(api_key: impl Into<String>) -> RestClientBuilder {
        RestClientBuilder {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http: None,
            timeout: None,
            debug_log: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins the base URL with an API path such as `/collections/{id}`.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Builds a request, serializing `payload` as the JSON body when present.
    ///
    /// No headers are set here; [`execute`](Self::execute) applies them.
    ///
    /// # Errors
    ///
    /// - `EncodingError` if the URL is invalid or the payload cannot be
    ///   serialized (for example a map whose keys are not strings).
    pub fn new_request<B>(&self, method: Method, url: &str, payload: Option<&B>) -> Result<ApiRequest>
    where
        B: Serialize + ?Sized,
    {
        let parsed = Url::parse(url).map_err(|source| PostmanError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let mut request = Request::new(method, parsed);

        if let Some(payload) = payload {
            let body = serde_json::to_vec(payload).map_err(PostmanError::Encoding)?;
            *request.body_mut() = Some(body.into());
        }

        Ok(ApiRequest {
            inner: request,
            cancel: None,
        })
    }

    /// Builds a multipart request.
    ///
    /// The multipart encoder's own `Content-Type` header is discarded; pass
    /// `multipart_content_type(&form)` through [`RequestOptions`] instead.
    pub fn new_multipart_request(&self, method: Method, url: &str, form: Form) -> Result<ApiRequest> {
        let parsed = Url::parse(url).map_err(|source| PostmanError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        let mut request = self
            .http
            .request(method, parsed)
            .multipart(form)
            .build()
            .map_err(PostmanError::Transport)?;
        request.headers_mut().clear();

        Ok(ApiRequest {
            inner: request,
            cancel: None,
        })
    }

    /// Sends the request and decodes a 2xx body into `T`.
    ///
    /// # Errors
    ///
    /// - `TransportError` on network failure or cancellation
    /// - `DecodingError` if the 2xx body is not valid JSON for `T`
    /// - `MalformedErrorError` if a non-2xx body matches neither error shape
    /// - [`PostmanError::Api`] for a normalized remote error
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
        options: &RequestOptions,
    ) -> Result<T> {
        let body = self.dispatch(request, options).await?;
        serde_json::from_slice(&body).map_err(PostmanError::Decoding)
    }

    /// Sends the request and returns the undecoded 2xx body.
    pub async fn execute_raw(&self, request: ApiRequest, options: &RequestOptions) -> Result<Bytes> {
        self.dispatch(request, options).await
    }

    /// Sends the request and discards the 2xx body after status classification.
    pub async fn execute_discard(&self, request: ApiRequest, options: &RequestOptions) -> Result<()> {
        self.dispatch(request, options).await.map(|_| ())
    }

    async fn dispatch(&self, request: ApiRequest, options: &RequestOptions) -> Result<Bytes> {
        let ApiRequest {
            inner: mut request,
            cancel,
        } = request;

        if let Some(workspace) = options.workspace() {
            set_unique_query(request.url_mut(), "workspace", workspace);
        }

        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), self.api_key.clone());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_str(options.content_type()).map_err(PostmanError::InvalidHeader)?,
        );

        let method = request.method().clone();
        let url = request.url().clone();
        let started = Instant::now();
        tracing::debug!(%method, %url, "sending request");

        let response = match self.send(request, cancel.as_ref()).await {
            Ok(response) => response,
            Err(err) => {
                tracing::debug!(%method, %url, error = %err, "request failed");
                self.log_exchange(&method, &url, &format!("<error: {err}>"));
                return Err(err);
            }
        };

        tracing::debug!(
            %method,
            %url,
            status = response.status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "received response"
        );
        self.log_exchange(&method, &url, &response.dump());

        if !response.status.is_success() {
            let status = response.status.as_u16();
            return Err(match decode_error_body(&response.body) {
                Ok(error) => PostmanError::Api { status, error },
                Err(reason) => PostmanError::MalformedError { status, reason },
            });
        }

        Ok(response.body)
    }

    async fn send(
        &self,
        request: Request,
        cancel: Option<&CancellationToken>,
    ) -> Result<RawResponse> {
        let exchange = async {
            let response = self.http.execute(request).await?;
            let status = response.status();
            let version = response.version();
            let headers = response.headers().clone();
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>(RawResponse {
                status,
                version,
                headers,
                body,
            })
        };

        let result = match cancel {
            Some(token) => tokio::select! {
                biased;
                _ = token.cancelled() => return Err(PostmanError::Cancelled),
                result = exchange => result,
            },
            None => exchange.await,
        };

        result.map_err(PostmanError::Transport)
    }

    fn log_exchange(&self, method: &Method, url: &Url, response: &str) {
        let Some(sink) = &self.debug_log else {
            return;
        };
        if let Ok(mut writer) = sink.lock() {
            let _ = write!(writer, "Request: {method} {url}\nResponse: {response}\n");
            let _ = writer.flush();
        }
    }
}

/// A request built by [`RestClient::new_request`], not yet sent.
#[derive(Debug)]
pub struct ApiRequest {
    inner: Request,
    cancel: Option<CancellationToken>,
}

impl ApiRequest {
    /// Associates a cancellation token; firing it aborts the call with
    /// [`PostmanError::Cancelled`].
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Appends a query parameter.
    pub fn query(mut self, key: &str, value: impl AsRef<str>) -> Self {
        self.inner
            .url_mut()
            .query_pairs_mut()
            .append_pair(key, value.as_ref());
        self
    }

    /// Appends a query parameter only when `value` is present.
    pub fn query_opt<V: ToString>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value.to_string()),
            None => self,
        }
    }

    pub fn method(&self) -> &Method {
        self.inner.method()
    }

    pub fn url(&self) -> &Url {
        self.inner.url()
    }

    pub fn headers(&self) -> &HeaderMap {
        self.inner.headers()
    }

    /// The buffered body, if any. Multipart bodies are streamed and return `None`.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        self.inner.body().and_then(|body| body.as_bytes())
    }

    pub fn is_cancellable(&self) -> bool {
        self.cancel.is_some()
    }
}

/// `Content-Type` value for a multipart form, including its boundary.
pub fn multipart_content_type(form: &Form) -> String {
    format!("multipart/form-data; boundary={}", form.boundary())
}

struct RawResponse {
    status: StatusCode,
    version: Version,
    headers: HeaderMap,
    body: Bytes,
}

impl RawResponse {
    fn dump(&self) -> String {
        let mut out = format!("{:?} {}\r\n", self.version, self.status);
        for (name, value) in &self.headers {
            let _ = write!(out, "{}: {}\r\n", name, String::from_utf8_lossy(value.as_bytes()));
        }
        out.push_str("\r\n");
        out.push_str(&String::from_utf8_lossy(&self.body));
        out
    }
}

/// Replaces every `key` pair in the query string with a single `key=value`.
fn set_unique_query(url: &mut Url, key: &str, value: &str) {
    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != key)
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    let mut pairs = url.query_pairs_mut();
    pairs.clear();
    pairs.extend_pairs(retained);
    pairs.append_pair(key, value);
}
