//! The shared request client every resource call goes through.
//!
//! [`RequestClient`] owns the connection configuration: base URL, default
//! headers, retry policy and transport. Resource clients describe a call with
//! an [`ApiRequest`] and may pass [`RequestOptions`], which are applied last
//! so they win over every default.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use url::Url;

use crate::error::{MergeError, Result};
use crate::http::{HttpHeaders, HttpMethod, HttpRequest, HttpResponse, HttpTransport, header_set};
use crate::params::Query;
use crate::retry::{RetryConfig, is_retryable_status, with_retry};

/// Package name sent in the SDK identification headers.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Package version sent in the SDK identification headers.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the linked account's token.
pub const ACCOUNT_TOKEN_HEADER: &str = "X-Account-Token";

/// Per-call overrides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestOptions {
    /// Replace or add headers (matched case-insensitively).
    pub additional_headers: HttpHeaders,
    /// Replace or add query parameters (matched by key).
    pub additional_query_parameters: Query,
    /// Merged into the top level of the JSON body.
    pub additional_body_parameters: Map<String, Value>,
    /// Act on a different linked account for this call.
    pub account_token: Option<String>,
    pub timeout: Option<Duration>,
    pub max_retries: Option<usize>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.additional_headers.push((name.into(), value.into()));
        self
    }

    #[must_use]
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.additional_query_parameters
            .push((key.into(), value.to_string()));
        self
    }

    #[must_use]
    pub fn body_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.additional_body_parameters
            .insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn account_token(mut self, token: impl Into<String>) -> Self {
        self.account_token = Some(token.into());
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = Some(max_retries);
        self
    }
}

/// Description of one API call relative to the base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest<'a> {
    pub method: HttpMethod,
    /// Slash-separated path such as `ats/v1/candidates`.
    pub path: &'a str,
    /// Path segments appended after `path`, each percent-encoded as a whole.
    pub segments: Vec<&'a str>,
    pub query: Query,
    pub body: Option<Value>,
}

impl<'a> ApiRequest<'a> {
    pub fn new(method: HttpMethod, path: &'a str) -> Self {
        Self {
            method,
            path,
            segments: Vec::new(),
            query: Query::new(),
            body: None,
        }
    }

    pub fn get(path: &'a str) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: &'a str) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: &'a str) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: &'a str) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: &'a str) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    #[must_use]
    pub fn segment(mut self, segment: &'a str) -> Self {
        self.segments.push(segment);
        self
    }

    #[must_use]
    pub fn query(mut self, query: Query) -> Self {
        self.query.extend(query);
        self
    }

    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }
}

fn check_header_value(what: &str, value: &str) -> Result<()> {
    reqwest::header::HeaderValue::from_str(value)
        .map(|_| ())
        .map_err(|_| MergeError::config(format!("{} is not a valid header value", what)))
}

fn check_header_name(name: &str) -> Result<()> {
    reqwest::header::HeaderName::from_bytes(name.as_bytes())
        .map(|_| ())
        .map_err(|_| MergeError::config(format!("{:?} is not a valid header name", name)))
}

/// Connection configuration shared by every resource client.
#[derive(Clone)]
pub struct RequestClient {
    transport: Arc<dyn HttpTransport>,
    base_url: Url,
    headers: HttpHeaders,
    retry: RetryConfig,
    timeout: Option<Duration>,
}

impl std::fmt::Debug for RequestClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                let redacted = k.eq_ignore_ascii_case("authorization")
                    || k.eq_ignore_ascii_case(ACCOUNT_TOKEN_HEADER);
                (k.as_str(), if redacted { "<redacted>" } else { v.as_str() })
            })
            .collect();
        f.debug_struct("RequestClient")
            .field("base_url", &self.base_url.as_str())
            .field("headers", &headers)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl RequestClient {
    /// Create a request client authenticating with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`MergeError::Config`] when the key is empty or cannot be sent
    /// as a header, and [`MergeError::Url`] when `base_url` does not parse.
    pub fn new(base_url: &str, api_key: &str, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(MergeError::config(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }
        if api_key.is_empty() {
            return Err(MergeError::config("API key is empty"));
        }

        let authorization = format!("Bearer {}", api_key);
        check_header_value("API key", &authorization)?;

        let headers = vec![
            ("Authorization".to_string(), authorization),
            ("Accept".to_string(), "application/json".to_string()),
            (
                "User-Agent".to_string(),
                format!("{}/{}", SDK_NAME, SDK_VERSION),
            ),
            ("X-SDK-Name".to_string(), SDK_NAME.to_string()),
            ("X-SDK-Version".to_string(), SDK_VERSION.to_string()),
            ("X-SDK-Language".to_string(), "Rust".to_string()),
        ];

        Ok(Self {
            transport,
            base_url,
            headers,
            retry: RetryConfig::default(),
            timeout: None,
        })
    }

    /// Send `X-Account-Token` with every request.
    pub fn with_account_token(mut self, account_token: &str) -> Result<Self> {
        check_header_value("account token", account_token)?;
        header_set(&mut self.headers, ACCOUNT_TOKEN_HEADER, account_token);
        Ok(self)
    }

    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Default per-request timeout; `None` keeps the transport's own.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn default_headers(&self) -> &HttpHeaders {
        &self.headers
    }

    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Resolve a path, extra segments and query against the base URL.
    pub fn url(&self, path: &str, segments: &[&str], query: &Query) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut parts = url.path_segments_mut().map_err(|_| {
                MergeError::config(format!("base URL cannot carry a path: {}", self.base_url))
            })?;
            parts.pop_if_empty();
            parts.extend(path.split('/').filter(|s| !s.is_empty()));
            parts.extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    fn build(&self, request: ApiRequest<'_>, options: &RequestOptions) -> Result<HttpRequest> {
        if request.segments.iter().any(|segment| segment.is_empty()) {
            return Err(MergeError::config(format!(
                "empty id in request to {}",
                request.path
            )));
        }

        let mut query = request.query;
        if !options.additional_query_parameters.is_empty() {
            query.retain(|(k, _)| {
                !options
                    .additional_query_parameters
                    .iter()
                    .any(|(key, _)| key == k)
            });
            query.extend(options.additional_query_parameters.iter().cloned());
        }
        let url = self.url(request.path, &request.segments, &query)?;

        let body = match (request.body, options.additional_body_parameters.is_empty()) {
            (body, true) => body,
            (None, false) => Some(Value::Object(options.additional_body_parameters.clone())),
            (Some(Value::Object(mut map)), false) => {
                map.extend(options.additional_body_parameters.clone());
                Some(Value::Object(map))
            }
            (Some(other), false) => {
                tracing::debug!("Request body is not an object, ignoring additional body parameters");
                Some(other)
            }
        };

        let mut headers = self.headers.clone();
        if body.is_some() {
            header_set(&mut headers, "Content-Type", "application/json");
        }
        if let Some(ref token) = options.account_token {
            check_header_value("account token", token)?;
            header_set(&mut headers, ACCOUNT_TOKEN_HEADER, token.as_str());
        }
        for (name, value) in &options.additional_headers {
            check_header_name(name)?;
            check_header_value(&format!("header {}", name), value)?;
            header_set(&mut headers, name, value.as_str());
        }

        let body = match body {
            Some(value) => serde_json::to_vec(&value)?,
            None => Vec::new(),
        };

        Ok(HttpRequest {
            method: request.method,
            url: url.to_string(),
            headers,
            body,
            timeout: options.timeout.or(self.timeout),
        })
    }

    /// Send a request, retrying per the retry policy, and fail on non-2xx.
    pub async fn execute(
        &self,
        request: ApiRequest<'_>,
        options: Option<&RequestOptions>,
    ) -> Result<HttpResponse> {
        let defaults = RequestOptions::default();
        let options = options.unwrap_or(&defaults);

        let http_request = self.build(request, options)?;
        let retry = match options.max_retries {
            Some(max_retries) => self.retry.clone().with_max_retries(max_retries),
            None => self.retry.clone(),
        };
        let label = format!("{} {}", http_request.method, http_request.url);
        tracing::debug!("Sending {}", label);

        let transport = &self.transport;
        let response = with_retry(
            || {
                let attempt = http_request.clone();
                async move {
                    match transport.send(attempt).await {
                        Ok(resp) if is_retryable_status(resp.status) => {
                            Err(MergeError::from_response(resp))
                        }
                        Ok(resp) => Ok(resp),
                        Err(e) => Err(MergeError::Http(e)),
                    }
                }
            },
            MergeError::is_retryable,
            retry,
            &label,
        )
        .await?;

        tracing::debug!("{} returned {}", label, response.status);

        if !response.is_success() {
            return Err(MergeError::from_response(response));
        }
        Ok(response)
    }

    /// Send a request and parse the JSON response.
    pub async fn json<T: DeserializeOwned>(
        &self,
        request: ApiRequest<'_>,
        options: Option<&RequestOptions>,
    ) -> Result<T> {
        let response = self.execute(request, options).await?;
        serde_json::from_slice(&response.body).map_err(MergeError::Json)
    }

    /// Send a request whose response body is irrelevant.
    pub async fn empty(
        &self,
        request: ApiRequest<'_>,
        options: Option<&RequestOptions>,
    ) -> Result<()> {
        self.execute(request, options).await.map(|_| ())
    }

    /// Send a request and return the raw response body.
    pub async fn bytes(
        &self,
        request: ApiRequest<'_>,
        options: Option<&RequestOptions>,
    ) -> Result<Vec<u8>> {
        Ok(self.execute(request, options).await?.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpError, MockTransport, header_get};

    const BASE: &str = "https://api.test/api";

    fn client(transport: &MockTransport) -> RequestClient {
        RequestClient::new(BASE, "test-key", Arc::new(transport.clone()))
            .unwrap()
            .with_retry(RetryConfig::new(
                Duration::from_millis(1),
                Duration::from_millis(2),
                2,
            ))
    }

    #[test]
    fn new_sets_default_headers() {
        let transport = MockTransport::new();
        let client = client(&transport).with_account_token("acct").unwrap();
        let headers = client.default_headers();

        assert_eq!(header_get(headers, "authorization"), Some("Bearer test-key"));
        assert_eq!(header_get(headers, "x-account-token"), Some("acct"));
        assert_eq!(header_get(headers, "accept"), Some("application/json"));
        assert_eq!(header_get(headers, "x-sdk-language"), Some("Rust"));
        assert_eq!(header_get(headers, "x-sdk-version"), Some(SDK_VERSION));
    }

    #[test]
    fn new_rejects_unusable_keys() {
        let transport = Arc::new(MockTransport::new());
        let err = RequestClient::new(BASE, "", transport.clone()).unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));

        let err = RequestClient::new(BASE, "bad\nkey", transport.clone()).unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));

        let err = RequestClient::new("not a url", "key", transport).unwrap_err();
        assert!(matches!(err, MergeError::Url(_)));
    }

    #[test]
    fn debug_output_redacts_credentials() {
        let transport = MockTransport::new();
        let client = client(&transport).with_account_token("acct-secret").unwrap();
        let debug = format!("{:?}", client);
        assert!(!debug.contains("test-key"));
        assert!(!debug.contains("acct-secret"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn url_joins_path_segments_and_query() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let url = client
            .url(
                "ats/v1/candidates",
                &["id with/slash"],
                &vec![("expand".to_string(), "applications,tags".to_string())],
            )
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.test/api/ats/v1/candidates/id%20with%2Fslash?expand=applications%2Ctags"
        );

        let trailing = RequestClient::new("https://api.test/api/", "k", Arc::new(transport))
            .unwrap()
            .url("hris/v1/employees", &[], &Query::new())
            .unwrap();
        assert_eq!(trailing.as_str(), "https://api.test/api/hris/v1/employees");
    }

    #[tokio::test]
    async fn options_override_defaults() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/crm/v1/notes"),
            201,
            serde_json::json!({ "ok": true }),
        );
        let client = client(&transport).with_account_token("default").unwrap();

        let options = RequestOptions::new()
            .header("accept", "application/vnd.test+json")
            .query("page_size", 5)
            .body_parameter("remote_user_id", "u-1")
            .account_token("override")
            .timeout(Duration::from_secs(3));

        let request = ApiRequest::post("crm/v1/notes")
            .query(vec![("page_size".to_string(), "100".to_string())])
            .json(&serde_json::json!({ "model": { "content": "hi" } }))
            .unwrap();
        let value: Value = client.json(request, Some(&options)).await.unwrap();
        assert_eq!(value["ok"], true);

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.url, format!("{BASE}/crm/v1/notes?page_size=5"));
        assert_eq!(sent.header("accept"), Some("application/vnd.test+json"));
        assert_eq!(sent.header("x-account-token"), Some("override"));
        assert_eq!(sent.header("content-type"), Some("application/json"));
        assert_eq!(sent.timeout, Some(Duration::from_secs(3)));

        let body: Value = serde_json::from_slice(&sent.body).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "model": { "content": "hi" }, "remote_user_id": "u-1" })
        );
    }

    #[tokio::test]
    async fn body_parameters_without_body_create_one() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Post,
            format!("{BASE}/ats/v1/delete-account"),
            200,
            Value::Null,
        );
        let client = client(&transport);

        client
            .empty(
                ApiRequest::post("ats/v1/delete-account"),
                Some(&RequestOptions::new().body_parameter("reason", "test")),
            )
            .await
            .unwrap();

        let sent = transport.last_request().unwrap();
        assert_eq!(sent.body, br#"{"reason":"test"}"#.to_vec());
    }

    #[tokio::test]
    async fn get_requests_carry_no_body_or_content_type() {
        let transport = MockTransport::new();
        transport.push_json(
            HttpMethod::Get,
            format!("{BASE}/ats/v1/jobs"),
            200,
            serde_json::json!({ "results": [] }),
        );
        let client = client(&transport).with_timeout(Some(Duration::from_secs(9)));

        let _: Value = client.json(ApiRequest::get("ats/v1/jobs"), None).await.unwrap();

        let sent = transport.last_request().unwrap();
        assert!(sent.body.is_empty());
        assert_eq!(sent.header("content-type"), None);
        assert_eq!(sent.timeout, Some(Duration::from_secs(9)));
    }

    #[tokio::test]
    async fn retries_server_errors_then_succeeds() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/hris/v1/employees");
        transport.push_json(HttpMethod::Get, &url, 503, serde_json::json!({}));
        transport.push_error(
            HttpMethod::Get,
            &url,
            HttpError::Transport("connection reset".to_string()),
        );
        transport.push_json(HttpMethod::Get, &url, 200, serde_json::json!({ "results": [] }));
        let client = client(&transport);

        let value: Value = client
            .json(ApiRequest::get("hris/v1/employees"), None)
            .await
            .unwrap();
        assert_eq!(value["results"], serde_json::json!([]));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn gives_up_after_max_retries() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/hris/v1/employees");
        for _ in 0..3 {
            transport.push_json(HttpMethod::Get, &url, 500, serde_json::json!({"e": 1}));
        }
        let client = client(&transport);

        let err = client
            .execute(ApiRequest::get("hris/v1/employees"), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert_eq!(transport.requests().len(), 3);
    }

    #[tokio::test]
    async fn per_call_max_retries_overrides_default() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/hris/v1/employees");
        transport.push_json(HttpMethod::Get, &url, 429, serde_json::json!({}));
        let client = client(&transport);

        let err = client
            .execute(
                ApiRequest::get("hris/v1/employees"),
                Some(&RequestOptions::new().max_retries(0)),
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn client_errors_are_not_retried() {
        let transport = MockTransport::new();
        let url = format!("{BASE}/ats/v1/candidates");
        transport.push_response(
            HttpMethod::Get,
            &url,
            HttpResponse {
                status: 401,
                headers: Vec::new(),
                body: br#"{"detail":"Invalid API key."}"#.to_vec(),
            },
        );
        let client = client(&transport);

        let err = client
            .execute(ApiRequest::get("ats/v1/candidates"), None)
            .await
            .unwrap_err();
        assert!(err.is_unauthorized());
        assert_eq!(err.body(), Some(r#"{"detail":"Invalid API key."}"#));
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn invalid_additional_headers_fail_without_sending() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let bad_value = RequestOptions::new().header("X-Test", "bad\nvalue");
        let err = client
            .execute(ApiRequest::get("ats/v1/candidates"), Some(&bad_value))
            .await
            .unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));
        assert!(!err.is_retryable());

        let bad_name = RequestOptions::new().header("X Test", "value");
        let err = client
            .execute(ApiRequest::get("ats/v1/candidates"), Some(&bad_name))
            .await
            .unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn empty_segment_is_rejected_before_sending() {
        let transport = MockTransport::new();
        let client = client(&transport);

        let err = client
            .execute(ApiRequest::get("ats/v1/candidates").segment(""), None)
            .await
            .unwrap_err();
        assert!(matches!(err, MergeError::Config(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn bytes_returns_raw_body() {
        let transport = MockTransport::new();
        transport.push_response(
            HttpMethod::Get,
            format!("{BASE}/filestorage/v1/files/f-1/download"),
            HttpResponse {
                status: 200,
                headers: vec![("Content-Type".to_string(), "application/pdf".to_string())],
                body: vec![0x25, 0x50, 0x44, 0x46],
            },
        );
        let client = client(&transport);

        let body = client
            .bytes(
                ApiRequest::get("filestorage/v1/files")
                    .segment("f-1")
                    .segment("download"),
                None,
            )
            .await
            .unwrap();
        assert_eq!(body, b"%PDF".to_vec());
    }
}
