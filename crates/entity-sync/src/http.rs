//! HTTP Client Abstraction
//!
//! The transcoder talks to the backend only through `HttpClient`, so tests
//! can swap the network for canned responses.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub use reqwest::Method;

/// Header carrying the total row count of a paginated query
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";

/// A single REST call
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self { method, url: url.into(), query: Vec::new(), body: None }
    }

    pub fn with_query(mut self, query: Vec<(String, String)>) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// First value of a query parameter
    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }
}

/// Status plus decoded JSON body; an empty or `null` body is `None`
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub total_count: Option<u64>,
    pub body: Option<Value>,
}

impl ApiResponse {
    pub fn ok(body: Value) -> Self {
        Self::with_body(200, body)
    }

    pub fn with_body(status: u16, body: Value) -> Self {
        let body = if body.is_null() { None } else { Some(body) };
        Self { status, total_count: None, body }
    }

    pub fn empty(status: u16) -> Self {
        Self { status, total_count: None, body: None }
    }

    pub fn with_total_count(mut self, total: u64) -> Self {
        self.total_count = Some(total);
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Transport collaborator used by `EntityService`
///
/// Futures are not required to be `Send`: calls run on the single UI task.
#[async_trait(?Send)]
pub trait HttpClient {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse>;
}

/// `reqwest`-backed client (native and wasm32)
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    client: reqwest::Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait(?Send)]
impl HttpClient for ReqwestClient {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut builder = self.client.request(request.method, &request.url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let total_count = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse().ok());
        let bytes = response.bytes().await?;

        let success = (200..300).contains(&status);
        let body = parse_body(&bytes, success)?;
        Ok(ApiResponse { status, total_count, body })
    }
}

/// Error bodies that are not JSON (proxy pages etc.) are dropped instead of
/// masking the status.
fn parse_body(bytes: &[u8], strict: bool) -> ApiResult<Option<Value>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Null) => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(e) if strict => Err(ApiError::Decode(e)),
        Err(_) => Ok(None),
    }
}
