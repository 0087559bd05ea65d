//! Error types for REST calls, form handling and views.

use serde_json::Value;
use thiserror::Error;

use crate::http::ApiResponse;

/// Common result type for REST operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the REST transcoder
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a request the transport could not complete
    #[error("transport error: {0}")]
    Transport(String),
    /// Backend answered with a non-2xx status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response carried no body")]
    EmptyBody,
}

impl ApiError {
    /// Builds a status error, reading the problem+json `detail` or `title`
    pub fn from_response(response: &ApiResponse) -> Self {
        let message = response
            .body
            .as_ref()
            .and_then(problem_message)
            .unwrap_or_default();
        ApiError::Status { status: response.status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

fn problem_message(body: &Value) -> Option<String> {
    ["detail", "title", "message"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

/// Unparseable timestamp text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid timestamp {value:?}: {reason}")]
pub struct TimestampError {
    pub value: String,
    pub reason: String,
}

impl TimestampError {
    pub fn new(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { value: value.into(), reason: reason.into() }
    }
}

/// Client-side form failures; none of these ever reach the backend
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormError {
    #[error("required fields are empty: {}", .0.join(", "))]
    Required(Vec<String>),
    #[error("unknown form control: {0}")]
    UnknownControl(String),
    #[error("form control {0} is read-only")]
    Disabled(String),
    #[error("invalid value {value:?} for {field}")]
    InvalidValue { field: String, value: String },
    #[error(transparent)]
    Timestamp(#[from] TimestampError),
    #[error("form value does not match the entity shape: {0}")]
    Shape(String),
}

/// Errors seen by a view: either the form blocked the action or the call failed
#[derive(Debug, Error)]
pub enum ViewError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Form(#[from] FormError),
}
