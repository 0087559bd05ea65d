//! Test Doubles
//!
//! `MockHttpClient` stands in for the backend: queue the replies, run the
//! code under test, then inspect what was sent.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::http::{ApiRequest, ApiResponse, HttpClient, Method};

#[derive(Debug, Clone)]
enum Reply {
    Respond(ApiResponse),
    Fail(String),
}

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Reply>,
    requests: Vec<ApiRequest>,
}

/// Scripted `HttpClient`; clones share the same script and request log
#[derive(Debug, Clone, Default)]
pub struct MockHttpClient {
    state: Rc<RefCell<MockState>>,
}

impl MockHttpClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, response: ApiResponse) -> &Self {
        self.state.borrow_mut().replies.push_back(Reply::Respond(response));
        self
    }

    /// 200 with a JSON body
    pub fn respond_json(&self, body: Value) -> &Self {
        self.respond(ApiResponse::ok(body))
    }

    /// Status only, empty body
    pub fn respond_status(&self, status: u16) -> &Self {
        self.respond(ApiResponse::empty(status))
    }

    /// Next call fails at the transport level
    pub fn fail(&self, message: &str) -> &Self {
        self.state.borrow_mut().replies.push_back(Reply::Fail(message.to_string()));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.borrow().requests.len()
    }

    /// The single request sent with `method`
    ///
    /// # Panics
    /// When zero or several requests used that method.
    pub fn expect_one(&self, method: Method) -> ApiRequest {
        let matching: Vec<ApiRequest> = self
            .state
            .borrow()
            .requests
            .iter()
            .filter(|request| request.method == method)
            .cloned()
            .collect();
        assert_eq!(matching.len(), 1, "expected one {} request, found {:?}", method, matching);
        matching.into_iter().next().unwrap()
    }

    /// # Panics
    /// When queued replies were never consumed.
    pub fn verify(&self) {
        let pending = self.state.borrow().replies.len();
        assert_eq!(pending, 0, "{} queued replies were never requested", pending);
    }
}

#[async_trait(?Send)]
impl HttpClient for MockHttpClient {
    async fn execute(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        let mut state = self.state.borrow_mut();
        let reply = state.replies.pop_front();
        let description = format!("{} {}", request.method, request.url);
        state.requests.push(request);
        match reply {
            Some(Reply::Respond(response)) => Ok(response),
            Some(Reply::Fail(message)) => Err(ApiError::Transport(message)),
            None => Err(ApiError::Transport(format!("no reply queued for {}", description))),
        }
    }
}
