//! In-memory transport that records requests and replays fixture responses.

use crate::request::ApiRequest;
use crate::transport::{RawResponse, Transport};
use anemo_error::{AnemoResult, HttpError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockState {
    responses: VecDeque<RawResponse>,
    requests: Vec<ApiRequest>,
}

/// Transport for tests: answers from a queue and keeps every request it saw.
///
/// Clones share state, so a test can hand one clone to the client and
/// inspect the other.
///
/// # Examples
///
/// ```
/// use anemo_client::{Client, ClientConfig, MockTransport};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockTransport::new();
/// mock.push_json(200, json!({"data": [{"id": "gpt-3.5-turbo"}]}));
///
/// let transport = Arc::new(mock.clone());
/// let client = Client::with_transport("sk-test", ClientConfig::default(), transport).unwrap();
/// let models = client.list_models().await.unwrap();
///
/// assert_eq!(models, json!({"data": [{"id": "gpt-3.5-turbo"}]}));
/// assert_eq!(mock.requests().len(), 1);
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    /// Mock with an empty response queue.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Queues a raw response.
    pub fn push_response(&self, response: RawResponse) {
        self.state().responses.push_back(response);
    }

    /// Queues a JSON response with the given status.
    pub fn push_json(&self, status: u16, body: serde_json::Value) {
        self.push_response(RawResponse::new(status, body.to_string()));
    }

    /// Queues a plain-text response with the given status.
    pub fn push_text(&self, status: u16, body: impl Into<String>) {
        self.push_response(RawResponse::new(status, body.into().into_bytes()));
    }

    /// Every request sent so far, oldest first.
    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state().requests.clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<ApiRequest> {
        self.state().requests.last().cloned()
    }

    /// Responses still queued.
    pub fn pending(&self) -> usize {
        self.state().responses.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> AnemoResult<RawResponse> {
        let mut state = self.state();
        state.requests.push(request);
        state
            .responses
            .pop_front()
            .ok_or_else(|| HttpError::new("No mock response queued").into())
    }
}
