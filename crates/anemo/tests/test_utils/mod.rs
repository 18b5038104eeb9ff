//! Test utilities for conversation tests.

#![allow(dead_code)]

use anemo::{Client, ClientConfig, MockTransport};
use serde_json::{Value, json};
use std::sync::Arc;

/// Client wired to a fresh mock transport.
pub fn mock_client() -> (Client, MockTransport) {
    let mock = MockTransport::new();
    let client =
        Client::with_transport("sk-test-key", ClientConfig::default(), Arc::new(mock.clone()))
            .expect("Failed to build test client");
    (client, mock)
}

/// Chat completion payload whose first choice says `content`.
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Text completion payload whose first choice is `text`.
pub fn completion_reply(text: &str) -> Value {
    json!({
        "id": "cmpl-123",
        "object": "text_completion",
        "choices": [{"index": 0, "text": text, "finish_reason": "stop"}]
    })
}

/// `messages` array of the JSON body of the `index`th request.
pub fn sent_messages(mock: &MockTransport, index: usize) -> Value {
    mock.requests()[index]
        .body()
        .as_json()
        .expect("Expected a JSON body")["messages"]
        .clone()
}
