//! Test utilities for client tests.

#![allow(dead_code)]

use anemo_client::{ApiRequest, Client, ClientConfig, MockTransport};
use std::sync::Arc;

pub const TEST_KEY: &str = "sk-test-key";

/// Client wired to a fresh mock transport.
pub fn mock_client() -> (Client, MockTransport) {
    mock_client_with_config(ClientConfig::default())
}

/// Client with the given config wired to a fresh mock transport.
pub fn mock_client_with_config(config: ClientConfig) -> (Client, MockTransport) {
    let mock = MockTransport::new();
    let client = Client::with_transport(TEST_KEY, config, Arc::new(mock.clone()))
        .expect("Failed to build test client");
    (client, mock)
}

/// Header value as a string, if present.
pub fn header<'a>(request: &'a ApiRequest, name: &str) -> Option<&'a str> {
    request.headers().get(name).and_then(|v| v.to_str().ok())
}
