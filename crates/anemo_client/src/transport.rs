//! The seam between request construction and the network.

use crate::request::{ApiRequest, Body, Form, FormValue};
use anemo_error::{AnemoResult, HttpError, JsonError};
use async_trait::async_trait;
use reqwest::multipart::Part;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as received
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Creates a response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as UTF-8, replacing invalid sequences.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Sends a fully-built request and returns the raw response.
///
/// Implementations report only transport failures as errors; a non-success
/// status is still an `Ok` response for the client to interpret.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Performs one HTTP exchange.
    async fn send(&self, request: ApiRequest) -> AnemoResult<RawResponse>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with no deadline of its own.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the TLS backend cannot be initialized.
    pub fn new() -> AnemoResult<Self> {
        Self::build(None)
    }

    /// Transport that aborts requests after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if the TLS backend cannot be initialized.
    pub fn with_timeout(timeout: Duration) -> AnemoResult<Self> {
        Self::build(Some(timeout))
    }

    fn build(timeout: Option<Duration>) -> AnemoResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| HttpError::new(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }

    /// Wraps an existing `reqwest` client.
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

fn to_multipart(form: Form) -> AnemoResult<reqwest::multipart::Form> {
    let mut multipart = reqwest::multipart::Form::new();

    for part in form.parts() {
        let name = part.name().clone();
        multipart = match part.value() {
            FormValue::Text(value) => multipart.text(name, value.clone()),
            FormValue::File(file) => {
                let mut body = Part::bytes(file.bytes().clone()).file_name(file.filename().clone());
                if let Some(mime) = file.mime() {
                    body = body.mime_str(mime).map_err(|e| {
                        HttpError::new(format!("Invalid MIME type '{}': {}", mime, e))
                    })?;
                }
                multipart.part(name, body)
            }
        };
    }

    Ok(multipart)
}

#[async_trait]
impl Transport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method(), url = %request.url()))]
    async fn send(&self, request: ApiRequest) -> AnemoResult<RawResponse> {
        let (method, url, headers, body) = request.into_parts();

        let mut builder = self.client.request(method, &url).headers(headers);
        builder = match body {
            Body::Empty => builder,
            Body::Json(value) => {
                let bytes = serde_json::to_vec(&value)
                    .map_err(|e| JsonError::new(format!("Failed to encode body: {}", e)))?;
                builder.body(bytes)
            }
            Body::Multipart(form) => builder.multipart(to_multipart(form)?),
        };

        let response = builder.send().await.map_err(|e| {
            error!(error = ?e, "HTTP request failed");
            HttpError::new(format!("Request failed: {}", e))
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            error!(status, error = ?e, "Failed to read response body");
            HttpError::new(format!("Failed to read response body: {}", e))
        })?;

        debug!(status, bytes = body.len(), "Received response");
        Ok(RawResponse::new(status, body.to_vec()))
    }
}
