//! Request dispatcher shared by every endpoint.

use crate::config::{API_KEY_ENV, ClientConfig, RequestOptions};
use crate::request::{ApiRequest, Body, MultipartBody};
use crate::transport::{RawResponse, ReqwestTransport, Transport};
use anemo_error::{AnemoResult, ApiError, ConfigError, HttpError, JsonError};
use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, instrument};

/// Header carrying the optional organization id.
pub const ORGANIZATION_HEADER: &str = "openai-organization";

/// Client for the provider's REST API.
///
/// Holds an immutable credential and configuration; every endpoint method is a
/// single request through the shared [`Transport`]. Cloning is cheap and clones
/// can be used from independent tasks.
#[derive(Clone)]
pub struct Client {
    api_key: String,
    config: ClientConfig,
    options: RequestOptions,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("config", &self.config)
            .field("options", &self.options)
            .field("transport", &self.transport)
            .finish()
    }
}

impl Client {
    /// Creates a client against the default API root.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_key` is empty, or an HTTP error if
    /// the transport cannot be built.
    pub fn new(api_key: impl Into<String>) -> AnemoResult<Self> {
        Self::with_config(api_key, ClientConfig::default())
    }

    /// Creates a client with explicit configuration over the `reqwest` transport.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_key` is empty, or an HTTP error if
    /// the transport cannot be built.
    pub fn with_config(api_key: impl Into<String>, config: ClientConfig) -> AnemoResult<Self> {
        let transport = match config.timeout_secs() {
            Some(secs) => ReqwestTransport::with_timeout(Duration::from_secs(*secs))?,
            None => ReqwestTransport::new()?,
        };
        Self::with_transport(api_key, config, Arc::new(transport))
    }

    /// Creates a client over any transport.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `api_key` is empty.
    #[instrument(skip(api_key, transport), fields(base_url = %config.endpoint_root()))]
    pub fn with_transport(
        api_key: impl Into<String>,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> AnemoResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ConfigError::new("API key must not be empty").into());
        }

        debug!("Created client");

        Ok(Self {
            api_key,
            config,
            options: RequestOptions::default(),
            transport,
        })
    }

    /// Creates a client with the credential read from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the variable is unset or empty.
    pub fn from_env(config: ClientConfig) -> AnemoResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| ConfigError::new(format!("{} is not set", API_KEY_ENV)))?;
        Self::with_config(api_key, config)
    }

    /// Returns a client that applies `options` to every request. The
    /// credential, configuration and transport are shared.
    pub fn with_options(&self, options: RequestOptions) -> Self {
        Self {
            options,
            ..self.clone()
        }
    }

    /// Client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Per-client request overrides.
    pub fn options(&self) -> &RequestOptions {
        &self.options
    }

    /// Resolves a call into a request descriptor without sending it.
    ///
    /// Default headers are `Authorization`, `User-Agent`, the organization
    /// header when configured, and `Content-Type: application/json` for JSON
    /// bodies. Headers from [`RequestOptions`] replace defaults of the same name,
    /// except `Content-Type` on multipart bodies, which the transport sets
    /// together with the boundary.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error if a header name or value is not valid.
    pub fn build_request(&self, method: Method, path: &str, body: Body) -> AnemoResult<ApiRequest> {
        let url = format!("{}{}", self.config.endpoint_root(), path);
        let multipart = matches!(body, Body::Multipart(_));

        let mut headers = HeaderMap::new();
        let mut auth = header_value(&format!("Bearer {}", self.api_key))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(USER_AGENT, header_value(self.config.user_agent())?);
        if let Some(organization) = self.config.organization() {
            headers.insert(
                HeaderName::from_static(ORGANIZATION_HEADER),
                header_value(organization)?,
            );
        }

        let body = match body {
            Body::Json(value) => {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                Body::Json(self.merge_extra_body(value))
            }
            other => other,
        };

        for (name, value) in self.options.headers() {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| HttpError::new(format!("Invalid header name '{}': {}", name, e)))?;
            if multipart && name == CONTENT_TYPE {
                debug!("Ignoring Content-Type override on multipart body");
                continue;
            }
            headers.insert(name, header_value(value)?);
        }

        Ok(ApiRequest::new(method, url, headers, body))
    }

    fn merge_extra_body(&self, value: Value) -> Value {
        match value {
            Value::Object(mut fields) if !self.options.extra_body().is_empty() => {
                for (key, extra) in self.options.extra_body() {
                    fields.insert(key.clone(), extra.clone());
                }
                Value::Object(fields)
            }
            other => other,
        }
    }

    /// Sends a request and returns the raw response, converting non-success
    /// statuses into [`ApiError`].
    async fn execute(&self, method: Method, path: &str, body: Body) -> AnemoResult<RawResponse> {
        let request = self.build_request(method, path, body)?;

        debug!(
            method = %request.method(),
            url = %request.url(),
            body = %request.body(),
            "Sending request"
        );

        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let err = ApiError::from_body(response.status, &response.text());
            error!(
                status = err.status,
                error_type = ?err.error_type,
                detail = %err.message,
                "API error"
            );
            return Err(err.into());
        }

        debug!(status = response.status, "Request succeeded");
        Ok(response)
    }

    /// Performs a call against `path` (relative to the API root, starting with
    /// `/`) and returns the parsed JSON payload unchanged.
    ///
    /// Every endpoint method goes through here; it is public for endpoints this
    /// crate does not wrap.
    ///
    /// # Errors
    ///
    /// Transport failures, provider failures ([`ApiError`]), and payloads that
    /// are not valid JSON.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request(&self, method: Method, path: &str, body: Body) -> AnemoResult<Value> {
        let response = self.execute(method, path, body).await?;
        serde_json::from_slice(&response.body).map_err(|e| {
            error!(error = ?e, "Failed to parse response");
            JsonError::new(format!("Failed to parse JSON: {}", e)).into()
        })
    }

    /// Like [`Client::request`] but returns the body as text instead of JSON.
    ///
    /// # Errors
    ///
    /// Transport failures and provider failures.
    #[instrument(skip_all, fields(method = %method, path = %path))]
    pub async fn request_text(
        &self,
        method: Method,
        path: &str,
        body: Body,
    ) -> AnemoResult<String> {
        let response = self.execute(method, path, body).await?;
        Ok(response.text())
    }

    pub(crate) async fn get(&self, path: &str) -> AnemoResult<Value> {
        self.request(Method::GET, path, Body::Empty).await
    }

    pub(crate) async fn delete(&self, path: &str) -> AnemoResult<Value> {
        self.request(Method::DELETE, path, Body::Empty).await
    }

    pub(crate) async fn post(&self, path: &str) -> AnemoResult<Value> {
        self.request(Method::POST, path, Body::Empty).await
    }

    pub(crate) async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> AnemoResult<Value> {
        let value = serde_json::to_value(body)
            .map_err(|e| JsonError::new(format!("Failed to encode request body: {}", e)))?;
        self.request(Method::POST, path, Body::Json(value)).await
    }

    pub(crate) async fn post_form<T: MultipartBody>(
        &self,
        path: &str,
        body: &T,
    ) -> AnemoResult<Value> {
        self.request(Method::POST, path, Body::Multipart(body.to_form()))
            .await
    }
}

fn header_value(value: &str) -> AnemoResult<HeaderValue> {
    HeaderValue::from_str(value)
        .map_err(|e| HttpError::new(format!("Invalid header value: {}", e)).into())
}
