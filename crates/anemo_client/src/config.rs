//! Client configuration and per-client request overrides.

use anemo_error::{AnemoResult, ConfigError};
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Versioned root of the provider's REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Environment variable the credential is read from.
pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Prefix for configuration overrides taken from the environment, e.g. `ANEMO_BASE_URL`.
pub const CONFIG_ENV_PREFIX: &str = "ANEMO";

/// Fixed settings shared by every request a client makes.
///
/// # Examples
///
/// ```
/// use anemo_client::ClientConfig;
///
/// let config = ClientConfig::builder()
///     .base_url("http://localhost:8080/v1/")
///     .organization(Some("org-123".to_string()))
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint_root(), "http://localhost:8080/v1");
/// assert!(config.user_agent().starts_with("anemo/"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, Builder)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct ClientConfig {
    /// API root every endpoint path is appended to
    base_url: String,
    /// Value of the `User-Agent` header identifying this client
    user_agent: String,
    /// Sent as `OpenAI-Organization` when set
    organization: Option<String>,
    /// Per-request deadline enforced by the HTTP transport; none when unset
    timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: format!("anemo/{}", env!("CARGO_PKG_VERSION")),
            organization: None,
            timeout_secs: None,
        }
    }
}

impl ClientConfig {
    /// Returns a builder seeded with the defaults.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Base URL without a trailing separator.
    pub fn endpoint_root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Layers the defaults, an optional TOML file and `ANEMO_*` environment
    /// variables, later sources winning.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or malformed, or
    /// if a value has the wrong type.
    #[tracing::instrument(skip(path))]
    pub fn load(path: Option<&Path>) -> AnemoResult<Self> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "Adding config file source");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(CONFIG_ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {}", e)))?;

        let loaded: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        tracing::debug!(base_url = %loaded.base_url, "Loaded client configuration");
        Ok(loaded)
    }
}

/// Explicit per-client overrides merged into every request.
///
/// Headers and body fields set here win over the client's defaults and over
/// typed request fields with the same name.
///
/// # Examples
///
/// ```
/// use anemo_client::RequestOptions;
///
/// let options = RequestOptions::new()
///     .header("OpenAI-Beta", "assistants=v1")
///     .body_field("user", "user-42");
///
/// assert_eq!(options.headers().get("OpenAI-Beta").map(String::as_str), Some("assistants=v1"));
/// assert_eq!(options.extra_body()["user"], "user-42");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Getters)]
pub struct RequestOptions {
    /// Extra headers; replace defaults of the same name
    headers: BTreeMap<String, String>,
    /// Extra top-level fields merged into JSON bodies
    extra_body: Map<String, Value>,
}

impl RequestOptions {
    /// No overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an extra header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Adds or replaces an extra JSON body field.
    pub fn body_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_body.insert(name.into(), value.into());
        self
    }

    /// True when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.extra_body.is_empty()
    }
}
