//! `/completions`

use crate::Client;
use crate::endpoints::TextInput;
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::instrument;

/// Body of a text completion request. Unset fields are omitted so the
/// provider's defaults apply.
///
/// # Examples
///
/// ```
/// use anemo_client::CreateCompletionRequest;
///
/// let request = CreateCompletionRequest::builder()
///     .model("text-davinci-003")
///     .prompt("Say this is a test")
///     .max_tokens(7)
///     .temperature(0.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     serde_json::json!({
///         "model": "text-davinci-003",
///         "prompt": "Say this is a test",
///         "max_tokens": 7,
///         "temperature": 0.0
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateCompletionRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Prompt(s) to complete
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt: Option<TextInput>,
    /// Text after the completion
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
    /// Maximum tokens to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling mass
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Completions to generate per prompt
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Log probabilities of this many most likely tokens
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    logprobs: Option<u32>,
    /// Echo the prompt back with the completion
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    echo: Option<bool>,
    /// Stop sequence(s)
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<TextInput>,
    /// Penalty for tokens already present
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    /// Penalty proportional to token frequency
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    /// Server-side candidates to pick the best from
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    best_of: Option<u32>,
    /// Token id to bias in `[-100, 100]`
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    logit_bias: Option<BTreeMap<String, i32>>,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl CreateCompletionRequest {
    /// Creates a new builder for CreateCompletionRequest.
    pub fn builder() -> CreateCompletionRequestBuilder {
        CreateCompletionRequestBuilder::default()
    }
}

impl Client {
    /// Creates a completion for the provided prompt and parameters.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn create_completion(&self, request: &CreateCompletionRequest) -> AnemoResult<Value> {
        self.post_json("/completions", request).await
    }
}
