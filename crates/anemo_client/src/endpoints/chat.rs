//! `/chat/completions`

use crate::Client;
use crate::endpoints::TextInput;
use anemo_core::ChatMessage;
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::instrument;

/// Body of a chat completion request.
///
/// # Examples
///
/// ```
/// use anemo_client::CreateChatCompletionRequest;
/// use anemo_core::ChatMessage;
///
/// let request = CreateChatCompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")]);
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     serde_json::json!({
///         "model": "gpt-3.5-turbo",
///         "messages": [{"role": "user", "content": "hi"}]
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateChatCompletionRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Conversation so far, oldest first
    #[builder(setter(into))]
    messages: Vec<ChatMessage>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling mass
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    /// Choices to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Stop sequence(s)
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    stop: Option<TextInput>,
    /// Maximum tokens to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    /// Penalty for tokens already present
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    /// Penalty proportional to token frequency
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
    /// Token id to bias in `[-100, 100]`
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    logit_bias: Option<BTreeMap<String, i32>>,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl CreateChatCompletionRequest {
    /// Request with only the required fields set.
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            temperature: None,
            top_p: None,
            n: None,
            stop: None,
            max_tokens: None,
            presence_penalty: None,
            frequency_penalty: None,
            logit_bias: None,
            user: None,
        }
    }

    /// Creates a new builder for CreateChatCompletionRequest.
    pub fn builder() -> CreateChatCompletionRequestBuilder {
        CreateChatCompletionRequestBuilder::default()
    }
}

impl Client {
    /// Creates a model response for the given chat conversation. The reply is
    /// at `choices[0].message` of the returned payload.
    #[instrument(
        skip(self, request),
        fields(model = %request.model(), messages = request.messages().len())
    )]
    pub async fn create_chat_completion(
        &self,
        request: &CreateChatCompletionRequest,
    ) -> AnemoResult<Value> {
        self.post_json("/chat/completions", request).await
    }
}
