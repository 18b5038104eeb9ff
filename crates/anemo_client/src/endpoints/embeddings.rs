//! `/embeddings`

use crate::Client;
use crate::endpoints::TextInput;
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Body of an embeddings request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateEmbeddingsRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Text(s) to embed
    #[builder(setter(into))]
    input: TextInput,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl CreateEmbeddingsRequest {
    /// Request with only the required fields set.
    pub fn new(model: impl Into<String>, input: impl Into<TextInput>) -> Self {
        Self {
            model: model.into(),
            input: input.into(),
            user: None,
        }
    }

    /// Creates a new builder for CreateEmbeddingsRequest.
    pub fn builder() -> CreateEmbeddingsRequestBuilder {
        CreateEmbeddingsRequestBuilder::default()
    }
}

impl Client {
    /// Creates an embedding vector representing the input text.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn create_embeddings(&self, request: &CreateEmbeddingsRequest) -> AnemoResult<Value> {
        self.post_json("/embeddings", request).await
    }
}
