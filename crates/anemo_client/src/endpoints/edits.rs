//! `/edits`

use crate::Client;
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Body of an edit request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateEditRequest {
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Text to edit; empty when unset
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    /// How to edit the input
    #[builder(setter(into))]
    instruction: String,
    /// Edits to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Nucleus sampling mass
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
}

impl CreateEditRequest {
    /// Creates a new builder for CreateEditRequest.
    pub fn builder() -> CreateEditRequestBuilder {
        CreateEditRequestBuilder::default()
    }
}

impl Client {
    /// Creates a new edit for the provided input, instruction and parameters.
    #[instrument(skip(self, request), fields(model = %request.model()))]
    pub async fn create_edit(&self, request: &CreateEditRequest) -> AnemoResult<Value> {
        self.post_json("/edits", request).await
    }
}
