//! `/fine-tunes`

use crate::Client;
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Body of a fine-tune job request.
///
/// ```
/// use anemo_client::CreateFineTuneRequest;
///
/// let request = CreateFineTuneRequest::builder()
///     .training_file("file-abc123")
///     .model("curie")
///     .n_epochs(2)
///     .build()
///     .unwrap();
///
/// assert_eq!(
///     serde_json::to_value(&request).unwrap(),
///     serde_json::json!({"training_file": "file-abc123", "model": "curie", "n_epochs": 2})
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateFineTuneRequest {
    /// Uploaded JSONL file with training data
    #[builder(setter(into))]
    training_file: String,
    /// Uploaded JSONL file with validation data
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    validation_file: Option<String>,
    /// Base model
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    model: Option<String>,
    /// Epochs to train for
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    n_epochs: Option<u32>,
    /// Examples per training batch
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    batch_size: Option<u32>,
    /// Multiplier on the pretraining learning rate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    learning_rate_multiplier: Option<f64>,
    /// Weight of prompt-token loss
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    prompt_loss_weight: Option<f64>,
    /// Report classification metrics against the validation file
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    compute_classification_metrics: Option<bool>,
    /// Number of classes for multiclass classification
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    classification_n_classes: Option<u32>,
    /// Positive class for binary classification
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    classification_positive_class: Option<String>,
    /// Betas for F-beta scores
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    classification_betas: Option<Vec<f64>>,
    /// Up to 40 characters added to the fine-tuned model name
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    suffix: Option<String>,
}

impl CreateFineTuneRequest {
    /// Creates a new builder for CreateFineTuneRequest.
    pub fn builder() -> CreateFineTuneRequestBuilder {
        CreateFineTuneRequestBuilder::default()
    }
}

impl Client {
    /// Creates a job that fine-tunes a model from an uploaded dataset. The
    /// payload describes the enqueued job.
    #[instrument(skip(self, request), fields(training_file = %request.training_file()))]
    pub async fn create_fine_tune(&self, request: &CreateFineTuneRequest) -> AnemoResult<Value> {
        self.post_json("/fine-tunes", request).await
    }

    /// Lists the organization's fine-tuning jobs.
    #[instrument(skip(self))]
    pub async fn list_fine_tunes(&self) -> AnemoResult<Value> {
        self.get("/fine-tunes").await
    }

    /// Gets info about a fine-tune job.
    #[instrument(skip(self))]
    pub async fn retrieve_fine_tune(&self, fine_tune_id: &str) -> AnemoResult<Value> {
        self.get(&format!("/fine-tunes/{}", fine_tune_id)).await
    }

    /// Immediately cancels a fine-tune job.
    #[instrument(skip(self))]
    pub async fn cancel_fine_tune(&self, fine_tune_id: &str) -> AnemoResult<Value> {
        self.post(&format!("/fine-tunes/{}/cancel", fine_tune_id)).await
    }

    /// Lists the status events generated so far for a fine-tune job.
    ///
    /// Always requests the non-streaming form; server-sent events are not
    /// supported.
    #[instrument(skip(self))]
    pub async fn list_fine_tune_events(&self, fine_tune_id: &str) -> AnemoResult<Value> {
        self.get(&format!("/fine-tunes/{}/events?stream=false", fine_tune_id))
            .await
    }
}
