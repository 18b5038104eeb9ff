//! `/models`

use crate::Client;
use anemo_error::AnemoResult;
use serde_json::Value;
use tracing::instrument;

impl Client {
    /// Lists the currently available models with basic information such as
    /// owner and availability.
    #[instrument(skip(self))]
    pub async fn list_models(&self) -> AnemoResult<Value> {
        self.get("/models").await
    }

    /// Retrieves one model's owner and permissions.
    #[instrument(skip(self))]
    pub async fn retrieve_model(&self, model: &str) -> AnemoResult<Value> {
        self.get(&format!("/models/{}", model)).await
    }

    /// Deletes a fine-tuned model. Requires the Owner role in the organization.
    #[instrument(skip(self))]
    pub async fn delete_fine_tune_model(&self, model: &str) -> AnemoResult<Value> {
        self.delete(&format!("/models/{}", model)).await
    }
}
