//! `/files`

use crate::Client;
use crate::request::{Body, FilePart, Form, MultipartBody};
use anemo_error::AnemoResult;
use derive_getters::Getters;
use reqwest::Method;
use serde_json::Value;
use tracing::instrument;

/// Body of a file upload (multipart).
///
/// ```
/// use anemo_client::{FilePart, MultipartBody, UploadFileRequest};
///
/// let data = FilePart::new("train.jsonl", b"{}\n".to_vec());
/// let request = UploadFileRequest::new(data, "fine-tune");
///
/// assert_eq!(request.to_form().field_names(), vec!["file", "purpose"]);
/// ```
#[derive(Debug, Clone, PartialEq, Getters)]
pub struct UploadFileRequest {
    /// JSON Lines document
    file: FilePart,
    /// Intended use, e.g. `fine-tune`
    purpose: String,
}

impl UploadFileRequest {
    /// Upload of `file` for `purpose`.
    pub fn new(file: FilePart, purpose: impl Into<String>) -> Self {
        Self {
            file,
            purpose: purpose.into(),
        }
    }
}

impl MultipartBody for UploadFileRequest {
    fn to_form(&self) -> Form {
        Form::new()
            .file("file", self.file.clone())
            .text("purpose", self.purpose.clone())
    }
}

impl Client {
    /// Lists files that belong to the user's organization.
    #[instrument(skip(self))]
    pub async fn list_files(&self) -> AnemoResult<Value> {
        self.get("/files").await
    }

    /// Uploads a document for use across endpoints, such as fine-tuning.
    #[instrument(
        skip(self, request),
        fields(file = %request.file().filename(), purpose = %request.purpose())
    )]
    pub async fn upload_file(&self, request: &UploadFileRequest) -> AnemoResult<Value> {
        self.post_form("/files", request).await
    }

    /// Deletes a file.
    #[instrument(skip(self))]
    pub async fn delete_file(&self, file_id: &str) -> AnemoResult<Value> {
        self.delete(&format!("/files/{}", file_id)).await
    }

    /// Returns information about a specific file.
    #[instrument(skip(self))]
    pub async fn retrieve_file(&self, file_id: &str) -> AnemoResult<Value> {
        self.get(&format!("/files/{}", file_id)).await
    }

    /// Returns the contents of a file as text. File contents are JSON Lines,
    /// not a single JSON document, so they are not parsed.
    #[instrument(skip(self))]
    pub async fn retrieve_file_content(&self, file_id: &str) -> AnemoResult<String> {
        self.request_text(Method::GET, &format!("/files/{}/content", file_id), Body::Empty)
            .await
    }
}
