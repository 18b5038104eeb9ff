//! `/audio/transcriptions`, `/audio/translations`

use crate::Client;
use crate::endpoints::AudioResponseFormat;
use crate::request::{FilePart, Form, MultipartBody};
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde_json::Value;
use tracing::instrument;

/// Body of a transcription request (multipart).
///
/// # Examples
///
/// ```
/// use anemo_client::{CreateTranscriptionRequest, FilePart, MultipartBody};
///
/// let clip = FilePart::new("clip.mp3", vec![0u8; 8]);
/// let request = CreateTranscriptionRequest::new(clip, "whisper-1");
///
/// assert_eq!(request.to_form().field_names(), vec!["file", "model"]);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
pub struct CreateTranscriptionRequest {
    /// Audio in mp3, mp4, mpeg, mpga, m4a, wav or webm
    file: FilePart,
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// Text to guide style or continue a previous segment
    #[builder(default, setter(into, strip_option))]
    prompt: Option<String>,
    /// Payload shape
    #[builder(default, setter(strip_option))]
    response_format: Option<AudioResponseFormat>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
    /// ISO-639-1 language of the input audio
    #[builder(default, setter(into, strip_option))]
    language: Option<String>,
}

impl CreateTranscriptionRequest {
    /// Request with only the required fields set.
    pub fn new(file: FilePart, model: impl Into<String>) -> Self {
        Self {
            file,
            model: model.into(),
            prompt: None,
            response_format: None,
            temperature: None,
            language: None,
        }
    }

    /// Creates a new builder for CreateTranscriptionRequest.
    pub fn builder() -> CreateTranscriptionRequestBuilder {
        CreateTranscriptionRequestBuilder::default()
    }
}

impl MultipartBody for CreateTranscriptionRequest {
    fn to_form(&self) -> Form {
        Form::new()
            .file("file", self.file.clone())
            .text("model", self.model.clone())
            .text_opt("prompt", self.prompt.as_ref())
            .text_opt("response_format", self.response_format.as_ref())
            .text_opt("temperature", self.temperature.as_ref())
            .text_opt("language", self.language.as_ref())
    }
}

/// Body of a translation-to-English request (multipart).
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
pub struct CreateTranslationRequest {
    /// Audio in mp3, mp4, mpeg, mpga, m4a, wav or webm
    file: FilePart,
    /// Model identifier
    #[builder(setter(into))]
    model: String,
    /// English text to guide style
    #[builder(default, setter(into, strip_option))]
    prompt: Option<String>,
    /// Payload shape
    #[builder(default, setter(strip_option))]
    response_format: Option<AudioResponseFormat>,
    /// Sampling temperature
    #[builder(default, setter(strip_option))]
    temperature: Option<f32>,
}

impl CreateTranslationRequest {
    /// Request with only the required fields set.
    pub fn new(file: FilePart, model: impl Into<String>) -> Self {
        Self {
            file,
            model: model.into(),
            prompt: None,
            response_format: None,
            temperature: None,
        }
    }

    /// Creates a new builder for CreateTranslationRequest.
    pub fn builder() -> CreateTranslationRequestBuilder {
        CreateTranslationRequestBuilder::default()
    }
}

impl MultipartBody for CreateTranslationRequest {
    fn to_form(&self) -> Form {
        Form::new()
            .file("file", self.file.clone())
            .text("model", self.model.clone())
            .text_opt("prompt", self.prompt.as_ref())
            .text_opt("response_format", self.response_format.as_ref())
            .text_opt("temperature", self.temperature.as_ref())
    }
}

impl Client {
    /// Transcribes audio into the input language.
    #[instrument(
        skip(self, request),
        fields(model = %request.model(), file = %request.file().filename())
    )]
    pub async fn create_transcription(
        &self,
        request: &CreateTranscriptionRequest,
    ) -> AnemoResult<Value> {
        self.post_form("/audio/transcriptions", request).await
    }

    /// Translates audio into English.
    #[instrument(
        skip(self, request),
        fields(model = %request.model(), file = %request.file().filename())
    )]
    pub async fn create_translation(
        &self,
        request: &CreateTranslationRequest,
    ) -> AnemoResult<Value> {
        self.post_form("/audio/translations", request).await
    }
}
