//! One method per remote endpoint, plus the typed bodies they take.

mod audio;
mod chat;
mod completions;
mod edits;
mod embeddings;
mod files;
mod fine_tunes;
mod images;
mod models;
mod types;

pub use audio::{
    CreateTranscriptionRequest, CreateTranscriptionRequestBuilder, CreateTranslationRequest,
    CreateTranslationRequestBuilder,
};
pub use chat::{CreateChatCompletionRequest, CreateChatCompletionRequestBuilder};
pub use completions::{CreateCompletionRequest, CreateCompletionRequestBuilder};
pub use edits::{CreateEditRequest, CreateEditRequestBuilder};
pub use embeddings::{CreateEmbeddingsRequest, CreateEmbeddingsRequestBuilder};
pub use files::UploadFileRequest;
pub use fine_tunes::{CreateFineTuneRequest, CreateFineTuneRequestBuilder};
pub use images::{
    CreateImageEditRequest, CreateImageEditRequestBuilder, CreateImageRequest,
    CreateImageRequestBuilder, CreateImageVariationRequest, CreateImageVariationRequestBuilder,
};
pub use types::{AudioResponseFormat, ImageResponseFormat, ImageSize, TextInput};
