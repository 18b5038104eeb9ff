//! `/images/generations`, `/images/edits`, `/images/variations`

use crate::Client;
use crate::endpoints::{ImageResponseFormat, ImageSize};
use crate::request::{FilePart, Form, MultipartBody};
use anemo_error::AnemoResult;
use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::instrument;

/// Body of an image generation request (JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
pub struct CreateImageRequest {
    /// Description of the desired image
    #[builder(setter(into))]
    prompt: String,
    /// Images to generate
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    n: Option<u32>,
    /// Output size
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    size: Option<ImageSize>,
    /// URL or inline base64
    #[builder(default, setter(strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ImageResponseFormat>,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    #[serde(skip_serializing_if = "Option::is_none")]
    user: Option<String>,
}

impl CreateImageRequest {
    /// Creates a new builder for CreateImageRequest.
    pub fn builder() -> CreateImageRequestBuilder {
        CreateImageRequestBuilder::default()
    }
}

/// Body of an image edit request (multipart).
///
/// # Examples
///
/// ```
/// use anemo_client::{CreateImageEditRequest, FilePart, ImageSize, MultipartBody};
///
/// let request = CreateImageEditRequest::builder()
///     .image(FilePart::new("otter.png", vec![1, 2, 3]))
///     .mask(FilePart::new("mask.png", vec![4, 5, 6]))
///     .prompt("An otter wearing a beret")
///     .size(ImageSize::Small)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.to_form().field_names(), vec!["image", "mask", "prompt", "size"]);
/// ```
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
pub struct CreateImageEditRequest {
    /// Square PNG under 4MB to edit
    image: FilePart,
    /// PNG whose transparent areas mark where to edit
    #[builder(default, setter(strip_option))]
    mask: Option<FilePart>,
    /// Description of the desired image
    #[builder(setter(into))]
    prompt: String,
    /// Images to generate
    #[builder(default, setter(strip_option))]
    n: Option<u32>,
    /// Output size
    #[builder(default, setter(strip_option))]
    size: Option<ImageSize>,
    /// URL or inline base64
    #[builder(default, setter(strip_option))]
    response_format: Option<ImageResponseFormat>,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    user: Option<String>,
}

impl CreateImageEditRequest {
    /// Creates a new builder for CreateImageEditRequest.
    pub fn builder() -> CreateImageEditRequestBuilder {
        CreateImageEditRequestBuilder::default()
    }
}

impl MultipartBody for CreateImageEditRequest {
    fn to_form(&self) -> Form {
        let mut form = Form::new().file("image", self.image.clone());
        if let Some(mask) = &self.mask {
            form = form.file("mask", mask.clone());
        }
        form.text("prompt", self.prompt.clone())
            .text_opt("n", self.n.as_ref())
            .text_opt("size", self.size.as_ref())
            .text_opt("response_format", self.response_format.as_ref())
            .text_opt("user", self.user.as_ref())
    }
}

/// Body of an image variation request (multipart).
#[derive(Debug, Clone, PartialEq, Builder, Getters)]
pub struct CreateImageVariationRequest {
    /// Square PNG under 4MB to vary
    image: FilePart,
    /// Images to generate
    #[builder(default, setter(strip_option))]
    n: Option<u32>,
    /// Output size
    #[builder(default, setter(strip_option))]
    size: Option<ImageSize>,
    /// URL or inline base64
    #[builder(default, setter(strip_option))]
    response_format: Option<ImageResponseFormat>,
    /// End-user identifier for abuse monitoring
    #[builder(default, setter(into, strip_option))]
    user: Option<String>,
}

impl CreateImageVariationRequest {
    /// Creates a new builder for CreateImageVariationRequest.
    pub fn builder() -> CreateImageVariationRequestBuilder {
        CreateImageVariationRequestBuilder::default()
    }
}

impl MultipartBody for CreateImageVariationRequest {
    fn to_form(&self) -> Form {
        Form::new()
            .file("image", self.image.clone())
            .text_opt("n", self.n.as_ref())
            .text_opt("size", self.size.as_ref())
            .text_opt("response_format", self.response_format.as_ref())
            .text_opt("user", self.user.as_ref())
    }
}

impl Client {
    /// Creates an image given a prompt.
    #[instrument(skip(self, request))]
    pub async fn create_image(&self, request: &CreateImageRequest) -> AnemoResult<Value> {
        self.post_json("/images/generations", request).await
    }

    /// Creates an edited or extended image given an original image and a prompt.
    #[instrument(skip(self, request), fields(image = %request.image().filename()))]
    pub async fn create_image_edit(&self, request: &CreateImageEditRequest) -> AnemoResult<Value> {
        self.post_form("/images/edits", request).await
    }

    /// Creates a variation of a given image.
    #[instrument(skip(self, request), fields(image = %request.image().filename()))]
    pub async fn create_image_variation(
        &self,
        request: &CreateImageVariationRequest,
    ) -> AnemoResult<Value> {
        self.post_form("/images/variations", request).await
    }
}
