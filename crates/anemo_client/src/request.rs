//! Request descriptors and body encodings.

use anemo_error::{AnemoResult, IoError};
use derive_getters::Getters;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::path::Path;

/// One HTTP call, fully resolved: absolute URL, merged headers and encoded body.
///
/// Built fresh per call by the client and consumed by a [`Transport`](crate::Transport).
#[derive(Debug, Clone, Getters)]
pub struct ApiRequest {
    /// HTTP verb
    method: Method,
    /// Absolute URL
    url: String,
    /// Headers after merging defaults with caller overrides
    headers: HeaderMap,
    /// Payload
    body: Body,
}

impl ApiRequest {
    /// Creates a request descriptor.
    pub fn new(method: Method, url: impl Into<String>, headers: HeaderMap, body: Body) -> Self {
        Self {
            method,
            url: url.into(),
            headers,
            body,
        }
    }

    /// Splits the descriptor into its parts.
    pub fn into_parts(self) -> (Method, String, HeaderMap, Body) {
        (self.method, self.url, self.headers, self.body)
    }
}

/// Request payload encoding.
#[derive(Debug, Clone, PartialEq, derive_more::Display)]
pub enum Body {
    /// No body
    #[display("empty")]
    Empty,
    /// UTF-8 JSON document, sent with `Content-Type: application/json`
    #[display("json")]
    Json(Value),
    /// `multipart/form-data`; the transport supplies the boundary header
    #[display("multipart")]
    Multipart(Form),
}

impl Body {
    /// The JSON document, if this is a JSON body.
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Body::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The form, if this is a multipart body.
    pub fn as_form(&self) -> Option<&Form> {
        match self {
            Body::Multipart(form) => Some(form),
            _ => None,
        }
    }
}

/// Binary upload: image, audio or training data.
///
/// # Examples
///
/// ```
/// use anemo_client::FilePart;
///
/// let part = FilePart::new("otter.png", vec![0x89, b'P', b'N', b'G']).with_mime("image/png");
///
/// assert_eq!(part.filename(), "otter.png");
/// assert_eq!(part.mime().as_deref(), Some("image/png"));
/// assert_eq!(part.bytes().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FilePart {
    /// Filename reported to the provider, which uses its extension to sniff the format
    filename: String,
    /// Raw payload
    bytes: Vec<u8>,
    /// Explicit MIME type; left to the transport when unset
    mime: Option<String>,
}

impl FilePart {
    /// Wraps bytes already in memory.
    pub fn new(filename: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            bytes: bytes.into(),
            mime: None,
        }
    }

    /// Sets the MIME type.
    pub fn with_mime(mut self, mime: impl Into<String>) -> Self {
        self.mime = Some(mime.into());
        self
    }

    /// Reads a file from disk, using its file name as the upload name.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    #[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub async fn from_path(path: impl AsRef<Path>) -> AnemoResult<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| IoError::new(format!("Failed to read {}: {}", path.display(), e)))?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        tracing::debug!(filename = %filename, size = bytes.len(), "Read upload payload");
        Ok(Self::new(filename, bytes))
    }
}

/// Value of one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormValue {
    /// Plain text field
    Text(String),
    /// File field
    File(FilePart),
}

/// A named form field.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct FormPart {
    /// Field name
    name: String,
    /// Field value
    value: FormValue,
}

/// Ordered multipart form.
///
/// # Examples
///
/// ```
/// use anemo_client::{FilePart, Form};
///
/// let form = Form::new()
///     .file("file", FilePart::new("train.jsonl", b"{}".to_vec()))
///     .text("purpose", "fine-tune");
///
/// assert_eq!(form.field_names(), vec!["file", "purpose"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    parts: Vec<FormPart>,
}

impl Form {
    /// Empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a text field.
    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::Text(value.into()),
        });
        self
    }

    /// Appends a text field when the value is present.
    pub fn text_opt<T: ToString>(self, name: impl Into<String>, value: Option<&T>) -> Self {
        match value {
            Some(value) => self.text(name, value.to_string()),
            None => self,
        }
    }

    /// Appends a file field.
    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.parts.push(FormPart {
            name: name.into(),
            value: FormValue::File(part),
        });
        self
    }

    /// Fields in insertion order.
    pub fn parts(&self) -> &[FormPart] {
        &self.parts
    }

    /// Field names in insertion order.
    pub fn field_names(&self) -> Vec<&str> {
        self.parts.iter().map(|p| p.name.as_str()).collect()
    }

    /// Looks up the first field with the given name.
    pub fn get(&self, name: &str) -> Option<&FormValue> {
        self.parts.iter().find(|p| p.name == name).map(|p| &p.value)
    }
}

/// Request bodies sent as `multipart/form-data`.
pub trait MultipartBody {
    /// Encodes the request as form fields, one per set field.
    fn to_form(&self) -> Form;
}
