//! Value types shared by several request bodies.

use serde::{Deserialize, Serialize};

/// A field the provider accepts as either one string or a list of strings,
/// such as `prompt`, `stop` and embedding `input`.
///
/// ```
/// use anemo_client::TextInput;
///
/// let one = TextInput::from("hello");
/// let many = TextInput::from(vec!["a", "b"]);
///
/// assert_eq!(serde_json::to_value(&one).unwrap(), serde_json::json!("hello"));
/// assert_eq!(serde_json::to_value(&many).unwrap(), serde_json::json!(["a", "b"]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum TextInput {
    /// A single string
    Single(String),
    /// Several strings
    Many(Vec<String>),
}

impl From<&str> for TextInput {
    fn from(value: &str) -> Self {
        TextInput::Single(value.to_string())
    }
}

impl From<Vec<&str>> for TextInput {
    fn from(values: Vec<&str>) -> Self {
        TextInput::Many(values.into_iter().map(str::to_string).collect())
    }
}

/// Square output size for generated images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum ImageSize {
    /// 256 by 256 pixels
    #[serde(rename = "256x256")]
    #[display("256x256")]
    Small,
    /// 512 by 512 pixels
    #[serde(rename = "512x512")]
    #[display("512x512")]
    Medium,
    /// 1024 by 1024 pixels, the provider default
    #[serde(rename = "1024x1024")]
    #[display("1024x1024")]
    Large,
}

/// How generated images are returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum ImageResponseFormat {
    /// Hosted URL
    #[display("url")]
    Url,
    /// Inline base64 PNG
    #[display("b64_json")]
    B64Json,
}

/// Shape of transcription and translation payloads.
///
/// Only JSON formats are offered since the client parses every payload as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "snake_case")]
pub enum AudioResponseFormat {
    /// Text only
    #[display("json")]
    Json,
    /// Text with language, duration and timed segments
    #[display("verbose_json")]
    VerboseJson,
}
