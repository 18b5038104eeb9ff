//! Error types for the Anemo API client.
//!
//! Every error records the file and line where it was raised. Provider failures
//! are normalized into [`ApiError`]; everything else is a local failure.

mod api;
mod config;
mod http;
mod io;
mod json;
mod response;

pub use api::ApiError;
pub use config::ConfigError;
pub use http::HttpError;
pub use io::IoError;
pub use json::JsonError;
pub use response::ResponseError;

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum AnemoErrorKind {
    /// Provider returned a non-success status
    #[display("{}", _0)]
    Api(ApiError),
    /// Transport failure
    #[display("{}", _0)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[display("{}", _0)]
    Json(JsonError),
    /// Configuration error
    #[display("{}", _0)]
    Config(ConfigError),
    /// Reading a payload from disk failed
    #[display("{}", _0)]
    Io(IoError),
    /// Payload lacks an expected field
    #[display("{}", _0)]
    Response(ResponseError),
}

/// Anemo error with kind discrimination.
///
/// `Display` is transparent, so a provider failure prints exactly the
/// provider's message.
///
/// # Examples
///
/// ```
/// use anemo_error::{AnemoError, ApiError};
///
/// let body = r#"{"error":{"message":"No such model"}}"#;
/// let err: AnemoError = ApiError::from_body(404, body).into();
/// assert_eq!(err.to_string(), "No such model");
/// assert_eq!(err.api().map(|e| e.status), Some(404));
/// ```
#[derive(Debug)]
pub struct AnemoError(Box<AnemoErrorKind>);

impl AnemoError {
    /// Create a new error from a kind.
    pub fn new(kind: AnemoErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AnemoErrorKind {
        &self.0
    }

    /// Returns the provider failure, if this is one.
    pub fn api(&self) -> Option<&ApiError> {
        match self.kind() {
            AnemoErrorKind::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl std::fmt::Display for AnemoError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for AnemoError {}

// Generic From implementation for any type that converts to AnemoErrorKind
impl<T> From<T> for AnemoError
where
    T: Into<AnemoErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Anemo operations.
pub type AnemoResult<T> = std::result::Result<T, AnemoError>;
