//! Provider-reported failures.

use serde_json::Value;

/// A non-success response from the provider, normalized from its error envelope.
///
/// The provider wraps failures as `{"error": {"message": ..., "type": ..., "code": ...}}`.
/// `Display` renders only the provider's message; the remaining fields and the
/// untouched envelope are kept for callers who want programmatic detail.
///
/// # Examples
///
/// ```
/// use anemo_error::ApiError;
/// use serde_json::json;
///
/// let body = json!({
///     "error": {"message": "Invalid API key", "type": "invalid_request_error"}
/// });
/// let err = ApiError::from_body(401, &body.to_string());
///
/// assert_eq!(err.to_string(), "Invalid API key");
/// assert_eq!(err.error_type.as_deref(), Some("invalid_request_error"));
/// assert_eq!(err.status, 401);
/// ```
#[derive(Debug, Clone)]
pub struct ApiError {
    /// HTTP status code
    pub status: u16,
    /// Provider's human-readable message
    pub message: String,
    /// Provider's error type, e.g. `invalid_request_error`
    pub error_type: Option<String>,
    /// Provider's error code, when present
    pub code: Option<String>,
    /// Request parameter the provider blamed, when present
    pub param: Option<String>,
    /// The full error envelope as returned, or `Value::Null` for non-JSON bodies
    pub envelope: Value,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ApiError {
    /// Builds an error from a status code and a raw response body.
    ///
    /// Bodies that are not an error envelope still produce an error: the raw text
    /// becomes the message, or `HTTP <status>` when the body is empty.
    #[track_caller]
    pub fn from_body(status: u16, body: &str) -> Self {
        let location = std::panic::Location::caller();
        let parsed = serde_json::from_str::<Value>(body).ok();

        let detail = parsed
            .as_ref()
            .and_then(|v| v.get("error"))
            .filter(|e| e.is_object());

        let field = |name: &str| -> Option<String> {
            detail.and_then(|e| e.get(name)).and_then(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Null => None,
                other => Some(other.to_string()),
            })
        };

        let message = field("message").unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                format!("HTTP {}", status)
            } else {
                trimmed.to_string()
            }
        });

        Self {
            status,
            message,
            error_type: field("type"),
            code: field("code"),
            param: field("param"),
            envelope: parsed.unwrap_or(Value::Null),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Returns the `error` object inside the envelope, if there was one.
    pub fn detail(&self) -> Option<&Value> {
        self.envelope.get("error")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}
