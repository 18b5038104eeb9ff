//! Tests for provider error envelope normalization.

use anemo_error::{AnemoError, AnemoErrorKind, ApiError, ConfigError, HttpError};
use serde_json::json;

#[test]
fn test_envelope_message_is_display_text() {
    let body = json!({
        "error": {
            "message": "Invalid API key",
            "type": "invalid_request_error",
            "param": null,
            "code": "invalid_api_key"
        }
    });

    let err = ApiError::from_body(401, &body.to_string());

    assert_eq!(err.to_string(), "Invalid API key");
    assert_eq!(err.status, 401);
    assert_eq!(err.error_type.as_deref(), Some("invalid_request_error"));
    assert_eq!(err.code.as_deref(), Some("invalid_api_key"));
    assert_eq!(err.param, None);
    assert_eq!(err.envelope, body);
}

#[test]
fn test_detail_returns_inner_error_object() {
    let body = json!({"error": {"message": "quota", "type": "insufficient_quota"}});
    let err = ApiError::from_body(429, &body.to_string());

    assert_eq!(err.detail(), Some(&json!({"message": "quota", "type": "insufficient_quota"})));
}

#[test]
fn test_numeric_code_is_stringified() {
    let body = json!({"error": {"message": "boom", "code": 500}});
    let err = ApiError::from_body(500, &body.to_string());

    assert_eq!(err.code.as_deref(), Some("500"));
    assert_eq!(err.error_type, None);
}

#[test]
fn test_non_json_body_becomes_message() {
    let err = ApiError::from_body(502, "  Bad Gateway\n");

    assert_eq!(err.to_string(), "Bad Gateway");
    assert!(err.envelope.is_null());
    assert!(err.detail().is_none());
}

#[test]
fn test_empty_body_falls_back_to_status() {
    let err = ApiError::from_body(503, "");
    assert_eq!(err.to_string(), "HTTP 503");
}

#[test]
fn test_json_without_envelope_keeps_body_text() {
    let err = ApiError::from_body(400, r#"{"detail":"nope"}"#);

    assert_eq!(err.message, r#"{"detail":"nope"}"#);
    assert_eq!(err.envelope, json!({"detail": "nope"}));
}

#[test]
fn test_anemo_error_is_transparent_for_api_failures() {
    let err: AnemoError =
        ApiError::from_body(401, r#"{"error":{"message":"Invalid API key"}}"#).into();

    assert_eq!(err.to_string(), "Invalid API key");
    assert!(matches!(err.kind(), AnemoErrorKind::Api(_)));
    assert_eq!(err.api().map(|e| e.status), Some(401));
}

#[test]
fn test_local_errors_carry_location() {
    let err: AnemoError = HttpError::new("connection refused").into();
    let text = err.to_string();

    assert!(text.starts_with("HTTP Error: connection refused"));
    assert!(text.contains("api_error_test.rs"));
    assert!(err.api().is_none());

    let err: AnemoError = ConfigError::new("missing key").into();
    assert!(matches!(err.kind(), AnemoErrorKind::Config(_)));
}
