//! Minimal typed views over provider payloads.
//!
//! The client hands back raw JSON. These views pull out the one field the
//! conversation helpers need and ignore the rest.

use crate::ChatMessage;
use anemo_error::{AnemoResult, JsonError, ResponseError};
use serde::Deserialize;
use serde_json::Value;

/// A choice in a chat completion payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    /// The generated turn
    pub message: ChatMessage,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Chat completion payload, reduced to its choices.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    /// Response choices
    pub choices: Vec<ChatChoice>,
}

impl ChatCompletion {
    /// Reads `choices[0].message` out of a raw chat completion payload.
    ///
    /// # Errors
    ///
    /// Returns a JSON error if the payload does not match the chat completion
    /// shape, or a response error if it has no choices.
    pub fn first_message(payload: &Value) -> AnemoResult<ChatMessage> {
        let completion = ChatCompletion::deserialize(payload).map_err(|e| {
            JsonError::new(format!("Unexpected chat completion payload: {}", e))
        })?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message)
            .ok_or_else(|| ResponseError::new("Chat completion returned no choices").into())
    }
}

/// A choice in a text completion payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionChoice {
    /// Generated text
    pub text: String,
    /// Reason for finishing
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Text completion payload, reduced to its choices.
#[derive(Debug, Clone, Deserialize)]
pub struct Completion {
    /// Response choices
    pub choices: Vec<CompletionChoice>,
}

impl Completion {
    /// Reads `choices[0].text` out of a raw completion payload.
    ///
    /// # Errors
    ///
    /// Returns a JSON error on a shape mismatch or a response error when there
    /// are no choices.
    pub fn first_text(payload: &Value) -> AnemoResult<String> {
        let completion = Completion::deserialize(payload)
            .map_err(|e| JsonError::new(format!("Unexpected completion payload: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| ResponseError::new("Completion returned no choices").into())
    }
}
