//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Deserializer, Serialize};

/// One role/content turn in a chat transcript.
///
/// # Examples
///
/// ```
/// use anemo_core::{ChatMessage, Role};
///
/// let message = ChatMessage::user("Hello!");
///
/// assert_eq!(*message.role(), Role::User);
/// assert_eq!(message.content(), "Hello!");
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct ChatMessage {
    /// The role of the message author
    role: Role,
    /// Text of the turn; a `null` from the provider reads as empty
    #[serde(default, deserialize_with = "null_as_empty")]
    content: String,
    /// Optional participant name
    #[builder(default)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl ChatMessage {
    /// Creates a new message with the given role and content.
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            name: None,
        }
    }

    /// A `system` turn.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(Role::System, content)
    }

    /// A `user` turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// An `assistant` turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// Returns a builder for constructing a ChatMessage.
    pub fn builder() -> ChatMessageBuilder {
        ChatMessageBuilder::default()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
