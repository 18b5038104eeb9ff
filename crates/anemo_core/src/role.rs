//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Author of a conversational turn, serialized in lowercase on the wire.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions framing the conversation
    #[display("system")]
    System,
    /// The person at the prompt
    #[display("user")]
    User,
    /// The model
    #[display("assistant")]
    Assistant,
}
