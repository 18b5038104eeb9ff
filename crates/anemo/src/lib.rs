//! Minimal client for the OpenAI REST API, plus the conversation helpers
//! behind the `anemo-chat` and `anemo-complete` demos.
//!
//! The client lives in [`anemo_client`]; this crate re-exports it together
//! with the core types and errors.

mod conversation;
pub mod repl;

pub use anemo_client::*;
pub use anemo_core::*;
pub use anemo_error::*;
pub use conversation::{
    ChatSession, CompletionSession, Conversation, DEFAULT_CHAT_MODEL, DEFAULT_COMPLETION_MODEL,
};
