//! Core data types for the Anemo API client.
//!
//! This crate provides the conversation types shared by the client and the
//! interactive demos.

mod message;
mod observability;
mod response;
mod role;
mod transcript;

pub use message::{ChatMessage, ChatMessageBuilder};
pub use observability::init_tracing;
pub use response::{ChatChoice, ChatCompletion, Completion, CompletionChoice};
pub use role::Role;
pub use transcript::Transcript;
