//! Append-only conversation transcript.

use crate::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

/// Ordered turns of one conversation, held in memory only.
///
/// Turns are only ever appended; [`Transcript::clear`] is the single way to
/// shorten it.
///
/// # Examples
///
/// ```
/// use anemo_core::{ChatMessage, Transcript};
///
/// let mut transcript = Transcript::default();
/// transcript.push(ChatMessage::user("hi"));
/// transcript.push(ChatMessage::assistant("hello"));
///
/// assert_eq!(transcript.len(), 2);
/// assert_eq!(transcript.clear(), 2);
/// assert!(transcript.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    /// Creates an empty transcript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a turn.
    pub fn push(&mut self, message: ChatMessage) {
        self.messages.push(message);
    }

    /// Drops every turn, returning how many there were.
    #[tracing::instrument(skip(self), fields(len = self.messages.len()))]
    pub fn clear(&mut self) -> usize {
        let count = self.messages.len();
        self.messages.clear();
        tracing::debug!(count, "Cleared transcript");
        count
    }

    /// Number of turns.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no turns have been recorded.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The turns in the order they occurred.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Most recent turn.
    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }

    /// Iterates the turns in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChatMessage> {
        self.messages.iter()
    }

    /// Renders the transcript as a plain-text prompt for the completions
    /// endpoint, ending with an open assistant line.
    ///
    /// ```
    /// use anemo_core::{ChatMessage, Transcript};
    ///
    /// let mut transcript = Transcript::new();
    /// transcript.push(ChatMessage::user("hi"));
    ///
    /// assert_eq!(transcript.render_prompt(), "User: hi\nAssistant:");
    /// ```
    pub fn render_prompt(&self) -> String {
        let mut prompt = String::new();
        for message in &self.messages {
            let speaker = match message.role() {
                Role::System => "System",
                Role::User => "User",
                Role::Assistant => "Assistant",
            };
            prompt.push_str(speaker);
            prompt.push_str(": ");
            prompt.push_str(message.content());
            prompt.push('\n');
        }
        prompt.push_str("Assistant:");
        prompt
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a ChatMessage;
    type IntoIter = std::slice::Iter<'a, ChatMessage>;

    fn into_iter(self) -> Self::IntoIter {
        self.messages.iter()
    }
}
