//! Stateful conversations over the chat and completion endpoints.

use anemo_client::{Client, CreateChatCompletionRequest, CreateCompletionRequest};
use anemo_core::{ChatCompletion, ChatMessage, Completion, Transcript};
use anemo_error::{AnemoResult, ConfigError};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Model used by [`ChatSession`] when none is given.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Model used by [`CompletionSession`] when none is given.
pub const DEFAULT_COMPLETION_MODEL: &str = "text-davinci-003";

/// Completion requests would otherwise get the provider's 16-token default.
const COMPLETION_MAX_TOKENS: u32 = 256;

/// Keeps the model from writing the user's next line.
const COMPLETION_STOP: &str = "\nUser:";

/// A transcript plus the endpoint that extends it.
///
/// Implementations append a user turn and the model's reply on success and
/// leave the transcript untouched on failure.
#[async_trait]
pub trait Conversation: Send {
    /// Sends `input` as the next user turn and returns the assistant's reply.
    async fn respond(&mut self, input: &str) -> AnemoResult<ChatMessage>;

    /// Clears the transcript, returning how many messages were dropped.
    fn reset(&mut self) -> usize;

    /// Messages exchanged so far.
    fn transcript(&self) -> &Transcript;

    /// Name printed before each reply.
    fn label(&self) -> String;
}

/// Conversation over `/chat/completions`.
///
/// # Examples
///
/// ```
/// use anemo::{ChatSession, Client, ClientConfig, Conversation, MockTransport};
/// use serde_json::json;
/// use std::sync::Arc;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let mock = MockTransport::new();
/// mock.push_json(200, json!({
///     "choices": [{"index": 0, "message": {"role": "assistant", "content": "hello"}}]
/// }));
///
/// let config = ClientConfig::default();
/// let client = Client::with_transport("sk-test", config, Arc::new(mock)).unwrap();
/// let mut session = ChatSession::new(client, "gpt-3.5-turbo");
///
/// let reply = session.respond("hi").await.unwrap();
/// assert_eq!(reply.content(), "hello");
/// assert_eq!(session.transcript().len(), 2);
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ChatSession {
    client: Client,
    model: String,
    transcript: Transcript,
}

impl ChatSession {
    /// Starts an empty conversation with `model`.
    pub fn new(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            transcript: Transcript::new(),
        }
    }

    /// Model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Conversation for ChatSession {
    #[instrument(skip_all, fields(model = %self.model, history = self.transcript.len()))]
    async fn respond(&mut self, input: &str) -> AnemoResult<ChatMessage> {
        let turn = ChatMessage::user(input);
        let mut messages = self.transcript.messages().to_vec();
        messages.push(turn.clone());

        let request = CreateChatCompletionRequest::new(self.model.clone(), messages);
        let payload = self.client.create_chat_completion(&request).await?;
        let reply = ChatCompletion::first_message(&payload)?;

        self.transcript.push(turn);
        self.transcript.push(reply.clone());
        debug!(history = self.transcript.len(), "Chat turn complete");
        Ok(reply)
    }

    fn reset(&mut self) -> usize {
        self.transcript.clear()
    }

    fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn label(&self) -> String {
        format!("ChatGPT ({})", self.model)
    }
}

/// Conversation over `/completions`, replaying the transcript as a plain-text
/// prompt on every turn.
#[derive(Debug, Clone)]
pub struct CompletionSession {
    client: Client,
    model: String,
    transcript: Transcript,
}

impl CompletionSession {
    /// Starts an empty conversation with `model`.
    pub fn new(client: Client, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            transcript: Transcript::new(),
        }
    }

    /// Model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Conversation for CompletionSession {
    #[instrument(skip_all, fields(model = %self.model, history = self.transcript.len()))]
    async fn respond(&mut self, input: &str) -> AnemoResult<ChatMessage> {
        let turn = ChatMessage::user(input);
        let mut pending = self.transcript.clone();
        pending.push(turn.clone());

        let request = CreateCompletionRequest::builder()
            .model(self.model.clone())
            .prompt(pending.render_prompt())
            .max_tokens(COMPLETION_MAX_TOKENS)
            .stop(COMPLETION_STOP)
            .build()
            .map_err(|e| ConfigError::new(format!("Invalid completion request: {}", e)))?;

        let payload = self.client.create_completion(&request).await?;
        let reply = ChatMessage::assistant(Completion::first_text(&payload)?.trim());

        self.transcript.push(turn);
        self.transcript.push(reply.clone());
        debug!(history = self.transcript.len(), "Completion turn complete");
        Ok(reply)
    }

    fn reset(&mut self) -> usize {
        self.transcript.clear()
    }

    fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    fn label(&self) -> String {
        format!("GPT ({})", self.model)
    }
}
