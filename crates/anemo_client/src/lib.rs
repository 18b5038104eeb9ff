//! Client for the OpenAI REST API.
//!
//! [`Client`] maps each method to one HTTP request: bearer-token
//! authentication, a JSON or multipart body, and the provider's JSON payload
//! handed back unchanged. Non-success responses become
//! [`ApiError`](anemo_error::ApiError) carrying the provider's message and
//! error envelope. There is no retry, pagination or streaming.
//!
//! ```no_run
//! use anemo_client::{Client, ClientConfig, CreateChatCompletionRequest};
//! use anemo_core::ChatMessage;
//!
//! # async fn run() -> anemo_error::AnemoResult<()> {
//! let client = Client::from_env(ClientConfig::default())?;
//! let request = CreateChatCompletionRequest::new("gpt-3.5-turbo", vec![ChatMessage::user("hi")]);
//! let payload = client.create_chat_completion(&request).await?;
//! println!("{}", payload["choices"][0]["message"]["content"]);
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod endpoints;
mod mock;
mod request;
mod transport;

pub use client::{Client, ORGANIZATION_HEADER};
pub use config::{
    API_KEY_ENV, CONFIG_ENV_PREFIX, ClientConfig, ClientConfigBuilder, DEFAULT_BASE_URL,
    RequestOptions,
};
pub use endpoints::*;
pub use mock::MockTransport;
pub use request::{ApiRequest, Body, FilePart, Form, FormPart, FormValue, MultipartBody};
pub use transport::{RawResponse, ReqwestTransport, Transport};

pub use reqwest::Method;
