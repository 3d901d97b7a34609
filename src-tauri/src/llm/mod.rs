//! # Completion client
//!
//! One round trip to an OpenAI-compatible chat-completion service per
//! request:
//!
//! ```text
//! prompt → [system instruction, user prompt] → backend → first choice text
//! ```
//!
//! - `send`: the HTTP backend that talks to the service
//! - `receive`: reading the reply and turning the outcome into display text
//!
//! Failures come back as [`CompletionError`] values. Nothing is retried.

pub mod receive;
pub mod send;

#[cfg(test)]
pub mod fake;

pub use receive::{first_choice_content, render_answer, render_answer_in, AnswerView};
pub use send::OpenAiBackend;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::Config;
use crate::preprocessing::Locale;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct LLMRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [Message],
}

#[derive(Deserialize, Debug)]
pub struct LLMResponse {
    pub choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API")]
    Connect,
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed - check your API key")]
    Authentication,
    #[error("Access forbidden - insufficient permissions")]
    Forbidden,
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse API response as JSON: {0}")]
    Parse(String),
    #[error("API returned empty response")]
    EmptyResponse,
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    /// Failure reported by a backend that has no finer classification.
    #[error("{0}")]
    Backend(String),
}

/// Transport seam between [`CompletionClient`] and the service.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Sends the conversation and returns the first choice's text.
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;

    fn model_name(&self) -> &str;
}

/// Read-only after construction; shared by every request.
pub struct CompletionClient {
    backend: Box<dyn CompletionBackend>,
}

impl CompletionClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let backend = OpenAiBackend::new(config)?;
        Ok(Self::with_backend(Box::new(backend)))
    }

    pub fn with_backend(backend: Box<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    pub fn model_name(&self) -> &str {
        self.backend.model_name()
    }

    pub async fn get_model_answer(&self, prompt: &str) -> Result<String, CompletionError> {
        self.get_model_answer_in(Locale::English, prompt).await
    }

    /// Successes and failures are logged identically; the caller decides
    /// how to show either.
    #[instrument(skip_all, fields(locale = ?locale, prompt_len = prompt.len()))]
    pub async fn get_model_answer_in(
        &self,
        locale: Locale,
        prompt: &str,
    ) -> Result<String, CompletionError> {
        let messages = [
            Message::system(locale.system_instruction()),
            Message::user(prompt),
        ];

        let start = Instant::now();
        let result = self.backend.complete(&messages).await;

        info!(
            model = self.backend.model_name(),
            ok = result.is_ok(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Completion request finished"
        );

        result
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeBackend;
    use super::*;

    #[tokio::test]
    async fn sends_system_instruction_then_prompt() {
        let backend = FakeBackend::answering("granite");
        let calls = backend.calls();
        let client = CompletionClient::with_backend(Box::new(backend));

        let answer = client.get_model_answer("what is this?").await.unwrap();
        assert_eq!(answer, "granite");

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded.len(), 1);
        assert_eq!(
            recorded[0],
            vec![
                Message::system("You are an expert in rock/stone identification."),
                Message::user("what is this?"),
            ]
        );
    }

    #[tokio::test]
    async fn localized_instruction() {
        let backend = FakeBackend::answering("ok");
        let calls = backend.calls();
        let client = CompletionClient::with_backend(Box::new(backend));

        client
            .get_model_answer_in(Locale::Norwegian, "hei")
            .await
            .unwrap();

        let recorded = calls.lock().unwrap();
        assert_eq!(recorded[0][0].content, "Du er en ekspert på steinidentifikasjon.");
    }

    #[tokio::test]
    async fn failure_is_returned_not_raised() {
        let client = CompletionClient::with_backend(Box::new(FakeBackend::failing("boom")));

        let result = client.get_model_answer("anything").await;
        assert!(matches!(result, Err(CompletionError::Backend(ref m)) if m == "boom"));
    }

    #[test]
    fn roles_serialize_lowercase() {
        assert_eq!(serde_json::to_value(Role::System).unwrap(), "system");
        assert_eq!(serde_json::to_value(Role::User).unwrap(), "user");
        assert!(serde_json::from_str::<Role>("\"assistant\"").is_err());
    }

    #[test]
    fn request_serializes_to_chat_shape() {
        let messages = [Message::system("sys"), Message::user("hi")];
        let body = serde_json::to_value(LLMRequest {
            model: "gpt-3.5-turbo",
            messages: &messages,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-3.5-turbo",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }

    #[test]
    fn client_builds_from_config() {
        let config = Config {
            api_key: "sk-test".to_string(),
            ..Config::default()
        };
        let client = CompletionClient::new(&config).unwrap();
        assert_eq!(client.model_name(), "gpt-3.5-turbo");
    }
}
