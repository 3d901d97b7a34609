use crate::config::Config;
use crate::llm::{
    first_choice_content, CompletionBackend, CompletionError, LLMRequest, LLMResponse, Message,
};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

/// Chat-completion backend speaking the OpenAI wire format.
pub struct OpenAiBackend {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl OpenAiBackend {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let client = Client::builder()
            .build()
            .map_err(|e| CompletionError::ClientBuild(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        })
    }
}

#[async_trait]
impl CompletionBackend for OpenAiBackend {
    async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
        let request_body = LLMRequest {
            model: &self.model,
            messages,
        };
        make_llm_request(&self.client, &self.api_url, &self.api_key, &request_body).await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

/// Makes the actual HTTP request to the completion API
async fn make_llm_request(
    client: &Client,
    api_url: &str,
    api_key: &str,
    request_body: &LLMRequest<'_>,
) -> Result<String, CompletionError> {
    debug!(url = api_url, messages = request_body.messages.len(), "Sending completion request");

    let response = client
        .post(api_url)
        .header("Authorization", format!("Bearer {}", api_key))
        .json(request_body)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                CompletionError::Timeout
            } else if e.is_connect() {
                CompletionError::Connect
            } else {
                CompletionError::Network(e.to_string())
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(match status.as_u16() {
            401 => CompletionError::Authentication,
            403 => CompletionError::Forbidden,
            429 => CompletionError::RateLimited,
            code @ 500..=599 => CompletionError::Server { status: code, body },
            code => CompletionError::Http { status: code, body },
        });
    }

    let llm_response: LLMResponse = response
        .json()
        .await
        .map_err(|e| CompletionError::Parse(e.to_string()))?;

    first_choice_content(llm_response)
}
