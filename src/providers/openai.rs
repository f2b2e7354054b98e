use std::time::Duration;
use async_trait::async_trait;
use serde::{Serialize, Deserialize};
use reqwest::{Client, StatusCode, header};
use log::{debug, error};

use crate::errors::ProviderError;
use crate::providers::Provider;

/// OpenAI client for the chat completions API
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL (optional, defaults to public API)
    endpoint: String,
}

/// Chat completions request
#[derive(Debug, Serialize, Default, Clone)]
pub struct OpenAIRequest {
    /// The model to use
    pub model: String,

    /// The messages for the conversation
    pub messages: Vec<OpenAIMessage>,

    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Maximum number of tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sequences where the API stops generating
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

/// Chat message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAIMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Token usage information
#[derive(Debug, Clone, Deserialize)]
pub struct TokenUsage {
    /// Number of prompt tokens
    pub prompt_tokens: u32,
    /// Number of completion tokens
    pub completion_tokens: u32,
    /// Total number of tokens
    pub total_tokens: u32,
}

/// Chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIResponse {
    /// Candidate completions
    #[serde(default)]
    pub choices: Vec<OpenAIChoice>,
    /// Token usage information
    #[serde(default)]
    pub usage: Option<TokenUsage>,
}

/// Single candidate in a chat completions response
#[derive(Debug, Clone, Deserialize)]
pub struct OpenAIChoice {
    /// The generated message
    pub message: OpenAIChoiceMessage,
}

/// Message of a candidate; servers send `"content": null` for refusals and tool calls
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OpenAIChoiceMessage {
    /// Role of the message sender
    #[serde(default)]
    pub role: Option<String>,

    /// Generated text, if any
    #[serde(default)]
    pub content: Option<String>,
}

impl OpenAIRequest {
    /// Create a new request for a model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(OpenAIMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum number of generated tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the stop sequences; an empty list leaves the field out
    pub fn stop<I, S>(mut self, stop: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let stop: Vec<String> = stop.into_iter().map(Into::into).collect();
        self.stop = if stop.is_empty() { None } else { Some(stop) };
        self
    }
}

impl OpenAI {
    /// Create a new OpenAI client with the default timeout
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self::new_with_config(api_key, endpoint, 120)
    }

    /// Create a new OpenAI client with a request timeout
    pub fn new_with_config(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// Full URL of the chat completions endpoint
    pub fn completions_url(&self) -> String {
        if self.endpoint.is_empty() {
            "https://api.openai.com/v1/chat/completions".to_string()
        } else {
            format!("{}/chat/completions", self.endpoint.trim_end_matches('/'))
        }
    }

    /// Map a non-success HTTP status to a provider error
    fn error_for_status(status: StatusCode, retry_after_secs: Option<u64>, body: String) -> ProviderError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded {
                message: body,
                retry_after_secs,
            },
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ProviderError::AuthenticationError(body)
            }
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body,
            },
        }
    }
}

#[async_trait]
impl Provider for OpenAI {
    type Request = OpenAIRequest;
    type Response = OpenAIResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let api_url = self.completions_url();

        let response = self.client.post(&api_url)
            .header(header::CONTENT_TYPE, "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::ConnectionError(format!("Failed to send request to OpenAI API: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let retry_after_secs = response.headers()
                .get(header::RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok());
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(Self::error_for_status(status, retry_after_secs, error_text));
        }

        let openai_response = response.json::<OpenAIResponse>().await
            .map_err(|e| ProviderError::ParseError(format!("Failed to parse OpenAI API response: {}", e)))?;

        if let Some(usage) = &openai_response.usage {
            debug!(
                "OpenAI token usage: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(openai_response)
    }

    fn extract_text(response: &Self::Response) -> String {
        response.choices.first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}
