/*!
 * Mock provider implementations for testing
 *
 * This module provides a mock of the OpenAI provider to avoid external API
 * calls in tests. It implements the Provider trait, records every request
 * and returns predetermined responses.
 */

use async_trait::async_trait;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

use lrc_translator::errors::ProviderError;
use lrc_translator::providers::Provider;
use lrc_translator::providers::openai::{OpenAIChoice, OpenAIChoiceMessage, OpenAIRequest, OpenAIResponse, TokenUsage};

/// Tracks API calls to ensure no actual external requests are made
#[derive(Debug, Default)]
pub struct ApiCallTracker {
    /// Count of mock API calls made
    pub call_count: usize,
    /// Requests received, oldest first
    pub requests: Vec<OpenAIRequest>,
    /// Error to return on the next call, if any
    pub fail_next: Option<MockErrorType>,
}

/// Type of error to simulate
#[derive(Debug, Clone, Copy)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    Auth,
    /// Connection error
    Connection,
    /// Rate limit error
    RateLimit,
    /// API error
    Api,
}

/// Scripted answer of the mock
#[derive(Debug, Clone)]
enum Reply {
    /// One candidate with this content
    Text(String),
    /// One candidate with `"content": null`
    NullContent,
    /// No candidate at all
    NoChoices,
}

/// Mock implementation of OpenAI provider
#[derive(Debug)]
pub struct MockOpenAI {
    tracker: Arc<Mutex<ApiCallTracker>>,
    /// Queued responses, oldest first
    replies: Arc<Mutex<VecDeque<Reply>>>,
}

impl MockOpenAI {
    /// Create a new mock OpenAI provider
    pub fn new() -> Self {
        MockOpenAI {
            tracker: Arc::new(Mutex::new(ApiCallTracker::default())),
            replies: Arc::new(Mutex::new(VecDeque::new())),
        }
    }

    /// Queue the content of the next response
    pub fn reply_with(self, content: &str) -> Self {
        self.replies.lock().unwrap().push_back(Reply::Text(content.to_string()));
        self
    }

    /// Queue a candidate whose content is null
    pub fn reply_null_content(self) -> Self {
        self.replies.lock().unwrap().push_back(Reply::NullContent);
        self
    }

    /// Queue a response without any choice
    pub fn reply_empty(self) -> Self {
        self.replies.lock().unwrap().push_back(Reply::NoChoices);
        self
    }

    /// Get the API call tracker
    pub fn tracker(&self) -> Arc<Mutex<ApiCallTracker>> {
        self.tracker.clone()
    }

    /// Configure the mock to fail on the next call
    pub fn fail_next_call(&self, error_type: MockErrorType) {
        self.tracker.lock().unwrap().fail_next = Some(error_type);
    }
}

#[async_trait]
impl Provider for MockOpenAI {
    type Request = OpenAIRequest;
    type Response = OpenAIResponse;

    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let mut tracker = self.tracker.lock().unwrap();
        tracker.call_count += 1;
        tracker.requests.push(request);

        if let Some(error_type) = tracker.fail_next.take() {
            return Err(match error_type {
                MockErrorType::Auth => ProviderError::AuthenticationError("Invalid API key".into()),
                MockErrorType::Connection => ProviderError::ConnectionError("Connection failed".into()),
                MockErrorType::RateLimit => ProviderError::RateLimitExceeded {
                    message: "Rate limit exceeded".into(),
                    retry_after_secs: Some(20),
                },
                MockErrorType::Api => ProviderError::ApiError {
                    status_code: 400,
                    message: "Bad request".into(),
                },
            });
        }

        let reply = self.replies.lock().unwrap().pop_front()
            .unwrap_or_else(|| Reply::Text("This is a mock response from OpenAI.".to_string()));

        let choice = |content: Option<String>| OpenAIChoice {
            message: OpenAIChoiceMessage {
                role: Some("assistant".into()),
                content,
            },
        };
        let choices = match reply {
            Reply::Text(text) => vec![choice(Some(text))],
            Reply::NullContent => vec![choice(None)],
            Reply::NoChoices => Vec::new(),
        };

        Ok(OpenAIResponse {
            choices,
            usage: Some(TokenUsage {
                prompt_tokens: 10,
                completion_tokens: 20,
                total_tokens: 30,
            }),
        })
    }

    fn extract_text(response: &Self::Response) -> String {
        response.choices.first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default()
    }
}
