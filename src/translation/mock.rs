/*!
 * Mock translator implementations for testing.
 *
 * This module provides a scripted `Translator` that simulates different behaviors:
 * - `MockTranslator::working()` - Always succeeds with a tagged translation
 * - `MockTranslator::failing_on(n)` - Fails on the nth call, succeeds otherwise
 * - `MockTranslator::failing()` - Always fails with an error
 */

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::errors::{ProviderError, TranslationError};
use crate::translation::core::Translator;

/// One recorded call to the mock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockCall {
    /// The text to translate
    pub text: String,
    /// Target language
    pub target_language: String,
}

/// Error the mock raises when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockFailure {
    /// HTTP 429 from the provider
    RateLimited,
    /// HTTP 500 from the provider
    ServerError,
    /// Rejected credentials
    Unauthorized,
}

impl MockFailure {
    fn to_error(self, call: usize) -> ProviderError {
        match self {
            Self::RateLimited => ProviderError::RateLimitExceeded {
                message: format!("Simulated rate limit (request #{})", call),
                retry_after_secs: Some(20),
            },
            Self::ServerError => ProviderError::ApiError {
                status_code: 500,
                message: format!("Simulated provider failure (request #{})", call),
            },
            Self::Unauthorized => {
                ProviderError::AuthenticationError("Simulated invalid API key".to_string())
            }
        }
    }
}

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Fails on the given 1-based call number only
    FailOnCall { call: usize, failure: MockFailure },
    /// Always fails
    Failing(MockFailure),
}

/// Mock translator for testing pipeline behavior
#[derive(Debug, Clone)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Fixed answers by source text; unmatched text gets a tagged echo
    dictionary: HashMap<String, String>,
    /// Calls received so far, shared between clones
    calls: Arc<Mutex<Vec<MockCall>>>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            dictionary: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a mock that fails on the nth call with a server error
    pub fn failing_on(call: usize) -> Self {
        Self::new(MockBehavior::FailOnCall { call, failure: MockFailure::ServerError })
    }

    /// Create a mock that always fails with a server error
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing(MockFailure::ServerError))
    }

    /// Answer `source` with `translation`
    pub fn with_translation(mut self, source: impl Into<String>, translation: impl Into<String>) -> Self {
        self.dictionary.insert(source.into(), translation.into());
        self
    }

    /// Calls received so far
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|calls| calls.len()).unwrap_or_default()
    }

    fn answer(&self, text: &str, target_language: &str) -> String {
        match self.dictionary.get(text) {
            Some(translation) => translation.clone(),
            None => format!("[{}] {}", target_language, text.trim()),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        let call = {
            let mut calls = self.calls.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            calls.push(MockCall {
                text: text.to_string(),
                target_language: target_language.to_string(),
            });
            calls.len()
        };

        match self.behavior {
            MockBehavior::Working => Ok(self.answer(text, target_language)),
            MockBehavior::FailOnCall { call: failing, failure } if failing == call => {
                Err(failure.to_error(call).into())
            }
            MockBehavior::FailOnCall { .. } => Ok(self.answer(text, target_language)),
            MockBehavior::Failing(failure) => Err(failure.to_error(call).into()),
        }
    }
}
