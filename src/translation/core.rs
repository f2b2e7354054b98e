/*!
 * Core translation service implementation.
 *
 * This module contains the `Translator` seam used by the lyrics pipeline and
 * the `TranslationService` that fulfils it through an LLM provider.
 */

use async_trait::async_trait;
use log::debug;

use crate::app_config::TranslationConfig;
use crate::errors::TranslationError;
use crate::language_utils;
use crate::providers::Provider;
use crate::providers::openai::{OpenAI, OpenAIRequest, OpenAIResponse};

/// Text-in/text-out translation capability
///
/// The pipeline only depends on this trait, so the service can be replaced by
/// a test double.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into `target_language`
    ///
    /// # Returns
    /// * `Result<String, TranslationError>` - The translated text, trimmed
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError>;
}

#[async_trait]
impl<T: Translator + ?Sized> Translator for &T {
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        (**self).translate(text, target_language).await
    }
}

/// Per-call generation settings, identical for every request of a run
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationSettings {
    /// Model name
    pub model: String,
    /// Sampling temperature, kept low for near-deterministic output
    pub temperature: f32,
    /// Hard cap on response length
    pub max_tokens: u32,
    /// Stop sequences
    pub stop: Vec<String>,
}

impl Default for TranslationSettings {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".to_string(),
            temperature: 0.1,
            max_tokens: 1024,
            stop: vec!["STOP".to_string()],
        }
    }
}

impl From<&TranslationConfig> for TranslationSettings {
    fn from(config: &TranslationConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            stop: config.stop.clone(),
        }
    }
}

/// Build the instruction sent for one lyric line
pub fn build_prompt(text: &str, target_language: &str) -> String {
    format!(
        "Translate \"{}\" to {}. Give the result directly. Don't explain. Don't quote output.",
        text,
        language_utils::prompt_language_name(target_language)
    )
}

/// Translation service backed by a chat completions provider
#[derive(Debug)]
pub struct TranslationService<P = OpenAI> {
    /// Provider client
    provider: P,

    /// Settings applied to every request
    pub settings: TranslationSettings,
}

impl TranslationService<OpenAI> {
    /// Create a service talking to the configured OpenAI-compatible endpoint
    pub fn from_config(config: &TranslationConfig) -> Self {
        let client = OpenAI::new_with_config(
            config.api_key.clone(),
            config.endpoint.clone(),
            config.timeout_secs,
        );
        Self::new(client, TranslationSettings::from(config))
    }
}

impl<P> TranslationService<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    /// Create a new translation service around a provider
    pub fn new(provider: P, settings: TranslationSettings) -> Self {
        Self { provider, settings }
    }

    /// Access the underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Build the request for one text
    pub fn build_request(&self, text: &str, target_language: &str) -> OpenAIRequest {
        OpenAIRequest::new(self.settings.model.clone())
            .add_message("user", build_prompt(text, target_language))
            .temperature(self.settings.temperature)
            .max_tokens(self.settings.max_tokens)
            .stop(self.settings.stop.iter().cloned())
    }
}

#[async_trait]
impl<P> Translator for TranslationService<P>
where
    P: Provider<Request = OpenAIRequest, Response = OpenAIResponse>,
{
    async fn translate(&self, text: &str, target_language: &str) -> Result<String, TranslationError> {
        let request = self.build_request(text, target_language);
        let response = self.provider.complete(request).await?;

        if response.choices.is_empty() {
            debug!("Provider returned no candidates for {:?}", text);
        }

        Ok(P::extract_text(&response).trim().to_string())
    }
}
