/*!
 * Tests for the provider-backed translation service
 */

use lrc_translator::errors::FailureKind;
use lrc_translator::translation::{TranslationService, TranslationSettings, Translator};
use crate::common::mock_providers::{MockErrorType, MockOpenAI};

fn service(mock: MockOpenAI) -> TranslationService<MockOpenAI> {
    TranslationService::new(mock, TranslationSettings::default())
}

/// Test that each call sends one request with the fixed instruction and settings
#[tokio::test]
async fn test_translate_shouldSendPromptAndSettings() {
    let service = service(MockOpenAI::new().reply_with("Hello world"));

    let translated = service.translate("Bonjour le monde", "en").await.unwrap();
    assert_eq!(translated, "Hello world");

    let tracker = service.provider().tracker();
    let tracker = tracker.lock().unwrap();
    assert_eq!(tracker.call_count, 1);

    let request = &tracker.requests[0];
    assert_eq!(request.model, "gpt-3.5-turbo");
    assert_eq!(request.max_tokens, Some(1024));
    assert_eq!(request.stop, Some(vec!["STOP".to_string()]));
    assert_eq!(request.temperature, Some(0.1));
    assert_eq!(request.messages.len(), 1);
    assert_eq!(request.messages[0].role, "user");
    assert_eq!(
        request.messages[0].content,
        "Translate \"Bonjour le monde\" to English. Give the result directly. Don't explain. Don't quote output."
    );
}

/// Test that a free-form language name is sent verbatim
#[tokio::test]
async fn test_translate_withLanguageName_shouldUseItInPrompt() {
    let service = service(MockOpenAI::new());
    service.translate("Hola", "Klingon").await.unwrap();

    let tracker = service.provider().tracker();
    let tracker = tracker.lock().unwrap();
    assert!(tracker.requests[0].messages[0].content.ends_with("to Klingon. Give the result directly. Don't explain. Don't quote output."));
}

/// Test that surrounding whitespace of the answer is trimmed
#[tokio::test]
async fn test_translate_withPaddedAnswer_shouldTrim() {
    let service = service(MockOpenAI::new().reply_with("\n  Hello world  \n"));
    assert_eq!(service.translate("Bonjour le monde", "en").await.unwrap(), "Hello world");
}

/// Test that a response without candidates yields an empty translation
#[tokio::test]
async fn test_translate_withNoChoices_shouldReturnEmptyText() {
    let service = service(MockOpenAI::new().reply_empty());
    assert_eq!(service.translate("Bonjour", "en").await.unwrap(), "");
}

/// Test that a null candidate content yields an empty translation
#[tokio::test]
async fn test_translate_withNullContent_shouldReturnEmptyText() {
    let service = service(MockOpenAI::new().reply_null_content());
    assert_eq!(service.translate("Bonjour", "en").await.unwrap(), "");
}

/// Test that provider failures surface with their classification
#[tokio::test]
async fn test_translate_withProviderFailure_shouldPropagateKind() {
    let cases = [
        (MockErrorType::RateLimit, FailureKind::RateLimited),
        (MockErrorType::Connection, FailureKind::Transient),
        (MockErrorType::Auth, FailureKind::Permanent),
        (MockErrorType::Api, FailureKind::Permanent),
    ];

    for (error_type, expected) in cases {
        let service = service(MockOpenAI::new());
        service.provider().fail_next_call(error_type);

        let error = service.translate("Bonjour", "en").await.unwrap_err();
        assert_eq!(error.kind(), expected, "for {:?}", error_type);
    }
}

/// Test that custom settings reach the request
#[tokio::test]
async fn test_translate_withCustomSettings_shouldUseThem() {
    let settings = TranslationSettings {
        model: "gpt-4o-mini".to_string(),
        temperature: 0.0,
        max_tokens: 256,
        stop: Vec::new(),
    };
    let service = TranslationService::new(MockOpenAI::new(), settings);
    service.translate("Hola", "fr").await.unwrap();

    let tracker = service.provider().tracker();
    let tracker = tracker.lock().unwrap();
    let request = &tracker.requests[0];
    assert_eq!(request.model, "gpt-4o-mini");
    assert_eq!(request.max_tokens, Some(256));
    assert_eq!(request.stop, None);
}
