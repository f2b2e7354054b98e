/*!
 * # lrc-translator - Bilingual LRC lyrics with AI
 *
 * A Rust library for turning a timed lyrics file (LRC) into a bilingual one
 * by translating each lyric line through an LLM provider.
 *
 * ## Features
 *
 * - Translate the lyrics of every timed line, one request per line
 * - Keep timestamps and metadata lines byte-for-byte
 * - Emit `timestamp + translation + "|" + original` lines in input order
 * - Pace requests to stay under the provider's rate limit
 * - Stop at the first failure, leaving the lines written so far on disk
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `lyrics_processor`: Line classification, splitting and assembly
 * - `translation`: AI-powered translation pipeline:
 *   - `translation::core`: Translator seam and provider-backed service
 *   - `translation::pacing`: Request pacing
 *   - `translation::pipeline`: Sequential line driver
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for LLM providers:
 *   - `providers::openai`: OpenAI API client
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod lyrics_processor;
pub mod providers;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::{Config, JobPaths};
pub use app_controller::Controller;
pub use errors::{AppError, FailureKind, ProviderError, TranslationError};
pub use lyrics_processor::{LineKind, LrcLine, LyricSegments, assemble_line, classify_line};
pub use translation::{LyricsPipeline, PipelineSummary, TranslationService, Translator};
