/*!
 * Error types for the lrc-translator application.
 *
 * This module contains custom error types for the different stages of a run,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Broad classification of a provider failure
///
/// Every kind is currently fatal for a run; the classification exists so that
/// a retry policy can tell throttling apart from outages and hard rejections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The provider asked us to slow down
    RateLimited,
    /// The request might succeed if sent again later
    Transient,
    /// The request will keep failing as sent
    Permanent,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::RateLimited => "rate-limited",
            Self::Transient => "transient",
            Self::Permanent => "permanent",
        };
        write!(f, "{}", name)
    }
}

/// Errors that can occur when working with provider APIs
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error related to rate limiting
    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Error message from the API
        message: String,
        /// Seconds the API asked us to wait, from the Retry-After header
        retry_after_secs: Option<u64>,
    },

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

impl ProviderError {
    /// Classify this failure for retry decisions
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::RateLimitExceeded { .. } => FailureKind::RateLimited,
            Self::ConnectionError(_) | Self::RequestFailed(_) => FailureKind::Transient,
            Self::ApiError { status_code, .. } if *status_code >= 500 => FailureKind::Transient,
            Self::ApiError { .. } | Self::AuthenticationError(_) | Self::ParseError(_) => {
                FailureKind::Permanent
            }
        }
    }
}

/// Errors that can occur during translation
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl TranslationError {
    /// Classify the underlying failure
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::Provider(e) => e.kind(),
        }
    }
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// A required setting is missing or invalid; nothing was processed
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Translation of a lyric line failed and the run was stopped
    #[error("Translation error at line {line_number}: {source}")]
    Translation {
        /// 1-based input line number that failed
        line_number: usize,
        /// Underlying failure
        source: TranslationError,
    },
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
