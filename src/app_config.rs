use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::errors::AppError;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Target language code (ISO) or language name
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Translation config
    #[serde(default)]
    pub translation: TranslationConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Translation service configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TranslationConfig {
    // @field: Model name
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    // @field: Timeout seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 2.0)
    /// Lower values make output more deterministic
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: Response length cap in tokens
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    // @field: Stop sequences
    #[serde(default = "default_stop")]
    pub stop: Vec<String>,

    /// Pause in seconds after each translation request, failed or not
    ///
    /// Set it from the provider's per-minute limit: 3 requests per minute
    /// needs 20 seconds.
    #[serde(default = "default_pace_delay_secs")]
    pub pace_delay_secs: u64,
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            stop: default_stop(),
            pace_delay_secs: default_pace_delay_secs(),
        }
    }
}

impl TranslationConfig {
    /// Interval enforced between translation requests
    pub fn pace_delay(&self) -> Duration {
        Duration::from_secs(self.pace_delay_secs)
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Input and output files of a run
#[derive(Debug, Clone, PartialEq)]
pub struct JobPaths {
    /// LRC file to read
    pub input: PathBuf,
    /// Bilingual LRC file to create
    pub output: PathBuf,
}

impl JobPaths {
    /// Require both paths and reject an output that would overwrite the input
    pub fn resolve(input: Option<PathBuf>, output: Option<PathBuf>) -> Result<Self, AppError> {
        let (input, output) = match (input, output) {
            (Some(input), Some(output)) => (input, output),
            (None, _) => return Err(AppError::Config("Please specify an input file".to_string())),
            (_, None) => return Err(AppError::Config("Please specify an output file".to_string())),
        };

        if input == output || same_existing_file(&input, &output) {
            return Err(AppError::Config(format!(
                "Output file must differ from input file: {:?}",
                input
            )));
        }

        Ok(Self { input, output })
    }
}

fn same_existing_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

fn default_target_language() -> String {
    "en".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.1
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_stop() -> Vec<String> {
    vec!["STOP".to_string()]
}

fn default_pace_delay_secs() -> u64 {
    30
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AppError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| AppError::File(format!("Failed to open config file {:?}: {}", path, e)))?;
        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config file {:?}: {}", path, e)))
    }

    /// Write this configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), AppError> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, json)
            .map_err(|e| AppError::File(format!("Failed to write config file {:?}: {}", path, e)))
    }

    /// Load the file if it exists, otherwise write and return the defaults
    ///
    /// # Returns
    /// * The configuration and whether it was freshly created
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<(Self, bool), AppError> {
        let path = path.as_ref();
        if path.exists() {
            Ok((Self::from_file(path)?, false))
        } else {
            let config = Self::default();
            config.save(path)?;
            Ok((config, true))
        }
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        if self.target_language.trim().is_empty() {
            return Err(AppError::Config("Target language must not be empty".to_string()));
        }

        let translation = &self.translation;
        if translation.api_key.trim().is_empty() {
            return Err(AppError::Config("Please specify an OpenAI API key".to_string()));
        }
        if translation.model.trim().is_empty() {
            return Err(AppError::Config("Model name must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&translation.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0 and 2, got {}",
                translation.temperature
            )));
        }
        if translation.max_tokens == 0 {
            return Err(AppError::Config("max_tokens must be greater than 0".to_string()));
        }
        Url::parse(&translation.endpoint).map_err(|e| {
            AppError::Config(format!("Invalid endpoint {:?}: {}", translation.endpoint, e))
        })?;

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            target_language: default_target_language(),
            translation: TranslationConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
