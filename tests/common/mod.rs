/*!
 * Common test utilities for the lrc-translator test suite
 */

use std::path::{Path, PathBuf};
use std::fs;
use anyhow::Result;
use tempfile::TempDir;

use lrc_translator::app_config::{Config, JobPaths};

// Re-export the mock providers module
pub mod mock_providers;

/// Sample LRC file with metadata, lyrics and an instrumental gap
pub const SAMPLE_LRC: &str = "[ti:Chanson]
[ar:Quelqu'un]

[00:01.00]Bonjour le monde
[00:05.50]Il fait beau
[00:09.00]
[00:12.25]Au revoir
";

/// Route library logs to the test output
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Job paths for an input file and an output next to it
pub fn job_paths(input: PathBuf, output_name: &str) -> JobPaths {
    let output = input.with_file_name(output_name);
    JobPaths { input, output }
}

/// Configuration that passes validation without touching a real provider
pub fn test_config() -> Config {
    let mut config = Config::default();
    config.translation.api_key = "sk-test".to_string();
    config.translation.pace_delay_secs = 0;
    config
}
