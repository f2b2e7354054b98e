use log::{info, warn};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use tokio::io::AsyncWriteExt;

use crate::app_config::{Config, JobPaths};
use crate::errors::AppError;
use crate::file_utils::FileManager;
use crate::translation::{FixedDelayPacer, LyricsPipeline, Pacer, PipelineSummary, TranslationService, Translator};

// @module: Application controller for lyrics processing

/// Main application controller for lyrics translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Show a progress spinner on stderr
    show_progress: bool,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self, AppError> {
        config.validate()?;
        Ok(Self {
            config,
            show_progress: true,
        })
    }

    /// Enable or disable the progress spinner
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Translate `paths.input` into `paths.output` using the configured provider
    pub async fn run(&self, paths: &JobPaths) -> Result<PipelineSummary, AppError> {
        let service = TranslationService::from_config(&self.config.translation);
        let pacer = FixedDelayPacer::new(self.config.translation.pace_delay());
        self.run_with(&service, pacer, paths).await
    }

    /// Translate with an explicit translator and pacer
    pub async fn run_with<T, P>(&self, translator: T, pacer: P, paths: &JobPaths) -> Result<PipelineSummary, AppError>
    where
        T: Translator,
        P: Pacer,
    {
        let start_time = std::time::Instant::now();

        if !FileManager::file_exists(&paths.input) {
            return Err(AppError::File(format!("Input file does not exist: {:?}", paths.input)));
        }
        if !has_lrc_extension(&paths.input) {
            warn!("Input file {:?} does not have an .lrc extension", paths.input);
        }

        let reader = FileManager::open_input(&paths.input).await?;
        let mut writer = FileManager::create_output(&paths.output).await?;

        info!(
            "Translating {:?} to {} with {}",
            paths.input, self.config.target_language, self.config.translation.model
        );

        let progress = self.progress_bar();
        let mut pipeline = LyricsPipeline::new(translator, pacer, self.config.target_language.clone())
            .with_progress(progress.clone());
        let result = pipeline.run(reader, &mut writer).await;
        progress.finish_and_clear();

        // Close the file on every path; the pipeline already flushed it
        let closed = writer.shutdown().await
            .map_err(|e| AppError::File(format!("Error closing output file {:?}: {}", paths.output, e)));

        let summary = result?;
        closed?;

        info!(
            "Wrote {:?} in {}",
            paths.output,
            Self::format_duration(start_time.elapsed())
        );
        Ok(summary)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {pos} lines {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.enable_steady_tick(Duration::from_millis(120));
        progress
    }

    /// Format a duration as a short human-readable string
    pub fn format_duration(duration: Duration) -> String {
        let total_secs = duration.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:01}s", seconds, duration.subsec_millis() / 100)
        }
    }
}

fn has_lrc_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("lrc"))
        .unwrap_or(false)
}
