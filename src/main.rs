// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{error, warn, info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::PathBuf;
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use lrc_translator::app_config::{self, Config, JobPaths};
use lrc_translator::app_controller::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate shell completions for lrc-translator
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// lrc-translator - Bilingual LRC lyrics with AI
///
/// Translates the lyrics of every timed line of an LRC file and writes
/// `[timestamp]translation|original` lines, keeping all other lines as they are.
#[derive(Parser, Debug)]
#[command(name = "lrc-translator")]
#[command(version)]
#[command(about = "AI-powered bilingual LRC lyrics generator")]
#[command(long_about = "lrc-translator translates the lyrics of an LRC file line by line using an
OpenAI-compatible chat completions API and writes a bilingual LRC file.

EXAMPLES:
    lrc-translator -i song.lrc -o song.en.lrc -k sk-...     # Translate to English
    lrc-translator -i song.lrc -o song.ja.lrc -l ja         # Translate to Japanese
    lrc-translator -i song.lrc -o out.lrc -c conf.json      # Use a config file
    lrc-translator completions bash > lrc-translator.bash   # Generate bash completions

OUTPUT FORMAT:
    [00:12.00]Bonjour le monde   becomes   [00:12.00]Hello world|Bonjour le monde

Every request is followed by a pause of `pace_delay_secs` (30 seconds by
default) to stay under the provider's rate limit. The run stops at the first failed request; lines
written before it stay in the output file.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Input LRC file
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output LRC file
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Translation language (e.g., 'en', 'ja', 'fr') [default: en]
    #[arg(short, long)]
    language: Option<String>,

    /// OpenAI API key
    #[arg(short = 'k', long, env = "OPENAI_API_KEY", hide_env_values = true)]
    apikey: Option<String>,

    /// Model name to use for translation
    #[arg(short, long)]
    model: Option<String>,

    /// Configuration file path, created with defaults if missing
    #[arg(short, long)]
    config_path: Option<PathBuf>,

    /// Set logging level
    #[arg(long, value_enum)]
    log_level: Option<CliLogLevel>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger; the max level is adjusted later
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(LevelFilter::Trace));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color and emoji for a level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("\x1B[1;31m", "❌ "),
            Level::Warn => ("\x1B[1;33m", "🚧 "),
            Level::Info => ("\x1B[1;32m", ""),
            Level::Debug => ("\x1B[1;36m", "🔍 "),
            Level::Trace => ("\x1B[1;35m", "📋 "),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (color, emoji) = Self::style_for_level(record.level());
            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}{}\x1B[0m", color, now, emoji, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Start at info and adjust once the config is loaded
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(shell, &mut cmd, "lrc-translator", &mut std::io::stdout());
        return Ok(());
    }

    if let Err(e) = run_translate(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
    Ok(())
}

async fn run_translate(options: CommandLineOptions) -> Result<()> {
    if let Some(level) = options.log_level {
        log::set_max_level(app_config::LogLevel::from(level).into());
    }

    let mut config = match &options.config_path {
        Some(path) => {
            let (config, created) = Config::load_or_create(path)
                .context("Failed to load configuration")?;
            if created {
                warn!("Config file not found at {:?}, created default config.", path);
            }
            config
        }
        None => Config::default(),
    };

    // Override config with CLI options if provided
    if let Some(language) = options.language {
        config.target_language = language;
    }
    if let Some(api_key) = options.apikey {
        config.translation.api_key = api_key;
    }
    if let Some(model) = options.model {
        config.translation.model = model;
    }
    if let Some(level) = options.log_level {
        config.log_level = level.into();
    } else {
        log::set_max_level(config.log_level.into());
    }

    let paths = JobPaths::resolve(options.input, options.output)?;
    let controller = Controller::with_config(config)?;

    let summary = match controller.run(&paths).await {
        Ok(summary) => summary,
        Err(e) => {
            if paths.output.exists() {
                warn!("Output file {:?} may be incomplete", paths.output);
            }
            return Err(e.into());
        }
    };

    info!(
        "Lyrics processed successfully! {} lines, {} translated.",
        summary.lines, summary.translated
    );
    Ok(())
}
