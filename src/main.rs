// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod caption_client;
mod caption_model;
mod catalog;
mod errors;
mod language_utils;
mod player_response;
mod srt_writer;
mod track_parser;
mod transport;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
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

fn to_level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the caption tracks available for a video
    List {
        /// Video id or watch URL
        #[arg(value_name = "VIDEO")]
        video: String,
    },

    /// Download one caption track of a video as an SRT file
    #[command(alias = "dl")]
    Download {
        /// Video id or watch URL
        #[arg(value_name = "VIDEO")]
        video: String,

        /// Caption language code to select (e.g., 'en', 'es', 'pt-BR')
        #[arg(short, long)]
        language: Option<String>,

        /// Prefer a manually authored track over an auto-generated one
        #[arg(short = 'm', long)]
        prefer_manual: bool,

        /// Output file path (defaults to <video_id>.<language>.srt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Force overwrite of an existing output file
        #[arg(short, long)]
        force_overwrite: bool,
    },

    /// Generate shell completions for ytcaps
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// ytcaps - closed caption downloader
///
/// Fetches the caption track catalog for a video from the platform's player
/// endpoint and serializes a selected track as SubRip (SRT).
#[derive(Parser, Debug)]
#[command(name = "ytcaps")]
#[command(version = "0.3.0")]
#[command(about = "Closed caption track downloader")]
#[command(long_about = "ytcaps lists and downloads closed caption tracks as SRT files.

EXAMPLES:
    ytcaps list dQw4w9WgXcQ                         # List available caption tracks
    ytcaps download dQw4w9WgXcQ                     # Download the preferred track
    ytcaps download -l es dQw4w9WgXcQ               # Download the Spanish track
    ytcaps download -m -l en dQw4w9WgXcQ            # Prefer a manual English track
    ytcaps download -o out/caps.srt dQw4w9WgXcQ     # Download to an explicit path
    ytcaps completions bash > ytcaps.bash           # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json", global = true)]
    config_path: String,

    /// Set logging level
    #[arg(long, value_enum, global = true)]
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

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
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
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(stderr, "{}{} {}\x1B[0m", color, now, record.args());
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    let cli = CommandLineOptions::parse();

    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &cli.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(to_level_filter(&config_log_level));
    }

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = CommandLineOptions::command();
        generate(*shell, &mut cmd, "ytcaps", &mut std::io::stdout());
        return Ok(());
    }

    // Load or create configuration
    let config = load_config(&cli.config_path, cli.log_level.as_ref())?;

    // If log level was not set via command line, update it from config now
    if cli.log_level.is_none() {
        log::set_max_level(to_level_filter(&config.log_level));
    }

    let controller = Controller::with_config(config)?;

    match cli.command {
        Commands::List { video } => controller.list(&video).await,
        Commands::Download {
            video,
            language,
            prefer_manual,
            output,
            force_overwrite,
        } => {
            controller
                .download(
                    &video,
                    language.as_deref(),
                    prefer_manual,
                    output,
                    force_overwrite,
                )
                .await
        }
        Commands::Completions { .. } => Ok(()),
    }
}

fn load_config(config_path: &str, log_level: Option<&CliLogLevel>) -> Result<Config> {
    let config = if Path::new(config_path).exists() {
        let mut config = Config::from_file(config_path)?;

        // Override config with CLI options if provided
        if let Some(level) = log_level {
            config.log_level = level.clone().into();
        }

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let mut config = Config::default();
        if let Some(level) = log_level {
            config.log_level = level.clone().into();
        }

        config
            .save_to_file(config_path)
            .with_context(|| format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    config.validate().context("Configuration validation failed")?;
    Ok(config)
}
