//! Subtran - Chunked Subtitle Translation
//!
//! This is the main entry point for the Subtran application: it resolves the
//! source file and target language from the command line or interactive
//! prompts, then runs the chunked translation workflow.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::{non_blocking, rolling};

use subtran::cli::{prompt, Args};
use subtran::config::Config;
use subtran::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load subtran.toml from current directory first
            if std::path::Path::new("subtran.toml").exists() {
                info!("Found subtran.toml in current directory, loading...");
                Config::from_file("subtran.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Command line overrides
    if let Some(source_lang) = args.source_lang {
        config.translate.source_lang = source_lang;
    }
    if let Some(max_chunk_size) = args.max_chunk_size {
        config.translate.max_chunk_size = max_chunk_size;
    }

    // Fall back to interactive prompts for anything not on the command line
    let source_path = match args.input {
        Some(path) => path,
        None => PathBuf::from(prompt("enter srt path : ")?),
    };
    let lang = match args.lang {
        Some(lang) => lang,
        None => prompt("whats translate lang?(en, fa, ...) : ")?,
    };

    let workflow = Workflow::new(config);
    workflow.run(&source_path, &lang).await?;

    info!("Subtran workflow completed");
    Ok(())
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let log_dir = std::env::current_dir()?.join(".subtran").join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "subtran.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console layer stays terse so interactive prompts remain readable
    let console_layer = fmt::layer()
        .with_target(false);

    // File layer carries full diagnostics
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false);

    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
