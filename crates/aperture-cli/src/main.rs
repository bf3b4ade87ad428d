use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::warn;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use aperture_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "aperture")]
#[command(author, version, about = "Photography studio showcase effects in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive showcase
    Run,
    /// Print typewriter frames as they are produced
    Typewriter {
        /// Text to type; repeat for a sequence (defaults to the configured texts)
        #[arg(short, long = "text")]
        texts: Vec<String>,
        /// Stop after the last text instead of starting over
        #[arg(long)]
        no_loop: bool,
    },
    /// Show the effective configuration
    Config {
        /// Show built-in defaults instead of the config file
        #[arg(long)]
        default: bool,
        /// Print JSON instead of TOML
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; a broken file falls back to defaults once logging is up
    let loaded = AppConfig::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let tui = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, tui)?;

    if let Err(e) = &loaded {
        warn!("Failed to load {}: {}", AppConfig::config_path().display(), e);
        warn!("Using default configuration");
    }

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Typewriter { texts, no_loop }) => {
            commands::typewriter::run(&config, texts, no_loop).await
        }
        Some(Commands::Config { default, json }) => {
            let config = if default { AppConfig::default() } else { config };
            commands::config::run(&config, json)
        }
    }
}

/// Log to stderr, or to a file in the data dir while the TUI owns the terminal
fn init_logging(config: &AppConfig, tui: bool) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );

    if tui {
        let data_dir = config.data_dir();
        std::fs::create_dir_all(&data_dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(config.log_path())?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
    Ok(())
}
