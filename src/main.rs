//! Speida CLI entry point.

use anyhow::Result;
use clap::Parser;
use speida::cli::{commands, Cli, Commands};
use speida::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("speida={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let config_path = cli.config.as_ref().map(std::path::PathBuf::from);
    let settings = Settings::load_from(config_path.as_ref())?;

    // Execute command
    match &cli.command {
        Commands::Competitors { keyword, limit } => {
            commands::run_competitors(keyword, *limit, cli.json, settings).await?;
        }

        Commands::Videos {
            channel,
            sort,
            limit,
        } => {
            commands::run_videos(channel, sort, *limit, cli.json, settings).await?;
        }

        Commands::Performance { video } => {
            commands::run_performance(video, cli.json, settings).await?;
        }

        Commands::Demographics { channel } => {
            commands::run_demographics(channel, cli.json, settings).await?;
        }

        Commands::Config { action } => {
            commands::run_config(action, config_path.as_ref(), settings)?;
        }
    }

    Ok(())
}
