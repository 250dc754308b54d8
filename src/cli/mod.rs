//! CLI module for Speida.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// Speida - YouTube Channel Research Tools
///
/// A CLI tool for researching YouTube channels, competitors, and video
/// performance. The name "Speida" comes from the Norwegian word "speide,"
/// to scout.
#[derive(Parser, Debug)]
#[command(name = "speida")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Print raw JSON instead of styled output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for competing channels by keyword, ranked by subscribers
    Competitors {
        /// The keyword or topic to search for
        keyword: String,

        /// Maximum number of channels to return (1-50)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// List a channel's videos, sorted by views or upload date
    Videos {
        /// Channel id (UC...), handle (@name), or channel URL
        channel: String,

        /// Sort order: "views" or "latest"
        #[arg(short, long, default_value = "latest")]
        sort: String,

        /// Maximum number of videos to list (1-50)
        #[arg(short, long)]
        limit: Option<u32>,
    },

    /// Show a video's performance metrics and top comments
    Performance {
        /// Video id or YouTube URL
        video: String,
    },

    /// Show a channel's public statistics
    Demographics {
        /// Channel id (UC...), handle (@name), or channel URL
        channel: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "youtube.max_results")
        key: String,
        /// Configuration value
        value: String,
    },

    /// Open configuration file in editor
    Edit,

    /// Show configuration file path
    Path,
}
