//! CLI command implementations.

mod competitors;
mod config;
mod demographics;
mod performance;
mod videos;

pub use competitors::run_competitors;
pub use config::run_config;
pub use demographics::run_demographics;
pub use performance::run_performance;
pub use videos::run_videos;

use crate::config::Settings;
use crate::youtube::DataApiClient;
use anyhow::Result;
use std::time::Duration;

/// Build a Data API client from settings, resolving the API key.
fn api_client(settings: &Settings) -> Result<DataApiClient> {
    let api_key = settings.youtube_api_key()?;
    Ok(DataApiClient::with_timeout(
        api_key,
        Duration::from_secs(settings.youtube.timeout_seconds),
    ))
}

/// Print a value as pretty JSON (for `--json` mode).
fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
