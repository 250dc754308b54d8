//! Videos command implementation.

use super::{api_client, print_json};
use crate::cli::output::format_count;
use crate::cli::Output;
use crate::config::Settings;
use crate::error::SpeidaError;
use crate::tools::{SortBy, VideoFetching};
use crate::youtube::extract_channel_identifier;
use anyhow::Result;
use std::str::FromStr;

/// Run the videos command.
pub async fn run_videos(
    channel: &str,
    sort: &str,
    limit: Option<u32>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let identifier = extract_channel_identifier(channel).ok_or_else(|| {
        SpeidaError::InvalidInput(format!(
            "Not a channel id, handle, or channel URL: {}",
            channel
        ))
    })?;
    let sort_by = SortBy::from_str(sort)?;

    let api = api_client(&settings)?;
    let tool = VideoFetching::new(
        identifier,
        sort_by,
        limit.unwrap_or(settings.youtube.max_results),
    )?;

    let spinner = Output::spinner("Fetching videos...");
    let result = tool.run(&api).await;
    spinner.finish_and_clear();

    let videos = result?;

    if json {
        return print_json(&videos);
    }

    if videos.is_empty() {
        Output::warning("No videos found.");
        return Ok(());
    }

    Output::success(&format!("Found {} video(s), sorted by {}", videos.len(), sort_by));
    println!();

    for (i, v) in videos.iter().enumerate() {
        let detail = match v.view_count {
            Some(views) => format!("({} views)", format_count(&views.to_string())),
            None => format!("({})", v.published_at),
        };
        Output::ranked(i + 1, &v.title, &detail);
        Output::detail(&format!("https://www.youtube.com/watch?v={}", v.video_id));
        println!();
    }

    Ok(())
}
