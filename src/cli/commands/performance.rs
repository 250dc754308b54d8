//! Performance command implementation.

use super::{api_client, print_json};
use crate::cli::output::{content_preview, format_count};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::SpeidaError;
use crate::tools::VideoPerformance;
use crate::youtube::extract_video_id;
use anyhow::Result;

/// Run the performance command.
pub async fn run_performance(video: &str, json: bool, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(video).ok_or_else(|| {
        SpeidaError::InvalidInput(format!("Not a video id or YouTube URL: {}", video))
    })?;

    let api = api_client(&settings)?;
    let tool = VideoPerformance::new(video_id)?;

    let spinner = Output::spinner("Analyzing video...");
    let result = tool.run(&api).await;
    spinner.finish_and_clear();

    let record = result?;

    if json {
        return print_json(&record);
    }

    Output::success(&record.title);
    Output::kv("Views", &format_count(&record.views));
    Output::kv("Likes", &format_count(&record.likes));
    Output::kv("Comments", &format_count(&record.comments));

    if record.top_comments.is_empty() {
        Output::info("No comments available.");
    } else {
        println!();
        Output::info("Top comments:");
        for comment in &record.top_comments {
            Output::list_item(&comment.author);
            Output::detail(&content_preview(&comment.text, 200));
        }
    }

    Ok(())
}
