//! Demographics command implementation.

use super::{api_client, print_json};
use crate::cli::output::{content_preview, format_count};
use crate::cli::Output;
use crate::config::Settings;
use crate::error::SpeidaError;
use crate::tools::ChannelDemographics;
use crate::youtube::extract_channel_identifier;
use anyhow::Result;

/// Run the demographics command.
pub async fn run_demographics(channel: &str, json: bool, settings: Settings) -> Result<()> {
    let identifier = extract_channel_identifier(channel).ok_or_else(|| {
        SpeidaError::InvalidInput(format!(
            "Not a channel id, handle, or channel URL: {}",
            channel
        ))
    })?;

    let api = api_client(&settings)?;
    let tool = ChannelDemographics::new(identifier)?;

    let spinner = Output::spinner("Fetching channel statistics...");
    let result = tool.run(&api).await;
    spinner.finish_and_clear();

    let record = result?;

    if json {
        return print_json(&record);
    }

    Output::success(&record.title);
    if !record.description.is_empty() {
        Output::detail(&content_preview(&record.description, 200));
    }
    Output::kv("Subscribers", &format_count(&record.subscriber_count));
    Output::kv("Total views", &format_count(&record.view_count));
    Output::kv("Videos", &record.video_count);
    println!();
    Output::info(&record.note);

    Ok(())
}
