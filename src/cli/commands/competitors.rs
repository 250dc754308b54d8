//! Competitors command implementation.

use super::{api_client, print_json};
use crate::cli::output::{content_preview, format_count};
use crate::cli::Output;
use crate::config::Settings;
use crate::tools::CompetitorSearch;
use anyhow::Result;

/// Run the competitors command.
pub async fn run_competitors(
    keyword: &str,
    limit: Option<u32>,
    json: bool,
    settings: Settings,
) -> Result<()> {
    let api = api_client(&settings)?;
    let tool = CompetitorSearch::new(keyword, limit.unwrap_or(settings.youtube.max_results))?;

    let spinner = Output::spinner("Searching channels...");
    let result = tool.run(&api).await;
    spinner.finish_and_clear();

    let competitors = result?;

    if json {
        return print_json(&competitors);
    }

    if competitors.is_empty() {
        Output::warning(&format!("No channels found for \"{}\".", keyword));
        return Ok(());
    }

    Output::success(&format!(
        "Found {} channel(s) for \"{}\"",
        competitors.len(),
        keyword
    ));
    println!();

    for (i, c) in competitors.iter().enumerate() {
        Output::ranked(
            i + 1,
            &c.title,
            &format!("({} subscribers)", format_count(&c.subscriber_count)),
        );
        if !c.description.is_empty() {
            Output::detail(&content_preview(&c.description, 120));
        }
        Output::detail(&format!("https://www.youtube.com/channel/{}", c.channel_id));
        println!();
    }

    Ok(())
}
