//! Competitor channel search tool.

use super::{count_or_zero, validate_max_results, NOT_AVAILABLE};
use crate::error::{Result, SpeidaError};
use crate::youtube::YouTubeApi;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// A competing channel with its subscriber count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompetitorRecord {
    pub channel_id: String,
    pub title: String,
    pub description: String,
    /// Numeric string from the API, or "N/A" when the channel hides it.
    pub subscriber_count: String,
}

/// Search for competing channels by keyword, ranked by subscriber count.
#[derive(Debug, Clone)]
pub struct CompetitorSearch {
    keyword: String,
    max_results: u32,
}

impl CompetitorSearch {
    /// Create a new competitor search for a keyword.
    pub fn new(keyword: impl Into<String>, max_results: u32) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.trim().is_empty() {
            return Err(SpeidaError::InvalidInput(
                "Search keyword must not be empty".to_string(),
            ));
        }

        Ok(Self {
            keyword,
            max_results: validate_max_results(max_results)?,
        })
    }

    /// Search for channels and enrich each with its subscriber count.
    ///
    /// Returns records sorted by subscriber count descending; non-numeric
    /// counts sort as zero, and ties keep input order.
    pub async fn run(&self, api: &dyn YouTubeApi) -> Result<Vec<CompetitorRecord>> {
        let items = api.search_channels(&self.keyword, self.max_results).await?;
        debug!(keyword = %self.keyword, count = items.len(), "Found candidate channels");

        let mut competitors = Vec::with_capacity(items.len());
        for item in items {
            // One statistics call per channel; the search response does not
            // carry subscriber counts.
            let channel = api.channel_statistics(&item.snippet.channel_id).await?;
            let subscriber_count = channel
                .statistics
                .and_then(|s| s.subscriber_count)
                .unwrap_or_else(|| NOT_AVAILABLE.to_string());

            competitors.push(CompetitorRecord {
                channel_id: item.snippet.channel_id,
                title: item.snippet.title,
                description: item.snippet.description,
                subscriber_count,
            });
        }

        competitors.sort_by_key(|c| Reverse(count_or_zero(&c.subscriber_count)));
        Ok(competitors)
    }
}
