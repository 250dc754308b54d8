//! Channel statistics ("demographics") lookup tool.

use super::NOT_AVAILABLE;
use crate::error::{Result, SpeidaError};
use crate::youtube::YouTubeApi;
use serde::{Deserialize, Serialize};

/// Disclosure appended to every demographics record. Audience breakdowns are
/// a permanent limitation of the public Data API, not a missing feature.
pub const DEMOGRAPHICS_NOTE: &str =
    "Audience age, gender, and location are not available via the public YouTube Data API.";

/// Public statistics for a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemographicsRecord {
    pub title: String,
    pub description: String,
    pub subscriber_count: String,
    pub view_count: String,
    pub video_count: String,
    pub note: String,
}

/// Look up a channel's public statistics.
#[derive(Debug, Clone)]
pub struct ChannelDemographics {
    channel: String,
}

impl ChannelDemographics {
    /// Create a new demographics lookup for a channel id or handle.
    pub fn new(channel: impl Into<String>) -> Result<Self> {
        let channel = channel.into();
        if channel.trim().is_empty() {
            return Err(SpeidaError::InvalidInput(
                "Channel identifier must not be empty".to_string(),
            ));
        }

        Ok(Self { channel })
    }

    /// Fetch the channel's snippet and statistics.
    pub async fn run(&self, api: &dyn YouTubeApi) -> Result<DemographicsRecord> {
        let channel = api.channel_profile(&self.channel).await?;

        let (title, description) = channel
            .snippet
            .map(|s| (s.title, s.description))
            .unwrap_or_else(|| (NOT_AVAILABLE.to_string(), String::new()));
        let stats = channel.statistics.unwrap_or_default();

        Ok(DemographicsRecord {
            title,
            description,
            subscriber_count: stats
                .subscriber_count
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            view_count: stats.view_count.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            video_count: stats
                .video_count
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            note: DEMOGRAPHICS_NOTE.to_string(),
        })
    }
}
