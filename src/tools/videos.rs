//! Channel video listing tool.

use super::{count_or_zero, validate_max_results, SortBy};
use crate::error::{Result, SpeidaError};
use crate::youtube::YouTubeApi;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use tracing::debug;

/// A video from a channel's uploads playlist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    /// ISO-8601 publish timestamp. Sorts correctly as a string.
    pub published_at: String,
    /// Present only when sorting by views.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
}

/// List a channel's uploads, sorted by views or upload date.
#[derive(Debug, Clone)]
pub struct VideoFetching {
    channel: String,
    sort_by: SortBy,
    max_results: u32,
}

impl VideoFetching {
    /// Create a new video listing for a channel id or handle.
    pub fn new(channel: impl Into<String>, sort_by: SortBy, max_results: u32) -> Result<Self> {
        let channel = channel.into();
        if channel.trim().is_empty() {
            return Err(SpeidaError::InvalidInput(
                "Channel identifier must not be empty".to_string(),
            ));
        }

        Ok(Self {
            channel,
            sort_by,
            max_results: validate_max_results(max_results)?,
        })
    }

    /// Resolve the channel's uploads playlist, list its videos, and sort.
    ///
    /// Sorting by views fetches one statistics response per video first;
    /// sorting by latest needs no extra calls. Both sorts are stable, so
    /// ties keep input order.
    pub async fn run(&self, api: &dyn YouTubeApi) -> Result<Vec<VideoRecord>> {
        let playlist_id = api.uploads_playlist(&self.channel).await?;
        let items = api.playlist_items(&playlist_id, self.max_results).await?;
        debug!(channel = %self.channel, count = items.len(), "Fetched uploads");

        let mut videos: Vec<VideoRecord> = items
            .into_iter()
            .map(|item| VideoRecord {
                video_id: item.content_details.video_id,
                title: item.snippet.title,
                published_at: item.snippet.published_at,
                view_count: None,
            })
            .collect();

        match self.sort_by {
            SortBy::Views => {
                for video in &mut videos {
                    let details = api.video_details(&video.video_id).await?;
                    let views = details
                        .statistics
                        .and_then(|s| s.view_count)
                        .map(|c| count_or_zero(&c))
                        .unwrap_or(0);
                    video.view_count = Some(views);
                }
                videos.sort_by_key(|v| Reverse(v.view_count.unwrap_or(0)));
            }
            SortBy::Latest => {
                videos.sort_by(|a, b| b.published_at.cmp(&a.published_at));
            }
        }

        Ok(videos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::FakeYouTubeApi;
    use crate::SpeidaError;

    fn api_with_uploads(items: Vec<crate::youtube::types::PlaylistItem>) -> FakeYouTubeApi {
        let mut api = FakeYouTubeApi::default();
        api.uploads
            .insert("UC1".to_string(), "UU1".to_string());
        api.playlists.insert("UU1".to_string(), items);
        api
    }

    #[test]
    fn test_empty_channel_rejected() {
        assert!(VideoFetching::new("", SortBy::Latest, 10).is_err());
        assert!(VideoFetching::new("UC1", SortBy::Latest, 51).is_err());
    }

    #[tokio::test]
    async fn test_latest_sorts_by_published_at_descending() {
        let api = api_with_uploads(vec![
            FakeYouTubeApi::playlist_item("v1", "Older", "2023-12-31T00:00:00Z"),
            FakeYouTubeApi::playlist_item("v2", "Newer", "2024-01-01T00:00:00Z"),
        ]);

        let tool = VideoFetching::new("UC1", SortBy::Latest, 10).unwrap();
        let videos = tool.run(&api).await.unwrap();

        let ids: Vec<&str> = videos.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, vec!["v2", "v1"]);
        // No enrichment calls were needed
        assert!(videos.iter().all(|v| v.view_count.is_none()));
    }

    #[tokio::test]
    async fn test_views_enriches_then_sorts_descending() {
        let mut api = api_with_uploads(vec![
            FakeYouTubeApi::playlist_item("v1", "Low", "2024-01-01T00:00:00Z"),
            FakeYouTubeApi::playlist_item("v2", "High", "2024-01-02T00:00:00Z"),
            FakeYouTubeApi::playlist_item("v3", "Mid", "2024-01-03T00:00:00Z"),
        ]);
        api.videos
            .insert("v1".to_string(), FakeYouTubeApi::video_with_views("Low", Some("10")));
        api.videos
            .insert("v2".to_string(), FakeYouTubeApi::video_with_views("High", Some("500")));
        api.videos
            .insert("v3".to_string(), FakeYouTubeApi::video_with_views("Mid", Some("40")));

        let tool = VideoFetching::new("UC1", SortBy::Views, 10).unwrap();
        let videos = tool.run(&api).await.unwrap();

        let counts: Vec<u64> = videos.iter().map(|v| v.view_count.unwrap()).collect();
        assert_eq!(counts, vec![500, 40, 10]);
    }

    #[tokio::test]
    async fn test_views_missing_statistics_sorts_as_zero() {
        let mut api = api_with_uploads(vec![
            FakeYouTubeApi::playlist_item("v1", "Hidden", "2024-01-01T00:00:00Z"),
            FakeYouTubeApi::playlist_item("v2", "Known", "2024-01-02T00:00:00Z"),
        ]);
        api.videos
            .insert("v1".to_string(), FakeYouTubeApi::video_with_views("Hidden", None));
        api.videos
            .insert("v2".to_string(), FakeYouTubeApi::video_with_views("Known", Some("7")));

        let tool = VideoFetching::new("UC1", SortBy::Views, 10).unwrap();
        let videos = tool.run(&api).await.unwrap();

        assert_eq!(videos[0].video_id, "v2");
        assert_eq!(videos[1].view_count, Some(0));
    }

    #[tokio::test]
    async fn test_unknown_channel_is_not_found() {
        let api = FakeYouTubeApi::default();
        let tool = VideoFetching::new("UC404", SortBy::Latest, 10).unwrap();

        match tool.run(&api).await {
            Err(SpeidaError::NotFound(msg)) => assert!(msg.contains("UC404")),
            other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_view_count_omitted_from_json_when_absent() {
        let record = VideoRecord {
            video_id: "v1".to_string(),
            title: "t".to_string(),
            published_at: "2024-01-01T00:00:00Z".to_string(),
            view_count: None,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("viewCount").is_none());
        assert_eq!(json["publishedAt"], "2024-01-01T00:00:00Z");
    }
}
