//! Reqwest-based YouTube Data API v3 client.

use super::types::{
    ApiErrorResponse, Channel, CommentThread, ListResponse, PlaylistItem, SearchItem, Video,
};
use super::YouTubeApi;
use crate::error::{Result, SpeidaError};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, instrument};

/// Base URL for the YouTube Data API v3.
const API_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Default timeout for API requests.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// YouTube Data API client backed by a shared HTTP client.
pub struct DataApiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl DataApiClient {
    /// Create a new client with the default request timeout.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_timeout(api_key, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a new client with a custom request timeout.
    pub fn with_timeout(api_key: impl Into<String>, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: API_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(endpoint, "Requesting YouTube API");

        let response = self
            .http
            .get(&url)
            .query(params)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(SpeidaError::Api(format!(
                "{} returned {}: {}",
                endpoint, status, message
            )));
        }

        Ok(response.json().await?)
    }

    /// Channels are looked up by id for "UC..." identifiers and by handle
    /// for "@name" identifiers.
    fn channel_lookup_param(channel: &str) -> (&'static str, &str) {
        if channel.starts_with('@') {
            ("forHandle", channel)
        } else {
            ("id", channel)
        }
    }

    async fn channel_with_parts(&self, channel: &str, parts: &str) -> Result<Channel> {
        let (lookup, value) = Self::channel_lookup_param(channel);
        let response: ListResponse<Channel> = self
            .get("channels", &[("part", parts), (lookup, value)])
            .await?;

        first_item(response.items, "channel", channel)
    }
}

/// Take the first item of a list response, or report NotFound.
///
/// The API returns an empty `items` array (not an error) for unknown ids.
fn first_item<T>(items: Vec<T>, what: &str, id: &str) -> Result<T> {
    items
        .into_iter()
        .next()
        .ok_or_else(|| SpeidaError::NotFound(format!("{} {}", what, id)))
}

#[async_trait]
impl YouTubeApi for DataApiClient {
    #[instrument(skip(self))]
    async fn search_channels(&self, keyword: &str, max_results: u32) -> Result<Vec<SearchItem>> {
        let max_results = max_results.to_string();
        let response: ListResponse<SearchItem> = self
            .get(
                "search",
                &[
                    ("part", "snippet"),
                    ("type", "channel"),
                    ("q", keyword),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        Ok(response.items)
    }

    #[instrument(skip(self))]
    async fn channel_statistics(&self, channel: &str) -> Result<Channel> {
        self.channel_with_parts(channel, "statistics").await
    }

    #[instrument(skip(self))]
    async fn channel_profile(&self, channel: &str) -> Result<Channel> {
        self.channel_with_parts(channel, "statistics,snippet").await
    }

    #[instrument(skip(self))]
    async fn uploads_playlist(&self, channel: &str) -> Result<String> {
        let item = self.channel_with_parts(channel, "contentDetails").await?;

        item.content_details
            .and_then(|d| d.related_playlists.uploads)
            .ok_or_else(|| {
                SpeidaError::NotFound(format!("uploads playlist for channel {}", channel))
            })
    }

    #[instrument(skip(self))]
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>> {
        let max_results = max_results.to_string();
        let response: ListResponse<PlaylistItem> = self
            .get(
                "playlistItems",
                &[
                    ("part", "snippet,contentDetails"),
                    ("playlistId", playlist_id),
                    ("maxResults", &max_results),
                ],
            )
            .await?;

        Ok(response.items)
    }

    #[instrument(skip(self))]
    async fn video_details(&self, video_id: &str) -> Result<Video> {
        let response: ListResponse<Video> = self
            .get(
                "videos",
                &[("part", "statistics,snippet"), ("id", video_id)],
            )
            .await?;

        first_item(response.items, "video", video_id)
    }

    #[instrument(skip(self))]
    async fn top_comments(&self, video_id: &str, max_results: u32) -> Result<Vec<CommentThread>> {
        let max_results = max_results.to_string();
        let response: ListResponse<CommentThread> = self
            .get(
                "commentThreads",
                &[
                    ("part", "snippet"),
                    ("videoId", video_id),
                    ("maxResults", &max_results),
                    ("order", "relevance"),
                ],
            )
            .await?;

        Ok(response.items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_lookup_param() {
        assert_eq!(
            DataApiClient::channel_lookup_param("UC_x5XG1OV2P6uZZ5FSM9Ttw"),
            ("id", "UC_x5XG1OV2P6uZZ5FSM9Ttw")
        );
        assert_eq!(
            DataApiClient::channel_lookup_param("@GoogleDevelopers"),
            ("forHandle", "@GoogleDevelopers")
        );
    }

    #[test]
    fn test_first_item_empty_is_not_found() {
        let result: Result<Channel> = first_item(Vec::new(), "channel", "UC123");
        match result {
            Err(SpeidaError::NotFound(msg)) => assert!(msg.contains("UC123")),
            other => panic!("Expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_first_item_takes_first() {
        let items = vec!["a", "b"];
        assert_eq!(first_item(items, "thing", "x").unwrap(), "a");
    }
}
