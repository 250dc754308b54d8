//! YouTube Data API abstraction for Speida.
//!
//! Provides a trait-based interface over the upstream API so tools can be
//! tested against a fake client.

mod client;
mod ident;
pub mod types;

pub use client::DataApiClient;
pub use ident::{extract_channel_identifier, extract_video_id};

use crate::error::Result;
use async_trait::async_trait;
use types::{Channel, CommentThread, PlaylistItem, SearchItem, Video};

/// Trait over the YouTube Data API operations the tools need.
///
/// One method per upstream call shape; projection into tool records happens
/// in the tools themselves.
#[async_trait]
pub trait YouTubeApi: Send + Sync {
    /// Search for channels matching a keyword (`search.list`, type=channel).
    async fn search_channels(&self, keyword: &str, max_results: u32) -> Result<Vec<SearchItem>>;

    /// Fetch a channel's statistics (`channels.list`, part=statistics).
    async fn channel_statistics(&self, channel: &str) -> Result<Channel>;

    /// Fetch a channel's snippet and statistics
    /// (`channels.list`, part=statistics,snippet).
    async fn channel_profile(&self, channel: &str) -> Result<Channel>;

    /// Resolve a channel's uploads playlist id
    /// (`channels.list`, part=contentDetails).
    async fn uploads_playlist(&self, channel: &str) -> Result<String>;

    /// List items of a playlist (`playlistItems.list`).
    async fn playlist_items(
        &self,
        playlist_id: &str,
        max_results: u32,
    ) -> Result<Vec<PlaylistItem>>;

    /// Fetch a video's snippet and statistics
    /// (`videos.list`, part=statistics,snippet).
    async fn video_details(&self, video_id: &str) -> Result<Video>;

    /// List top-level comment threads for a video, most relevant first
    /// (`commentThreads.list`, order=relevance).
    async fn top_comments(&self, video_id: &str, max_results: u32) -> Result<Vec<CommentThread>>;
}
