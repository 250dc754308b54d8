//! Video performance lookup tool.

use super::NOT_AVAILABLE;
use crate::error::{Result, SpeidaError};
use crate::youtube::YouTubeApi;
use serde::{Deserialize, Serialize};

/// Maximum number of top comments attached to a performance record.
const TOP_COMMENT_LIMIT: usize = 5;

/// A top-level comment on a video.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRecord {
    pub author: String,
    pub text: String,
}

/// Performance metrics for a single video.
///
/// Counts are numeric strings from the API, with "N/A" substituted when the
/// upstream field is absent (e.g. likes hidden, comments disabled).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceRecord {
    pub title: String,
    pub views: String,
    pub likes: String,
    pub comments: String,
    pub top_comments: Vec<CommentRecord>,
}

/// Look up a video's statistics and its most relevant comments.
#[derive(Debug, Clone)]
pub struct VideoPerformance {
    video_id: String,
}

impl VideoPerformance {
    /// Create a new performance lookup for a video id.
    pub fn new(video_id: impl Into<String>) -> Result<Self> {
        let video_id = video_id.into();
        if video_id.trim().is_empty() {
            return Err(SpeidaError::InvalidInput(
                "Video id must not be empty".to_string(),
            ));
        }

        Ok(Self { video_id })
    }

    /// Fetch statistics and the top comments for the video.
    pub async fn run(&self, api: &dyn YouTubeApi) -> Result<PerformanceRecord> {
        let video = api.video_details(&self.video_id).await?;

        let title = video
            .snippet
            .map(|s| s.title)
            .unwrap_or_else(|| NOT_AVAILABLE.to_string());
        let stats = video.statistics.unwrap_or_default();

        let threads = api
            .top_comments(&self.video_id, TOP_COMMENT_LIMIT as u32)
            .await?;
        let top_comments = threads
            .into_iter()
            .take(TOP_COMMENT_LIMIT)
            .map(|thread| {
                let comment = thread.snippet.top_level_comment.snippet;
                CommentRecord {
                    author: comment.author_display_name,
                    text: comment.text_display,
                }
            })
            .collect();

        Ok(PerformanceRecord {
            title,
            views: stats.view_count.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            likes: stats.like_count.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            comments: stats
                .comment_count
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            top_comments,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::testing::FakeYouTubeApi;
    use crate::youtube::types::{Video, VideoSnippet, VideoStatistics};

    fn api_with_video(video: Video) -> FakeYouTubeApi {
        let mut api = FakeYouTubeApi::default();
        api.videos.insert("vid1".to_string(), video);
        api
    }

    #[test]
    fn test_empty_video_id_rejected() {
        assert!(VideoPerformance::new("").is_err());
    }

    #[tokio::test]
    async fn test_projects_statistics() {
        let video = Video {
            snippet: Some(VideoSnippet {
                title: "My Video".to_string(),
            }),
            statistics: Some(VideoStatistics {
                view_count: Some("1000".to_string()),
                like_count: Some("50".to_string()),
                comment_count: Some("7".to_string()),
            }),
            ..Default::default()
        };

        let api = api_with_video(video);
        let record = VideoPerformance::new("vid1").unwrap().run(&api).await.unwrap();

        assert_eq!(record.title, "My Video");
        assert_eq!(record.views, "1000");
        assert_eq!(record.likes, "50");
        assert_eq!(record.comments, "7");
        assert!(record.top_comments.is_empty());
    }

    #[tokio::test]
    async fn test_absent_fields_become_placeholder() {
        let api = api_with_video(Video::default());
        let record = VideoPerformance::new("vid1").unwrap().run(&api).await.unwrap();

        assert_eq!(record.title, "N/A");
        assert_eq!(record.views, "N/A");
        assert_eq!(record.likes, "N/A");
        assert_eq!(record.comments, "N/A");
    }

    #[tokio::test]
    async fn test_top_comments_capped_at_five() {
        let mut api = api_with_video(FakeYouTubeApi::video_with_views("v", Some("1")));
        let threads = (0..8)
            .map(|i| FakeYouTubeApi::comment(&format!("user{}", i), "nice"))
            .collect();
        api.comments.insert("vid1".to_string(), threads);

        let record = VideoPerformance::new("vid1").unwrap().run(&api).await.unwrap();

        assert_eq!(record.top_comments.len(), 5);
        assert_eq!(record.top_comments[0].author, "user0");
    }

    #[tokio::test]
    async fn test_unknown_video_is_not_found() {
        let api = FakeYouTubeApi::default();
        let result = VideoPerformance::new("missing").unwrap().run(&api).await;
        assert!(matches!(result, Err(SpeidaError::NotFound(_))));
    }
}
