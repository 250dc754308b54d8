//! Speida - YouTube Channel Research Tools
//!
//! A CLI tool for researching YouTube channels, competitors, and video
//! performance through the YouTube Data API v3.
//!
//! The name "Speida" comes from the Norwegian word "speide," to scout.
//!
//! # Overview
//!
//! Speida allows you to:
//! - Search for competing channels by keyword, ranked by subscriber count
//! - List a channel's videos, sorted by views or upload date
//! - Inspect a video's performance metrics and top comments
//! - Look up a channel's public statistics
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `youtube` - YouTube Data API client abstraction
//! - `tools` - The research tools (competitors, videos, performance, demographics)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use speida::tools::CompetitorSearch;
//! use speida::youtube::DataApiClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = Arc::new(DataApiClient::new("api-key"));
//!     let tool = CompetitorSearch::new("rust programming", 10)?;
//!     let competitors = tool.run(client.as_ref()).await?;
//!
//!     for c in &competitors {
//!         println!("{} ({} subscribers)", c.title, c.subscriber_count);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tools;
pub mod youtube;

pub use error::{Result, SpeidaError};
