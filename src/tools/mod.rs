//! Research tools for Speida.
//!
//! Each tool is a typed, validated operation against the YouTube Data API:
//! inputs are checked at construction, `run` issues the upstream calls and
//! projects the responses into flat records.

mod competitors;
mod demographics;
mod performance;
mod videos;

pub use competitors::{CompetitorRecord, CompetitorSearch};
pub use demographics::{ChannelDemographics, DemographicsRecord, DEMOGRAPHICS_NOTE};
pub use performance::{CommentRecord, PerformanceRecord, VideoPerformance};
pub use videos::{VideoFetching, VideoRecord};

use crate::error::{Result, SpeidaError};

/// Placeholder for optional upstream fields that are absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Upper bound on `max_results`, the API's page size limit.
pub const MAX_RESULTS_LIMIT: u32 = 50;

/// Sort mode for video listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortBy {
    /// By view count, descending. Requires one extra API call per video.
    Views,
    /// By publish time, descending.
    #[default]
    Latest,
}

impl std::str::FromStr for SortBy {
    type Err = SpeidaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "views" => Ok(SortBy::Views),
            "latest" => Ok(SortBy::Latest),
            _ => Err(SpeidaError::InvalidInput(format!(
                "Unknown sort mode: {} (expected 'views' or 'latest')",
                s
            ))),
        }
    }
}

impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortBy::Views => write!(f, "views"),
            SortBy::Latest => write!(f, "latest"),
        }
    }
}

/// Parse a count string, treating non-numeric values (like "N/A") as zero.
pub(crate) fn count_or_zero(value: &str) -> u64 {
    value.parse().unwrap_or(0)
}

/// Validate a `max_results` input against the API page limit.
pub(crate) fn validate_max_results(max_results: u32) -> Result<u32> {
    if (1..=MAX_RESULTS_LIMIT).contains(&max_results) {
        Ok(max_results)
    } else {
        Err(SpeidaError::InvalidInput(format!(
            "max_results must be between 1 and {}, got {}",
            MAX_RESULTS_LIMIT, max_results
        )))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_sort_by_parsing() {
        assert_eq!(SortBy::from_str("views").unwrap(), SortBy::Views);
        assert_eq!(SortBy::from_str("latest").unwrap(), SortBy::Latest);
        assert_eq!(SortBy::from_str("VIEWS").unwrap(), SortBy::Views);
        assert!(SortBy::from_str("newest").is_err());
    }

    #[test]
    fn test_sort_by_display() {
        assert_eq!(SortBy::Views.to_string(), "views");
        assert_eq!(SortBy::Latest.to_string(), "latest");
    }

    #[test]
    fn test_count_or_zero() {
        assert_eq!(count_or_zero("150"), 150);
        assert_eq!(count_or_zero("N/A"), 0);
        assert_eq!(count_or_zero(""), 0);
        assert_eq!(count_or_zero("-5"), 0);
    }

    #[test]
    fn test_validate_max_results() {
        assert_eq!(validate_max_results(1).unwrap(), 1);
        assert_eq!(validate_max_results(50).unwrap(), 50);
        assert!(validate_max_results(0).is_err());
        assert!(validate_max_results(51).is_err());
    }
}
