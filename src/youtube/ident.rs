//! Identifier extraction for YouTube URLs, channel ids, and handles.

use regex::Regex;
use std::sync::OnceLock;

/// Compiled once; matches various YouTube URL formats and bare video IDs.
fn video_id_regex() -> &'static Regex {
    static VIDEO_ID_REGEX: OnceLock<Regex> = OnceLock::new();
    VIDEO_ID_REGEX.get_or_init(|| {
        Regex::new(
            r"(?x)
            (?:
                # Full YouTube URLs
                (?:https?://)?
                (?:www\.)?
                (?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/|youtube\.com/v/)
                ([a-zA-Z0-9_-]{11})
            )
            |
            # Bare video ID (11 characters)
            ^([a-zA-Z0-9_-]{11})$
        ",
        )
        .expect("Invalid regex")
    })
}

/// Extract a video id from a YouTube URL or bare 11-character id.
pub fn extract_video_id(input: &str) -> Option<String> {
    let caps = video_id_regex().captures(input.trim())?;

    // Try group 1 (URL format) then group 2 (bare ID)
    caps.get(1)
        .or_else(|| caps.get(2))
        .map(|m| m.as_str().to_string())
}

/// Extract a channel identifier from a URL, bare id, or handle.
///
/// Returns either a channel id ("UC...") or a handle ("@name"). Handles are
/// resolved by the API itself via the `forHandle` lookup parameter.
pub fn extract_channel_identifier(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    if let Some(pos) = input.find("youtube.com/") {
        let path = &input[pos + "youtube.com/".len()..];

        if let Some(rest) = path.strip_prefix("channel/") {
            let id = rest.split(['/', '?']).next().unwrap_or(rest);
            return (!id.is_empty()).then(|| id.to_string());
        }

        if path.starts_with('@') {
            let handle = path.split(['/', '?']).next().unwrap_or(path);
            return Some(handle.to_string());
        }

        return None;
    }

    if input.starts_with('@') || input.starts_with("UC") {
        return Some(input.to_string());
    }

    None
}
