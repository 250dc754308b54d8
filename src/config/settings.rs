//! Configuration settings for Speida.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Result, SpeidaError};

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub youtube: YoutubeSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// YouTube Data API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct YoutubeSettings {
    /// YouTube Data API key. Falls back to the YOUTUBE_API_KEY environment
    /// variable when unset.
    pub api_key: Option<String>,
    /// Default maximum number of results per tool invocation.
    pub max_results: u32,
    /// HTTP request timeout in seconds.
    pub timeout_seconds: u64,
}

impl Default for YoutubeSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            max_results: 10,
            timeout_seconds: 30,
        }
    }
}

impl Settings {
    /// Load settings from a specific path, or the default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| SpeidaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("speida")
            .join("config.toml")
    }

    /// Resolve the YouTube API key from config or environment.
    pub fn youtube_api_key(&self) -> Result<String> {
        if let Some(key) = self.youtube.api_key.as_ref().filter(|k| !k.is_empty()) {
            return Ok(key.clone());
        }

        std::env::var("YOUTUBE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                SpeidaError::Config(
                    "No YouTube API key configured. Set youtube.api_key in the config file \
                     or export YOUTUBE_API_KEY."
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.youtube.max_results, 10);
        assert_eq!(settings.general.log_level, "info");
        assert!(settings.youtube.api_key.is_none());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut settings = Settings::default();
        settings.youtube.api_key = Some("test-key".to_string());
        settings.youtube.max_results = 25;
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.youtube.api_key.as_deref(), Some("test-key"));
        assert_eq!(loaded.youtube.max_results, 25);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let settings = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(settings.youtube.max_results, 10);
    }

    #[test]
    fn test_api_key_from_config() {
        let mut settings = Settings::default();
        settings.youtube.api_key = Some("abc123".to_string());
        assert_eq!(settings.youtube_api_key().unwrap(), "abc123");
    }

    #[test]
    fn test_partial_config_parses() {
        let settings: Settings = toml::from_str("[youtube]\nmax_results = 5\n").unwrap();
        assert_eq!(settings.youtube.max_results, 5);
        assert_eq!(settings.youtube.timeout_seconds, 30);
    }
}
