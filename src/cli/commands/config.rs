//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use crate::error::SpeidaError;
use anyhow::Result;
use std::path::PathBuf;

/// Run the config command.
///
/// `config_path` is the `--config` override; when absent, the default
/// location is used for writes and lookups.
pub fn run_config(
    action: &ConfigAction,
    config_path: Option<&PathBuf>,
    mut settings: Settings,
) -> Result<()> {
    let config_path = config_path
        .cloned()
        .unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let toml_str = toml::to_string_pretty(&settings)
                .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
            println!("{}", toml_str);
        }

        ConfigAction::Set { key, value } => {
            set_value(&mut settings, key, value)?;
            settings.save_to(&config_path)?;
            Output::success(&format!("Set {} = {}", key, value));
        }

        ConfigAction::Edit => {
            // Create default config if it doesn't exist
            if !config_path.exists() {
                settings.save_to(&config_path)?;
                Output::info(&format!("Created default config at {:?}", config_path));
            }

            let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());

            Output::info(&format!("Opening config in {}...", editor));

            let status = std::process::Command::new(&editor)
                .arg(&config_path)
                .status();

            match status {
                Ok(s) if s.success() => {
                    Output::success("Config saved.");
                }
                Ok(_) => {
                    Output::warning("Editor exited with non-zero status.");
                }
                Err(e) => {
                    Output::error(&format!("Failed to open editor: {}", e));
                    Output::info(&format!("Config file is at: {:?}", config_path));
                }
            }
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Apply a dotted-key assignment to the settings tree.
fn set_value(settings: &mut Settings, key: &str, value: &str) -> crate::error::Result<()> {
    match key {
        "general.log_level" => settings.general.log_level = value.to_string(),
        "youtube.api_key" => settings.youtube.api_key = Some(value.to_string()),
        "youtube.max_results" => settings.youtube.max_results = parse_number(key, value)?,
        "youtube.timeout_seconds" => settings.youtube.timeout_seconds = parse_number(key, value)?,
        _ => {
            return Err(SpeidaError::InvalidInput(format!(
                "Unknown config key: {}",
                key
            )))
        }
    }

    Ok(())
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> crate::error::Result<T> {
    value.parse().map_err(|_| {
        SpeidaError::InvalidInput(format!("{} expects a number, got {}", key, value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_known_keys() {
        let mut settings = Settings::default();

        set_value(&mut settings, "youtube.api_key", "abc123").unwrap();
        set_value(&mut settings, "youtube.max_results", "25").unwrap();
        set_value(&mut settings, "youtube.timeout_seconds", "60").unwrap();
        set_value(&mut settings, "general.log_level", "debug").unwrap();

        assert_eq!(settings.youtube.api_key.as_deref(), Some("abc123"));
        assert_eq!(settings.youtube.max_results, 25);
        assert_eq!(settings.youtube.timeout_seconds, 60);
        assert_eq!(settings.general.log_level, "debug");
    }

    #[test]
    fn test_set_unknown_key_rejected() {
        let mut settings = Settings::default();
        let result = set_value(&mut settings, "youtube.quota", "100");
        assert!(matches!(result, Err(SpeidaError::InvalidInput(_))));
    }

    #[test]
    fn test_set_non_numeric_value_rejected() {
        let mut settings = Settings::default();
        let result = set_value(&mut settings, "youtube.max_results", "lots");
        assert!(matches!(result, Err(SpeidaError::InvalidInput(_))));
    }

    #[test]
    fn test_set_persists_to_override_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let action = ConfigAction::Set {
            key: "youtube.max_results".to_string(),
            value: "7".to_string(),
        };
        run_config(&action, Some(&path), Settings::default()).unwrap();

        let loaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.youtube.max_results, 7);
    }
}
