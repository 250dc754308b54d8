//! Configuration module for Speida.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{GeneralSettings, Settings, YoutubeSettings};
