//! Window and run configuration
//!
//! Persisted as JSON in the working directory; a missing or malformed
//! file falls back to defaults.

use serde::{Deserialize, Serialize};

/// Window/run preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Window size in logical pixels
    pub width: u32,
    pub height: u32,
    /// Hide the OS cursor over the arena (the paddle is the cursor)
    pub hide_cursor: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            hide_cursor: true,
        }
    }
}

impl Settings {
    /// Settings file path, relative to the working directory
    const STORAGE_PATH: &'static str = "solo_tennis_settings.json";

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        match std::fs::read_to_string(Self::STORAGE_PATH) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", Self::STORAGE_PATH);
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed {}: {}", Self::STORAGE_PATH, err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Save settings to disk; failures are logged, never fatal
    pub fn save(&self) {
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(err) = std::fs::write(Self::STORAGE_PATH, json) {
                    log::warn!("Could not save settings: {}", err);
                }
            }
            Err(err) => log::warn!("Could not serialize settings: {}", err),
        }
    }
}
