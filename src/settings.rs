//! Game settings and preferences
//!
//! Persisted as JSON next to the save file. Missing fields take their
//! defaults, so older settings files keep loading.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::accounts::DEFAULT_TOP_SCORES;
use crate::consts::FRAME_RATE;
use crate::error::Result;
use crate::persistence;

/// Default settings file, relative to the working directory
pub const SETTINGS_FILE: &str = "platformer_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frames per second of the level loop
    pub frame_rate: u32,
    /// Where accounts and scores are saved
    pub save_path: PathBuf,
    /// Frames a key press counts as held on terminals without key-release events
    pub key_hold_frames: u32,
    /// Leaderboard length on the high scores screen
    pub top_scores: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_rate: FRAME_RATE,
            save_path: PathBuf::from("platformer_scores.json"),
            key_hold_frames: 8,
            top_scores: DEFAULT_TOP_SCORES,
        }
    }
}

impl Settings {
    /// Clamp values that would stall or break the game loop
    pub fn sanitized(mut self) -> Self {
        self.frame_rate = self.frame_rate.clamp(1, 240);
        self.key_hold_frames = self.key_hold_frames.max(1);
        self.top_scores = self.top_scores.max(1);
        self
    }

    /// Load settings, falling back to defaults
    pub fn load(path: &Path) -> Self {
        if let Some(value) = persistence::read_json(path) {
            match serde_json::from_value::<Settings>(value) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    return settings.sanitized();
                }
                Err(e) => log::warn!("Ignoring invalid settings: {e}"),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        persistence::write_json_atomic(path, self)?;
        log::info!("Settings saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "frame_rate": 30 }"#).unwrap();
        assert_eq!(settings.frame_rate, 30);
        assert_eq!(settings.key_hold_frames, 8);
        assert_eq!(settings.top_scores, 3);
    }

    #[test]
    fn test_sanitized() {
        let settings = Settings {
            frame_rate: 0,
            key_hold_frames: 0,
            top_scores: 0,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(settings.frame_rate, 1);
        assert_eq!(settings.key_hold_frames, 1);
        assert_eq!(settings.top_scores, 1);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!(
            "platformer-{}-settings.json",
            std::process::id()
        ));
        let settings = Settings {
            frame_rate: 50,
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let loaded = Settings::load(Path::new("/nonexistent/platformer/settings.json"));
        assert_eq!(loaded, Settings::default());
    }
}
