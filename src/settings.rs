//! Game settings
//!
//! Explicit configuration handed to the simulation at initialization; nothing
//! here is process-global. A JSON file can override the defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts;

/// Game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Play field size in pixels
    pub window_width: i32,
    pub window_height: i32,

    /// Directory holding the sprite bitmaps (consumed by the renderer)
    pub image_dir: PathBuf,

    /// Stationary sprites
    pub bird_count: usize,
    pub bird_width: i32,
    pub bird_height: i32,

    /// Movable sprite
    pub fire_width: i32,
    pub fire_height: i32,
    /// Pixels per tick
    pub fire_speed: i32,

    /// Re-roll budget for non-overlapping placement
    pub placement_retries: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: consts::WINDOW_WIDTH,
            window_height: consts::WINDOW_HEIGHT,
            image_dir: PathBuf::from("images"),
            bird_count: consts::BIRD_COUNT,
            bird_width: consts::BIRD_WIDTH,
            bird_height: consts::BIRD_HEIGHT,
            fire_width: consts::FIRE_WIDTH,
            fire_height: consts::FIRE_HEIGHT,
            fire_speed: consts::FIRE_SPEED,
            placement_retries: consts::PLACEMENT_RETRIES,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, falling back to defaults on any error.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings out as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_original_demo() {
        let s = Settings::default();
        assert_eq!((s.window_width, s.window_height), (600, 600));
        assert_eq!(s.bird_count, 8);
        assert_eq!(s.fire_speed, 3);
        assert_eq!(s.placement_retries, 100);
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let s = Settings::load(Path::new("/nonexistent/skyfire.json"));
        assert_eq!(s.bird_count, Settings::default().bird_count);
    }

    #[test]
    fn partial_json_keeps_defaults_for_the_rest() {
        let s: Settings = serde_json::from_str(r#"{ "bird_count": 3 }"#).unwrap();
        assert_eq!(s.bird_count, 3);
        assert_eq!(s.fire_speed, Settings::default().fire_speed);
    }
}
