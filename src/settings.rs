//! Game configuration record
//!
//! Loaded from an optional JSON file; missing fields fall back to defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{DEFAULT_TARGET_FPS, MAX_TARGET_FPS};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("target_fps must be between 1 and {max}, got {0}", max = MAX_TARGET_FPS)]
    InvalidFps(u32),
}

/// Session-level configuration handed to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Frame rate the host tries to keep (best effort)
    pub target_fps: u32,
    /// Show an FPS counter on screen
    pub show_fps: bool,
    /// Keep the display backlight on for the whole session
    pub always_backlight: bool,
    /// Fixed RNG seed (random when absent)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            target_fps: DEFAULT_TARGET_FPS,
            show_fps: false,
            always_backlight: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON config
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_fps == 0 || self.target_fps > MAX_TARGET_FPS {
            return Err(ConfigError::InvalidFps(self.target_fps));
        }
        Ok(())
    }

    /// Wall-clock budget of one frame
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.target_fps.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.target_fps, 30);
        assert!(!config.show_fps);
        assert!(config.always_backlight);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "show_fps": true, "seed": 12 }"#).unwrap();
        assert!(config.show_fps);
        assert_eq!(config.seed, Some(12));
        assert_eq!(config.target_fps, 30);
        assert!(config.always_backlight);
    }

    #[test]
    fn test_rejects_bad_fps() {
        assert!(matches!(
            GameConfig::from_json(r#"{ "target_fps": 0 }"#),
            Err(ConfigError::InvalidFps(0))
        ));
        assert!(matches!(
            GameConfig::from_json(r#"{ "target_fps": 1000 }"#),
            Err(ConfigError::InvalidFps(1000))
        ));
    }

    #[test]
    fn test_invalid_fps_message_names_the_range() {
        let err = GameConfig::from_json(r#"{ "target_fps": 0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "target_fps must be between 1 and 240, got 0");
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            GameConfig::from_json("{ target_fps"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_reads_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("touch-target.json");
        std::fs::write(&path, r#"{ "target_fps": 60, "always_backlight": false }"#).unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.target_fps, 60);
        assert!(!config.always_backlight);
        assert!(!config.show_fps);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_load_rejects_invalid_file_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("touch-target.json");
        std::fs::write(&path, r#"{ "target_fps": 0 }"#).unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::InvalidFps(0))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = GameConfig::load(Path::new("/nonexistent/touch-target.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/touch-target.json"));
    }

    #[test]
    fn test_frame_duration() {
        let config = GameConfig::default();
        let millis = config.frame_duration().as_secs_f64() * 1000.0;
        assert!((millis - 33.333).abs() < 0.01);
    }
}
