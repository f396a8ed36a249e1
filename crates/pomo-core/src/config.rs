//! Startup configuration
//!
//! Read once from `~/.config/pomo/config.json` when present. The file is never
//! written back: changes made in the settings view last for the session only.

use serde::Deserialize;
use std::path::Path;
use tracing::warn;

use crate::countdown::{clamp_minutes, DEFAULT_PAUSE_MINUTES, DEFAULT_WORK_MINUTES};
use crate::error::ConfigError;

/// Startup defaults for the timer and the completion chime
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Work phase length in minutes
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,

    /// Pause phase length in minutes
    #[serde(default = "default_pause_minutes")]
    pub pause_minutes: u32,

    /// Start the next phase automatically when one completes
    #[serde(default)]
    pub auto_advance: bool,

    /// Ring the terminal bell on completion
    #[serde(default = "default_true")]
    pub bell: bool,

    /// Raise a desktop notification on completion
    #[serde(default = "default_true")]
    pub desktop_notifications: bool,
}

fn default_work_minutes() -> u32 {
    DEFAULT_WORK_MINUTES
}

fn default_pause_minutes() -> u32 {
    DEFAULT_PAUSE_MINUTES
}

fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            pause_minutes: default_pause_minutes(),
            auto_advance: false,
            bell: true,
            desktop_notifications: true,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config.normalized())
    }

    /// Clamp phase lengths into the supported range
    pub fn normalized(mut self) -> Self {
        let work = clamp_minutes(self.work_minutes);
        if work != self.work_minutes {
            warn!(requested = self.work_minutes, using = work, "work minutes out of range");
            self.work_minutes = work;
        }

        let pause = clamp_minutes(self.pause_minutes);
        if pause != self.pause_minutes {
            warn!(requested = self.pause_minutes, using = pause, "pause minutes out of range");
            self.pause_minutes = pause;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.work_minutes, 25);
        assert_eq!(config.pause_minutes, 5);
        assert!(!config.auto_advance);
        assert!(config.bell);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"work_minutes": 50, "auto_advance": true}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.work_minutes, 50);
        assert_eq!(config.pause_minutes, 5);
        assert!(config.auto_advance);
        assert!(config.desktop_notifications);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"work_minutes": 90, "pause_minutes": 0}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.work_minutes, 60);
        assert_eq!(config.pause_minutes, 1);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.json"));
    }
}
