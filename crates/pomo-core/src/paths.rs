//! Standard paths used by pomo

use std::path::PathBuf;

/// Standard pomo paths
pub struct Paths {
    /// Config directory (~/.config/pomo)
    pub config: PathBuf,
    /// Data directory (~/.local/share/pomo)
    pub data: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self::new()
    }
}

impl Paths {
    pub fn new() -> Self {
        let config = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("pomo");

        let data = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("~/.local/share"))
            .join("pomo");

        Self { config, data }
    }

    /// Default config file
    pub fn config_file(&self) -> PathBuf {
        self.config.join("config.json")
    }

    /// Default log file; the terminal itself belongs to the UI
    pub fn log_file(&self) -> PathBuf {
        self.data.join("pomo.log")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_files_live_under_their_dirs() {
        let paths = Paths::new();
        assert!(paths.config_file().starts_with(&paths.config));
        assert!(paths.log_file().starts_with(&paths.data));
        assert!(paths.config.ends_with("pomo"));
    }
}
