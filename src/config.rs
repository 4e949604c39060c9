// User configuration.
// Loads settings from a JSON file in the platform config directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::github::client::GITHUB_API_BASE;

/// Environment variable that overrides the handle shown at startup.
pub const HANDLE_ENV: &str = "GHPROFILE_HANDLE";

/// Get the config directory (~/.config/ghprofile on Linux).
pub fn config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "ghprofile").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Path to the config file.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Settings read at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Profile loaded before anything is searched.
    pub default_handle: String,
    /// API root for all requests.
    pub api_base_url: String,
    /// Quiet period before a search is sent, in milliseconds.
    pub debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_handle: "github".to_string(),
            api_base_url: GITHUB_API_BASE.to_string(),
            debounce_ms: 500,
        }
    }
}

/// Outcome of reading the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    /// File existed and parsed.
    Read(Config),
    /// No file yet; defaults apply.
    Missing(Config),
}

impl Loaded {
    pub fn into_config(self) -> Config {
        match self {
            Loaded::Read(config) | Loaded::Missing(config) => config,
        }
    }
}

impl Config {
    /// Read the config at `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Loaded> {
        if !path.exists() {
            return Ok(Loaded::Missing(Self::default()));
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        Ok(Loaded::Read(config))
    }

    /// Write the config as pretty JSON.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;

        // Write atomically via temp file
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Replace the default handle when the override is set and not blank.
    pub fn with_handle_override(mut self, handle: Option<String>) -> Self {
        if let Some(handle) = handle {
            let handle = handle.trim();
            if !handle.is_empty() {
                self.default_handle = handle.to_string();
            }
        }
        self
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
