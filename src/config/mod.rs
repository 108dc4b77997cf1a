//! Startup configuration loading and defaults.
//!
//! The config file holds session defaults only (a preferred layout, display
//! tweaks), never formation state. A missing or unreadable file always
//! degrades to defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// File name looked for in the working directory and the platform config
/// directory.
pub const CONFIG_FILE: &str = "bandhour.config.json";

/// Session configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred formation layout, applied when no setup flags are given.
    #[serde(default)]
    pub formation: FormationDefaults,

    /// Output rendering settings.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Default layout to build at startup instead of prompting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormationDefaults {
    /// Per-row position counts; empty means prompt interactively.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positions: Vec<usize>,
}

/// Output rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Number of position columns each printed row is padded to.
    #[serde(default = "default_columns")]
    pub columns: usize,
}

fn default_columns() -> usize {
    crate::model::MAX_POSITIONS
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            columns: default_columns(),
        }
    }
}

impl Config {
    /// Load config from a JSON file.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file.
    pub fn save<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Look for a config file in the platform config directory, falling
    /// back to defaults when none is found or it fails to parse.
    pub fn discover() -> Self {
        let Some(path) = Config::user_config_path() else {
            return Config::default();
        };
        if !path.exists() {
            return Config::default();
        }
        match Config::load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring unreadable config {}: {}", path.display(), err);
                Config::default()
            }
        }
    }

    fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bandhour").join(CONFIG_FILE))
    }
}
