//! Settings schema for proxyconf
//!
//! Settings are stored at `~/.config/proxyconf/config.toml`. Every section
//! is optional; missing values fall back to defaults.

use crate::manager::DEFAULT_MARKERS;
use serde::{Deserialize, Serialize};

/// Root settings structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Package manager executables
    pub commands: CommandsConfig,

    /// Package manager detection
    pub detection: DetectionConfig,
}

/// Executables used to query package manager configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsConfig {
    /// npm executable
    pub npm: String,

    /// yarn executable
    pub yarn: String,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            npm: "npm".to_string(),
            yarn: "yarn".to_string(),
        }
    }
}

/// Package manager detection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Files or directories whose presence means yarn
    pub markers: Vec<String>,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
        }
    }
}
