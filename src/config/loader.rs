//! Configuration structures and loading logic.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Archive layout settings.
    pub archive: ArchiveSection,
}

/// Archive layout configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArchiveSection {
    /// Base directory under which all site/date/kind subdirectories live.
    pub root: PathBuf,

    /// Staging directory where the processing pipeline leaves files before
    /// they are moved into the archive.
    #[serde(default = "default_temp_dir")]
    pub temp_dir: PathBuf,
}

fn default_temp_dir() -> PathBuf {
    PathBuf::from("temp_data")
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Configuration file not found: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
