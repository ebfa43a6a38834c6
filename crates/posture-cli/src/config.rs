//! Settings management for the CLI.

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI settings, read from `~/.posture/config.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Assessment database; defaults to `~/.posture/posture.db`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,

    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Default tier filter for scoring
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_filter: Option<u8>,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet format
    Quiet,
}

impl Settings {
    /// Directory holding settings and the default database.
    pub fn home() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".posture"))
    }

    /// Get the default settings file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::home()?.join("config.toml"))
    }

    /// Load settings from the default location, or defaults if absent.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load settings from a file, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&contents)?;
        if settings.tier_filter == Some(0) {
            return Err(CliError::Config("tier_filter must be at least 1".into()));
        }
        Ok(settings)
    }

    /// Save settings to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize settings: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Resolve the database path, preferring an explicit flag.
    pub fn database(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.db_path.clone()) {
            Some(path) => Ok(path),
            None => Ok(Self::home()?.join("posture.db")),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            db_path: None,
            color: true,
            format: OutputFormat::Table,
            tier_filter: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}
