//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration and data.

use crate::error::{ConfigError, ConfigResult};
use crate::types::RecordKind;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/roster)
    pub config_dir: PathBuf,
    /// Data directory (~/.local/share/roster)
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn resolve() -> ConfigResult<Self> {
        let project =
            ProjectDirs::from("com", "roster", "roster").ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
            data_dir: project.data_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }

    /// Default record file for a kind, e.g. `drivers.json`.
    pub fn records_file(&self, kind: RecordKind) -> PathBuf {
        self.data_dir.join(format!("{}.json", kind.plural()))
    }

    /// Default activity log.
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("roster.log")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Which collection to manage.
    pub kind: RecordKind,
    /// Record file; defaults to the data directory.
    pub data_file: Option<PathBuf>,
    /// Activity log; defaults to the data directory.
    pub log_file: Option<PathBuf>,
    /// Log filter directive when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            kind: RecordKind::default(),
            data_file: None,
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, falling back to defaults.
    pub fn load(paths: &Paths) -> ConfigResult<Self> {
        let file = paths.settings_file();

        if !file.exists() {
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Save settings to the default location.
    pub fn save(&self, paths: &Paths) -> ConfigResult<()> {
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Record file to use, honoring an explicit setting.
    pub fn data_file(&self, paths: &Paths) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| paths.records_file(self.kind))
    }

    /// Log file to use, honoring an explicit setting.
    pub fn log_file(&self, paths: &Paths) -> PathBuf {
        self.log_file.clone().unwrap_or_else(|| paths.log_file())
    }
}
