//! Shared application settings (database path, listing page size).
//!
//! The settings file is always `~/.config/rungroup/settings.toml`. Every
//! value can be overridden from the command line; the database path can
//! also come from `$RUNGROUP_DB`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing::DEFAULT_PAGE_SIZE;

/// Environment variable that overrides the configured database path.
pub const DB_ENV_VAR: &str = "RUNGROUP_DB";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("{0}")]
    Invalid(String),
}

/// Canonical path to the settings file: `~/.config/rungroup/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("rungroup").join("settings.toml")
}

/// Database used when nothing else is configured.
pub fn default_db_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rungroup")
        .join("rungroup.db")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub database: DatabaseSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<i64>,
}

impl Settings {
    /// Load from the canonical settings file. A missing file is all defaults.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        let settings: Settings = toml::from_str(&contents).map_err(|source| {
            SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })?;
        if let Some(size) = settings.catalog.page_size
            && size < 1
        {
            return Err(SettingsError::Invalid(format!(
                "catalog.page_size must be at least 1, got {size}"
            )));
        }
        Ok(settings)
    }

    /// Write atomically, creating the parent directory if needed.
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let serialized = toml::to_string_pretty(self)?;
        let tmp = path.with_extension("toml.tmp");
        std::fs::write(&tmp, &serialized)?;
        std::fs::rename(&tmp, path)?;
        Ok(())
    }

    pub fn page_size(&self) -> i64 {
        self.catalog.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}

// ── Resolution ──────────────────────────────────────────────────────────────

/// Where the database path came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSource {
    CommandLine,
    EnvVar(&'static str),
    ConfigFile,
    Default,
}

impl std::fmt::Display for PathSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CommandLine => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Resolve the database path using a priority chain:
///
/// 1. CLI override (if `Some`)
/// 2. `$RUNGROUP_DB`
/// 3. `database.path` in `settings.toml`
/// 4. [`default_db_path`]
pub fn resolve_db_path(cli_override: Option<PathBuf>, settings: &Settings) -> (PathBuf, PathSource) {
    let env = std::env::var_os(DB_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    resolve_db_path_from(cli_override, env, settings)
}

/// [`resolve_db_path`] with the environment value passed in.
pub fn resolve_db_path_from(
    cli_override: Option<PathBuf>,
    env: Option<PathBuf>,
    settings: &Settings,
) -> (PathBuf, PathSource) {
    if let Some(p) = cli_override {
        return (p, PathSource::CommandLine);
    }
    if let Some(p) = env {
        return (p, PathSource::EnvVar(DB_ENV_VAR));
    }
    if let Some(p) = settings.database.path.clone() {
        return (p, PathSource::ConfigFile);
    }
    (default_db_path(), PathSource::Default)
}

/// Page size from the command line, then settings, then [`DEFAULT_PAGE_SIZE`].
pub fn resolve_page_size(cli_override: Option<i64>, settings: &Settings) -> i64 {
    cli_override.unwrap_or_else(|| settings.page_size())
}

/// Load the full settings file as a pretty-printed TOML string for display.
pub fn load_settings_string() -> Option<String> {
    let contents = std::fs::read_to_string(settings_path()).ok()?;
    let doc: toml::Value = contents.parse().ok()?;
    toml::to_string_pretty(&doc).ok()
}
