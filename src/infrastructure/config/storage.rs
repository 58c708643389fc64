//! Locating, reading and seeding `config.toml`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::{info, warn};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration directory on this platform")]
    NoConfigDir,
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot encode default configuration: {0}")]
    Encode(#[from] toml::ser::Error),
}

impl ConfigError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Finds the configuration file and turns it into an [`AppConfig`].
///
/// A missing file is seeded with the defaults; an unreadable one is
/// reported and replaced by the defaults in memory, never on disk.
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    /// Store rooted at the platform configuration directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoConfigDir` when the platform has none.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::at(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Store rooted at an explicit directory.
    #[must_use]
    pub const fn at(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// File read when no `--config` path is given.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the configuration from `explicit`, or from the default path.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults
    /// cannot be written.
    pub fn load(&self, explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = explicit.map_or_else(|| self.default_path(), Path::to_path_buf);

        if !path.exists() {
            info!(path = %path.display(), "Writing default configuration");
            let defaults = AppConfig::default();
            write_atomically(&path, &toml::to_string_pretty(&defaults)?)?;
            return Ok(defaults);
        }

        let content = fs::read_to_string(&path).map_err(|e| ConfigError::io(&path, e))?;
        let config = toml::from_str::<AppConfig>(&content).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "Invalid configuration, using defaults");
            AppConfig::default()
        });

        if config.ui.tick_rate_ms == 0 {
            warn!(path = %path.display(), "ui.tick_rate_ms is 0, ticking every millisecond");
        }

        Ok(config)
    }
}

/// Writes through a sibling temporary file so readers never see half a file.
fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| ConfigError::io(dir, e))?;

    let mut staged = tempfile::NamedTempFile::new_in(dir).map_err(|e| ConfigError::io(dir, e))?;
    staged
        .write_all(content.as_bytes())
        .map_err(|e| ConfigError::io(staged.path(), e))?;
    staged
        .persist(path)
        .map_err(|e| ConfigError::io(path, e.error))?;

    Ok(())
}
