//! User configuration.
//!
//! Loaded from `<config dir>/pacer/config.toml` (or the file named by
//! `PACER_CONFIG`). Every field has a default, so a missing file or a file
//! with only some sections is fine.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::chapters::ChapterNavigator;
use crate::rate::RatePolicy;
use crate::store::{FileStore, DEFAULT_RATE_KEY};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "PACER_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub rate: RatePolicy,
    pub chapters: ChapterNavigator,
    pub keys: KeyBindings,
    pub input: InputConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
}

/// Keys for the rate commands. Chapter navigation is fixed to Alt+Left/Right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub speed_up: char,
    pub slow_down: char,
    pub reset: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            speed_up: 'd',
            slow_down: 'a',
            reset: 's',
        }
    }
}

/// Pointer input tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Accumulated wheel delta needed before one rate step is taken.
    pub wheel_threshold: f64,
    /// Delta contributed by one wheel notch.
    pub wheel_notch_delta: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_threshold: 100.0,
            wheel_notch_delta: 120.0,
        }
    }
}

/// Where the playback rate is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Store file; defaults to `<data dir>/pacer/store.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Key the rate is stored under.
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: DEFAULT_RATE_KEY.to_string(),
        }
    }
}

/// Logging settings. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    /// Log file used while the interactive session owns the terminal;
    /// defaults to `<data dir>/pacer/pacer.log`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}

impl Config {
    /// Load the config from its default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load the config from `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// Config file location: `$PACER_CONFIG`, else `<config dir>/pacer/config.toml`.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(dir.join("pacer").join("config.toml"))
    }

    /// Write the config to its default location, creating directories.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Resolved store file location.
    pub fn store_path(&self) -> Result<PathBuf> {
        match &self.storage.path {
            Some(path) => Ok(path.clone()),
            None => FileStore::default_path().context("Could not determine data directory"),
        }
    }

    /// Resolved log file location.
    pub fn log_path(&self) -> Option<PathBuf> {
        self.log
            .file
            .clone()
            .or_else(|| dirs::data_dir().map(|dir| dir.join("pacer").join("pacer.log")))
    }

    /// Reject settings the controllers cannot work with.
    pub fn validate(&self) -> Result<()> {
        if let Err(msg) = self.rate.validate() {
            bail!(msg);
        }
        if self.chapters.restart_window < 0.0 || self.chapters.snap_back < 0.0 {
            bail!("chapters.restart_window_secs and chapters.snap_back_secs must not be negative");
        }
        if self.input.wheel_threshold <= 0.0 {
            bail!("input.wheel_threshold must be positive");
        }
        let keys = &self.keys;
        if keys.speed_up == keys.slow_down
            || keys.speed_up == keys.reset
            || keys.slow_down == keys.reset
        {
            bail!("keys.speed_up, keys.slow_down and keys.reset must be different keys");
        }
        if self.storage.key.is_empty() {
            bail!("storage.key must not be empty");
        }
        Ok(())
    }
}
