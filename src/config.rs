//! Persisted user configuration
//!
//! Stored as JSON at `<config_dir>/paises/config.json`. Missing fields take
//! their defaults so older files keep loading.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::api::DEFAULT_BASE_URL;
use crate::country::DEFAULT_TRANSLATION;
use crate::error::ConfigError;

const APP_DIR: &str = "paises";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_filter(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the REST Countries service.
    pub api_base_url: String,
    /// Key under `translations` preferred for display names.
    pub translation: String,
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_BASE_URL.to_string(),
            translation: DEFAULT_TRANSLATION.to_string(),
            log_level: LogLevel::default(),
        }
    }
}

/// Application directory under the platform config dir.
pub fn app_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR))
}

pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Load the user's config; defaults when there is no config dir or file.
pub fn load() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    let config = serde_json::from_str(&content)?;
    debug!(path = %path.display(), "Config loaded");
    Ok(config)
}

/// Persist `config` to the user's config dir.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    match config_path() {
        Some(path) => save_to(&path, config),
        None => Err(ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no config directory on this platform",
        ))),
    }
}

pub fn save_to(path: &Path, config: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, serde_json::to_string_pretty(config)?)?;
    info!(path = %path.display(), "Config saved");
    Ok(())
}
