// ⚙️ Runtime configuration - storage path and logging, resolved from the environment

use std::path::PathBuf;
use thiserror::Error;

pub const ENV_DB_PATH: &str = "CALORIE_TRACKER_DB";
pub const ENV_LOG_DIR: &str = "CALORIE_TRACKER_LOG_DIR";
pub const ENV_LOG_LEVEL: &str = "CALORIE_TRACKER_LOG";

const APP_DIR: &str = "calorie-tracker";
const DB_FILE: &str = "calorie-tracker.db";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unsupported log level `{0}` (expected one of error, warn, info, debug, trace)")]
    InvalidLogLevel(String),

    #[error("{0} is set but empty")]
    EmptyValue(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through `lookup` instead of the process environment
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = default_data_dir();

        let db_path = match non_empty(&lookup, ENV_DB_PATH)? {
            Some(path) => PathBuf::from(path),
            None => data_dir.join(DB_FILE),
        };

        let log_dir = match non_empty(&lookup, ENV_LOG_DIR)? {
            Some(dir) => PathBuf::from(dir),
            None => data_dir.join("logs"),
        };

        let log_level = match non_empty(&lookup, ENV_LOG_LEVEL)? {
            Some(level) => normalize_level(&level)?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

fn non_empty<F>(lookup: &F, key: &'static str) -> Result<Option<String>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::EmptyValue(key)),
        Some(value) => Ok(Some(value.trim().to_string())),
        None => Ok(None),
    }
}

fn normalize_level(level: &str) -> Result<String, ConfigError> {
    let lowered = level.to_ascii_lowercase();
    if LOG_LEVELS.contains(&lowered.as_str()) {
        Ok(lowered)
    } else {
        Err(ConfigError::InvalidLogLevel(level.to_string()))
    }
}

/// Per-user data directory, or the working directory when the platform has none
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_else(|| PathBuf::from("."))
}
