//! Runtime configuration.
//!
//! # Responsibility
//! - Resolve storage path, log settings and the acting user id.
//! - Read `DREAMPLAN_*` environment variables with build-mode defaults.
//!
//! # Invariants
//! - Resolution never touches the filesystem.
//! - Blank values are treated as unset.

use crate::logging::{default_log_level, normalize_level};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const ENV_DB_PATH: &str = "DREAMPLAN_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "DREAMPLAN_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "DREAMPLAN_LOG_DIR";
pub const ENV_USER_ID: &str = "DREAMPLAN_USER_ID";

pub const DEFAULT_DB_FILE_NAME: &str = "dreamplan.sqlite3";
pub const DEFAULT_USER_ID: &str = "local";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, message: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, message } => write!(f, "invalid `{key}`: {message}"),
        }
    }
}

impl Error for ConfigError {}

/// Effective settings for one process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_path: PathBuf,
    pub log_level: &'static str,
    /// File logging is disabled when unset.
    pub log_dir: Option<PathBuf>,
    /// Author id stamped on new dreams and profile saves.
    pub user_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            log_level: default_log_level(),
            log_dir: None,
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Resolves configuration from process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through `lookup`, falling back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();
        if let Some(path) = read(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = read(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level).map_err(|message| {
                ConfigError::InvalidValue {
                    key: ENV_LOG_LEVEL,
                    message,
                }
            })?;
        }
        config.log_dir = read(ENV_LOG_DIR).map(PathBuf::from);
        if let Some(user_id) = read(ENV_USER_ID) {
            config.user_id = user_id;
        }

        Ok(config)
    }
}
