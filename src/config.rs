//! Configuration management for the contact book.
//!
//! Values come from environment variables, with a `.env` file loaded first
//! when one is present.

use crate::error::{ConfigError, ConfigResult};
use crate::store::DEFAULT_TABLE;
use std::env;
use std::path::PathBuf;

/// File name of the database when no path is configured.
pub const DEFAULT_DB_FILE: &str = "db.json";

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON database file
    pub db_path: PathBuf,

    /// Table inside the database file holding contacts (default: "_default")
    pub table: String,

    /// Log level used when `RUST_LOG` is not set (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACTS_DB_PATH`: database file (default: `db.json` next to the executable)
    /// - `CONTACTS_TABLE`: table name (default: `_default`)
    /// - `LOG_LEVEL`: one of trace, debug, info, warn, error (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let db_path = match env::var("CONTACTS_DB_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACTS_DB_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => Self::default_db_path(),
        };

        let table = env::var("CONTACTS_TABLE").unwrap_or_else(|_| DEFAULT_TABLE.to_string());
        if table.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_TABLE".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config {
            db_path,
            table,
            log_level,
        })
    }

    /// `db.json` in the directory of the running executable, or in the
    /// working directory when that cannot be determined.
    pub fn default_db_path() -> PathBuf {
        env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_DB_FILE)))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Parse a log level environment variable with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), val),
                    })
                }
            }
            Err(_) => Ok(default.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            db_path: Self::default_db_path(),
            table: DEFAULT_TABLE.to_string(),
            log_level: "error".to_string(),
        }
    }
}
