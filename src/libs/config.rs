//! Configuration management for the enrollment application.
//!
//! Settings live in `config.json` inside the application data directory.
//! A missing file is not an error: every section has defaults, and sections
//! absent from an existing file are filled in from them.
//!
//! ## Configuration Structure
//!
//! - **Database**: file name and busy timeout for each connection
//! - **Retry**: attempts and base backoff for write operations
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use enrollment::db::db::Storage;
//! use enrollment::libs::config::Config;
//!
//! let config = Config::read()?;
//! let storage = Storage::from_config(&config)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::{StorageSettings, DB_FILE_NAME, DEFAULT_BUSY_TIMEOUT_MS};
use crate::db::retry::{RetryPolicy, DEFAULT_BASE_DELAY_MS, DEFAULT_MAX_ATTEMPTS};
use crate::libs::messages::Message;
use crate::msg_error_anyhow;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file name inside the data directory.
    pub file_name: String,
    /// Busy timeout per connection, in milliseconds.
    pub busy_timeout_ms: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        DatabaseConfig {
            file_name: DB_FILE_NAME.to_string(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct RetryConfig {
    /// Total attempts for a write, including the first.
    pub max_attempts: u32,
    /// Backoff unit in milliseconds; the n-th retry waits `n * base_delay_ms`.
    pub base_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        RetryConfig {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            base_delay_ms: DEFAULT_BASE_DELAY_MS,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub database: DatabaseConfig,
    pub retry: RetryConfig,
}

impl Config {
    /// Reads the configuration file, or returns defaults when there is none.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        Self::parse(&config_str)
    }

    /// Parses configuration JSON.
    pub fn parse(json: &str) -> Result<Config> {
        serde_json::from_str(json).map_err(|e| {
            tracing::error!(error = %e, "invalid configuration file");
            msg_error_anyhow!(Message::ConfigParseError)
        })
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn storage_settings(&self) -> StorageSettings {
        StorageSettings {
            busy_timeout: Duration::from_millis(self.database.busy_timeout_ms),
        }
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.retry.max_attempts, Duration::from_millis(self.retry.base_delay_ms))
    }
}
