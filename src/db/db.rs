use super::error::StorageError;
use super::migrations::init_with_migrations;
use super::retry::RetryPolicy;
use super::users::Users;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default database file name inside the data directory.
pub const DB_FILE_NAME: &str = "enrollment_system.db";
/// Environment variable naming the database file directly.
pub const DB_PATH_ENV: &str = "ENROLL_DB_PATH";
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 30_000;

/// Per-connection settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageSettings {
    /// How long a statement waits on a locked database before failing with `SQLITE_BUSY`.
    pub busy_timeout: Duration,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }
}

/// A single configured connection, released when dropped.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens `path` in WAL mode with `synchronous = NORMAL` and the configured busy timeout.
    pub fn open(path: &Path, settings: &StorageSettings) -> Result<Db, StorageError> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(settings.busy_timeout)?;
        // journal_mode answers with the resulting mode, so it needs the checked variant
        let _mode: String = conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        Ok(Db { conn })
    }
}

/// Handle to the on-disk database.
///
/// Holds no connection: every operation opens its own through
/// [`Storage::connect`] and drops it before returning, so a `Storage` can be
/// cloned freely and shared across threads.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
    settings: StorageSettings,
    retry: RetryPolicy,
}

impl Storage {
    /// Storage at `path` with default settings and retry policy.
    ///
    /// Nothing is opened until the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: StorageSettings::default(),
            retry: RetryPolicy::default(),
        }
    }

    /// Resolves the database location from `ENROLL_DB_PATH`, falling back to
    /// the configured file name inside the application data directory.
    pub fn from_config(config: &Config) -> Result<Self> {
        let path = match std::env::var(DB_PATH_ENV) {
            Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => DataStorage::new().get_path(&config.database.file_name)?,
        };

        Ok(Self::new(path).with_settings(config.storage_settings()).with_retry(config.retry_policy()))
    }

    /// Replaces the per-connection settings.
    pub fn with_settings(mut self, settings: StorageSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Replaces the retry policy applied to writes.
    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Retry policy used by the stores for every write.
    pub fn retry(&self) -> &RetryPolicy {
        &self.retry
    }

    /// Opens a fresh connection for a single operation.
    pub fn connect(&self) -> Result<Db, StorageError> {
        Db::open(&self.path, &self.settings)
    }

    /// Brings the schema up to date and makes sure the default admin exists.
    ///
    /// Safe to call on every start; neither step duplicates data.
    pub fn initialize(&self) -> Result<()> {
        let mut db = self.connect()?;
        init_with_migrations(&mut db.conn)?;
        drop(db);

        Users::new(self).ensure_default_admin()?;
        tracing::info!(path = %self.path.display(), "storage initialized");

        Ok(())
    }
}
