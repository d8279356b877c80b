use rusqlite::ffi;
use rusqlite::ErrorCode;
use thiserror::Error;

/// Failures raised inside the storage layer.
///
/// Public store operations fold these into an
/// [`Outcome`](crate::libs::outcome::Outcome); they only travel between the
/// query code, the retry policy and the outcome mapping.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A UNIQUE constraint rejected the write.
    #[error("unique constraint violated")]
    Conflict,

    /// An update or delete matched no row.
    #[error("record not found")]
    NotFound,

    /// Input rejected before reaching the database.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Sqlite(rusqlite::Error),
}

impl StorageError {
    /// `true` for lock contention (`SQLITE_BUSY`, `SQLITE_LOCKED`), which may
    /// clear on its own and is worth retrying.
    pub fn is_transient(&self) -> bool {
        match self {
            StorageError::Sqlite(rusqlite::Error::SqliteFailure(err, _)) => {
                matches!(err.code, ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked)
            }
            _ => false,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _) if e.extended_code == ffi::SQLITE_CONSTRAINT_UNIQUE => StorageError::Conflict,
            _ => StorageError::Sqlite(err),
        }
    }
}
