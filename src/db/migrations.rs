//! Database schema migration management and versioning system.
//!
//! Tracks applied schema versions in a `migrations` table and applies pending
//! ones inside a single transaction on startup.
//!
//! ## Features
//!
//! - **Version Tracking**: Maintains records of applied migrations
//! - **Automatic Application**: Runs pending migrations during initialization
//! - **Transaction Safety**: All pending migrations commit or roll back together
//! - **Concurrent Starts**: The write lock is taken before the version is read
//! - **Legacy Upgrades**: Column additions check the live table first, so
//!   databases created before versioning existed upgrade cleanly
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enrollment::db::migrations::{get_db_version, init_with_migrations};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("enrollment_system.db")?;
//! init_with_migrations(&mut conn)?;
//! let version = get_db_version(&conn)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{params, Connection, Transaction, TransactionBehavior};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema change.
#[derive(Debug, Clone)]
struct Migration {
    /// Unique version number for ordering and tracking
    version: u32,
    /// Human-readable name describing the migration's purpose
    name: &'static str,
    /// Applies the schema changes within a transaction
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationManager {
    /// Creates a manager with every migration registered.
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        // Version 1: account and student tables as first released
        self.add_migration(1, "create_base_tables", |tx| {
            tx.execute(
                "CREATE TABLE IF NOT EXISTS users (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    username TEXT UNIQUE NOT NULL,
                    password TEXT NOT NULL,
                    full_name TEXT NOT NULL,
                    email TEXT,
                    role TEXT DEFAULT 'user',
                    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
                )",
                [],
            )?;

            tx.execute(
                "CREATE TABLE IF NOT EXISTS students (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    student_id TEXT UNIQUE NOT NULL,
                    first_name TEXT NOT NULL,
                    last_name TEXT NOT NULL,
                    email TEXT,
                    phone TEXT,
                    course TEXT NOT NULL,
                    year_level TEXT,
                    enrollment_date TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                    status TEXT DEFAULT 'Enrolled'
                )",
                [],
            )?;
            Ok(())
        });

        // Version 2: middle name and college department on student records
        self.add_migration(2, "add_student_middle_name_and_department", |tx| {
            add_column_if_missing(tx, "students", "middle_name", "TEXT")?;
            add_column_if_missing(tx, "students", "department", "TEXT")?;
            Ok(())
        });

        // Version 3: split account names so the display name can be rebuilt
        self.add_migration(3, "add_user_name_parts", |tx| {
            add_column_if_missing(tx, "users", "first_name", "TEXT")?;
            add_column_if_missing(tx, "users", "middle_name", "TEXT")?;
            add_column_if_missing(tx, "users", "last_name", "TEXT")?;
            Ok(())
        });

        // Version 4: indices for name sorting and department alias lookups
        self.add_migration(4, "add_student_indices", |tx| {
            tx.execute("CREATE INDEX IF NOT EXISTS idx_students_name ON students(last_name, first_name)", [])?;
            tx.execute("CREATE INDEX IF NOT EXISTS idx_students_department ON students(department)", [])?;
            Ok(())
        });
    }

    fn add_migration(&mut self, version: u32, name: &'static str, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { version, name, up });
    }

    /// Applies every migration newer than the recorded schema version.
    ///
    /// The pending set is computed inside an immediate transaction, so the
    /// write lock is held from the version read until commit. Concurrent
    /// starts on the same file serialize here; the later one finds nothing
    /// pending and applies nothing.
    ///
    /// # Arguments
    ///
    /// * `conn` - Connection to the database being upgraded
    ///
    /// # Returns
    ///
    /// `Ok(())` once the schema is at the latest version. A failing
    /// migration rolls back every migration applied in the same call.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;
        tx.execute(MIGRATIONS_TABLE, [])?;

        let current_version = self.get_current_version(&tx)?;
        let pending: Vec<&Migration> = self.migrations.iter().filter(|m| m.version > current_version).collect();

        if pending.is_empty() {
            tx.commit()?;
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_info!(Message::MigrationsFound(pending.len()));

        for migration in pending {
            msg_debug!(Message::RunningMigration(migration.version, migration.name.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    tx.execute(
                        "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                        params![migration.version, migration.name],
                    )?;
                    msg_debug!(Message::MigrationCompleted(migration.version));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.version, e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_success!(Message::AllMigrationsCompleted);

        Ok(())
    }

    /// Highest applied version, or 0 when the tracking table does not exist yet.
    fn get_current_version(&self, conn: &Connection) -> Result<u32> {
        match conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get::<_, Option<u32>>(0)) {
            Ok(version) => Ok(version.unwrap_or(0)),
            Err(rusqlite::Error::SqliteFailure(_, Some(message))) if message.starts_with("no such table") => Ok(0),
            Err(e) => Err(e.into()),
        }
    }

    fn latest_version(&self) -> u32 {
        self.migrations.last().map(|m| m.version).unwrap_or(0)
    }

    /// Applied migrations as `(version, name, applied_at)`, oldest first.
    ///
    /// # Errors
    ///
    /// Fails when the tracking table does not exist, i.e. on a database that
    /// was never initialized.
    pub fn get_migration_history(&self, conn: &Connection) -> Result<Vec<(u32, String, String)>> {
        let mut stmt = conn.prepare("SELECT version, name, applied_at FROM migrations ORDER BY version")?;

        let history = stmt
            .query_map([], |row| Ok((row.get::<_, u32>(0)?, row.get::<_, String>(1)?, row.get::<_, String>(2)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(history)
    }
}

/// Adds `column` to `table` unless the live schema already has it.
fn add_column_if_missing(tx: &Transaction, table: &str, column: &str, definition: &str) -> Result<()> {
    let mut stmt = tx.prepare(&format!("PRAGMA table_info({})", table))?;
    let exists = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<Result<Vec<_>, _>>()?
        .iter()
        .any(|name| name == column);

    if !exists {
        tx.execute(&format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, definition), [])?;
    }
    Ok(())
}

/// Runs all pending migrations on `conn`.
///
/// # Example
///
/// ```rust,no_run
/// use enrollment::db::migrations::init_with_migrations;
/// use rusqlite::Connection;
///
/// let mut conn = Connection::open("enrollment_system.db")?;
/// init_with_migrations(&mut conn)?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

/// Current schema version; 0 for a database without migration records.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    let manager = MigrationManager::new();
    manager.get_current_version(conn)
}

/// `true` when migrations newer than the recorded version are registered.
pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    let current = manager.get_current_version(conn)?;
    Ok(current < manager.latest_version())
}
