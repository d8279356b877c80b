//! Storage component for the enrollment application.
//!
//! Owns the SQLite schema (`users`, `students`), verifies credentials and
//! performs student CRUD and search. No connection outlives a single
//! operation: each call opens one, configures it for write-ahead logging and
//! drops it before returning.
//!
//! ## Features
//!
//! - **Connection Policy**: WAL journal, `synchronous = NORMAL`, 30s busy timeout
//! - **Schema Evolution**: Versioned migrations, safe to run on every start
//! - **Contention Handling**: Writes retried on `SQLITE_BUSY`/`SQLITE_LOCKED`
//! - **Outcome Values**: Writes report `{success, message}` instead of raising
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enrollment::db::{db::Storage, students::Students, users::Users};
//! use enrollment::libs::student::{SortColumn, SortDirection};
//!
//! let storage = Storage::new("enrollment_system.db");
//! storage.initialize()?;
//!
//! let login = Users::new(&storage).verify_login("admin", "admin123");
//! assert!(login.success);
//!
//! let all = Students::new(&storage).get_all(SortColumn::Name, SortDirection::Asc)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection factory and storage handle.
///
/// Provides `Storage`, which resolves the database file, opens configured
/// connections and runs first-start initialization.
pub mod db;

/// Storage error type and its classification of SQLite failures.
pub mod error;

/// Database schema migration system.
///
/// Handles versioned schema changes, including upgrades of databases created
/// before versioning was introduced.
pub mod migrations;

/// Retry policy applied to every write operation.
pub mod retry;

/// Student record CRUD, listing and search.
pub mod students;

/// Account creation, default admin bootstrap and login verification.
pub mod users;
