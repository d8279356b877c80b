//! # Enrollment - Student enrollment records
//!
//! The data-access and validation core of a student enrollment system, with
//! a command-line front end.
//!
//! ## Features
//!
//! - **Validation**: Field-specific rules and normalization for student records
//! - **Storage**: SQLite-backed student CRUD, search and sorting
//! - **Accounts**: Hashed-password login with admin and user roles
//! - **Resilience**: Writes retried through short lock contention
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enrollment::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
