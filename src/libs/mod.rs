//! Core library modules for the enrollment application.
//!
//! ## Features
//!
//! - **Domain Types**: Student records, accounts, roles and their closed value sets
//! - **Validation**: Field rules and normalization applied before every student write
//! - **Infrastructure**: Configuration, data directory, centralized messages
//! - **User Interface**: Console table rendering
//!
//! ## Usage
//!
//! ```rust
//! use enrollment::libs::student::StudentRecord;
//! use enrollment::libs::validation::validate;
//!
//! let result = validate(&StudentRecord::default(), false);
//! assert!(!result.valid);
//! assert_eq!(result.message, "First Name is required");
//! ```

pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod outcome;
pub mod student;
pub mod user;
pub mod validation;
pub mod view;
