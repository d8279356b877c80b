//! Display implementation for application messages.
//!
//! Provides the single place where message variants become text. Validation
//! messages are part of the contract with callers: they name the offending
//! field and, where a format is involved, show an example of a valid value.
//!
//! ## Text Formatting Standards
//!
//! - **Sentence Case**: Natural capitalization for readability
//! - **Field First**: Validation messages lead with the field label
//! - **Generic Failures**: Authentication and storage faults never reveal internals

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === VALIDATION MESSAGES ===
            Message::FieldRequired(label) => format!("{} is required", label),
            Message::NameCharacters(label) => format!("{} should only contain letters, spaces, hyphens, and apostrophes", label),
            Message::NameLength(label) => format!("{} must be between 2 and 50 characters", label),
            Message::StudentIdFormat => "Student ID must be in format YY-NNNNN (e.g., 25-00916)".to_string(),
            Message::MiddleNameTooLong => "Middle Name must not exceed 50 characters".to_string(),
            Message::EmailRequired => "Email address is required".to_string(),
            Message::EmailFormat => "Invalid email address format (e.g., juan.delacruz@example.com)".to_string(),
            Message::EmailTooLong => "Email address must not exceed 100 characters".to_string(),
            Message::PhoneRequired => "Phone number is required".to_string(),
            Message::PhoneFormat => "Phone number must be in format 09XX-XXX-XXXX (e.g., 0912-345-6789)".to_string(),
            Message::PhonePrefix => "Phone number must start with 09".to_string(),
            Message::CourseRequired => "Please select a Course".to_string(),
            Message::CourseLength => "Course name must be between 2 and 100 characters".to_string(),
            Message::DepartmentInvalid => "Please select a valid College Department".to_string(),
            Message::StatusInvalid => "Invalid status value".to_string(),
            Message::YearLevelRequired => "Year Level is required".to_string(),
            Message::YearLevelInvalid => "Please select a valid Year Level".to_string(),
            Message::ValidationPassed => "Validation passed".to_string(),

            // === ACCOUNT MESSAGES ===
            Message::CredentialsRequired => "Username and password are required".to_string(),
            Message::InvalidCredentials => "Invalid username or password".to_string(),
            Message::UsernameRequired => "Username is required".to_string(),
            Message::PasswordRequired => "Password is required".to_string(),
            Message::AccountNameCharacters(label) => format!("{} should only contain letters and spaces", label),
            Message::AccountNameLength(label) => format!("{} must be between 2 and 50 characters", label),
            Message::AccountMiddleNameTooLong => "Middle Name must not exceed 50 characters".to_string(),
            Message::UserCreated => "User created successfully".to_string(),
            Message::UsernameExists => "Username already exists".to_string(),
            Message::DefaultAdminCreated => "Default admin user created (username: admin)".to_string(),
            Message::LoggedInAs(name, role) => format!("Logged in as {} ({})", name, role),
            Message::AdminRequired => "Only administrators can modify student records".to_string(),
            Message::PromptPassword => "Password".to_string(),
            Message::PromptNewPassword => "New password".to_string(),
            Message::PromptConfirmPassword => "Confirm password".to_string(),
            Message::PasswordMismatch => "Passwords do not match".to_string(),

            // === STUDENT MESSAGES ===
            Message::StudentAdded => "Student added successfully".to_string(),
            Message::StudentUpdated => "Student updated successfully".to_string(),
            Message::StudentDeleted => "Student deleted successfully".to_string(),
            Message::StudentIdExists => "Student ID already exists".to_string(),
            Message::StudentNotFound => "Student not found".to_string(),
            Message::StudentsNotFound => "No students found".to_string(),
            Message::StudentsFound(count) => format!("{} student(s) found", count),
            Message::ConfirmDeleteStudent(student_id) => format!("Delete student {}? This cannot be undone.", student_id),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),

            // === DATABASE MESSAGES ===
            Message::DatabaseError => "A database error occurred. Please try again.".to_string(),
            Message::DatabaseInitialized(path) => format!("Database ready at {}", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
        };

        write!(f, "{}", text)
    }
}
