//! Server-side validation and sanitization of student records.
//!
//! Every student write passes through [`validate`] and then [`sanitize`]
//! before reaching storage. Both are pure: no I/O, no shared state.
//!
//! ## Rule Order
//!
//! Checks run in a fixed order and stop at the first failure, so a caller
//! always receives exactly one message:
//!
//! 1. Required fields present (non-empty after trimming)
//! 2. Student ID format `YY-NNNNN`
//! 3. First, middle and last name characters and lengths
//! 4. Email format and length
//! 5. Phone in `09XX-XXX-XXXX` form
//! 6. Course length
//! 7. Department, status and year level from their closed sets
//!
//! ## Usage
//!
//! ```rust
//! use enrollment::libs::student::StudentRecord;
//! use enrollment::libs::validation::{sanitize, validate};
//!
//! let record = StudentRecord {
//!     student_id: Some("25-00916".to_string()),
//!     first_name: "john".to_string(),
//!     last_name: "dela cruz".to_string(),
//!     email: "J@X.COM".to_string(),
//!     phone: "0912-345-6789".to_string(),
//!     course: "BSCS".to_string(),
//!     department: "College of Informatics and Computing Sciences".to_string(),
//!     year_level: "1st Year".to_string(),
//!     ..Default::default()
//! };
//! assert!(validate(&record, false).valid);
//! assert_eq!(sanitize(&record).last_name, "Dela Cruz");
//! ```

use super::formatter::{non_empty, title_case};
use super::messages::Message;
use super::student::{Department, StudentRecord, StudentStatus, YearLevel};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static STUDENT_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{2}-\d{5}$").expect("student id pattern"));
static NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z\s'\-]+$").expect("name pattern"));
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email pattern"));
static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^09\d{2}-\d{3}-\d{4}$").expect("phone pattern"));

const NAME_MIN_LEN: usize = 2;
const NAME_MAX_LEN: usize = 50;
const EMAIL_MAX_LEN: usize = 100;
const COURSE_MIN_LEN: usize = 2;
const COURSE_MAX_LEN: usize = 100;

/// Outcome of [`validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: String,
}

impl ValidationResult {
    fn passed() -> Self {
        Self {
            valid: true,
            message: Message::ValidationPassed.to_string(),
        }
    }

    fn failed(message: Message) -> Self {
        Self {
            valid: false,
            message: message.to_string(),
        }
    }
}

/// Validates a student record.
///
/// `is_update` drops `student_id` from the required set: updates are keyed by
/// the existing ID, which cannot change. A supplied ID is still format-checked.
pub fn validate(record: &StudentRecord, is_update: bool) -> ValidationResult {
    match check(record, is_update) {
        Ok(()) => ValidationResult::passed(),
        Err(message) => ValidationResult::failed(message),
    }
}

fn check(record: &StudentRecord, is_update: bool) -> Result<(), Message> {
    let required = [
        ("First Name", &record.first_name),
        ("Last Name", &record.last_name),
        ("Email", &record.email),
        ("Course", &record.course),
        ("Department", &record.department),
        ("Year Level", &record.year_level),
    ];
    if let Some((label, _)) = required.into_iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(Message::FieldRequired(label));
    }

    let student_id = non_empty(record.student_id.as_deref());
    if !is_update && student_id.is_none() {
        return Err(Message::FieldRequired("Student ID"));
    }
    if let Some(student_id) = student_id {
        if !STUDENT_ID_REGEX.is_match(&student_id) {
            return Err(Message::StudentIdFormat);
        }
    }

    check_name("First Name", &record.first_name)?;

    if let Some(middle_name) = non_empty(record.middle_name.as_deref()) {
        if !NAME_REGEX.is_match(&middle_name) {
            return Err(Message::NameCharacters("Middle Name"));
        }
        if middle_name.chars().count() > NAME_MAX_LEN {
            return Err(Message::MiddleNameTooLong);
        }
    }

    check_name("Last Name", &record.last_name)?;

    let email = record.email.trim();
    if email.is_empty() {
        return Err(Message::EmailRequired);
    }
    if !EMAIL_REGEX.is_match(email) {
        return Err(Message::EmailFormat);
    }
    if email.chars().count() > EMAIL_MAX_LEN {
        return Err(Message::EmailTooLong);
    }

    let phone = record.phone.trim();
    if phone.is_empty() {
        return Err(Message::PhoneRequired);
    }
    if !PHONE_REGEX.is_match(phone) {
        return Err(Message::PhoneFormat);
    }
    if !phone.starts_with("09") {
        return Err(Message::PhonePrefix);
    }

    let course = record.course.trim();
    if course.is_empty() {
        return Err(Message::CourseRequired);
    }
    let course_len = course.chars().count();
    if !(COURSE_MIN_LEN..=COURSE_MAX_LEN).contains(&course_len) {
        return Err(Message::CourseLength);
    }

    if Department::from_name(record.department.trim()).is_none() {
        return Err(Message::DepartmentInvalid);
    }

    if let Some(status) = non_empty(record.status.as_deref()) {
        if StudentStatus::from_name(&status).is_none() {
            return Err(Message::StatusInvalid);
        }
    }

    let year_level = record.year_level.trim();
    if year_level.is_empty() {
        return Err(Message::YearLevelRequired);
    }
    if YearLevel::from_name(year_level).is_none() {
        return Err(Message::YearLevelInvalid);
    }

    Ok(())
}

fn check_name(label: &'static str, value: &str) -> Result<(), Message> {
    let value = value.trim();
    if !NAME_REGEX.is_match(value) {
        return Err(Message::NameCharacters(label));
    }
    let len = value.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return Err(Message::NameLength(label));
    }
    Ok(())
}

/// Returns a normalized copy of `record`.
///
/// Every text field is trimmed, names are title-cased per word and the email
/// is lower-cased. Empty optional fields become `None`. Call only after
/// [`validate`] succeeded.
pub fn sanitize(record: &StudentRecord) -> StudentRecord {
    StudentRecord {
        student_id: non_empty(record.student_id.as_deref()),
        first_name: title_case(&record.first_name),
        middle_name: non_empty(record.middle_name.as_deref()).map(|m| title_case(&m)),
        last_name: title_case(&record.last_name),
        email: record.email.trim().to_lowercase(),
        phone: record.phone.trim().to_string(),
        course: record.course.trim().to_string(),
        department: record.department.trim().to_string(),
        year_level: record.year_level.trim().to_string(),
        status: non_empty(record.status.as_deref()),
    }
}
