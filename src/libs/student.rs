//! Student record types and the closed value sets they draw from.
//!
//! [`StudentRecord`] is the payload callers submit for create and update
//! operations; [`Student`] is a row as returned by storage. Department, year
//! level and status are stored as text, and the enums here define the only
//! values validation accepts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A student payload submitted for creation or update.
///
/// `student_id` is required on creation and ignored on update, where the
/// lookup key is passed separately. Optional fields are `None` when absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub student_id: Option<String>,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub course: String,
    pub department: String,
    pub year_level: String,
    pub status: Option<String>,
}

impl StudentRecord {
    /// Status to persist, falling back to [`StudentStatus::default`] when none was given.
    pub fn status_or_default(&self) -> &str {
        match self.status.as_deref() {
            Some(status) if !status.trim().is_empty() => status,
            _ => StudentStatus::default().as_str(),
        }
    }
}

/// A persisted student row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub student_id: String,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub course: String,
    pub department: Option<String>,
    pub year_level: Option<String>,
    pub enrollment_date: NaiveDateTime,
    pub status: String,
}

impl Student {
    /// Display name in `Last, First Middle` order.
    pub fn display_name(&self) -> String {
        match self.middle_name.as_deref().filter(|m| !m.is_empty()) {
            Some(middle) => format!("{}, {} {}", self.last_name, self.first_name, middle),
            None => format!("{}, {}", self.last_name, self.first_name),
        }
    }
}

/// The four colleges a student can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Department {
    Engineering,
    ArchitectureFineArtsDesign,
    EngineeringTechnology,
    InformaticsComputingSciences,
}

impl Department {
    /// Every college, in the order they are offered for selection.
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::ArchitectureFineArtsDesign,
        Department::EngineeringTechnology,
        Department::InformaticsComputingSciences,
    ];

    /// Full college name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Engineering => "College of Engineering",
            Department::ArchitectureFineArtsDesign => "College of Architecture, Fine Arts and Design",
            Department::EngineeringTechnology => "College of Engineering Technology",
            Department::InformaticsComputingSciences => "College of Informatics and Computing Sciences",
        }
    }

    /// Short code used as a search alias.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Department::Engineering => "COE",
            Department::ArchitectureFineArtsDesign => "CAFAD",
            Department::EngineeringTechnology => "CET",
            Department::InformaticsComputingSciences => "CICS",
        }
    }

    /// Exact match against a full college name.
    pub fn from_name(name: &str) -> Option<Department> {
        Self::ALL.into_iter().find(|d| d.as_str() == name)
    }

    /// Case-insensitive match against an abbreviation.
    pub fn from_abbreviation(code: &str) -> Option<Department> {
        Self::ALL.into_iter().find(|d| d.abbreviation().eq_ignore_ascii_case(code))
    }
}

/// Academic year, first through fourth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearLevel {
    First,
    Second,
    Third,
    Fourth,
}

impl YearLevel {
    /// Every year level in ascending order.
    pub const ALL: [YearLevel; 4] = [YearLevel::First, YearLevel::Second, YearLevel::Third, YearLevel::Fourth];

    /// Stored text, e.g. `"1st Year"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            YearLevel::First => "1st Year",
            YearLevel::Second => "2nd Year",
            YearLevel::Third => "3rd Year",
            YearLevel::Fourth => "4th Year",
        }
    }

    /// Exact, case-sensitive match against the stored text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use enrollment::libs::student::YearLevel;
    ///
    /// assert_eq!(YearLevel::from_name("2nd Year"), Some(YearLevel::Second));
    /// assert_eq!(YearLevel::from_name("2nd year"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<YearLevel> {
        Self::ALL.into_iter().find(|y| y.as_str() == name)
    }
}

/// Enrollment status of a student. New records start as [`StudentStatus::Enrolled`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StudentStatus {
    #[default]
    Enrolled,
    Unenrolled,
    Graduated,
    Dropped,
    Suspended,
    TransferredOut,
}

impl StudentStatus {
    /// Every accepted status, default first.
    pub const ALL: [StudentStatus; 6] = [
        StudentStatus::Enrolled,
        StudentStatus::Unenrolled,
        StudentStatus::Graduated,
        StudentStatus::Dropped,
        StudentStatus::Suspended,
        StudentStatus::TransferredOut,
    ];

    /// Stored text; note the space in `"Transferred Out"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StudentStatus::Enrolled => "Enrolled",
            StudentStatus::Unenrolled => "Unenrolled",
            StudentStatus::Graduated => "Graduated",
            StudentStatus::Dropped => "Dropped",
            StudentStatus::Suspended => "Suspended",
            StudentStatus::TransferredOut => "Transferred Out",
        }
    }

    /// Exact match against the stored text.
    pub fn from_name(name: &str) -> Option<StudentStatus> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }
}

/// Allow-listed sort keys for student listings.
///
/// Caller-supplied keys are resolved into this enum before any query is
/// built; the SQL text only ever contains the fixed column names below.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortColumn {
    #[default]
    Id,
    StudentId,
    Name,
    Course,
    Department,
    YearLevel,
    Status,
}

impl SortColumn {
    /// Resolves a caller-supplied key. Unknown or missing keys sort by `id`.
    pub fn resolve(key: Option<&str>) -> SortColumn {
        match key.map(str::trim) {
            Some("id") => SortColumn::Id,
            Some("student_id") => SortColumn::StudentId,
            Some("name") => SortColumn::Name,
            Some("course") => SortColumn::Course,
            Some("department") => SortColumn::Department,
            Some("year_level") => SortColumn::YearLevel,
            Some("status") => SortColumn::Status,
            _ => SortColumn::Id,
        }
    }

    /// Columns making up this sort key, most significant first.
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            SortColumn::Id => &["id"],
            SortColumn::StudentId => &["student_id"],
            SortColumn::Name => &["last_name", "first_name", "middle_name"],
            SortColumn::Course => &["course"],
            SortColumn::Department => &["department"],
            SortColumn::YearLevel => &["year_level"],
            SortColumn::Status => &["status"],
        }
    }
}

/// Sort order for student listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` (any case) sorts descending; anything else ascending.
    pub fn resolve(key: Option<&str>) -> SortDirection {
        match key {
            Some(k) if k.trim().eq_ignore_ascii_case("desc") => SortDirection::Desc,
            _ => SortDirection::Asc,
        }
    }

    /// SQL keyword for this direction.
    pub fn as_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// Builds an `ORDER BY` clause from allow-listed parts only.
pub fn order_by_clause(column: SortColumn, direction: SortDirection) -> String {
    let mut parts: Vec<String> = column
        .columns()
        .iter()
        .map(|c| format!("{} {}", c, direction.as_sql()))
        .collect();
    if column != SortColumn::Id {
        parts.push("id ASC".to_string());
    }
    format!("ORDER BY {}", parts.join(", "))
}
