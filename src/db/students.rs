//! Student record storage: create, list, search, update and delete.
//!
//! Records are keyed externally by `student_id` (`YY-NNNNN`), which is unique
//! and never changes after creation. Callers are expected to run
//! [`validate`](crate::libs::validation::validate) and
//! [`sanitize`](crate::libs::validation::sanitize) before writing.
//!
//! ## Features
//!
//! - **Writes under retry**: add, update and delete survive short lock contention
//! - **Allow-listed sorting**: sort keys resolve through [`SortColumn`], never raw text
//! - **Alias search**: department abbreviations match their full college name
//!
//! ## Usage
//!
//! ```rust,no_run
//! use enrollment::db::{db::Storage, students::Students};
//! use enrollment::libs::student::{SortColumn, SortDirection};
//!
//! let storage = Storage::new("enrollment_system.db");
//! storage.initialize()?;
//!
//! let students = Students::new(&storage);
//! let cics = students.search("CICS", SortColumn::Name, SortDirection::Asc)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Storage;
use super::error::StorageError;
use crate::libs::messages::Message;
use crate::libs::outcome::Outcome;
use crate::libs::student::{order_by_clause, Department, SortColumn, SortDirection, Student, StudentRecord};
use anyhow::Result;
use rusqlite::{params, Row};

const STUDENT_COLUMNS: &str = "id, student_id, first_name, middle_name, last_name, email, phone, course, department, year_level, enrollment_date, status";
const INSERT_STUDENT: &str = "INSERT INTO students
    (student_id, first_name, middle_name, last_name, email, phone, course, department, year_level, status)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_STUDENT: &str = "UPDATE students
    SET first_name = ?2, middle_name = ?3, last_name = ?4, email = ?5, phone = ?6,
        course = ?7, department = ?8, year_level = ?9, status = ?10
    WHERE student_id = ?1";
const DELETE_STUDENT: &str = "DELETE FROM students WHERE student_id = ?1";
const SEARCH_CONDITION: &str = "CAST(id AS TEXT) LIKE ?1 ESCAPE '\\'
    OR student_id LIKE ?1 ESCAPE '\\'
    OR first_name LIKE ?1 ESCAPE '\\'
    OR middle_name LIKE ?1 ESCAPE '\\'
    OR last_name LIKE ?1 ESCAPE '\\'
    OR email LIKE ?1 ESCAPE '\\'
    OR phone LIKE ?1 ESCAPE '\\'
    OR course LIKE ?1 ESCAPE '\\'
    OR department LIKE ?1 ESCAPE '\\'
    OR year_level LIKE ?1 ESCAPE '\\'
    OR status LIKE ?1 ESCAPE '\\'
    OR department = ?2";

/// Student table store. Cheap to construct; holds only a storage handle.
pub struct Students {
    storage: Storage,
}

impl Students {
    pub fn new(storage: &Storage) -> Self {
        Self { storage: storage.clone() }
    }

    /// Inserts a new student. Fails if the `student_id` is taken.
    pub fn add(&self, record: &StudentRecord) -> Outcome {
        let result = self.storage.retry().run("add_student", || {
            let student_id = record
                .student_id
                .as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .ok_or_else(|| StorageError::InvalidInput(Message::FieldRequired("Student ID").to_string()))?;

            let db = self.storage.connect()?;
            db.conn.execute(
                INSERT_STUDENT,
                params![
                    student_id,
                    record.first_name,
                    record.middle_name,
                    record.last_name,
                    record.email,
                    record.phone,
                    record.course,
                    record.department,
                    record.year_level,
                    record.status_or_default()
                ],
            )?;
            Ok(())
        });

        match result {
            Ok(()) => Outcome::ok(Message::StudentAdded),
            Err(StorageError::Conflict) => Outcome::fail(Message::StudentIdExists),
            Err(e) => failure("add_student", e),
        }
    }

    /// Every student, ordered by the allow-listed column.
    pub fn get_all(&self, column: SortColumn, direction: SortDirection) -> Result<Vec<Student>> {
        let db = self.storage.connect()?;
        let sql = format!("SELECT {} FROM students {}", STUDENT_COLUMNS, order_by_clause(column, direction));

        let mut stmt = db.conn.prepare(&sql)?;
        let students = stmt.query_map([], student_from_row)?.collect::<Result<Vec<_>, _>>()?;

        Ok(students)
    }

    /// Case-insensitive substring match over every text column and the
    /// numeric id. A department abbreviation additionally matches rows whose
    /// department is the corresponding full college name.
    pub fn search(&self, term: &str, column: SortColumn, direction: SortDirection) -> Result<Vec<Student>> {
        let term = term.trim();
        let pattern = format!("%{}%", escape_like(term));
        let alias = Department::from_abbreviation(term).map(|d| d.as_str());

        let db = self.storage.connect()?;
        let sql = format!(
            "SELECT {} FROM students WHERE {} {}",
            STUDENT_COLUMNS,
            SEARCH_CONDITION,
            order_by_clause(column, direction)
        );

        let mut stmt = db.conn.prepare(&sql)?;
        let students = stmt
            .query_map(params![pattern, alias], student_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(results = students.len(), "student search");
        Ok(students)
    }

    /// Rewrites every mutable field of the student with `student_id`.
    pub fn update(&self, student_id: &str, record: &StudentRecord) -> Outcome {
        let result = self.storage.retry().run("update_student", || {
            let db = self.storage.connect()?;
            let affected = db.conn.execute(
                UPDATE_STUDENT,
                params![
                    student_id.trim(),
                    record.first_name,
                    record.middle_name,
                    record.last_name,
                    record.email,
                    record.phone,
                    record.course,
                    record.department,
                    record.year_level,
                    record.status_or_default()
                ],
            )?;
            if affected == 0 {
                return Err(StorageError::NotFound);
            }
            Ok(())
        });

        match result {
            Ok(()) => Outcome::ok(Message::StudentUpdated),
            Err(e) => failure("update_student", e),
        }
    }

    /// Removes the student with `student_id`.
    ///
    /// # Arguments
    ///
    /// * `student_id` - External `YY-NNNNN` identifier of the record
    ///
    /// # Returns
    ///
    /// A successful [`Outcome`] when a row was deleted; "Student not found"
    /// when none matched, in which case the table is left untouched.
    pub fn delete(&self, student_id: &str) -> Outcome {
        let result = self.storage.retry().run("delete_student", || {
            let db = self.storage.connect()?;
            let affected = db.conn.execute(DELETE_STUDENT, params![student_id.trim()])?;
            if affected == 0 {
                return Err(StorageError::NotFound);
            }
            Ok(())
        });

        match result {
            Ok(()) => Outcome::ok(Message::StudentDeleted),
            Err(e) => failure("delete_student", e),
        }
    }
}

/// Maps the failures shared by every student write.
fn failure(operation: &str, err: StorageError) -> Outcome {
    match err {
        StorageError::NotFound => Outcome::fail(Message::StudentNotFound),
        StorageError::InvalidInput(message) => Outcome::fail(message),
        e => {
            tracing::error!(operation, error = %e, "student write failed");
            Outcome::fail(Message::DatabaseError)
        }
    }
}

fn student_from_row(row: &Row<'_>) -> rusqlite::Result<Student> {
    Ok(Student {
        id: row.get(0)?,
        student_id: row.get(1)?,
        first_name: row.get(2)?,
        middle_name: row.get(3)?,
        last_name: row.get(4)?,
        email: row.get(5)?,
        phone: row.get(6)?,
        course: row.get(7)?,
        department: row.get(8)?,
        year_level: row.get(9)?,
        enrollment_date: row.get(10)?,
        status: row.get::<_, Option<String>>(11)?.unwrap_or_default(),
    })
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
