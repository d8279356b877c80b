#[cfg(test)]
mod tests {
    use enrollment::db::db::Storage;
    use enrollment::db::students::Students;
    use enrollment::libs::student::{SortColumn, SortDirection, Student, StudentRecord};
    use enrollment::libs::validation::{sanitize, validate};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct StudentsTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for StudentsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
            let storage = Storage::new(temp_dir.path().join("enrollment_system.db"));
            storage.initialize().expect("Failed to initialize storage");

            StudentsTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn record(student_id: &str, first_name: &str, last_name: &str) -> StudentRecord {
        let record = StudentRecord {
            student_id: Some(student_id.to_string()),
            first_name: first_name.to_string(),
            middle_name: None,
            last_name: last_name.to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            phone: "0912-345-6789".to_string(),
            course: "BSCS".to_string(),
            department: "College of Informatics and Computing Sciences".to_string(),
            year_level: "1st Year".to_string(),
            status: None,
        };
        assert!(validate(&record, false).valid);
        sanitize(&record)
    }

    fn all(storage: &Storage) -> Vec<Student> {
        Students::new(storage)
            .get_all(SortColumn::Id, SortDirection::Asc)
            .expect("Failed to list students")
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_add_student(ctx: &mut StudentsTestContext) {
        let outcome = Students::new(&ctx.storage).add(&record("25-00916", "john", "dela cruz"));
        assert!(outcome.success);
        assert_eq!(outcome.message, "Student added successfully");

        let students = all(&ctx.storage);
        assert_eq!(students.len(), 1);
        let student = &students[0];
        assert_eq!(student.student_id, "25-00916");
        assert_eq!(student.first_name, "John");
        assert_eq!(student.last_name, "Dela Cruz");
        assert_eq!(student.email.as_deref(), Some("john@example.com"));
        assert_eq!(student.middle_name, None);
        assert_eq!(student.status, "Enrolled");
        assert_eq!(student.display_name(), "Dela Cruz, John");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_duplicate_student_id_leaves_row_unchanged(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);

        let duplicate = students.add(&record("25-00916", "maria", "santos"));
        assert!(!duplicate.success);
        assert_eq!(duplicate.message, "Student ID already exists");

        let rows = all(&ctx.storage);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_name, "John");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_add_requires_student_id(ctx: &mut StudentsTestContext) {
        let mut missing = record("25-00916", "john", "dela cruz");
        missing.student_id = None;

        let outcome = Students::new(&ctx.storage).add(&missing);
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Student ID is required");
        assert!(all(&ctx.storage).is_empty());
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_update_student(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);
        let before = all(&ctx.storage).remove(0);

        let mut changes = record("99-99999", "juan", "dela cruz");
        changes.middle_name = Some("Santos".to_string());
        changes.status = Some("Graduated".to_string());
        changes.year_level = "4th Year".to_string();

        let outcome = students.update("25-00916", &changes);
        assert!(outcome.success);
        assert_eq!(outcome.message, "Student updated successfully");

        let after = all(&ctx.storage).remove(0);
        assert_eq!(after.id, before.id);
        assert_eq!(after.student_id, "25-00916");
        assert_eq!(after.first_name, "Juan");
        assert_eq!(after.middle_name.as_deref(), Some("Santos"));
        assert_eq!(after.status, "Graduated");
        assert_eq!(after.year_level.as_deref(), Some("4th Year"));
        assert_eq!(after.enrollment_date, before.enrollment_date);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_update_without_status_resets_to_enrolled(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        let mut graduated = record("25-00916", "john", "dela cruz");
        graduated.status = Some("Graduated".to_string());
        assert!(students.add(&graduated).success);

        assert!(students.update("25-00916", &record("25-00916", "john", "dela cruz")).success);
        assert_eq!(all(&ctx.storage)[0].status, "Enrolled");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_update_unknown_student(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);
        let before = all(&ctx.storage);

        let outcome = students.update("99-99999", &record("99-99999", "maria", "santos"));
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Student not found");
        assert_eq!(all(&ctx.storage), before);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_delete_unknown_student(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);
        let before = all(&ctx.storage);

        let outcome = students.delete("99-99999");
        assert!(!outcome.success);
        assert_eq!(outcome.message, "Student not found");
        assert_eq!(all(&ctx.storage), before);
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_delete_student(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);
        assert!(students.add(&record("25-00917", "maria", "santos")).success);

        let outcome = students.delete("25-00916");
        assert!(outcome.success);
        assert_eq!(outcome.message, "Student deleted successfully");

        let remaining = all(&ctx.storage);
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].student_id, "25-00917");

        let again = students.delete("25-00916");
        assert!(!again.success);
        assert_eq!(again.message, "Student not found");
    }

    #[test_context(StudentsTestContext)]
    #[test]
    fn test_deleted_student_id_can_be_reused(ctx: &mut StudentsTestContext) {
        let students = Students::new(&ctx.storage);
        assert!(students.add(&record("25-00916", "john", "dela cruz")).success);
        assert!(students.delete("25-00916").success);
        assert!(students.add(&record("25-00916", "maria", "santos")).success);

        let rows = all(&ctx.storage);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].first_name, "Maria");
    }
}
