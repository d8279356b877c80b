#[cfg(test)]
mod tests {
    use enrollment::db::db::Storage;
    use enrollment::db::students::Students;
    use enrollment::libs::student::{Department, SortColumn, SortDirection, Student, StudentRecord};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct SearchTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for SearchTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
            let storage = Storage::new(temp_dir.path().join("enrollment_system.db"));
            storage.initialize().expect("Failed to initialize storage");

            let students = Students::new(&storage);
            let seed = [
                ("25-00003", "Maria", "Santos", Department::InformaticsComputingSciences, "BSIT", "2nd Year"),
                ("25-00001", "Jose", "Rizal", Department::Engineering, "BSME", "1st Year"),
                ("25-00002", "Andres", "Bonifacio", Department::EngineeringTechnology, "BSEET", "4th Year"),
                ("24-00010", "Juan", "Dela Cruz", Department::InformaticsComputingSciences, "BSCS", "3rd Year"),
            ];
            for (student_id, first_name, last_name, department, course, year_level) in seed {
                let outcome = students.add(&StudentRecord {
                    student_id: Some(student_id.to_string()),
                    first_name: first_name.to_string(),
                    middle_name: None,
                    last_name: last_name.to_string(),
                    email: format!("{}.{}@school.edu", first_name.to_lowercase(), student_id),
                    phone: "0917-555-0000".to_string(),
                    course: course.to_string(),
                    department: department.as_str().to_string(),
                    year_level: year_level.to_string(),
                    status: None,
                });
                assert!(outcome.success, "{}", outcome.message);
            }

            SearchTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn ids(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.student_id.as_str()).collect()
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_department_abbreviation_matches_full_name(ctx: &mut SearchTestContext) {
        let students = Students::new(&ctx.storage);

        let cics = students.search("CICS", SortColumn::Id, SortDirection::Asc).expect("search");
        assert_eq!(ids(&cics), vec!["25-00003", "24-00010"]);

        let lowercase = students.search("  cics ", SortColumn::Id, SortDirection::Asc).expect("search");
        assert_eq!(lowercase, cics);

        let coe = students.search("coe", SortColumn::Id, SortDirection::Asc).expect("search");
        assert_eq!(ids(&coe), vec!["25-00001"]);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_substring_match_is_case_insensitive(ctx: &mut SearchTestContext) {
        let students = Students::new(&ctx.storage);

        let found = students.search("dela", SortColumn::Id, SortDirection::Asc).expect("search");
        assert_eq!(ids(&found), vec!["24-00010"]);

        let found = students.search("ENGINEERING", SortColumn::StudentId, SortDirection::Asc).expect("search");
        assert_eq!(ids(&found), vec!["25-00001", "25-00002"]);

        let found = students.search("4th", SortColumn::Id, SortDirection::Asc).expect("search");
        assert_eq!(ids(&found), vec!["25-00002"]);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_wildcards_match_literally(ctx: &mut SearchTestContext) {
        let students = Students::new(&ctx.storage);

        assert!(students.search("%", SortColumn::Id, SortDirection::Asc).expect("search").is_empty());
        assert!(students.search("Ma_ia", SortColumn::Id, SortDirection::Asc).expect("search").is_empty());
        assert!(students.search("nobody", SortColumn::Id, SortDirection::Asc).expect("search").is_empty());
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_unknown_sort_key_falls_back_to_id(ctx: &mut SearchTestContext) {
        let students = Students::new(&ctx.storage);

        let column = SortColumn::resolve(Some("last_name; DROP TABLE students"));
        assert_eq!(column, SortColumn::Id);

        let fallback = students.get_all(column, SortDirection::resolve(Some("sideways"))).expect("list");
        let by_id = students.get_all(SortColumn::Id, SortDirection::Asc).expect("list");
        assert_eq!(fallback, by_id);
        assert_eq!(ids(&by_id), vec!["25-00003", "25-00001", "25-00002", "24-00010"]);
    }

    #[test_context(SearchTestContext)]
    #[test]
    fn test_sort_by_name_and_direction(ctx: &mut SearchTestContext) {
        let students = Students::new(&ctx.storage);

        let asc = students.get_all(SortColumn::resolve(Some("name")), SortDirection::Asc).expect("list");
        let last_names: Vec<&str> = asc.iter().map(|s| s.last_name.as_str()).collect();
        assert_eq!(last_names, vec!["Bonifacio", "Dela Cruz", "Rizal", "Santos"]);

        let desc = students.get_all(SortColumn::StudentId, SortDirection::resolve(Some("DESC"))).expect("list");
        assert_eq!(ids(&desc), vec!["25-00003", "25-00002", "25-00001", "24-00010"]);

        let by_year = students
            .search("CICS", SortColumn::YearLevel, SortDirection::Desc)
            .expect("search");
        assert_eq!(ids(&by_year), vec!["24-00010", "25-00003"]);
    }

    #[test]
    fn test_order_by_clause_uses_allow_listed_columns() {
        use enrollment::libs::student::order_by_clause;

        assert_eq!(order_by_clause(SortColumn::Id, SortDirection::Desc), "ORDER BY id DESC");
        assert_eq!(
            order_by_clause(SortColumn::Name, SortDirection::Asc),
            "ORDER BY last_name ASC, first_name ASC, middle_name ASC, id ASC"
        );
    }
}
