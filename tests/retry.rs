#[cfg(test)]
mod tests {
    use enrollment::db::db::{Storage, StorageSettings};
    use enrollment::db::retry::RetryPolicy;
    use enrollment::db::students::Students;
    use enrollment::libs::student::{SortColumn, SortDirection, StudentRecord};
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct RetryTestContext {
        _temp_dir: TempDir,
        storage: Storage,
    }

    impl TestContext for RetryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().expect("Failed to create temporary directory");
            let storage = Storage::new(temp_dir.path().join("enrollment_system.db"));
            storage.initialize().expect("Failed to initialize storage");

            RetryTestContext {
                _temp_dir: temp_dir,
                storage,
            }
        }
    }

    fn student() -> StudentRecord {
        StudentRecord {
            student_id: Some("25-00916".to_string()),
            first_name: "Juan".to_string(),
            middle_name: None,
            last_name: "Dela Cruz".to_string(),
            email: "juan@example.com".to_string(),
            phone: "0912-345-6789".to_string(),
            course: "BSCS".to_string(),
            department: "College of Informatics and Computing Sciences".to_string(),
            year_level: "1st Year".to_string(),
            status: None,
        }
    }

    fn count(storage: &Storage) -> usize {
        Students::new(storage)
            .get_all(SortColumn::Id, SortDirection::Asc)
            .expect("list")
            .len()
    }

    #[test]
    fn test_policy_defaults_and_backoff() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.max_attempts, 3);
        assert_eq!(policy.delay_for(1), Duration::from_millis(100));
        assert_eq!(policy.delay_for(2), Duration::from_millis(200));

        assert_eq!(RetryPolicy::new(0, Duration::ZERO).max_attempts, 1);
    }

    #[test]
    fn test_retries_until_success() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let mut attempts = 0;

        let result: Result<&str, String> = policy.run_with("flaky", |_| true, || {
            attempts += 1;
            if attempts < 3 {
                Err("busy".to_string())
            } else {
                Ok("done")
            }
        });

        assert_eq!(result, Ok("done"));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let mut attempts = 0;

        let result: Result<(), String> = policy.run_with("always_busy", |_| true, || {
            attempts += 1;
            Err(format!("busy #{}", attempts))
        });

        assert_eq!(result, Err("busy #3".to_string()));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_non_transient_error_is_not_retried() {
        let policy = RetryPolicy::new(3, Duration::from_millis(1));
        let mut attempts = 0;

        let result: Result<(), String> = policy.run_with("broken", |e: &String| e == "busy", || {
            attempts += 1;
            Err("constraint".to_string())
        });

        assert_eq!(result, Err("constraint".to_string()));
        assert_eq!(attempts, 1);
    }

    #[test_context(RetryTestContext)]
    #[test]
    fn test_write_survives_short_lock(ctx: &mut RetryTestContext) {
        let storage = ctx
            .storage
            .clone()
            .with_settings(StorageSettings {
                busy_timeout: Duration::from_millis(50),
            })
            .with_retry(RetryPolicy::new(5, Duration::from_millis(100)));

        let holder = ctx.storage.connect().expect("connect lock holder");
        let (locked_tx, locked_rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            holder.conn.execute_batch("BEGIN IMMEDIATE").expect("take write lock");
            locked_tx.send(()).expect("signal lock");
            thread::sleep(Duration::from_millis(250));
            holder.conn.execute_batch("COMMIT").expect("release write lock");
        });

        locked_rx.recv().expect("wait for lock");
        let outcome = Students::new(&storage).add(&student());
        handle.join().expect("lock holder thread");

        assert!(outcome.success, "{}", outcome.message);
        assert_eq!(count(&ctx.storage), 1);
    }

    #[test_context(RetryTestContext)]
    #[test]
    fn test_exhausted_retries_report_database_error(ctx: &mut RetryTestContext) {
        let storage = ctx
            .storage
            .clone()
            .with_settings(StorageSettings {
                busy_timeout: Duration::from_millis(20),
            })
            .with_retry(RetryPolicy::new(2, Duration::from_millis(10)));

        let holder = ctx.storage.connect().expect("connect lock holder");
        holder.conn.execute_batch("BEGIN IMMEDIATE").expect("take write lock");

        let outcome = Students::new(&storage).add(&student());
        assert!(!outcome.success);
        assert_eq!(outcome.message, "A database error occurred. Please try again.");

        holder.conn.execute_batch("ROLLBACK").expect("release write lock");
        assert_eq!(count(&ctx.storage), 0);
    }

    #[test_context(RetryTestContext)]
    #[test]
    fn test_reads_proceed_while_writer_holds_lock(ctx: &mut RetryTestContext) {
        assert!(Students::new(&ctx.storage).add(&student()).success);

        let holder = ctx.storage.connect().expect("connect lock holder");
        holder.conn.execute_batch("BEGIN IMMEDIATE").expect("take write lock");
        holder
            .conn
            .execute("DELETE FROM students", [])
            .expect("uncommitted delete");

        assert_eq!(count(&ctx.storage), 1);
        holder.conn.execute_batch("ROLLBACK").expect("release write lock");
    }
}
