#[cfg(test)]
mod tests {
    use enrollment::db::db::StorageSettings;
    use enrollment::db::retry::RetryPolicy;
    use enrollment::libs::config::{Config, DatabaseConfig, RetryConfig};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.database.file_name, "enrollment_system.db");
        assert_eq!(config.database.busy_timeout_ms, 30_000);
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.retry.base_delay_ms, 100);

        assert_eq!(config.storage_settings(), StorageSettings::default());
        assert_eq!(config.retry_policy(), RetryPolicy::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = Config::parse(r#"{ "retry": { "max_attempts": 5 } }"#).expect("parse");
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.base_delay_ms, 100);
        assert_eq!(config.database, DatabaseConfig::default());

        let config = Config::parse("{}").expect("parse empty object");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_settings_conversion() {
        let config = Config {
            database: DatabaseConfig {
                file_name: "test.db".to_string(),
                busy_timeout_ms: 250,
            },
            retry: RetryConfig {
                max_attempts: 0,
                base_delay_ms: 5,
            },
        };

        assert_eq!(config.storage_settings().busy_timeout, Duration::from_millis(250));
        let policy = config.retry_policy();
        assert_eq!(policy.max_attempts, 1);
        assert_eq!(policy.base_delay, Duration::from_millis(5));
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        let err = Config::parse("{ not json").expect_err("invalid config");
        assert!(err.to_string().contains("Failed to parse configuration"));
    }
}
