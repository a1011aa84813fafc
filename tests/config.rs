#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tasko::db::db::Db;
    use tasko::libs::config::{Config, DatabaseConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    static TEST_HOME: OnceLock<TempDir> = OnceLock::new();

    struct ConfigTestContext;

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = TEST_HOME.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext
        }
    }

    #[test]
    fn test_default_config() {
        assert!(Config::default().database.is_none());
    }

    // Reads, writes, the database path override and removal are exercised
    // in sequence within one test, since they all touch the same file.
    #[test_context(ConfigTestContext)]
    #[test]
    fn test_config_lifecycle(_ctx: &mut ConfigTestContext) {
        // A missing file falls back to defaults
        assert_eq!(Config::read().unwrap(), Config::default());
        assert!(!Config::remove().unwrap());

        // Save a database override and read it back
        let db_path = TEST_HOME.get().unwrap().path().join("custom.db");
        let config = Config {
            database: Some(DatabaseConfig {
                path: db_path.to_string_lossy().into_owned(),
            }),
        };
        config.save().unwrap();
        assert_eq!(Config::read().unwrap(), config);

        // Opening the database honors the configured path
        let _db = Db::new().unwrap();
        assert!(db_path.exists());

        // Removing the file restores defaults
        assert!(Config::remove().unwrap());
        assert_eq!(Config::read().unwrap(), Config::default());
    }
}
