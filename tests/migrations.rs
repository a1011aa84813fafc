#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tasko::db::migrations::{get_db_version, init_with_migrations, needs_migration, MigrationManager};
    use tempfile::TempDir;

    // These tests open connections on explicit paths, so each one gets its
    // own database without touching the home directory.
    fn open_fresh() -> (TempDir, Connection) {
        let temp_dir = tempfile::tempdir().unwrap();
        let conn = Connection::open(temp_dir.path().join("test.db")).unwrap();
        (temp_dir, conn)
    }

    #[test]
    fn test_fresh_database_starts_at_version_zero() {
        let (_tmp, conn) = open_fresh();

        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_migrations_bring_schema_up_to_date() {
        let (_tmp, mut conn) = open_fresh();

        init_with_migrations(&mut conn).unwrap();

        assert!(get_db_version(&conn).unwrap() > 0);
        assert!(!needs_migration(&conn).unwrap());

        // The tasks table is usable after migration
        conn.execute(
            "INSERT INTO tasks (name, kind, priority, status) VALUES ('probe', 'activity', 1, 'to-do')",
            [],
        )
        .unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_migrations_are_idempotent() {
        let (_tmp, mut conn) = open_fresh();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        let version1 = get_db_version(&conn).unwrap();

        manager.run_migrations(&mut conn).unwrap();
        let version2 = get_db_version(&conn).unwrap();

        assert_eq!(version1, version2);
    }

    #[test]
    fn test_migration_history_is_ordered() {
        let (_tmp, mut conn) = open_fresh();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();

        let history = manager.get_migration_history(&conn).unwrap();
        assert!(!history.is_empty());
        for (i, entry) in history.iter().enumerate() {
            assert_eq!(entry.0 as usize, i + 1);
        }
    }

    #[cfg(debug_assertions)]
    #[test]
    fn test_rollback_clears_migration_records() {
        let (_tmp, mut conn) = open_fresh();
        let manager = MigrationManager::new();

        manager.run_migrations(&mut conn).unwrap();
        assert!(!needs_migration(&conn).unwrap());

        manager.rollback_to(&mut conn, 0).unwrap();
        assert_eq!(get_db_version(&conn).unwrap(), 0);
        assert!(needs_migration(&conn).unwrap());
    }
}
