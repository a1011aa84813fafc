#[cfg(test)]
mod tests {
    use std::sync::OnceLock;
    use tasko::db::tasks::Tasks;
    use tasko::libs::task::{Priority, Task, TaskFilter, TaskKind, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // All tests in this binary share one home directory and therefore one
    // database file, so each test scopes its assertions to its own task
    // names instead of global row counts.
    static TEST_HOME: OnceLock<TempDir> = OnceLock::new();

    struct TaskTestContext;

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = TEST_HOME.get_or_init(|| tempfile::tempdir().unwrap());
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TaskTestContext
        }
    }

    fn fetch_named(tasks: &mut Tasks, name: &str) -> Vec<Task> {
        tasks.fetch(TaskFilter::NameContains(name.to_string())).unwrap()
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_create_then_list(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("create: water the plants", TaskKind::Activity, Priority::Medium, TaskStatus::Todo);
        let id = tasks.insert(&task).unwrap();
        assert!(id > 0);

        // Exactly one row with exactly the stored values
        let found = fetch_named(&mut tasks, "create: water the plants");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(id));
        assert_eq!(found[0].name, "create: water the plants");
        assert_eq!(found[0].kind, TaskKind::Activity);
        assert_eq!(found[0].priority, Priority::Medium);
        assert_eq!(found[0].status, TaskStatus::Todo);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_idempotent(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("update: draft report", TaskKind::Object, Priority::Low, TaskStatus::Todo);
        let id = tasks.insert(&task).unwrap();

        let updated = Task {
            id: Some(id),
            name: "update: final report".to_string(),
            kind: TaskKind::Object,
            priority: Priority::High,
            status: TaskStatus::Doing,
        };

        // Applying the same update twice leaves the row unchanged
        assert_eq!(tasks.update(&updated).unwrap(), 1);
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap(), updated);
        assert_eq!(tasks.update(&updated).unwrap(), 1);
        assert_eq!(tasks.get_by_id(id).unwrap().unwrap(), updated);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let first = tasks.insert(&Task::new("delete: first", TaskKind::Activity, Priority::Low, TaskStatus::Todo)).unwrap();
        let second = tasks.insert(&Task::new("delete: second", TaskKind::Activity, Priority::Low, TaskStatus::Todo)).unwrap();

        assert_eq!(tasks.delete(first).unwrap(), 1);

        assert!(tasks.get_by_id(first).unwrap().is_none());
        assert!(fetch_named(&mut tasks, "delete: first").is_empty());

        // The other row is untouched
        let remaining = fetch_named(&mut tasks, "delete: second");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(second));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_absent_id_is_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let ghost = Task {
            id: Some(9_999_999),
            name: "absent: nothing here".to_string(),
            kind: TaskKind::Object,
            priority: Priority::Low,
            status: TaskStatus::Done,
        };

        // Zero rows affected, no error, nothing stored
        assert_eq!(tasks.update(&ghost).unwrap(), 0);
        assert!(fetch_named(&mut tasks, "absent: nothing here").is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_absent_id_is_noop(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        assert_eq!(tasks.delete(8_888_888).unwrap(), 0);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_without_id_fails(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        let task = Task::new("no id yet", TaskKind::Activity, Priority::Low, TaskStatus::Todo);
        assert!(tasks.update(&task).is_err());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_search_is_case_insensitive(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("search: Buy Groceries", TaskKind::Activity, Priority::Medium, TaskStatus::Todo)).unwrap();

        let found = fetch_named(&mut tasks, "search: buy groceries");
        assert_eq!(found.len(), 1);

        assert!(fetch_named(&mut tasks, "search: buy flowers").is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_search_escapes_like_wildcards(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        tasks.insert(&Task::new("escape: 100% done", TaskKind::Object, Priority::Low, TaskStatus::Done)).unwrap();
        tasks.insert(&Task::new("escape: 100x done", TaskKind::Object, Priority::Low, TaskStatus::Done)).unwrap();

        // A literal '%' in the search term must not act as a wildcard
        let found = fetch_named(&mut tasks, "escape: 100%");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "escape: 100% done");
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_task_lifecycle(_ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new().unwrap();

        // Create
        let task = Task::new("lifecycle: buy milk", TaskKind::Activity, Priority::Medium, TaskStatus::Todo);
        let id = tasks.insert(&task).unwrap();

        let found = fetch_named(&mut tasks, "lifecycle: buy milk");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, Some(id));
        assert_eq!(found[0].priority, Priority::Medium);
        assert_eq!(found[0].status, TaskStatus::Todo);

        // Update in place
        let updated = Task {
            id: Some(id),
            name: "lifecycle: buy milk".to_string(),
            kind: TaskKind::Activity,
            priority: Priority::Low,
            status: TaskStatus::Doing,
        };
        assert_eq!(tasks.update(&updated).unwrap(), 1);

        let found = fetch_named(&mut tasks, "lifecycle: buy milk");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].priority, Priority::Low);
        assert_eq!(found[0].status, TaskStatus::Doing);

        // Delete
        assert_eq!(tasks.delete(id).unwrap(), 1);
        assert!(tasks.get_by_id(id).unwrap().is_none());
        assert!(fetch_named(&mut tasks, "lifecycle: buy milk").is_empty());
    }
}
