#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskUpdated(i64),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    TasksHeader,
    NoChangesDetected,
    ConfirmDeleteTask(String),
    EditingTask(String),
    NoIdSet,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigRemoved,
    ConfigNotFound,
    ConfigModuleDatabase,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),  // from, to
    RollbackCompleted(u32), // version

    // === PROMPTS ===
    PromptTaskName,
    PromptTaskKind,
    PromptTaskPriority,
    PromptTaskStatus,
    PromptSearch,
    PromptDbPath,
    SelectTaskAction,
    SelectTaskToEdit,
    SelectTaskToDelete,

    // === GENERAL MESSAGES ===
    OperationCancelled,
}
