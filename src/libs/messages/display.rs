//! Display implementation for application messages.
//!
//! All user-facing text lives here, in one place, so wording stays
//! consistent and messages stay out of the command and database layers.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task created with id {}", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("No task found with id {}", id),
            Message::TasksNotFound => "No tasks found".to_string(),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::EditingTask(name) => format!("Editing task '{}'", name),
            Message::NoIdSet => "Task has no id set".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigRemoved => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file found".to_string(),
            Message::ConfigModuleDatabase => "⚙️ Database settings".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),

            // === PROMPTS ===
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskKind => "Kind".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptTaskStatus => "Status".to_string(),
            Message::PromptSearch => "Search by task name (leave empty for all)".to_string(),
            Message::PromptDbPath => "Database file path (leave empty for default)".to_string(),
            Message::SelectTaskAction => "What would you like to do?".to_string(),
            Message::SelectTaskToEdit => "Select task to edit".to_string(),
            Message::SelectTaskToDelete => "Select task to delete".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled".to_string(),
        };
        write!(f, "{}", text)
    }
}
