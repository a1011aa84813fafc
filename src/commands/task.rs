//! Task management commands.
//!
//! The three user actions map directly onto the store operations: create,
//! list (with optional name search), and edit-or-delete. Edit and delete
//! always address a task by its stable id as shown in the list output;
//! the interactive menu also resolves its selection to the id, never to
//! the row position.

use crate::{
    db::tasks::Tasks,
    libs::{
        messages::Message,
        task::{Priority, Task, TaskFilter, TaskKind, TaskStatus},
        view::View,
    },
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::{Args, Subcommand};
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

#[derive(Debug, Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    command: Option<TaskCommand>,
}

#[derive(Debug, Subcommand)]
enum TaskCommand {
    /// Create a new task
    Create {
        /// Task name
        name: String,
        /// Task kind: object or activity
        #[arg(short, long, default_value = "activity")]
        kind: String,
        /// Priority: 0 (low), 1 (medium) or 2 (high)
        #[arg(short, long, default_value_t = 1)]
        priority: i64,
        /// Status: to-do, doing or done
        #[arg(short, long, default_value = "to-do")]
        status: String,
    },
    /// List tasks
    List {
        /// Show only tasks whose name contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Edit a task
    Edit {
        /// Id of the task to edit
        id: i64,
    },
    /// Delete a task
    Delete {
        /// Id of the task to delete
        id: i64,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub fn cmd(args: TaskArgs) -> Result<()> {
    match args.command {
        Some(TaskCommand::Create { name, kind, priority, status }) => handle_create(name, kind, priority, status),
        Some(TaskCommand::List { search }) => handle_list(search),
        Some(TaskCommand::Edit { id }) => handle_edit(id),
        Some(TaskCommand::Delete { id, yes }) => handle_delete(id, yes),
        None => handle_interactive(),
    }
}

fn handle_create(name: String, kind: String, priority: i64, status: String) -> Result<()> {
    // Field validation happens here, before any statement runs
    let task = Task::new(&name, kind.parse()?, Priority::try_from(priority)?, status.parse()?);

    let id = Tasks::new()?.insert(&task)?;

    msg_success!(Message::TaskCreated(id));
    Ok(())
}

fn handle_list(search: Option<String>) -> Result<()> {
    let filter = match search {
        Some(needle) => TaskFilter::NameContains(needle),
        None => TaskFilter::All,
    };

    let tasks = Tasks::new()?.fetch(filter)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&tasks)?;
    Ok(())
}

fn handle_edit(id: i64) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_info!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    msg_print!(Message::EditingTask(task.name.clone()), true);

    // Current values become the prompt defaults
    let name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskName.to_string())
        .default(task.name.clone())
        .interact_text()?;

    let kind_labels: Vec<&str> = TaskKind::ALL.iter().map(|k| k.as_str()).collect();
    let kind_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskKind.to_string())
        .items(&kind_labels)
        .default(TaskKind::ALL.iter().position(|k| *k == task.kind).unwrap_or(0))
        .interact()?;

    let priority_labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
    let priority_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priority_labels)
        .default(Priority::ALL.iter().position(|p| *p == task.priority).unwrap_or(0))
        .interact()?;

    let status_labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
    let status_idx = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskStatus.to_string())
        .items(&status_labels)
        .default(TaskStatus::ALL.iter().position(|s| *s == task.status).unwrap_or(0))
        .interact()?;

    let updated = Task {
        id: Some(id),
        name,
        kind: TaskKind::ALL[kind_idx],
        priority: Priority::ALL[priority_idx],
        status: TaskStatus::ALL[status_idx],
    };

    if updated == task {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    let affected = tasks_db.update(&updated)?;
    if affected == 0 {
        // The row disappeared between the lookup and the update
        msg_info!(Message::TaskNotFoundWithId(id));
    } else {
        msg_success!(Message::TaskUpdated(id));
    }
    Ok(())
}

fn handle_delete(id: i64, yes: bool) -> Result<()> {
    let mut tasks_db = Tasks::new()?;

    let task = match tasks_db.get_by_id(id)? {
        Some(t) => t,
        None => {
            msg_info!(Message::TaskNotFoundWithId(id));
            return Ok(());
        }
    };

    if !yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    let affected = tasks_db.delete(id)?;
    if affected == 0 {
        msg_info!(Message::TaskNotFoundWithId(id));
    } else {
        msg_success!(Message::TaskDeleted(id));
    }
    Ok(())
}

fn handle_interactive() -> Result<()> {
    let options = vec!["Create task", "List tasks", "Edit task", "Delete task"];
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTaskAction.to_string())
        .items(&options)
        .interact()?;

    match selection {
        0 => {
            let name: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskName.to_string())
                .interact_text()?;

            let kind_labels: Vec<&str> = TaskKind::ALL.iter().map(|k| k.as_str()).collect();
            let kind_idx = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskKind.to_string())
                .items(&kind_labels)
                .default(0)
                .interact()?;

            let priority_labels: Vec<&str> = Priority::ALL.iter().map(|p| p.label()).collect();
            let priority_idx = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskPriority.to_string())
                .items(&priority_labels)
                .default(0)
                .interact()?;

            let status_labels: Vec<&str> = TaskStatus::ALL.iter().map(|s| s.as_str()).collect();
            let status_idx = Select::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTaskStatus.to_string())
                .items(&status_labels)
                .default(0)
                .interact()?;

            let task = Task::new(&name, TaskKind::ALL[kind_idx], Priority::ALL[priority_idx], TaskStatus::ALL[status_idx]);
            let id = Tasks::new()?.insert(&task)?;
            msg_success!(Message::TaskCreated(id));
            Ok(())
        }
        1 => {
            let search: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSearch.to_string())
                .allow_empty(true)
                .interact_text()?;
            handle_list(if search.is_empty() { None } else { Some(search) })
        }
        2 => match select_task(Message::SelectTaskToEdit)? {
            Some(id) => handle_edit(id),
            None => Ok(()),
        },
        3 => match select_task(Message::SelectTaskToDelete)? {
            Some(id) => handle_delete(id, false),
            None => Ok(()),
        },
        _ => Ok(()),
    }
}

/// Lets the user pick a task and returns its stable id.
fn select_task(prompt: Message) -> Result<Option<i64>> {
    let tasks = Tasks::new()?.fetch(TaskFilter::All)?;

    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(None);
    }

    let labels: Vec<String> = tasks.iter().map(|t| format!("{}: {}", t.id.unwrap_or(0), t.name)).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .items(&labels)
        .interact()?;

    Ok(tasks[selection].id)
}
