//! Task store: CRUD operations over the `tasks` table.
//!
//! Every operation is a single parameterized statement that commits on its
//! own; there are no multi-statement transactions. Updating or deleting an
//! id that does not exist affects zero rows and is not an error — callers
//! inspect the returned row count when they care.

use super::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskFilter};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (name, kind, priority, status) VALUES (?1, ?2, ?3, ?4)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?2, kind = ?3, priority = ?4, status = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, name, kind, priority, status FROM tasks ORDER BY id";
const SELECT_TASKS_BY_NAME: &str = "SELECT id, name, kind, priority, status FROM tasks WHERE name LIKE ?1 ESCAPE '\\' ORDER BY id";
const SELECT_TASK_BY_ID: &str = "SELECT id, name, kind, priority, status FROM tasks WHERE id = ?1";

pub struct Tasks {
    conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a new task and returns the id the database assigned to it.
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(INSERT_TASK, params![task.name, task.kind, task.priority, task.status])?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Fetches tasks matching the filter, ordered by id for stable display.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, bind_params) = match filter {
            TaskFilter::All => (self.conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::NameContains(needle) => (self.conn.prepare(SELECT_TASKS_BY_NAME)?, vec![format!("%{}%", escape_like(&needle))]),
        };

        let task_iter = stmt.query_map(params_from_iter(bind_params.iter()), Self::map_row)?;
        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }

        Ok(tasks)
    }

    /// Looks up a single task by its id.
    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn.query_row(SELECT_TASK_BY_ID, params![id], Self::map_row).optional().map_err(Into::into)
    }

    /// Replaces all four mutable fields of the task matching `task.id`.
    ///
    /// Returns the affected row count; zero means no task has that id.
    pub fn update(&mut self, task: &Task) -> Result<usize> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::NoIdSet))?;
        let affected = self.conn.execute(UPDATE_TASK, params![id, task.name, task.kind, task.priority, task.status])?;
        Ok(affected)
    }

    /// Deletes the task matching `id`.
    ///
    /// Returns the affected row count; zero means no task has that id.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        Ok(affected)
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            kind: row.get(2)?,
            priority: row.get(3)?,
            status: row.get(4)?,
        })
    }
}

/// Escapes LIKE wildcards so a search term matches literally.
fn escape_like(needle: &str) -> String {
    needle.replace('\\', "\\\\").replace('%', "\\%").replace('_', "\\_")
}
