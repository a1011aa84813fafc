//! Task domain types and field validation.
//!
//! Every field with a fixed value domain is modeled as an enum, so an
//! out-of-range kind, priority or status is rejected while parsing user
//! input, before any SQL statement runs. The database schema itself does
//! not enforce these domains.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A task field value outside its fixed domain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TaskFieldError {
    #[error("invalid task kind '{0}', expected 'object' or 'activity'")]
    InvalidKind(String),
    #[error("invalid priority {0}, expected 0, 1 or 2")]
    InvalidPriority(i64),
    #[error("invalid status '{0}', expected 'to-do', 'doing' or 'done'")]
    InvalidStatus(String),
}

/// What a task refers to: a thing to obtain or an activity to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskKind {
    Object,
    Activity,
}

impl TaskKind {
    pub const ALL: [TaskKind; 2] = [TaskKind::Object, TaskKind::Activity];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Object => "object",
            TaskKind::Activity => "activity",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskKind {
    type Err = TaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "object" => Ok(TaskKind::Object),
            "activity" => Ok(TaskKind::Activity),
            other => Err(TaskFieldError::InvalidKind(other.to_string())),
        }
    }
}

impl ToSql for TaskKind {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TaskKind {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskFieldError| FromSqlError::Other(Box::new(e)))
    }
}

/// Task urgency, stored as its integer value. Higher value means more urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low = 0,
    Medium = 1,
    High = 2,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn value(&self) -> i64 {
        *self as i64
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "0 (low)",
            Priority::Medium => "1 (medium)",
            Priority::High => "2 (high)",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskFieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Priority::Low),
            1 => Ok(Priority::Medium),
            2 => Ok(Priority::High),
            other => Err(TaskFieldError::InvalidPriority(other)),
        }
    }
}

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.value().into())
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        Priority::try_from(value.as_i64()?).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Workflow state of a task. Any status may move to any other status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Doing, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "to-do",
            TaskStatus::Doing => "doing",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = TaskFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "to-do" => Ok(TaskStatus::Todo),
            "doing" => Ok(TaskStatus::Doing),
            "done" => Ok(TaskStatus::Done),
            other => Err(TaskFieldError::InvalidStatus(other.to_string())),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: TaskFieldError| FromSqlError::Other(Box::new(e)))
    }
}

/// The single persisted record type managed by the application.
///
/// `id` is assigned by the database on insert and is the sole handle used
/// to address a task for update or delete. List position is never used as
/// an identity, since list order is not guaranteed stable across calls.
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
    pub kind: TaskKind,
    pub priority: Priority,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(name: &str, kind: TaskKind, priority: Priority, status: TaskStatus) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            kind,
            priority,
            status,
        }
    }
}

/// Row selection for [`crate::db::tasks::Tasks::fetch`].
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    /// Case-insensitive substring match on the task name.
    NameContains(String),
}
