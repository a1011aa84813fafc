use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a terminal table, stable id in the first column so
    /// users always address tasks by id, never by row position.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "KIND", "PRIORITY", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id.unwrap_or(0), task.name, task.kind, task.priority, task.status]);
        }
        table.printstd();

        Ok(())
    }
}
