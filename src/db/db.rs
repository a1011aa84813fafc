use crate::db::migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_FILE_NAME: &str = "tasko.db";

/// Owns the SQLite connection used by the store modules.
///
/// Each `Db` instance holds its own connection, created on demand and
/// passed by explicit dependency. There is no process-wide shared handle.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database and brings the schema up to date.
    pub fn new() -> Result<Db> {
        let mut conn = Self::open()?;
        migrations::init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens a connection without applying migrations. Used by tests that
    /// exercise the migration system directly.
    pub fn new_without_migrations() -> Result<Connection> {
        Self::open()
    }

    fn open() -> Result<Connection> {
        let conn = Connection::open(Self::path()?)?;
        // Wait for competing writers instead of failing with SQLITE_BUSY.
        conn.busy_timeout(Duration::from_secs(5))?;
        Ok(conn)
    }

    /// Resolves the database file location, honoring a configured override.
    fn path() -> Result<PathBuf> {
        if let Some(database) = Config::read()?.database {
            let path = PathBuf::from(&database.path);
            if path.is_absolute() {
                return Ok(path);
            }
            return DataStorage::new().get_path(&database.path);
        }
        DataStorage::new().get_path(DB_FILE_NAME)
    }
}
