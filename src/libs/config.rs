//! Configuration management for the tasko application.
//!
//! Settings are stored as pretty-printed JSON in the platform application
//! data directory and loaded once at process start. A missing configuration
//! file is not an error: the application falls back to defaults so it works
//! without any setup.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\tasko\config.json`
//! - **macOS**: `~/Library/Application Support/tasko/config.json`
//! - **Linux**: `~/.local/share/tasko/config.json`

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Database connection settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file. A relative path resolves against
    /// the application data directory.
    pub path: String,
}

/// Top-level application configuration.
///
/// All sections are optional; `None` means the built-in default is used.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, falling back to defaults when absent.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Deletes the configuration file if one exists. Returns `true` when a
    /// file was actually removed.
    pub fn remove() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(false);
        }

        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Existing values are offered as prompt defaults so re-running the
    /// wizard only changes what the user edits. The returned configuration
    /// still has to be persisted with [`Config::save`].
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        msg_print!(Message::ConfigModuleDatabase, true);

        let current_path = config.database.as_ref().map(|db| db.path.clone()).unwrap_or_default();
        let path: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(current_path)
            .allow_empty(true)
            .interact_text()?;

        config.database = if path.is_empty() { None } else { Some(DatabaseConfig { path }) };

        Ok(config)
    }
}
