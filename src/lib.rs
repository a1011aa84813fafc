//! # Tasko
//!
//! A small task manager for the terminal. Tasks live in a local SQLite
//! database and carry four fields beside their id: a name, a kind (object
//! or activity), a priority (0 to 2, ascending urgency) and a status
//! (to-do, doing, done).
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasko::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
