//! Database layer for the tasko application.
//!
//! A thin persistence layer over SQLite: connection management, a versioned
//! schema bootstrap, and the task store itself. Every store operation is a
//! single parameterized statement dispatched synchronously.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// CRUD operations for tasks.
pub mod tasks;
