//! Database layer for the tudu application.
//!
//! A small persistence layer built on SQLite. Each entity gets its own
//! table-manager struct holding a connection, with SQL kept as constants at
//! the top of the module. Schema evolution goes through the versioned
//! migration system in [`migrations`].
//!
//! Rows move through this layer in their storage shape (ISO-8601 timestamp
//! strings, enum-name strings); the repository in `libs` owns the mapping to
//! domain types.

/// Core database connection and initialization.
pub mod db;

/// Versioned schema migration system.
pub mod migrations;

/// To-do record CRUD and ordered snapshot queries.
pub mod todos;

/// Category record CRUD.
pub mod categories;
