//! Core library modules for the tudu application.
//!
//! Domain types, the repository and use-case layers, statistics aggregation,
//! preferences, reminder scheduling, configuration, and console output all
//! live here; `db` holds the persistence layer and `api` the network
//! clients.

pub mod category;
pub mod config;
pub mod data_storage;
pub mod messages;
pub mod notifier;
pub mod preferences;
pub mod rate_limit;
pub mod repository;
pub mod secret;
pub mod stats;
pub mod todo;
pub mod usecase;
pub mod view;
