//! # Tudu - a to-do tracker with statistics and AI reports
//!
//! A command-line utility for managing personal to-dos, keeping them in a
//! local SQLite database and turning the history into productivity insights.
//!
//! ## Features
//!
//! - **To-do Management**: Create, edit, toggle, and delete to-dos with
//!   priorities, categories, due dates, and reminders
//! - **Category Management**: User-defined categories, capped at ten
//! - **Statistics**: Completion rate, category distribution, trend windows,
//!   and completion streaks over a week or month
//! - **Insights**: A canned encouragement line picked from the statistics
//! - **AI Reports**: Gemini-generated activity and procrastination reports,
//!   limited to three requests per day
//! - **Preferences**: Persisted language and theme settings
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tudu::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
