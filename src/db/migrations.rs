//! Database schema migration management and versioning.
//!
//! Keeps the SQLite schema current across releases. Every migration runs
//! inside a transaction and is recorded in a `migrations` tracking table, so
//! startup can apply exactly the pending ones in version order.

use crate::libs::messages::Message;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::{params, Connection, Transaction};

/// SQL schema for the migrations tracking table.
const MIGRATIONS_TABLE: &str = "
CREATE TABLE IF NOT EXISTS migrations (
    id INTEGER PRIMARY KEY,
    version INTEGER NOT NULL UNIQUE,
    name TEXT NOT NULL,
    applied_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
)";

/// A single schema migration with its execution logic.
#[derive(Debug, Clone)]
struct Migration {
    version: u32,
    name: &'static str,
    up: fn(&Transaction) -> Result<()>,
}

/// Registry of all migrations, applied in version order.
pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    fn register_migrations(&mut self) {
        self.migrations.push(Migration {
            version: 1,
            name: "create_todos_and_categories",
            up: |tx| {
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS todos (
                        id TEXT NOT NULL PRIMARY KEY,
                        title TEXT NOT NULL,
                        is_completed INTEGER NOT NULL DEFAULT 0,
                        priority TEXT NOT NULL DEFAULT 'MEDIUM',
                        category TEXT NOT NULL DEFAULT 'General',
                        created_at TEXT NOT NULL,
                        updated_at TEXT,
                        due_date TEXT,
                        has_reminder INTEGER NOT NULL DEFAULT 0,
                        reminder_time TEXT
                    )",
                    [],
                )?;
                tx.execute(
                    "CREATE TABLE IF NOT EXISTS categories (
                        id TEXT NOT NULL PRIMARY KEY,
                        name TEXT NOT NULL UNIQUE,
                        created_at TEXT NOT NULL
                    )",
                    [],
                )?;
                Ok(())
            },
        });

        self.migrations.push(Migration {
            version: 2,
            name: "index_todos_ordering",
            up: |tx| {
                // Covers the list query: incomplete first, newest first.
                tx.execute("CREATE INDEX IF NOT EXISTS idx_todos_order ON todos(is_completed, created_at DESC)", [])?;
                tx.execute("CREATE INDEX IF NOT EXISTS idx_todos_category ON todos(category)", [])?;
                Ok(())
            },
        });
    }

    /// Applies every migration newer than the recorded schema version.
    pub fn run(&self, conn: &mut Connection) -> Result<()> {
        conn.execute(MIGRATIONS_TABLE, [])?;
        let current = current_version(conn)?;

        let mut applied = 0;
        for migration in self.migrations.iter().filter(|m| m.version > current) {
            let tx = conn.transaction()?;
            (migration.up)(&tx)?;
            tx.execute(
                "INSERT INTO migrations (version, name) VALUES (?1, ?2)",
                params![migration.version, migration.name],
            )?;
            tx.commit()?;
            msg_debug!(Message::MigrationApplied(migration.version, migration.name.to_string()));
            applied += 1;
        }

        if applied == 0 {
            msg_debug!(Message::MigrationsUpToDate);
        }
        Ok(())
    }
}

/// Initializes a connection by applying all pending migrations.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    MigrationManager::new().run(conn)
}

/// Returns the highest applied migration version, 0 for a fresh database.
pub fn get_db_version(conn: &Connection) -> Result<u32> {
    conn.execute(MIGRATIONS_TABLE, [])?;
    current_version(conn)
}

fn current_version(conn: &Connection) -> Result<u32> {
    let version: Option<u32> = conn.query_row("SELECT MAX(version) FROM migrations", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}
