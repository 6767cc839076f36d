//! Core to-do persistence operations.
//!
//! Stores to-dos in their wire shape: ISO-8601 timestamp strings and
//! enum-name priority strings. Conversion to the domain shape happens in the
//! repository layer, never here.

use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_TODO: &str = "INSERT OR REPLACE INTO todos
    (id, title, is_completed, priority, category, created_at, updated_at, due_date, has_reminder, reminder_time)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";
const UPDATE_TODO: &str = "UPDATE todos SET
    title = ?2, is_completed = ?3, priority = ?4, category = ?5,
    updated_at = ?6, due_date = ?7, has_reminder = ?8, reminder_time = ?9
    WHERE id = ?1";
const DELETE_TODO: &str = "DELETE FROM todos WHERE id = ?1";
const SELECT_TODOS: &str = "SELECT id, title, is_completed, priority, category, created_at, updated_at, due_date, has_reminder, reminder_time FROM todos";
// Incomplete first, then newest creations first within each completion group.
const ORDER_SNAPSHOT: &str = "ORDER BY is_completed ASC, created_at DESC";
const WHERE_ID: &str = "WHERE id = ?1";

/// Storage-shaped to-do row. All timestamps are ISO-8601 strings.
#[derive(Debug, Clone)]
pub struct TodoRecord {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub priority: String,
    pub category: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub due_date: Option<String>,
    pub has_reminder: bool,
    pub reminder_time: Option<String>,
}

pub struct Todos {
    conn: Connection,
}

impl Todos {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// Inserts a record, replacing any existing row with the same id.
    pub fn insert(&mut self, record: &TodoRecord) -> Result<()> {
        self.conn.execute(
            INSERT_TODO,
            params![
                record.id,
                record.title,
                record.is_completed,
                record.priority,
                record.category,
                record.created_at,
                record.updated_at,
                record.due_date,
                record.has_reminder,
                record.reminder_time,
            ],
        )?;
        Ok(())
    }

    /// Updates an existing row; returns the number of affected rows.
    pub fn update(&mut self, record: &TodoRecord) -> Result<usize> {
        let affected = self.conn.execute(
            UPDATE_TODO,
            params![
                record.id,
                record.title,
                record.is_completed,
                record.priority,
                record.category,
                record.updated_at,
                record.due_date,
                record.has_reminder,
                record.reminder_time,
            ],
        )?;
        Ok(affected)
    }

    /// Deletes by id; returns the number of affected rows.
    pub fn delete_by_id(&mut self, id: &str) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TODO, params![id])?;
        Ok(affected)
    }

    /// Full ordered snapshot of the collection.
    pub fn fetch_all(&mut self) -> Result<Vec<TodoRecord>> {
        let mut stmt = self.conn.prepare(&format!("{} {}", SELECT_TODOS, ORDER_SNAPSHOT))?;
        let todo_iter = stmt.query_map([], Self::map_row)?;

        let mut todos = Vec::new();
        for todo in todo_iter {
            todos.push(todo?);
        }
        Ok(todos)
    }

    /// One-shot point lookup.
    pub fn get_by_id(&mut self, id: &str) -> Result<Option<TodoRecord>> {
        self.conn
            .query_row(&format!("{} {}", SELECT_TODOS, WHERE_ID), params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TodoRecord> {
        Ok(TodoRecord {
            id: row.get(0)?,
            title: row.get(1)?,
            is_completed: row.get(2)?,
            priority: row.get(3)?,
            category: row.get(4)?,
            created_at: row.get(5)?,
            updated_at: row.get(6)?,
            due_date: row.get(7)?,
            has_reminder: row.get(8)?,
            reminder_time: row.get(9)?,
        })
    }
}
