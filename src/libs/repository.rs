//! Repository layer mediating between storage records and domain types.
//!
//! Owns three concerns the data-access layer deliberately does not:
//!
//! - **Shape translation**: ISO-8601 timestamp strings and enum-name strings
//!   in storage become `NaiveDateTime` and `Priority` here.
//! - **ID assignment**: inserts with an empty id get a generated
//!   `t-<epoch_millis>-<random>` identifier; supplied ids are kept and
//!   replace on conflict.
//! - **The live snapshot stream**: a `tokio::sync::watch` channel that
//!   re-emits the full ordered collection after every mutation, so the list
//!   view and the statistics aggregator always see the latest committed
//!   state without polling.
//!
//! `update_todo` and `delete_todo` report `false` when no row matched, based
//! on the affected-row count. Toggling is read-modify-write and is not atomic
//! against a concurrent toggle of the same id; last writer wins, which is
//! acceptable for a single-user collection.

use crate::db::categories::{Categories, CategoryRecord};
use crate::db::todos::{TodoRecord, Todos};
use crate::libs::category::Category;
use crate::libs::todo::{Priority, Todo, TIMESTAMP_FORMAT};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use thiserror::Error;
use tokio::sync::watch;

/// A stored row that cannot be mapped back into the domain shape.
#[derive(Debug, Error)]
#[error("invalid stored timestamp '{value}': {source}")]
pub struct CorruptRecord {
    value: String,
    source: chrono::ParseError,
}

pub struct TodoRepository {
    todos: Todos,
    snapshot_tx: watch::Sender<Vec<Todo>>,
}

impl TodoRepository {
    pub fn new() -> Result<Self> {
        let mut todos = Todos::new()?;
        let initial = map_records(todos.fetch_all()?)?;
        let (snapshot_tx, _) = watch::channel(initial);
        Ok(Self { todos, snapshot_tx })
    }

    /// Inserts a to-do, generating an id when the caller left it empty.
    /// Returns the effective id.
    pub fn add_todo(&mut self, todo: &Todo) -> Result<String> {
        let id = if todo.id.is_empty() {
            generate_todo_id()
        } else {
            todo.id.clone()
        };

        let mut record = to_record(todo);
        record.id = id.clone();
        self.todos.insert(&record)?;
        self.emit()?;
        Ok(id)
    }

    /// Writes all mutable fields of an existing to-do, stamping `updated_at`.
    /// Returns `false` when no row matched the id.
    pub fn update_todo(&mut self, todo: &Todo) -> Result<bool> {
        let mut todo = todo.clone();
        todo.updated_at = Some(Local::now().naive_local());

        let affected = self.todos.update(&to_record(&todo))?;
        if affected > 0 {
            self.emit()?;
        }
        Ok(affected > 0)
    }

    /// Returns `false` when no row matched the id.
    pub fn delete_todo(&mut self, id: &str) -> Result<bool> {
        let affected = self.todos.delete_by_id(id)?;
        if affected > 0 {
            self.emit()?;
        }
        Ok(affected > 0)
    }

    /// Flips `is_completed` for the given id. Returns `false` when no such
    /// to-do exists.
    pub fn toggle_todo_completion(&mut self, id: &str) -> Result<bool> {
        let Some(mut record) = self.todos.get_by_id(id)? else {
            return Ok(false);
        };

        record.is_completed = !record.is_completed;
        record.updated_at = Some(Local::now().naive_local().format(TIMESTAMP_FORMAT).to_string());
        self.todos.update(&record)?;
        self.emit()?;
        Ok(true)
    }

    /// Current ordered snapshot, mapped to the domain shape.
    pub fn get_todos(&mut self) -> Result<Vec<Todo>> {
        map_records(self.todos.fetch_all()?)
    }

    pub fn get_todo_by_id(&mut self, id: &str) -> Result<Option<Todo>> {
        match self.todos.get_by_id(id)? {
            Some(record) => Ok(Some(to_domain(&record)?)),
            None => Ok(None),
        }
    }

    /// Subscribes to the live snapshot stream. The receiver holds the latest
    /// snapshot immediately and observes each subsequent emission in order.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Todo>> {
        self.snapshot_tx.subscribe()
    }

    fn emit(&mut self) -> Result<()> {
        let snapshot = self.get_todos()?;
        // No receivers is fine; the channel keeps the value for late subscribers.
        let _ = self.snapshot_tx.send(snapshot);
        Ok(())
    }
}

pub struct CategoryRepository {
    categories: Categories,
}

impl CategoryRepository {
    pub fn new() -> Result<Self> {
        Ok(Self { categories: Categories::new()? })
    }

    pub fn add_category(&mut self, category: &Category) -> Result<String> {
        let id = if category.id.is_empty() {
            generate_category_id()
        } else {
            category.id.clone()
        };

        let record = CategoryRecord {
            id: id.clone(),
            name: category.name.clone(),
            created_at: category.created_at.format(TIMESTAMP_FORMAT).to_string(),
        };
        self.categories.insert(&record)?;
        Ok(id)
    }

    pub fn get_categories(&mut self) -> Result<Vec<Category>> {
        self.categories.fetch_all()?.iter().map(category_to_domain).collect()
    }

    pub fn get_category_by_name(&mut self, name: &str) -> Result<Option<Category>> {
        match self.categories.get_by_name(name)? {
            Some(record) => Ok(Some(category_to_domain(&record)?)),
            None => Ok(None),
        }
    }

    pub fn delete_category(&mut self, id: &str) -> Result<bool> {
        Ok(self.categories.delete_by_id(id)? > 0)
    }

    pub fn count(&mut self) -> Result<usize> {
        self.categories.count()
    }
}

/// Generated to-do ids: `t-<epoch_millis>-<random non-negative int>`.
fn generate_todo_id() -> String {
    format!("t-{}-{}", Local::now().timestamp_millis(), random_suffix())
}

fn generate_category_id() -> String {
    format!("c-{}-{}", Local::now().timestamp_millis(), random_suffix())
}

fn random_suffix() -> u32 {
    let mut buf = [0u8; 4];
    match getrandom::fill(&mut buf) {
        Ok(()) => u32::from_le_bytes(buf),
        // Entropy source unavailable; sub-second clock noise still keeps
        // same-millisecond collisions unlikely.
        Err(_) => Local::now().timestamp_subsec_nanos(),
    }
}

fn map_records(records: Vec<TodoRecord>) -> Result<Vec<Todo>> {
    records.iter().map(to_domain).collect()
}

fn to_domain(record: &TodoRecord) -> Result<Todo> {
    Ok(Todo {
        id: record.id.clone(),
        title: record.title.clone(),
        is_completed: record.is_completed,
        priority: Priority::parse(&record.priority),
        category: record.category.clone(),
        created_at: parse_timestamp(&record.created_at)?,
        updated_at: parse_optional(&record.updated_at)?,
        due_date: parse_optional(&record.due_date)?,
        has_reminder: record.has_reminder,
        reminder_time: parse_optional(&record.reminder_time)?,
    })
}

fn to_record(todo: &Todo) -> TodoRecord {
    TodoRecord {
        id: todo.id.clone(),
        title: todo.title.clone(),
        is_completed: todo.is_completed,
        priority: todo.priority.as_str().to_string(),
        category: todo.category.clone(),
        created_at: todo.created_at.format(TIMESTAMP_FORMAT).to_string(),
        updated_at: todo.updated_at.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        due_date: todo.due_date.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
        has_reminder: todo.has_reminder,
        reminder_time: todo.reminder_time.map(|t| t.format(TIMESTAMP_FORMAT).to_string()),
    }
}

fn category_to_domain(record: &CategoryRecord) -> Result<Category> {
    Ok(Category {
        id: record.id.clone(),
        name: record.name.clone(),
        created_at: parse_timestamp(&record.created_at)?,
    })
}

fn parse_timestamp(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).map_err(|source| {
        CorruptRecord {
            value: value.to_string(),
            source,
        }
        .into()
    })
}

fn parse_optional(value: &Option<String>) -> Result<Option<NaiveDateTime>> {
    match value {
        Some(v) => Ok(Some(parse_timestamp(v)?)),
        None => Ok(None),
    }
}
