//! Use-case facade over the repositories.
//!
//! Named, single-purpose operations that the command layer calls so it never
//! touches repository wiring directly. The only logic added here is input
//! validation: blank titles are silently dropped, and category creation
//! enforces the uniqueness and maximum-count rules.

use crate::libs::category::{Category, MAX_CATEGORIES};
use crate::libs::messages::Message;
use crate::libs::repository::{CategoryRepository, TodoRepository};
use crate::libs::todo::Todo;
use crate::msg_error_anyhow;
use anyhow::Result;
use tokio::sync::watch;

pub struct TodoUseCases {
    repository: TodoRepository,
}

impl TodoUseCases {
    pub fn new() -> Result<Self> {
        Ok(Self {
            repository: TodoRepository::new()?,
        })
    }

    pub fn get_todos(&mut self) -> Result<Vec<Todo>> {
        self.repository.get_todos()
    }

    pub fn get_todo_by_id(&mut self, id: &str) -> Result<Option<Todo>> {
        self.repository.get_todo_by_id(id)
    }

    /// Live snapshot stream, re-emitted after every mutation.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Todo>> {
        self.repository.subscribe()
    }

    /// Adds a to-do and returns its effective id, or `None` when the title is
    /// blank. A blank title is a silent no-op, not an error.
    pub fn add_todo(&mut self, todo: &Todo) -> Result<Option<String>> {
        if todo.title.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(self.repository.add_todo(todo)?))
    }

    pub fn update_todo(&mut self, todo: &Todo) -> Result<bool> {
        self.repository.update_todo(todo)
    }

    pub fn delete_todo(&mut self, id: &str) -> Result<bool> {
        self.repository.delete_todo(id)
    }

    pub fn toggle_todo_completion(&mut self, id: &str) -> Result<bool> {
        self.repository.toggle_todo_completion(id)
    }
}

pub struct CategoryUseCases {
    repository: CategoryRepository,
}

impl CategoryUseCases {
    pub fn new() -> Result<Self> {
        Ok(Self {
            repository: CategoryRepository::new()?,
        })
    }

    /// Creates a category, enforcing a non-blank unique name and the
    /// `MAX_CATEGORIES` ceiling. Violations are user-visible errors and never
    /// reach storage.
    pub fn add_category(&mut self, name: &str) -> Result<String> {
        let name = name.trim();
        if name.is_empty() {
            return Err(msg_error_anyhow!(Message::CategoryNameEmpty));
        }
        if self.repository.get_category_by_name(name)?.is_some() {
            return Err(msg_error_anyhow!(Message::CategoryAlreadyExists(name.to_string())));
        }
        if self.repository.count()? >= MAX_CATEGORIES {
            return Err(msg_error_anyhow!(Message::CategoryLimitReached(MAX_CATEGORIES)));
        }

        self.repository.add_category(&Category::new(name))
    }

    pub fn get_categories(&mut self) -> Result<Vec<Category>> {
        self.repository.get_categories()
    }

    /// Deletes a category by name. Returns `false` when no such category
    /// exists. To-dos referencing the name are left untouched.
    pub fn delete_category(&mut self, name: &str) -> Result<bool> {
        match self.repository.get_category_by_name(name)? {
            Some(category) => self.repository.delete_category(&category.id),
            None => Ok(false),
        }
    }
}
