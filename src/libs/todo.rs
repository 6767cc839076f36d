use chrono::{Local, NaiveDateTime};

/// Category label applied when the caller does not pick one.
pub const DEFAULT_CATEGORY: &str = "General";

/// Timestamp format used in the storage layer (ISO-8601, no offset).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Enum-name string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
        }
    }

    /// Parses a stored enum-name string. Unknown values fall back to
    /// `Medium` rather than failing, matching the preference-store policy
    /// for corrupt data.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "LOW" => Priority::Low,
            "HIGH" => Priority::High,
            _ => Priority::Medium,
        }
    }
}

/// A single to-do item in its domain shape.
///
/// `id` is assigned by the repository on insert when left empty. `created_at`
/// is set once at creation; every later mutation stamps `updated_at`, which
/// is therefore always >= `created_at` when present.
#[derive(Debug, Clone)]
pub struct Todo {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
    pub priority: Priority,
    pub category: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub due_date: Option<NaiveDateTime>,
    pub has_reminder: bool,
    pub reminder_time: Option<NaiveDateTime>,
}

impl Todo {
    pub fn new(title: &str, category: Option<&str>, priority: Priority) -> Self {
        Todo {
            id: String::new(),
            title: title.to_string(),
            is_completed: false,
            priority,
            category: category.unwrap_or(DEFAULT_CATEGORY).to_string(),
            created_at: Local::now().naive_local(),
            updated_at: None,
            due_date: None,
            has_reminder: false,
            reminder_time: None,
        }
    }

    pub fn with_due_date(mut self, due_date: NaiveDateTime) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_reminder(mut self, reminder_time: NaiveDateTime) -> Self {
        self.has_reminder = true;
        self.reminder_time = Some(reminder_time);
        self
    }
}
