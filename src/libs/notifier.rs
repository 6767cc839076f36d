//! Local reminder scheduling.
//!
//! The scheduling capability is a trait so each platform can supply its own
//! alarm delivery; the in-process `LocalScheduler` keeps the armed registry
//! and performs all eligibility checks, which is everything the data layer
//! needs and everything the tests exercise. Actual notification delivery is
//! an external collaborator.
//!
//! Eligibility is re-validated here regardless of what the to-do claims:
//! `has_reminder` only records that a scheduling attempt was made, so the
//! scheduler independently requires a reminder time that is strictly in the
//! future and an existing permission grant before arming anything.

use crate::libs::todo::Todo;
use chrono::{Local, NaiveDateTime};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

pub trait NotificationScheduler {
    /// Arms a one-shot reminder for the to-do. Returns `false` without arming
    /// anything when the to-do has no reminder, the reminder time is missing
    /// or not strictly in the future, or permission is not granted.
    fn schedule_notification(&self, todo: &Todo) -> bool;

    /// Cancels the reminder keyed by the to-do id. Idempotent; cancelling a
    /// reminder that was never armed is not an error.
    fn cancel_notification(&self, todo_id: &str);

    /// Cancels every armed reminder. Idempotent.
    fn cancel_all_notifications(&self);

    fn has_notification_permission(&self) -> bool;

    fn request_notification_permission(&self) -> bool;
}

/// A reminder that passed validation and is waiting to fire.
#[derive(Debug, Clone)]
pub struct ArmedReminder {
    pub todo_id: String,
    pub title: String,
    pub category: String,
    pub fire_at: NaiveDateTime,
}

/// In-process scheduler backing the CLI.
pub struct LocalScheduler {
    armed: Mutex<HashMap<String, ArmedReminder>>,
    permission_granted: AtomicBool,
}

impl LocalScheduler {
    pub fn new() -> Self {
        Self::with_permission(true)
    }

    /// Constructor with an explicit initial permission state.
    pub fn with_permission(granted: bool) -> Self {
        Self {
            armed: Mutex::new(HashMap::new()),
            permission_granted: AtomicBool::new(granted),
        }
    }

    /// The armed reminder for a to-do id, if any.
    pub fn armed(&self, todo_id: &str) -> Option<ArmedReminder> {
        self.armed.lock().get(todo_id).cloned()
    }

    pub fn armed_count(&self) -> usize {
        self.armed.lock().len()
    }
}

impl Default for LocalScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationScheduler for LocalScheduler {
    fn schedule_notification(&self, todo: &Todo) -> bool {
        if !todo.has_reminder {
            return false;
        }
        let Some(fire_at) = todo.reminder_time else {
            return false;
        };
        if fire_at <= Local::now().naive_local() {
            return false;
        }
        if !self.has_notification_permission() {
            return false;
        }

        let reminder = ArmedReminder {
            todo_id: todo.id.clone(),
            title: todo.title.clone(),
            category: todo.category.clone(),
            fire_at,
        };
        // Keyed by id: re-scheduling the same to-do replaces its alarm.
        self.armed.lock().insert(todo.id.clone(), reminder);
        true
    }

    fn cancel_notification(&self, todo_id: &str) {
        self.armed.lock().remove(todo_id);
    }

    fn cancel_all_notifications(&self) {
        self.armed.lock().clear();
    }

    fn has_notification_permission(&self) -> bool {
        self.permission_granted.load(Ordering::Relaxed)
    }

    fn request_notification_permission(&self) -> bool {
        self.permission_granted.store(true, Ordering::Relaxed);
        true
    }
}
