//! Display implementation for tudu application messages.
//!
//! Converts structured `Message` values into the human-readable text used for
//! terminal output. All user-facing text lives here, which keeps wording
//! consistent and leaves the door open for localization later.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TODO MESSAGES ===
            Message::TodoCreated(id) => format!("To-do created with ID {}", id),
            Message::TodoUpdated(id) => format!("To-do {} updated", id),
            Message::TodoDeleted(id) => format!("To-do {} deleted", id),
            Message::TodoNotFound(id) => format!("No to-do found with ID {}", id),
            Message::TodoTitleEmpty => "Title must not be blank; nothing was added.".to_string(),
            Message::TodoToggledDone(title) => format!("Marked '{}' as done", title),
            Message::TodoToggledOpen(title) => format!("Marked '{}' as open again", title),
            Message::TodosHeader => "To-dos:".to_string(),
            Message::NoTodos => "No to-dos yet. Add one with `tudu add`.".to_string(),
            Message::TodoUpdateFailed(id) => format!("Failed to update to-do {}", id),
            Message::TodoDeleteFailed(id) => format!("Failed to delete to-do {}", id),
            Message::ConfirmDeleteTodo(title) => format!("Delete '{}'?", title),

            // === CATEGORY MESSAGES ===
            Message::CategoryCreated(name) => format!("Category '{}' created", name),
            Message::CategoryDeleted(name) => format!("Category '{}' deleted", name),
            Message::CategoryNotFound(name) => format!("No category named '{}'", name),
            Message::CategoryNameEmpty => "Category name must not be blank.".to_string(),
            Message::CategoryAlreadyExists(name) => format!("Category '{}' already exists.", name),
            Message::CategoryLimitReached(max) => format!("You can keep at most {} categories. Delete one first.", max),
            Message::CategoriesHeader => "Categories:".to_string(),
            Message::NoCategories => "No categories defined.".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatsHeader(period) => format!("📊 Activity statistics ({})", period),
            Message::StatsNoData(period) => format!("No to-dos created in the last {}.", period),
            Message::StatsTopCategory(name, count) => format!("Most active category: {} ({} to-dos)", name, count),
            Message::StatsStreak(current, longest) => format!("Streak: {} day(s) current, {} day(s) longest", current, longest),

            // === INSIGHT MESSAGES ===
            Message::InsightExcellent => "You are completing almost everything you plan. Keep it up!".to_string(),
            Message::InsightStreakGoing(days) => format!("A {}-day completion streak is running. Don't break the chain!", days),
            Message::InsightImproving => "Your completion rate is trending upward. Nice momentum.".to_string(),
            Message::InsightSlipping => "Completions are trending down lately. Maybe pick one small task to finish today.".to_string(),
            Message::InsightGettingStarted => "Not much data yet. Add a few to-dos and check back.".to_string(),

            // === PREFERENCE MESSAGES ===
            Message::PreferenceSet(key, value) => format!("Preference '{}' set to '{}'", key, value),
            Message::PreferencesHeader => "Preferences:".to_string(),
            Message::PreferenceUnknownValue(key, value) => format!("'{}' is not a valid value for '{}'", value, key),

            // === REMINDER MESSAGES ===
            Message::ReminderArmed(title, time) => format!("Reminder armed for '{}' at {}", title, time),
            Message::ReminderSkipped(title) => format!("Reminder for '{}' was not scheduled (missing or past reminder time).", title),
            Message::ReminderCancelled(id) => format!("Reminder for to-do {} cancelled", id),

            // === AI REPORT MESSAGES ===
            Message::AiReportHeader(period) => format!("🤖 AI report ({})", period),
            Message::AiProcrastinationHeader => "🤖 Procrastination analysis".to_string(),
            Message::AiDailyLimitReached(max) => format!("Daily AI report limit reached ({} per day). Try again tomorrow.", max),
            Message::AiConfigMissing => "Gemini is not configured. Run `tudu init` first.".to_string(),
            Message::AiRequestFailed(error) => format!("AI request failed: {}", error),
            Message::AiEmptyResponse => "The model returned nothing usable; showing an empty report.".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::ConfigSaveError => "Failed to save configuration".to_string(),

            // === DATABASE MESSAGES ===
            Message::MigrationApplied(version, name) => format!("Applied migration v{}: {}", version, name),
            Message::MigrationsUpToDate => "Database schema is up to date.".to_string(),

            // === GENERAL MESSAGES ===
            Message::UnexpectedError(error) => format!("Unexpected error: {}", error),
        };
        write!(f, "{}", text)
    }
}
