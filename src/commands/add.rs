use crate::libs::messages::Message;
use crate::libs::notifier::{LocalScheduler, NotificationScheduler};
use crate::libs::todo::{Priority, Todo};
use crate::libs::usecase::TodoUseCases;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Title of the to-do
    #[arg(required = true)]
    title: String,

    /// Category label (defaults to "General")
    #[arg(short, long)]
    category: Option<String>,

    /// Priority: low, medium, or high
    #[arg(short, long, default_value = "medium")]
    priority: String,

    /// Due date, "YYYY-MM-DD" or "YYYY-MM-DD HH:MM"
    #[arg(long)]
    due: Option<String>,

    /// Reminder time, "YYYY-MM-DD HH:MM"; also arms a local reminder
    #[arg(long)]
    remind: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let mut todo = Todo::new(&args.title, args.category.as_deref(), Priority::parse(&args.priority));
    if let Some(due) = &args.due {
        todo = todo.with_due_date(parse_datetime(due)?);
    }
    if let Some(remind) = &args.remind {
        todo = todo.with_reminder(parse_datetime(remind)?);
    }

    let mut use_cases = TodoUseCases::new()?;
    let Some(id) = use_cases.add_todo(&todo)? else {
        // Blank titles are dropped silently at the use-case boundary; tell
        // the interactive user anyway.
        msg_warning!(Message::TodoTitleEmpty);
        return Ok(());
    };
    msg_success!(Message::TodoCreated(id.clone()));

    if todo.has_reminder {
        todo.id = id;
        let scheduler = LocalScheduler::new();
        if scheduler.schedule_notification(&todo) {
            let fire_at = todo.reminder_time.map(|t| t.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default();
            msg_success!(Message::ReminderArmed(todo.title.clone(), fire_at));
        } else {
            msg_warning!(Message::ReminderSkipped(todo.title.clone()));
        }
    }

    Ok(())
}

/// Accepts a date with optional time; a bare date means start of day.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    if let Ok(datetime) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M") {
        return Ok(datetime);
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")?;
    Ok(date.and_hms_opt(0, 0, 0).unwrap())
}
