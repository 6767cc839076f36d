#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use tudu::libs::notifier::{LocalScheduler, NotificationScheduler};
    use tudu::libs::todo::{Priority, Todo};

    fn reminder_todo(id: &str, offset: Duration) -> Todo {
        let mut todo = Todo::new("Water the plants", None, Priority::Medium).with_reminder(Local::now().naive_local() + offset);
        todo.id = id.to_string();
        todo
    }

    #[test]
    fn test_future_reminder_is_armed() {
        let scheduler = LocalScheduler::new();
        let todo = reminder_todo("t-1", Duration::hours(1));

        assert!(scheduler.schedule_notification(&todo));
        let armed = scheduler.armed("t-1").unwrap();
        assert_eq!(armed.title, "Water the plants");
        assert_eq!(armed.fire_at, todo.reminder_time.unwrap());
    }

    #[test]
    fn test_past_reminder_is_rejected() {
        let scheduler = LocalScheduler::new();
        let todo = reminder_todo("t-1", Duration::hours(-1));

        assert!(!scheduler.schedule_notification(&todo));
        assert_eq!(scheduler.armed_count(), 0);
    }

    #[test]
    fn test_todo_without_reminder_is_rejected() {
        let scheduler = LocalScheduler::new();
        let mut todo = Todo::new("No alarm", None, Priority::Medium);
        todo.id = "t-1".to_string();

        assert!(!scheduler.schedule_notification(&todo));
        assert_eq!(scheduler.armed_count(), 0);
    }

    #[test]
    fn test_missing_permission_blocks_arming() {
        let scheduler = LocalScheduler::with_permission(false);
        let todo = reminder_todo("t-1", Duration::hours(1));

        assert!(!scheduler.has_notification_permission());
        assert!(!scheduler.schedule_notification(&todo));

        // Granting permission lets the same request through.
        assert!(scheduler.request_notification_permission());
        assert!(scheduler.schedule_notification(&todo));
    }

    #[test]
    fn test_reschedule_replaces_existing_alarm() {
        let scheduler = LocalScheduler::new();

        scheduler.schedule_notification(&reminder_todo("t-1", Duration::hours(1)));
        let later = reminder_todo("t-1", Duration::hours(5));
        scheduler.schedule_notification(&later);

        assert_eq!(scheduler.armed_count(), 1);
        assert_eq!(scheduler.armed("t-1").unwrap().fire_at, later.reminder_time.unwrap());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let scheduler = LocalScheduler::new();
        scheduler.schedule_notification(&reminder_todo("t-1", Duration::hours(1)));

        scheduler.cancel_notification("t-1");
        assert!(scheduler.armed("t-1").is_none());

        // Cancelling again, or cancelling an unknown id, is a no-op.
        scheduler.cancel_notification("t-1");
        scheduler.cancel_notification("never-armed");
    }

    #[test]
    fn test_cancel_all_clears_registry() {
        let scheduler = LocalScheduler::new();
        scheduler.schedule_notification(&reminder_todo("t-1", Duration::hours(1)));
        scheduler.schedule_notification(&reminder_todo("t-2", Duration::hours(2)));
        assert_eq!(scheduler.armed_count(), 2);

        scheduler.cancel_all_notifications();
        assert_eq!(scheduler.armed_count(), 0);

        scheduler.cancel_all_notifications();
        assert_eq!(scheduler.armed_count(), 0);
    }
}
