#[cfg(test)]
mod tests {
    use chrono::{Duration, Local};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::repository::TodoRepository;
    use tudu::libs::todo::{Priority, Todo};

    struct TodoTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TodoTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TodoTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_generates_prefixed_id(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let id = repo.add_todo(&Todo::new("Buy milk", None, Priority::Medium)).unwrap();
        assert!(id.starts_with("t-"));

        let second = repo.add_todo(&Todo::new("Buy bread", None, Priority::Medium)).unwrap();
        assert_ne!(id, second);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_add_and_fetch_round_trip(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let due = Local::now().naive_local() + Duration::days(2);
        let todo = Todo::new("Write report", Some("Work"), Priority::High).with_due_date(due);
        let id = repo.add_todo(&todo).unwrap();

        let stored = repo.get_todo_by_id(&id).unwrap().unwrap();
        assert_eq!(stored.title, "Write report");
        assert_eq!(stored.category, "Work");
        assert_eq!(stored.priority, Priority::High);
        assert!(!stored.is_completed);
        assert!(stored.due_date.is_some());
        assert!(stored.updated_at.is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_stamps_updated_at(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let id = repo.add_todo(&Todo::new("Original", None, Priority::Low)).unwrap();
        let mut todo = repo.get_todo_by_id(&id).unwrap().unwrap();
        todo.title = "Renamed".to_string();
        todo.priority = Priority::High;

        assert!(repo.update_todo(&todo).unwrap());

        let updated = repo.get_todo_by_id(&id).unwrap().unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.priority, Priority::High);
        assert!(updated.updated_at.is_some());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_update_missing_id_reports_false(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let mut ghost = Todo::new("Ghost", None, Priority::Medium);
        ghost.id = "t-0-0".to_string();
        assert!(!repo.update_todo(&ghost).unwrap());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_delete_missing_id_reports_false(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let id = repo.add_todo(&Todo::new("Short lived", None, Priority::Medium)).unwrap();
        assert!(repo.delete_todo(&id).unwrap());
        assert!(!repo.delete_todo(&id).unwrap());
        assert!(repo.get_todo_by_id(&id).unwrap().is_none());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_toggle_twice_restores_state(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();

        let id = repo.add_todo(&Todo::new("Flip me", None, Priority::Medium)).unwrap();

        assert!(repo.toggle_todo_completion(&id).unwrap());
        assert!(repo.get_todo_by_id(&id).unwrap().unwrap().is_completed);

        assert!(repo.toggle_todo_completion(&id).unwrap());
        assert!(!repo.get_todo_by_id(&id).unwrap().unwrap().is_completed);

        assert!(!repo.toggle_todo_completion("t-0-0").unwrap());
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_snapshot_orders_incomplete_first_newest_first(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();
        let base = Local::now().naive_local();

        // Explicit creation times so the ordering is deterministic.
        let mut oldest = Todo::new("Oldest open", None, Priority::Medium);
        oldest.created_at = base - Duration::hours(3);
        let mut newest = Todo::new("Newest open", None, Priority::Medium);
        newest.created_at = base - Duration::hours(1);
        let mut finished = Todo::new("Already done", None, Priority::Medium);
        finished.created_at = base - Duration::hours(2);

        repo.add_todo(&oldest).unwrap();
        repo.add_todo(&newest).unwrap();
        let done_id = repo.add_todo(&finished).unwrap();
        repo.toggle_todo_completion(&done_id).unwrap();

        let snapshot = repo.get_todos().unwrap();
        let titles: Vec<&str> = snapshot.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest open", "Oldest open", "Already done"]);
    }

    #[test_context(TodoTestContext)]
    #[test]
    fn test_watch_stream_observes_mutations(_ctx: &mut TodoTestContext) {
        let mut repo = TodoRepository::new().unwrap();
        let mut rx = repo.subscribe();

        assert!(rx.borrow_and_update().is_empty());
        assert!(!rx.has_changed().unwrap());

        let id = repo.add_todo(&Todo::new("Streamed", None, Priority::Medium)).unwrap();
        assert!(rx.has_changed().unwrap());
        let snapshot = rx.borrow_and_update().clone();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, id);

        repo.delete_todo(&id).unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }
}
