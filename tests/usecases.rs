#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::todo::{Priority, Todo};
    use tudu::libs::usecase::TodoUseCases;

    struct UseCaseTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for UseCaseTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            UseCaseTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(UseCaseTestContext)]
    #[test]
    fn test_blank_title_is_a_silent_no_op(_ctx: &mut UseCaseTestContext) {
        let mut use_cases = TodoUseCases::new().unwrap();

        assert!(use_cases.add_todo(&Todo::new("", None, Priority::Medium)).unwrap().is_none());
        assert!(use_cases.add_todo(&Todo::new("   \t  ", None, Priority::Medium)).unwrap().is_none());
        assert!(use_cases.get_todos().unwrap().is_empty());
    }

    #[test_context(UseCaseTestContext)]
    #[test]
    fn test_add_returns_effective_id(_ctx: &mut UseCaseTestContext) {
        let mut use_cases = TodoUseCases::new().unwrap();

        let id = use_cases.add_todo(&Todo::new("Call the dentist", None, Priority::Medium)).unwrap().unwrap();
        assert!(id.starts_with("t-"));
        assert_eq!(use_cases.get_todo_by_id(&id).unwrap().unwrap().title, "Call the dentist");
    }

    #[test_context(UseCaseTestContext)]
    #[test]
    fn test_caller_supplied_id_is_kept(_ctx: &mut UseCaseTestContext) {
        let mut use_cases = TodoUseCases::new().unwrap();

        let mut todo = Todo::new("Imported item", None, Priority::Low);
        todo.id = "t-1700000000000-42".to_string();
        let id = use_cases.add_todo(&todo).unwrap().unwrap();
        assert_eq!(id, "t-1700000000000-42");
    }

    #[test_context(UseCaseTestContext)]
    #[test]
    fn test_default_category_applied(_ctx: &mut UseCaseTestContext) {
        let mut use_cases = TodoUseCases::new().unwrap();

        let id = use_cases.add_todo(&Todo::new("Uncategorized", None, Priority::Medium)).unwrap().unwrap();
        assert_eq!(use_cases.get_todo_by_id(&id).unwrap().unwrap().category, "General");
    }
}
