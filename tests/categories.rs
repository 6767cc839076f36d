#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::category::MAX_CATEGORIES;
    use tudu::libs::repository::TodoRepository;
    use tudu::libs::todo::{Priority, Todo};
    use tudu::libs::usecase::CategoryUseCases;

    struct CategoryTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for CategoryTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            CategoryTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_add_and_list_sorted_by_name(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();

        let id = use_cases.add_category("Work").unwrap();
        assert!(id.starts_with("c-"));
        use_cases.add_category("Errands").unwrap();

        let names: Vec<String> = use_cases.get_categories().unwrap().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Errands", "Work"]);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_blank_name_rejected(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();

        assert!(use_cases.add_category("   ").is_err());
        assert!(use_cases.get_categories().unwrap().is_empty());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_duplicate_name_rejected(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();

        use_cases.add_category("Work").unwrap();
        assert!(use_cases.add_category("Work").is_err());
        assert_eq!(use_cases.get_categories().unwrap().len(), 1);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_limit_enforced_at_ten(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();

        for i in 1..=MAX_CATEGORIES {
            use_cases.add_category(&format!("Category {}", i)).unwrap();
        }

        assert!(use_cases.add_category("One too many").is_err());
        assert_eq!(use_cases.get_categories().unwrap().len(), MAX_CATEGORIES);
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_by_name(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();

        use_cases.add_category("Work").unwrap();
        assert!(use_cases.delete_category("Work").unwrap());
        assert!(!use_cases.delete_category("Work").unwrap());
        assert!(use_cases.get_categories().unwrap().is_empty());
    }

    #[test_context(CategoryTestContext)]
    #[test]
    fn test_delete_leaves_labelled_todos_untouched(_ctx: &mut CategoryTestContext) {
        let mut use_cases = CategoryUseCases::new().unwrap();
        let mut todos = TodoRepository::new().unwrap();

        use_cases.add_category("Work").unwrap();
        let id = todos.add_todo(&Todo::new("Quarterly review", Some("Work"), Priority::High)).unwrap();

        assert!(use_cases.delete_category("Work").unwrap());

        // The to-do keeps its label as plain text.
        let survivor = todos.get_todo_by_id(&id).unwrap().unwrap();
        assert_eq!(survivor.category, "Work");
    }
}
