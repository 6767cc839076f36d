#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::libs::data_storage::DataStorage;
    use tudu::libs::preferences::{LanguageMode, Preferences, ThemeMode, PREFERENCES_FILE_NAME};

    struct PrefsTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for PrefsTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            PrefsTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_defaults_without_stored_file(_ctx: &mut PrefsTestContext) {
        let preferences = Preferences::load().unwrap();
        assert_eq!(preferences.language_mode(), LanguageMode::Korean);
        assert_eq!(preferences.theme_mode(), ThemeMode::Dark);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_corrupt_file_falls_back_to_defaults(_ctx: &mut PrefsTestContext) {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME).unwrap();
        fs::write(&path, "not json at all {{{").unwrap();

        let preferences = Preferences::load().unwrap();
        assert_eq!(preferences.language_mode(), LanguageMode::Korean);
        assert_eq!(preferences.theme_mode(), ThemeMode::Dark);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_unknown_stored_value_falls_back(_ctx: &mut PrefsTestContext) {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME).unwrap();
        fs::write(&path, r#"{"language_mode": "KLINGON", "theme_mode": "NEON"}"#).unwrap();

        let preferences = Preferences::load().unwrap();
        assert_eq!(preferences.language_mode(), LanguageMode::Korean);
        assert_eq!(preferences.theme_mode(), ThemeMode::Dark);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_set_persists_across_instances(_ctx: &mut PrefsTestContext) {
        let mut preferences = Preferences::load().unwrap();
        preferences.set_language_mode(LanguageMode::English).unwrap();
        preferences.set_theme_mode(ThemeMode::System).unwrap();

        let reloaded = Preferences::load().unwrap();
        assert_eq!(reloaded.language_mode(), LanguageMode::English);
        assert_eq!(reloaded.theme_mode(), ThemeMode::System);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_partial_file_keeps_other_default(_ctx: &mut PrefsTestContext) {
        let path = DataStorage::new().get_path(PREFERENCES_FILE_NAME).unwrap();
        fs::write(&path, r#"{"language_mode": "ENGLISH"}"#).unwrap();

        let preferences = Preferences::load().unwrap();
        assert_eq!(preferences.language_mode(), LanguageMode::English);
        assert_eq!(preferences.theme_mode(), ThemeMode::Dark);
    }

    #[test_context(PrefsTestContext)]
    #[test]
    fn test_watch_observes_changes(_ctx: &mut PrefsTestContext) {
        let mut preferences = Preferences::load().unwrap();
        let mut language_rx = preferences.watch_language();
        let mut theme_rx = preferences.watch_theme();

        assert_eq!(*language_rx.borrow_and_update(), LanguageMode::Korean);

        preferences.set_language_mode(LanguageMode::English).unwrap();
        assert!(language_rx.has_changed().unwrap());
        assert_eq!(*language_rx.borrow_and_update(), LanguageMode::English);

        preferences.set_theme_mode(ThemeMode::Light).unwrap();
        assert!(theme_rx.has_changed().unwrap());
        assert_eq!(*theme_rx.borrow_and_update(), ThemeMode::Light);
    }
}
