#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::db::Db;
    use tudu::db::migrations::get_db_version;

    struct MigrationTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            MigrationTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_fresh_database_reaches_latest_version(_ctx: &mut MigrationTestContext) {
        let db = Db::new().unwrap();
        assert_eq!(get_db_version(&db.conn).unwrap(), 2);

        let tables: Vec<String> = {
            let mut stmt = db
                .conn
                .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
                .unwrap();
            stmt.query_map([], |row| row.get(0)).unwrap().map(|r| r.unwrap()).collect()
        };
        assert!(tables.contains(&"todos".to_string()));
        assert!(tables.contains(&"categories".to_string()));
        assert!(tables.contains(&"migrations".to_string()));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_reopening_is_idempotent(_ctx: &mut MigrationTestContext) {
        {
            let db = Db::new().unwrap();
            assert_eq!(get_db_version(&db.conn).unwrap(), 2);
        }

        let reopened = Db::new().unwrap();
        assert_eq!(get_db_version(&reopened.conn).unwrap(), 2);

        let migration_rows: u32 = reopened
            .conn
            .query_row("SELECT COUNT(*) FROM migrations", [], |row| row.get(0))
            .unwrap();
        assert_eq!(migration_rows, 2);
    }
}
