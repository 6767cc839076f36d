use crate::db::db::Db;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

const INSERT_CATEGORY: &str = "INSERT INTO categories (id, name, created_at) VALUES (?1, ?2, ?3)";
const DELETE_CATEGORY: &str = "DELETE FROM categories WHERE id = ?1";
const SELECT_CATEGORIES: &str = "SELECT id, name, created_at FROM categories ORDER BY name";
const SELECT_BY_NAME: &str = "SELECT id, name, created_at FROM categories WHERE name = ?1";
const COUNT_CATEGORIES: &str = "SELECT COUNT(*) FROM categories";

/// Storage-shaped category row.
#[derive(Debug, Clone)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

pub struct Categories {
    conn: Connection,
}

impl Categories {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    pub fn insert(&mut self, record: &CategoryRecord) -> Result<()> {
        self.conn.execute(INSERT_CATEGORY, params![record.id, record.name, record.created_at])?;
        Ok(())
    }

    /// Deletes by id; returns the number of affected rows. Never touches the
    /// todos table: category references are plain strings, not foreign keys.
    pub fn delete_by_id(&mut self, id: &str) -> Result<usize> {
        let affected = self.conn.execute(DELETE_CATEGORY, params![id])?;
        Ok(affected)
    }

    pub fn fetch_all(&mut self) -> Result<Vec<CategoryRecord>> {
        let mut stmt = self.conn.prepare(SELECT_CATEGORIES)?;
        let category_iter = stmt.query_map([], Self::map_row)?;

        let mut categories = Vec::new();
        for category in category_iter {
            categories.push(category?);
        }
        Ok(categories)
    }

    pub fn get_by_name(&mut self, name: &str) -> Result<Option<CategoryRecord>> {
        self.conn
            .query_row(SELECT_BY_NAME, params![name], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    pub fn count(&mut self) -> Result<usize> {
        let count: i64 = self.conn.query_row(COUNT_CATEGORIES, [], |row| row.get(0))?;
        Ok(count as usize)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<CategoryRecord> {
        Ok(CategoryRecord {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: row.get(2)?,
        })
    }
}
