use chrono::{Local, NaiveDateTime};

/// Soft upper bound on user-defined categories, checked at the use-case layer.
pub const MAX_CATEGORIES: usize = 10;

/// A user-defined category label.
///
/// Categories are denormalized: a `Todo` references its category by name, not
/// by foreign key, so deleting a category never touches to-dos and a label
/// can orphan.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub created_at: NaiveDateTime,
}

impl Category {
    pub fn new(name: &str) -> Self {
        Category {
            id: String::new(),
            name: name.to_string(),
            created_at: Local::now().naive_local(),
        }
    }
}
