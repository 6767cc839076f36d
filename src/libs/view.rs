//! Console table rendering for to-dos, categories, and statistics.

use crate::libs::category::Category;
use crate::libs::stats::TodoStats;
use crate::libs::todo::Todo;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn todos(todos: &[Todo]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "DONE", "PRIORITY", "TITLE", "CATEGORY", "DUE"]);
        for todo in todos {
            table.add_row(row![
                todo.id,
                if todo.is_completed { "✔" } else { "" },
                todo.priority.as_str(),
                todo.title,
                todo.category,
                todo.due_date.map(|d| d.format("%Y-%m-%d %H:%M").to_string()).unwrap_or_default(),
            ]);
        }
        table.printstd();
    }

    pub fn categories(categories: &[Category]) {
        let mut table = Table::new();

        table.add_row(row!["NAME", "CREATED"]);
        for category in categories {
            table.add_row(row![category.name, category.created_at.format("%Y-%m-%d").to_string()]);
        }
        table.printstd();
    }

    pub fn stats(stats: &TodoStats) {
        let mut table = Table::new();
        table.add_row(row!["TOTAL", "COMPLETED", "RATE"]);
        table.add_row(row![
            stats.total_todos,
            stats.total_completed,
            format!("{:.0}%", stats.completion_rate * 100.0)
        ]);
        table.printstd();

        if !stats.category_distribution.is_empty() {
            let mut distribution = Table::new();
            distribution.add_row(row!["CATEGORY", "COUNT"]);
            for (name, count) in &stats.category_distribution {
                distribution.add_row(row![name, count]);
            }
            distribution.printstd();
        }

        let trend: Vec<String> = stats.trend.iter().map(|rate| format!("{:.0}%", rate * 100.0)).collect();
        println!("Trend (oldest to newest): {}", trend.join(" | "));
    }
}
