//! Statistics aggregation over the live to-do collection.
//!
//! Computes derived metrics for a reporting period (trailing week or month by
//! creation date): completion rate, category distribution, a four-window
//! completion trend, and day-streak figures. The aggregator is a pure
//! function over an in-memory snapshot; it re-runs in full on every emission
//! of the live stream, which is fine for a personal list of at most a few
//! hundred items.
//!
//! The streak figures are a heuristic, not a rigorous calendar computation:
//! runs are built over completed to-dos sorted by creation date descending,
//! a gap of more than one day breaks a run, and multiple completions on the
//! same day are not deduplicated (they lengthen the run). That matches the
//! documented product behavior.

use crate::libs::messages::Message;
use crate::libs::todo::Todo;
use chrono::{Days, NaiveDate, NaiveDateTime};

/// Number of trailing trend windows computed per period.
pub const TREND_WINDOWS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsPeriod {
    Week,
    Month,
}

impl StatsPeriod {
    pub fn days(&self) -> u64 {
        match self {
            StatsPeriod::Week => 7,
            StatsPeriod::Month => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatsPeriod::Week => "week",
            StatsPeriod::Month => "month",
        }
    }
}

/// Derived metrics for one reporting period.
#[derive(Debug, Clone)]
pub struct TodoStats {
    pub period: StatsPeriod,
    pub total_todos: usize,
    pub total_completed: usize,
    /// Always within `[0, 1]`; `0.0` for an empty period.
    pub completion_rate: f64,
    /// Largest category group among the filtered to-dos. Ties resolve to the
    /// first-encountered category in snapshot order.
    pub top_category: Option<(String, usize)>,
    /// Category name -> count, in first-encounter order. Values sum to
    /// `total_todos`.
    pub category_distribution: Vec<(String, usize)>,
    /// Completion rate of `TREND_WINDOWS` trailing non-overlapping windows,
    /// oldest first. Empty windows contribute `0.0`.
    pub trend: Vec<f64>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

impl TodoStats {
    /// Selects one of the canned insight messages from a static rule table
    /// over completion rate, current streak, and trend direction.
    pub fn insight(&self) -> Message {
        if self.total_todos == 0 {
            return Message::InsightGettingStarted;
        }
        if self.completion_rate >= 0.8 {
            return Message::InsightExcellent;
        }
        if self.current_streak >= 3 {
            return Message::InsightStreakGoing(self.current_streak);
        }
        if trend_is_improving(&self.trend) {
            return Message::InsightImproving;
        }
        Message::InsightSlipping
    }
}

/// Computes all metrics for the given snapshot and reference time.
pub fn calculate_stats(todos: &[Todo], period: StatsPeriod, now: NaiveDateTime) -> TodoStats {
    let today = now.date();
    let period_start = today - Days::new(period.days());

    let filtered: Vec<&Todo> = todos.iter().filter(|t| t.created_at.date() >= period_start).collect();

    let total_todos = filtered.len();
    let total_completed = filtered.iter().filter(|t| t.is_completed).count();
    let completion_rate = if total_todos == 0 {
        0.0
    } else {
        total_completed as f64 / total_todos as f64
    };

    let category_distribution = distribution(&filtered);
    // First-encountered entry wins ties, so only a strictly larger count
    // displaces the current best.
    let mut top_category: Option<(String, usize)> = None;
    for entry in &category_distribution {
        match &top_category {
            Some((_, best)) if entry.1 <= *best => {}
            _ => top_category = Some(entry.clone()),
        }
    }

    let trend = trend_windows(todos, period, today);
    let (current_streak, longest_streak) = streaks(todos, today);

    TodoStats {
        period,
        total_todos,
        total_completed,
        completion_rate,
        top_category,
        category_distribution,
        trend,
        current_streak,
        longest_streak,
    }
}

/// Category counts in first-encounter order.
fn distribution(filtered: &[&Todo]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for todo in filtered {
        match counts.iter_mut().find(|(name, _)| *name == todo.category) {
            Some((_, count)) => *count += 1,
            None => counts.push((todo.category.clone(), 1)),
        }
    }
    counts
}

/// Completion rate per trailing window `[today - p*(k+1), today - p*k)`,
/// oldest to newest (k = TREND_WINDOWS-1 .. 0).
fn trend_windows(todos: &[Todo], period: StatsPeriod, today: NaiveDate) -> Vec<f64> {
    let days = period.days();
    let mut rates = Vec::with_capacity(TREND_WINDOWS);

    for k in (0..TREND_WINDOWS as u64).rev() {
        let start = today - Days::new(days * (k + 1));
        let end = today - Days::new(days * k);

        let mut total = 0usize;
        let mut completed = 0usize;
        for todo in todos {
            let date = todo.created_at.date();
            if date >= start && date < end {
                total += 1;
                if todo.is_completed {
                    completed += 1;
                }
            }
        }

        rates.push(if total == 0 { 0.0 } else { completed as f64 / total as f64 });
    }

    rates
}

/// Day-streak heuristic over completed to-dos, newest first.
///
/// Returns `(current, longest)`. The current streak is captured only when
/// its run touches today or yesterday.
fn streaks(todos: &[Todo], today: NaiveDate) -> (u32, u32) {
    let mut dates: Vec<NaiveDate> = todos.iter().filter(|t| t.is_completed).map(|t| t.created_at.date()).collect();
    dates.sort_by(|a, b| b.cmp(a));

    let yesterday = today - Days::new(1);
    let mut current = 0u32;
    let mut longest = 0u32;
    let mut temp = 0u32;
    let mut run_is_fresh = false;
    let mut last: Option<NaiveDate> = None;

    for date in dates {
        match last {
            Some(prev) if (prev - date).num_days() <= 1 => temp += 1,
            _ => {
                // Gap (or first run): flush the previous run, start a new one.
                if run_is_fresh && current == 0 {
                    current = temp;
                }
                longest = longest.max(temp);
                temp = 1;
                run_is_fresh = date == today || date == yesterday;
            }
        }
        last = Some(date);
    }

    if run_is_fresh && current == 0 {
        current = temp;
    }
    longest = longest.max(temp);

    (current, longest)
}

fn trend_is_improving(trend: &[f64]) -> bool {
    match trend.len() {
        0 | 1 => false,
        n => trend[n - 1] > trend[n - 2],
    }
}
