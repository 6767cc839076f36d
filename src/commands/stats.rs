use crate::libs::messages::Message;
use crate::libs::stats::{calculate_stats, StatsPeriod};
use crate::libs::todo::Todo;
use crate::libs::usecase::TodoUseCases;
use crate::libs::view::View;
use crate::{msg_error, msg_print};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Reporting period: week or month
    #[arg(short, long, default_value = "week")]
    period: String,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let Some(period) = parse_period(&args.period) else {
        msg_error!(Message::UnexpectedError(format!("unknown period '{}'", args.period)));
        return Ok(());
    };

    let mut use_cases = TodoUseCases::new()?;
    render(&use_cases.get_todos()?, period);
    Ok(())
}

fn render(todos: &[Todo], period: StatsPeriod) {
    let stats = calculate_stats(todos, period, Local::now().naive_local());

    msg_print!(Message::StatsHeader(period.label().to_string()), true);
    if stats.total_todos == 0 {
        msg_print!(Message::StatsNoData(period.label().to_string()));
    } else {
        View::stats(&stats);
        if let Some((name, count)) = &stats.top_category {
            msg_print!(Message::StatsTopCategory(name.clone(), *count));
        }
        msg_print!(Message::StatsStreak(stats.current_streak, stats.longest_streak));
    }
    msg_print!(stats.insight());
}

pub fn parse_period(value: &str) -> Option<StatsPeriod> {
    match value.to_ascii_lowercase().as_str() {
        "week" | "w" => Some(StatsPeriod::Week),
        "month" | "m" => Some(StatsPeriod::Month),
        _ => None,
    }
}
