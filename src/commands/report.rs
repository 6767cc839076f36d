use crate::api::gemini::Gemini;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::rate_limit::{DailyQuota, MAX_DAILY_AI_REQUESTS};
use crate::libs::usecase::TodoUseCases;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use chrono::Local;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Reporting period: week or month
    #[arg(short, long, default_value = "week")]
    period: String,

    /// Analyze procrastination patterns instead of the period report
    #[arg(long)]
    procrastination: bool,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let Some(period) = super::stats::parse_period(&args.period) else {
        msg_error!(Message::UnexpectedError(format!("unknown period '{}'", args.period)));
        return Ok(());
    };

    let config = Config::read()?;
    let Some(gemini_config) = config.gemini else {
        msg_error!(Message::AiConfigMissing);
        return Ok(());
    };

    let quota = DailyQuota::new()?;
    if !quota.try_acquire(Local::now().date_naive())? {
        msg_warning!(Message::AiDailyLimitReached(MAX_DAILY_AI_REQUESTS));
        return Ok(());
    }

    let mut use_cases = TodoUseCases::new()?;
    let todos = use_cases.get_todos()?;
    let mut client = Gemini::new(&gemini_config);

    if args.procrastination {
        let report = client.analyze_procrastination(&todos).await?;
        msg_print!(Message::AiProcrastinationHeader, true);
        if report.comment.is_empty() && report.frequent_categories.is_empty() {
            msg_print!(Message::AiEmptyResponse);
            return Ok(());
        }
        if !report.frequent_categories.is_empty() {
            println!("Frequent categories: {}", report.frequent_categories.join(", "));
        }
        if !report.frequent_time_slots.is_empty() {
            println!("Frequent time slots: {}", report.frequent_time_slots.join(", "));
        }
        if !report.comment.is_empty() {
            println!("{}", report.comment);
        }
    } else {
        let report = client.generate_report(&todos, period.label()).await?;
        msg_print!(Message::AiReportHeader(period.label().to_string()), true);
        if report.summary.is_empty() && report.insights.is_empty() && report.action_items.is_empty() {
            msg_print!(Message::AiEmptyResponse);
            return Ok(());
        }
        if !report.summary.is_empty() {
            println!("{}\n", report.summary);
        }
        for insight in &report.insights {
            println!("  • {}", insight);
        }
        for item in &report.action_items {
            println!("  ☐ {}", item);
        }
    }

    Ok(())
}
