pub mod add;
pub mod category;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod prefs;
pub mod report;
pub mod stats;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init,
    #[command(about = "Add a to-do")]
    Add(add::AddArgs),
    #[command(about = "List all to-dos")]
    List,
    #[command(about = "Toggle completion of a to-do")]
    Done(done::DoneArgs),
    #[command(about = "Edit a to-do interactively")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a to-do")]
    Delete(delete::DeleteArgs),
    #[command(subcommand, about = "Manage categories")]
    Category(category::CategoryCommands),
    #[command(about = "Show activity statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Generate an AI activity report")]
    Report(report::ReportArgs),
    #[command(subcommand, about = "Show or change preferences")]
    Prefs(prefs::PrefsCommands),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init => init::cmd(),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Category(command) => category::cmd(command),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Report(args) => report::cmd(args).await,
            Commands::Prefs(command) => prefs::cmd(command),
        }
    }
}
