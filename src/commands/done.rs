use crate::libs::messages::Message;
use crate::libs::usecase::TodoUseCases;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// ID of the to-do to toggle
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut use_cases = TodoUseCases::new()?;

    if !use_cases.toggle_todo_completion(&args.id)? {
        msg_error!(Message::TodoNotFound(args.id));
        return Ok(());
    }

    // Report the state the toggle produced.
    match use_cases.get_todo_by_id(&args.id)? {
        Some(todo) if todo.is_completed => msg_success!(Message::TodoToggledDone(todo.title)),
        Some(todo) => msg_success!(Message::TodoToggledOpen(todo.title)),
        None => {}
    }

    Ok(())
}
