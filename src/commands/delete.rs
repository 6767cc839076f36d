use crate::libs::messages::Message;
use crate::libs::notifier::{LocalScheduler, NotificationScheduler};
use crate::libs::usecase::TodoUseCases;
use crate::{msg_debug, msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the to-do to delete
    #[arg(required = true)]
    id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut use_cases = TodoUseCases::new()?;

    let Some(todo) = use_cases.get_todo_by_id(&args.id)? else {
        msg_error!(Message::TodoNotFound(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTodo(todo.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            return Ok(());
        }
    }

    if use_cases.delete_todo(&args.id)? {
        // Drop any reminder that was armed for it.
        LocalScheduler::new().cancel_notification(&args.id);
        msg_debug!(Message::ReminderCancelled(args.id.clone()));
        msg_success!(Message::TodoDeleted(args.id));
    } else {
        msg_error!(Message::TodoDeleteFailed(args.id));
    }

    Ok(())
}
