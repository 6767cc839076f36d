use crate::libs::messages::Message;
use crate::libs::todo::Priority;
use crate::libs::usecase::TodoUseCases;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the to-do to edit
    #[arg(required = true)]
    id: String,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut use_cases = TodoUseCases::new()?;

    let Some(mut todo) = use_cases.get_todo_by_id(&args.id)? else {
        msg_error!(Message::TodoNotFound(args.id));
        return Ok(());
    };

    todo.title = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Title")
        .default(todo.title.clone())
        .interact_text()?;
    todo.category = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Category")
        .default(todo.category.clone())
        .interact_text()?;
    let priority: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Priority (low/medium/high)")
        .default(todo.priority.as_str().to_lowercase())
        .interact_text()?;
    todo.priority = Priority::parse(&priority);

    if use_cases.update_todo(&todo)? {
        msg_success!(Message::TodoUpdated(todo.id));
    } else {
        msg_error!(Message::TodoUpdateFailed(todo.id));
    }

    Ok(())
}
