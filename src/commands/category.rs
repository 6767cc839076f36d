use crate::libs::messages::Message;
use crate::libs::usecase::CategoryUseCases;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum CategoryCommands {
    #[command(about = "Create a category (at most 10)")]
    Add(CategoryAddArgs),
    #[command(about = "List categories")]
    List,
    #[command(about = "Delete a category; its to-dos keep their label")]
    Delete(CategoryDeleteArgs),
}

#[derive(Debug, Args)]
pub struct CategoryAddArgs {
    #[arg(required = true)]
    name: String,
}

#[derive(Debug, Args)]
pub struct CategoryDeleteArgs {
    #[arg(required = true)]
    name: String,
}

pub fn cmd(command: CategoryCommands) -> Result<()> {
    let mut use_cases = CategoryUseCases::new()?;

    match command {
        CategoryCommands::Add(args) => match use_cases.add_category(&args.name) {
            Ok(_) => msg_success!(Message::CategoryCreated(args.name)),
            // Validation failures are user-visible, not process failures.
            Err(error) => eprintln!("{}", error),
        },
        CategoryCommands::List => {
            let categories = use_cases.get_categories()?;
            if categories.is_empty() {
                msg_print!(Message::NoCategories);
            } else {
                msg_print!(Message::CategoriesHeader);
                View::categories(&categories);
            }
        }
        CategoryCommands::Delete(args) => {
            if use_cases.delete_category(&args.name)? {
                msg_success!(Message::CategoryDeleted(args.name));
            } else {
                msg_error!(Message::CategoryNotFound(args.name));
            }
        }
    }

    Ok(())
}
