use crate::libs::messages::Message;
use crate::libs::usecase::TodoUseCases;
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut use_cases = TodoUseCases::new()?;
    let todos = use_cases.get_todos()?;

    if todos.is_empty() {
        msg_print!(Message::NoTodos);
        return Ok(());
    }

    msg_print!(Message::TodosHeader);
    View::todos(&todos);
    Ok(())
}
