use std::str::FromStr;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::CliMode;
use crate::cli::surface::EMPTY_STATE_MESSAGE;
use crate::core::{Command, CommandOutcome, ExpenseForm};
use crate::ledger::ExpenseId;

const ADD_USAGE: &str = "add <description> <amount> <category> [YYYY-MM-DD]";
const DELETE_USAGE: &str = "delete [id] [--yes]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("add", "Record a new expense", ADD_USAGE, cmd_add),
        CommandEntry::new(
            "delete",
            "Delete an expense after confirmation",
            DELETE_USAGE,
            cmd_delete,
        ),
        CommandEntry::new(
            "remove",
            "Delete an expense after confirmation",
            "remove [id] [--yes]",
            cmd_delete,
        )
        .alias("delete"),
        CommandEntry::new("list", "Show all expenses and the total", "list", cmd_list),
        CommandEntry::new("total", "Show the total of all expenses", "total", cmd_total),
        CommandEntry::new(
            "categories",
            "List the categories offered by `add`",
            "categories",
            cmd_categories,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let form = match args {
        [] if context.mode == CliMode::Interactive => add_wizard(context)?,
        [description, amount, category] => ExpenseForm::new(*description, *amount, *category),
        [description, amount, category, date] => {
            ExpenseForm::new(*description, *amount, *category).with_date(*date)
        }
        _ => return Err(CommandError::InvalidArguments(format!("usage: {ADD_USAGE}"))),
    };

    if let CommandOutcome::Added(id) = context.apply(Command::AddExpense(form))? {
        output::success(format!("Expense #{id} added."));
    }
    Ok(())
}

fn add_wizard(context: &ShellContext) -> Result<ExpenseForm, CommandError> {
    let theme = context.surface.theme();
    let description = io::prompt_text(theme, "Description")?;
    let amount = io::prompt_text(theme, "Amount")?;

    let categories = &context.config.categories;
    let category = match io::select_index(theme, "Category", categories)? {
        Some(index) => categories[index].clone(),
        None => String::new(),
    };

    let today = context.session.today().format("%Y-%m-%d").to_string();
    let date = io::prompt_text_with_default(theme, "Date (YYYY-MM-DD)", &today)?;

    Ok(ExpenseForm::new(description, amount, category).with_date(date))
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (flags, positional): (Vec<&str>, Vec<&str>) = args
        .iter()
        .partition(|arg| matches!(**arg, "--yes" | "-y"));

    let id = match positional.as_slice() {
        [raw] => ExpenseId::from_str(raw).map_err(|_| {
            CommandError::InvalidArguments(format!("`{raw}` is not a valid expense id"))
        })?,
        [] if context.mode == CliMode::Interactive => match select_expense(context)? {
            Some(id) => id,
            None => return Ok(()),
        },
        _ => return Err(CommandError::InvalidArguments(format!("usage: {DELETE_USAGE}"))),
    };

    if !flags.is_empty() {
        context.surface.assume_yes();
    }

    match context.apply(Command::DeleteExpense(id))? {
        CommandOutcome::Deleted(record) => {
            output::success(format!("Deleted `{}`.", record.description))
        }
        CommandOutcome::Declined(_) => output::info("Deletion cancelled."),
        CommandOutcome::NotFound(id) => output::warning(format!("No expense with id #{id}.")),
        _ => {}
    }
    Ok(())
}

fn select_expense(context: &ShellContext) -> Result<Option<ExpenseId>, CommandError> {
    let view = context
        .session
        .presenter()
        .view(context.session.ledger().all());
    if view.is_empty() {
        output::info(EMPTY_STATE_MESSAGE);
        return Ok(None);
    }

    let rows = view.rows();
    let labels: Vec<String> = rows
        .iter()
        .map(|row| format!("#{} {}", row.id, row.summary()))
        .collect();
    let choice = io::select_index(context.surface.theme(), "Select an expense to delete", &labels)?;
    Ok(choice.map(|index| rows[index].id))
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    context.apply(Command::Refresh)?;
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let total = context.session.total();
    context
        .session
        .presenter()
        .render_total(total, &mut context.surface);
    Ok(())
}

fn cmd_categories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::section("Categories");
    for category in &context.config.categories {
        output::info(format!("  {category}"));
    }
    Ok(())
}
