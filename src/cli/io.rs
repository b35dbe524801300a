use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

use crate::cli::core::CommandError;

/// Yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Free-form text; empty input is allowed and left to validation.
pub fn prompt_text(theme: &ColorfulTheme, prompt: &str) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

pub fn prompt_text_with_default(
    theme: &ColorfulTheme,
    prompt: &str,
    default: &str,
) -> Result<String, CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .default(default.to_string())
        .allow_empty(true)
        .interact_text()
        .map_err(CommandError::from)
}

/// Index of the chosen item, `None` when the user pressed Esc.
pub fn select_index(
    theme: &ColorfulTheme,
    prompt: &str,
    items: &[String],
) -> Result<Option<usize>, CommandError> {
    Select::with_theme(theme)
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()
        .map_err(CommandError::from)
}
