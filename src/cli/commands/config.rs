use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::currency::{CurrencyCode, DateFormatStyle};

const CONFIG_USAGE: &str = "config [set <currency|locale|date_format|plain> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change display settings for this session",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => {
            show_config(context);
            Ok(())
        }
        ["set", key, value] => {
            set_value(context, key, value)?;
            context.reload_display();
            output::success(format!("`{key}` set to `{value}` for this session."));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(format!("usage: {CONFIG_USAGE}"))),
    }
}

fn show_config(context: &ShellContext) {
    let config = &context.config;
    output::section("Configuration");
    output::info(format!("  currency    : {}", config.currency));
    output::info(format!("  locale      : {}", config.locale));
    output::info(format!("  date_format : {}", config.date_format));
    output::info(format!("  plain       : {}", config.plain_output));
    output::info(format!("  categories  : {}", config.categories.join(", ")));
}

fn set_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    match key.to_ascii_lowercase().as_str() {
        "currency" => {
            let code = CurrencyCode::new(value);
            if code.as_str().is_empty() {
                return Err(CommandError::InvalidArguments(
                    "currency must not be empty".into(),
                ));
            }
            context.config.currency = code.to_string();
        }
        "locale" => {
            let tag = value.trim();
            if tag.is_empty() {
                return Err(CommandError::InvalidArguments("locale must not be empty".into()));
            }
            context.config.locale = tag.to_string();
        }
        "date_format" => {
            context.config.date_format = DateFormatStyle::parse(value).ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "`{value}` is not a date format; use short, medium or long"
                ))
            })?;
        }
        "plain" => {
            context.config.plain_output = parse_switch(value).ok_or_else(|| {
                CommandError::InvalidArguments(format!("`{value}` is not on or off"))
            })?;
        }
        other => {
            return Err(CommandError::InvalidArguments(format!(
                "unknown setting `{other}`"
            )))
        }
    }
    Ok(())
}

fn parse_switch(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
