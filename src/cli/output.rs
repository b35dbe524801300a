use std::fmt;
use std::sync::RwLock;

use colored::Colorize;
use once_cell::sync::Lazy;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Hint,
    Section,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OutputPreferences {
    /// ASCII labels, no colour.
    pub plain_mode: bool,
}

static PREFERENCES: Lazy<RwLock<OutputPreferences>> =
    Lazy::new(|| RwLock::new(OutputPreferences::default()));

pub fn set_preferences(prefs: OutputPreferences) {
    if let Ok(mut guard) = PREFERENCES.write() {
        *guard = prefs;
    }
    if prefs.plain_mode {
        colored::control::set_override(false);
    } else {
        colored::control::unset_override();
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

/// Text for a message without printing it.
pub fn styled(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();
    if prefs.plain_mode {
        return match kind {
            MessageKind::Info => text,
            MessageKind::Success => format!("OK: {text}"),
            MessageKind::Warning => format!("WARNING: {text}"),
            MessageKind::Error => format!("ERROR: {text}"),
            MessageKind::Hint => format!("Hint: {text}"),
            MessageKind::Section => format!("=== {} ===", text.trim()),
        };
    }
    match kind {
        MessageKind::Info => text,
        MessageKind::Success => format!("✔ {text}").green().to_string(),
        MessageKind::Warning => format!("⚠ {text}").yellow().to_string(),
        MessageKind::Error => format!("✖ {text}").red().to_string(),
        MessageKind::Hint => format!("› {text}").dimmed().to_string(),
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let formatted = styled(kind, message, &current_preferences());
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn hint(message: impl fmt::Display) {
    print(MessageKind::Hint, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}
