#![allow(dead_code)]

use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::Mutex;

use chrono::NaiveDate;
use expense_ledger::core::{
    DisplayFormat, DisplaySurface, ExpenseSession, FixedClock, ListView, UserPrompt,
};
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// A config path inside a fresh temp dir. The file itself does not exist yet.
pub fn temp_config_path() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("config.json");
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    path
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn session_on(today: NaiveDate) -> ExpenseSession {
    ExpenseSession::with_clock(DisplayFormat::default(), Box::new(FixedClock(today)))
}

/// Records everything the session shows and answers confirmations from a script.
/// Once the script runs out every confirmation is declined.
#[derive(Default)]
pub struct RecordingSurface {
    pub answers: VecDeque<bool>,
    pub views: Vec<ListView>,
    pub totals: Vec<String>,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
}

impl RecordingSurface {
    pub fn answering(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn last_view(&self) -> Option<&ListView> {
        self.views.last()
    }

    pub fn last_total(&self) -> Option<&str> {
        self.totals.last().map(String::as_str)
    }
}

impl DisplaySurface for RecordingSurface {
    fn show_list(&mut self, view: &ListView) {
        self.views.push(view.clone());
    }

    fn show_total(&mut self, total: &str) {
        self.totals.push(total.to_string());
    }
}

impl UserPrompt for RecordingSurface {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
