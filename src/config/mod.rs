use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::core::DisplayFormat;
use crate::currency::{CurrencyCode, DateFormatStyle, LocaleConfig};

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "EXPENSE_LEDGER_CONFIG";

const DEFAULT_DIR_NAME: &str = ".expense_ledger";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config `{path}`: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed config `{path}`: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Display preferences and the category choices offered by the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub currency: String,
    pub locale: String,
    pub date_format: DateFormatStyle,
    pub categories: Vec<String>,
    pub plain_output: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: "INR".into(),
            locale: "en-IN".into(),
            date_format: DateFormatStyle::Medium,
            categories: [
                "Food",
                "Transport",
                "Shopping",
                "Entertainment",
                "Utilities",
                "Health",
                "Other",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            plain_output: false,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::Invalid("locale must not be empty".into()));
        }
        if self.categories.iter().all(|category| category.trim().is_empty()) {
            return Err(ConfigError::Invalid(
                "at least one category must be configured".into(),
            ));
        }
        Ok(())
    }

    pub fn display_format(&self) -> DisplayFormat {
        DisplayFormat {
            currency: CurrencyCode::new(&self.currency),
            locale: LocaleConfig {
                date_format: self.date_format,
                ..LocaleConfig::for_tag(&self.locale)
            },
        }
    }
}

/// Read-only access to the JSON config file.
pub struct ConfigManager {
    path: Option<PathBuf>,
}

impl ConfigManager {
    /// Resolves the path from `EXPENSE_LEDGER_CONFIG`, falling back to
    /// `~/.expense_ledger/config.json`.
    pub fn new() -> Self {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|home| home.join(DEFAULT_DIR_NAME).join(CONFIG_FILE)));
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Loads the config; a missing file yields the defaults.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let Some(path) = self.path.as_ref().filter(|path| path.exists()) else {
            debug!("no config file found, using defaults");
            return Ok(Config::default());
        };
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Serde {
            path: path.clone(),
            source,
        })?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
