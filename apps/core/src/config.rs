//! Runtime configuration from the environment.
//!
//! `main` loads a `.env` file first (if present), so every variable below can
//! live there as well.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::fs_manager::PortablePathManager;

pub const DATA_DIR_VAR: &str = "MINDBOT_DATA_DIR";
pub const REPLY_DELAY_VAR: &str = "MINDBOT_REPLY_DELAY_MS";
pub const LOG_FORMAT_VAR: &str = "MINDBOT_LOG_FORMAT";

/// Pause before the companion answers, like someone typing
const DEFAULT_REPLY_DELAY_MS: u64 = 1500;

/// Output format of the tracing subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Root of the local data (database lives in `<data_dir>/db`)
    pub data_dir: PathBuf,
    pub reply_delay: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PortablePathManager::default_data_dir(),
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from environment variables, using defaults for unset ones.
    pub fn from_env() -> Result<Self, AppError> {
        let mut config = Self::default();

        if let Some(dir) = non_empty_var(DATA_DIR_VAR) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(delay) = non_empty_var(REPLY_DELAY_VAR) {
            let millis = delay.trim().parse::<u64>().map_err(|e| {
                AppError::Config(format!(
                    "{} must be a whole number of milliseconds: {}",
                    REPLY_DELAY_VAR, e
                ))
            })?;
            config.reply_delay = Duration::from_millis(millis);
        }

        if let Some(format) = non_empty_var(LOG_FORMAT_VAR) {
            config.log_format = format.parse()?;
        }

        Ok(config)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
