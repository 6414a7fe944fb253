//! Process configuration. There are no files and no flags; the only knob is the log level.

use std::env;
use std::str::FromStr;

use log::Level;

use error::Result;

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug` or `trace`)
pub const LOG_LEVEL_VAR: &str = "MENU_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: Level = Level::Warn;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Config::from_level_var(env::var(LOG_LEVEL_VAR).ok())
    }

    fn from_level_var(value: Option<String>) -> Result<Self> {
        let log_level = match value {
            None => DEFAULT_LOG_LEVEL,
            Some(ref s) if s.trim().is_empty() => DEFAULT_LOG_LEVEL,
            Some(s) => Level::from_str(s.trim())?,
        };
        Ok(Config { log_level })
    }
}
