use std::path::PathBuf;
use std::str::FromStr;

use log::LevelFilter;

use crate::error::Error;

pub const SEED_VAR: &str = "PERCOLATION_SEED";
pub const LOG_VAR: &str = "PERCOLATION_LOG";
pub const LOG_FILE_VAR: &str = "PERCOLATION_LOG_FILE";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not valid: expected {expected}")]
    Malformed {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Knobs read from the environment; the grid size and trial count come
/// from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub seed: Option<u64>,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            seed: None,
            log_level: LevelFilter::Warn,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Settings, ConfigError> {
        Settings::from_vars(|name| std::env::var(name).ok())
    }

    /// `lookup` maps a variable name to its value, if set. Blank values
    /// count as unset.
    pub fn from_vars<F>(lookup: F) -> Result<Settings, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut settings = Settings::default();
        if let Some(value) = get(SEED_VAR) {
            settings.seed = Some(parse(SEED_VAR, &value, "an unsigned 64-bit integer")?);
        }
        if let Some(value) = get(LOG_VAR) {
            settings.log_level = parse(LOG_VAR, &value, "off, error, warn, info, debug or trace")?;
        }
        settings.log_file = get(LOG_FILE_VAR).map(PathBuf::from);
        Ok(settings)
    }

    /// Level for the optional file log: never quieter than info.
    pub fn file_log_level(&self) -> LevelFilter {
        self.log_level.max(LevelFilter::Info)
    }
}

fn parse<T: FromStr>(var: &'static str, value: &str, expected: &'static str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Malformed {
        var,
        value: value.to_string(),
        expected,
    })
}

/// Narrows a command-line count to a positive `usize`.
pub fn positive(name: &'static str, value: i64) -> Result<usize, Error> {
    match usize::try_from(value) {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(Error::InvalidArgument { name, value }),
    }
}
