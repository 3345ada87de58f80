//! Loading [`MatchRules`] from the environment or a JSON file.
//!
//! Environment variables (all optional, unset keeps the default):
//! - `VOLLEY_SET_TARGET` (25)
//! - `VOLLEY_DECIDING_SET_TARGET` (15)
//! - `VOLLEY_MIN_LEAD` (2)
//! - `VOLLEY_SETS_TO_WIN` (3)
//! - `VOLLEY_TIMEOUTS_PER_SET` (2)

use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

use crate::domain::rules::MatchRules;

pub const ENV_SET_TARGET: &str = "VOLLEY_SET_TARGET";
pub const ENV_DECIDING_SET_TARGET: &str = "VOLLEY_DECIDING_SET_TARGET";
pub const ENV_MIN_LEAD: &str = "VOLLEY_MIN_LEAD";
pub const ENV_SETS_TO_WIN: &str = "VOLLEY_SETS_TO_WIN";
pub const ENV_TIMEOUTS_PER_SET: &str = "VOLLEY_TIMEOUTS_PER_SET";

#[derive(Error, Debug)]
pub enum RulesConfigError {
    #[error("{var} must be a non-negative integer, got {value:?}")]
    InvalidEnv { var: &'static str, value: String },
    #[error("cannot read rules file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid rules file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid rules: {0}")]
    OutOfRange(String),
}

impl MatchRules {
    /// Defaults overridden by any `VOLLEY_*` variables that are set.
    pub fn from_env() -> Result<Self, RulesConfigError> {
        let defaults = MatchRules::default();
        let rules = MatchRules {
            set_target: env_or(ENV_SET_TARGET, defaults.set_target)?,
            deciding_set_target: env_or(ENV_DECIDING_SET_TARGET, defaults.deciding_set_target)?,
            min_lead: env_or(ENV_MIN_LEAD, defaults.min_lead)?,
            sets_to_win: env_or(ENV_SETS_TO_WIN, defaults.sets_to_win)?,
            timeouts_per_set: env_or(ENV_TIMEOUTS_PER_SET, defaults.timeouts_per_set)?,
        };
        rules.validate()?;
        Ok(rules)
    }

    /// Missing fields in the file fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, RulesConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| RulesConfigError::Io {
            path: display.clone(),
            source,
        })?;
        let rules: MatchRules =
            serde_json::from_str(&raw).map_err(|source| RulesConfigError::Json {
                path: display,
                source,
            })?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn validate(&self) -> Result<(), RulesConfigError> {
        if self.set_target == 0 || self.deciding_set_target == 0 {
            return Err(RulesConfigError::OutOfRange(
                "set targets must be at least 1".into(),
            ));
        }
        if self.min_lead == 0 {
            return Err(RulesConfigError::OutOfRange(
                "min_lead must be at least 1".into(),
            ));
        }
        // max_sets() = 2n - 1 must fit in a u8
        if !(1..=100).contains(&self.sets_to_win) {
            return Err(RulesConfigError::OutOfRange(format!(
                "sets_to_win must be in 1..=100, got {}",
                self.sets_to_win
            )));
        }
        Ok(())
    }
}

fn env_or<T: FromStr>(var: &'static str, default: T) -> Result<T, RulesConfigError> {
    match env::var(var) {
        Ok(value) if value.trim().is_empty() => Ok(default),
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| RulesConfigError::InvalidEnv { var, value }),
        Err(_) => Ok(default),
    }
}
