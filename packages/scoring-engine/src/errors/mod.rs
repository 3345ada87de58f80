//! Error handling for the scoring engine.

pub mod domain;
pub mod error_code;


pub use domain::{LedgerError, LineupProblem, RegistryError, ScoringError};
pub use error_code::ErrorCode;
