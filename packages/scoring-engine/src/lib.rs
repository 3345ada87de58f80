#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod errors;
pub mod registry;

// Re-exports for public API
pub use config::rules::RulesConfigError;
pub use domain::{
    derive_match_transitions, Clock, EndReason, Lineup, ManualClock, Match, MatchId, MatchRules,
    MatchSnapshot, MatchStatus, MatchTransition, Player, PlayerId, PlayerStatistics, PointEvent,
    PointRequest, PointType, SetPhase, SetResult, SetsWon, Side, SystemClock, Team, TeamId,
};
pub use errors::{ErrorCode, RegistryError, ScoringError};
pub use registry::MatchRegistry;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_support::logging::init();
}
