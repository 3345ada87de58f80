//! Domain layer: the pure scoring state machine and its data types.

pub mod clock;
pub mod controller;
pub mod ledger;
pub mod match_transition;
pub mod point_type;
pub mod roster;
pub mod rules;
pub mod set_tracker;
pub mod snapshot;
pub mod state;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod test_state_helpers;
#[cfg(test)]
mod tests_match_transition;
#[cfg(test)]
mod tests_props_scoring;
#[cfg(test)]
mod tests_snapshot;
#[cfg(test)]
mod tests_undo;

// Re-exports for ergonomics
pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{
    award_point, call_timeout, end_match, end_set, resume_match, start_match, start_next_set,
    statistics_for, suspend_match, undo_point, PointRequest,
};
pub use ledger::{PlayerStatistics, PointEvent, ScoringLedger};
pub use match_transition::{derive_match_transitions, MatchTransition};
pub use point_type::PointType;
pub use roster::{Lineup, MatchId, Player, PlayerId, Position, Side, Team, TeamId, LINEUP_SLOTS};
pub use rules::MatchRules;
pub use set_tracker::{ScoreSnapshot, SetResult, SetTracker};
pub use snapshot::{snapshot, MatchSnapshot, TimeoutsUsed};
pub use state::{EndReason, Match, MatchStatus, SetPhase, SetsWon};
