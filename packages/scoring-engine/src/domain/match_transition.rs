//! Edge-triggered events between two snapshots of the same match.
//!
//! Hosts use these to decide which side effects (persisting a finished set,
//! announcing a winner) follow an accepted call.

use crate::domain::roster::Side;
use crate::domain::snapshot::MatchSnapshot;
use crate::domain::state::{MatchStatus, SetPhase};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTransition {
    /// Pending -> InProgress
    MatchStarted,
    /// A new set began (set 1 at match start, or a later set).
    SetStarted { set_number: u8 },
    /// A result was appended. `winner` is `None` for a set frozen level.
    SetEnded { set_number: u8, winner: Option<Side> },
    Suspended,
    Resumed,
    /// !Finished -> Finished
    MatchEnded { winner: Option<Side> },
}

/// Derive transitions from before/after snapshots.
pub fn derive_match_transitions(
    before: &MatchSnapshot,
    after: &MatchSnapshot,
) -> Vec<MatchTransition> {
    let mut transitions = Vec::new();

    // 1. Match start
    if before.status == MatchStatus::Pending && after.status != MatchStatus::Pending {
        transitions.push(MatchTransition::MatchStarted);
    }

    // 2. Set start
    let set_opened = after.set_phase == SetPhase::InProgress
        && (before.set_phase != SetPhase::InProgress || before.current_set != after.current_set);
    if set_opened {
        transitions.push(MatchTransition::SetStarted {
            set_number: after.current_set,
        });
    }

    // 3. Newly finalized sets, in order
    for result in after.set_results.iter().skip(before.set_results.len()) {
        transitions.push(MatchTransition::SetEnded {
            set_number: result.set_number,
            winner: result.winner,
        });
    }

    // 4. Suspension edges
    if before.status != MatchStatus::Suspended && after.status == MatchStatus::Suspended {
        transitions.push(MatchTransition::Suspended);
    }
    if before.status == MatchStatus::Suspended && after.status == MatchStatus::InProgress {
        transitions.push(MatchTransition::Resumed);
    }

    // 5. Match end
    if before.status != MatchStatus::Finished && after.status == MatchStatus::Finished {
        transitions.push(MatchTransition::MatchEnded {
            winner: after.winner,
        });
    }

    transitions
}
