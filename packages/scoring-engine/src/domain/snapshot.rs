//! Public snapshot of a match, returned by every mutating call.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::roster::{MatchId, Side};
use crate::domain::set_tracker::SetResult;
use crate::domain::state::{EndReason, Match, MatchStatus, SetPhase, SetsWon};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeoutsUsed {
    pub home: u8,
    pub away: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub id: MatchId,
    pub status: MatchStatus,
    pub set_phase: SetPhase,
    pub current_set: u8,
    pub home_score: u16,
    pub away_score: u16,
    pub sets_won: SetsWon,
    pub set_results: Vec<SetResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<EndReason>,
    pub timeouts: TimeoutsUsed,
    /// Points recorded in the current set.
    pub points_in_set: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub started_at: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub ended_at: Option<OffsetDateTime>,
}

/// Produce a snapshot of the current match state. Never panics.
pub fn snapshot(m: &Match) -> MatchSnapshot {
    let score = m.score();
    MatchSnapshot {
        id: m.id(),
        status: m.status(),
        set_phase: m.set_phase(),
        current_set: m.current_set(),
        home_score: score.home,
        away_score: score.away,
        sets_won: m.sets_won(),
        set_results: m.set_results().to_vec(),
        winner: m.winner(),
        end_reason: m.end_reason(),
        timeouts: TimeoutsUsed {
            home: m.timeouts_used(Side::Home),
            away: m.timeouts_used(Side::Away),
        },
        points_in_set: score.total(),
        started_at: m.started_at(),
        ended_at: m.ended_at(),
    }
}
