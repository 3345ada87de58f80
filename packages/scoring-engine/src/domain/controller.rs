//! Match controller: validates intents against the current state and applies
//! them to the [`Match`] aggregate.
//!
//! Every operation checks all of its preconditions before the first write,
//! so a rejected call leaves the match exactly as it was.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::domain::clock::Clock;
use crate::domain::ledger::{PlayerStatistics, PointDraft};
use crate::domain::point_type::PointType;
use crate::domain::roster::{validate_lineup, Lineup, PlayerId, Side};
use crate::domain::set_tracker::SetTracker;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::{debug_check_invariants, EndReason, Match, MatchStatus, SetPhase};
use crate::errors::domain::ScoringError;

/// A point to award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointRequest {
    pub side: Side,
    /// Only `OpponentError` points may leave this empty.
    pub player_id: Option<PlayerId>,
    pub point_type: PointType,
}

impl PointRequest {
    pub const fn by(side: Side, player_id: PlayerId, point_type: PointType) -> Self {
        Self {
            side,
            player_id: Some(player_id),
            point_type,
        }
    }

    pub const fn opponent_error(side: Side) -> Self {
        Self {
            side,
            player_id: None,
            point_type: PointType::OpponentError,
        }
    }
}

fn ensure_not_finished(m: &Match) -> Result<(), ScoringError> {
    if m.status == MatchStatus::Finished {
        return Err(ScoringError::MatchAlreadyFinished);
    }
    Ok(())
}

/// Gate for operations that need a set being played right now.
fn require_active_set(m: &Match) -> Result<(), ScoringError> {
    match m.status {
        MatchStatus::Finished => Err(ScoringError::MatchAlreadyFinished),
        MatchStatus::Suspended => Err(ScoringError::MatchSuspended),
        MatchStatus::Pending => Err(ScoringError::SetNotInProgress),
        MatchStatus::InProgress if m.set_phase != SetPhase::InProgress => {
            Err(ScoringError::SetNotInProgress)
        }
        MatchStatus::InProgress => Ok(()),
    }
}

/// Accept both lineups and open set 1 at 0–0.
pub fn start_match(
    m: &mut Match,
    home: Lineup,
    away: Lineup,
    clock: &impl Clock,
) -> Result<MatchSnapshot, ScoringError> {
    match m.status {
        MatchStatus::Pending => {}
        MatchStatus::Finished => return Err(ScoringError::MatchAlreadyFinished),
        MatchStatus::InProgress | MatchStatus::Suspended => {
            return Err(ScoringError::MatchAlreadyStarted)
        }
    }
    validate_lineup(Side::Home, m.team(Side::Home), &home)?;
    validate_lineup(Side::Away, m.team(Side::Away), &away)?;

    let now = clock.now();
    m.lineups = Some([home, away]);
    m.status = MatchStatus::InProgress;
    m.set_phase = SetPhase::InProgress;
    m.current_set = 1;
    m.live = Some(SetTracker::new(1, now));
    m.started_at = Some(now);

    info!(match_id = m.id, "Match started");
    debug_check_invariants(m, "start_match");
    Ok(snapshot(m))
}

/// Award one point. Finalizes the set when the set-win rule fires, and
/// finishes the match when that set decides it.
pub fn award_point(
    m: &mut Match,
    request: PointRequest,
    clock: &impl Clock,
) -> Result<MatchSnapshot, ScoringError> {
    require_active_set(m)?;
    let PointRequest {
        side,
        player_id,
        point_type,
    } = request;

    match player_id {
        None if point_type.scores_for_player() => {
            return Err(ScoringError::UnattributedPoint(point_type));
        }
        Some(id) if !m.lineup(side).is_some_and(|l| l.contains(id)) => {
            return Err(ScoringError::PlayerNotOnCourt {
                side,
                player_id: id,
            });
        }
        _ => {}
    }

    let now = clock.now();
    let rules = m.rules;
    let Some(live) = m.live.as_mut() else {
        return Err(ScoringError::SetNotInProgress);
    };

    let score = live.award(side);
    let set_number = live.set_number();
    let set_winner = live.winner(&rules);
    let event = m.ledger.record(PointDraft {
        side,
        player_id,
        point_type,
        set_number,
        home_score_after: score.home,
        away_score_after: score.away,
        recorded_at: now,
    });
    debug!(
        match_id = m.id,
        set_number,
        sequence = event.sequence,
        %side,
        %point_type,
        home = score.home,
        away = score.away,
        "Point awarded"
    );

    if let Some(winner) = set_winner {
        finalize_current_set(m, Some(winner), now);
    }

    debug_check_invariants(m, "award_point");
    Ok(snapshot(m))
}

/// Remove the most recent point of the current set.
pub fn undo_point(m: &mut Match) -> Result<MatchSnapshot, ScoringError> {
    require_active_set(m)?;
    let set_number = m.current_set;
    let Some(live) = m.live.as_mut() else {
        return Err(ScoringError::SetNotInProgress);
    };

    let event = m.ledger.pop_last(set_number)?;
    let score = live.revoke(event.side);
    debug!(
        match_id = m.id,
        set_number,
        sequence = event.sequence,
        side = %event.side,
        home = score.home,
        away = score.away,
        "Point undone"
    );

    debug_check_invariants(m, "undo_point");
    Ok(snapshot(m))
}

/// Open the next set after the current one was won.
pub fn start_next_set(m: &mut Match, clock: &impl Clock) -> Result<MatchSnapshot, ScoringError> {
    match m.status {
        MatchStatus::InProgress => {}
        MatchStatus::Pending => return Err(ScoringError::MatchNotStarted),
        MatchStatus::Suspended => return Err(ScoringError::MatchSuspended),
        MatchStatus::Finished => return Err(ScoringError::MatchAlreadyFinished),
    }
    if m.set_phase != SetPhase::Finished {
        return Err(ScoringError::SetNotFinished);
    }
    debug_assert!(
        m.current_set < m.rules.max_sets(),
        "an unfinished match cannot have played every set"
    );

    let now = clock.now();
    m.current_set += 1;
    m.live = Some(SetTracker::new(m.current_set, now));
    m.set_phase = SetPhase::InProgress;

    info!(match_id = m.id, set_number = m.current_set, "Set started");
    debug_check_invariants(m, "start_next_set");
    Ok(snapshot(m))
}

/// Close out a won set and move on; same transition as [`start_next_set`].
pub fn end_set(m: &mut Match, clock: &impl Clock) -> Result<MatchSnapshot, ScoringError> {
    start_next_set(m, clock)
}

/// Manual end (forfeit, abandonment). A set in play with at least one
/// point is frozen as final without the win condition; the leading side
/// gets it, a level set has no winner.
pub fn end_match(m: &mut Match, clock: &impl Clock) -> Result<MatchSnapshot, ScoringError> {
    match m.status {
        MatchStatus::InProgress | MatchStatus::Suspended => {}
        MatchStatus::Pending => return Err(ScoringError::MatchNotStarted),
        MatchStatus::Finished => return Err(ScoringError::MatchAlreadyFinished),
    }

    let now = clock.now();
    if m.set_phase == SetPhase::InProgress {
        if let Some(live) = &m.live {
            let score = live.score();
            if score.total() > 0 {
                let result = live.finalize(score.leader(), now);
                m.set_results.push(result);
            }
        }
        m.set_phase = SetPhase::Finished;
    }

    let sets_won = m.sets_won();
    m.status = MatchStatus::Finished;
    m.winner = sets_won.leader();
    m.end_reason = Some(EndReason::Manual);
    m.ended_at = Some(now);

    warn!(
        match_id = m.id,
        set_number = m.current_set,
        home_sets = sets_won.home,
        away_sets = sets_won.away,
        "Match ended manually"
    );
    debug_check_invariants(m, "end_match");
    Ok(snapshot(m))
}

/// Record a timeout for `side` in the current set.
pub fn call_timeout(m: &mut Match, side: Side) -> Result<MatchSnapshot, ScoringError> {
    require_active_set(m)?;
    let limit = m.rules.timeouts_per_set;
    let Some(live) = m.live.as_mut() else {
        return Err(ScoringError::SetNotInProgress);
    };
    let used = live.call_timeout(side, limit)?;
    debug!(match_id = m.id, set_number = m.current_set, %side, used, "Timeout called");
    debug_check_invariants(m, "call_timeout");
    Ok(snapshot(m))
}

pub fn suspend_match(m: &mut Match) -> Result<MatchSnapshot, ScoringError> {
    match m.status {
        MatchStatus::InProgress => {}
        MatchStatus::Pending => return Err(ScoringError::MatchNotStarted),
        MatchStatus::Suspended => return Err(ScoringError::MatchSuspended),
        MatchStatus::Finished => return Err(ScoringError::MatchAlreadyFinished),
    }
    m.status = MatchStatus::Suspended;
    info!(match_id = m.id, set_number = m.current_set, "Match suspended");
    debug_check_invariants(m, "suspend_match");
    Ok(snapshot(m))
}

pub fn resume_match(m: &mut Match) -> Result<MatchSnapshot, ScoringError> {
    ensure_not_finished(m)?;
    if m.status != MatchStatus::Suspended {
        return Err(ScoringError::MatchNotSuspended);
    }
    m.status = MatchStatus::InProgress;
    info!(match_id = m.id, set_number = m.current_set, "Match resumed");
    debug_check_invariants(m, "resume_match");
    Ok(snapshot(m))
}

/// Read-only per-player aggregate over every point still in the ledger.
pub fn statistics_for(m: &Match, player_id: PlayerId) -> PlayerStatistics {
    m.ledger.statistics_for(player_id)
}

fn finalize_current_set(m: &mut Match, winner: Option<Side>, now: OffsetDateTime) {
    let Some(live) = &m.live else {
        return;
    };
    let result = live.finalize(winner, now);
    info!(
        match_id = m.id,
        set_number = result.set_number,
        home = result.home_score,
        away = result.away_score,
        winner = ?result.winner,
        "Set finished"
    );
    m.set_results.push(result);
    m.set_phase = SetPhase::Finished;

    let sets_won = m.sets_won();
    let decided = Side::BOTH
        .into_iter()
        .find(|&side| sets_won.get(side) >= m.rules.sets_to_win);
    if let Some(side) = decided {
        m.status = MatchStatus::Finished;
        m.winner = Some(side);
        m.end_reason = Some(EndReason::SetsWon);
        m.ended_at = Some(now);
        info!(
            match_id = m.id,
            winner = %side,
            home_sets = sets_won.home,
            away_sets = sets_won.away,
            "Match finished"
        );
    }
}
