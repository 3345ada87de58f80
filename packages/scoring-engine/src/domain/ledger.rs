//! Scoring ledger: the ordered record of every point still standing.
//!
//! The live score and all player statistics are derived from this log.
//! Events are appended for the set in play and removed from the tail on
//! undo; events of finalized sets are never touched again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::domain::point_type::PointType;
use crate::domain::roster::{PlayerId, Side};
use crate::errors::domain::LedgerError;

/// One awarded point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointEvent {
    pub side: Side,
    pub player_id: Option<PlayerId>,
    pub point_type: PointType,
    pub set_number: u8,
    /// 1-based position within the set.
    pub sequence: u32,
    pub home_score_after: u16,
    pub away_score_after: u16,
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

/// Everything about a point except its sequence number, which the ledger
/// assigns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDraft {
    pub side: Side,
    pub player_id: Option<PlayerId>,
    pub point_type: PointType,
    pub set_number: u8,
    pub home_score_after: u16,
    pub away_score_after: u16,
    pub recorded_at: OffsetDateTime,
}

/// Aggregate for one player, recomputed from the log on every call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlayerStatistics {
    pub player_id: PlayerId,
    /// Spikes, blocks and aces. Opponent errors are team points.
    pub points: u32,
    pub by_type: BTreeMap<PointType, u32>,
}

impl PlayerStatistics {
    pub fn count(&self, point_type: PointType) -> u32 {
        self.by_type.get(&point_type).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoringLedger {
    events: Vec<PointEvent>,
}

impl ScoringLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point and assign it the next sequence number of its set.
    pub fn record(&mut self, draft: PointDraft) -> &PointEvent {
        debug_assert!(
            self.events
                .last()
                .map_or(true, |last| last.set_number <= draft.set_number),
            "points may only be appended to the latest set"
        );
        let sequence = self
            .events
            .last()
            .filter(|last| last.set_number == draft.set_number)
            .map_or(1, |last| last.sequence + 1);

        self.events.push(PointEvent {
            side: draft.side,
            player_id: draft.player_id,
            point_type: draft.point_type,
            set_number: draft.set_number,
            sequence,
            home_score_after: draft.home_score_after,
            away_score_after: draft.away_score_after,
            recorded_at: draft.recorded_at,
        });
        &self.events[self.events.len() - 1]
    }

    /// Remove the most recent event of `set_number`.
    ///
    /// Fails when that set has no events, including when the tail of the log
    /// belongs to an earlier set: finalized sets are frozen.
    pub fn pop_last(&mut self, set_number: u8) -> Result<PointEvent, LedgerError> {
        match self.events.last() {
            Some(last) if last.set_number == set_number => {}
            _ => return Err(LedgerError::Empty { set_number }),
        }
        self.events.pop().ok_or(LedgerError::Empty { set_number })
    }

    pub fn last(&self) -> Option<&PointEvent> {
        self.events.last()
    }

    pub fn events(&self) -> &[PointEvent] {
        &self.events
    }

    pub fn events_in_set(&self, set_number: u8) -> impl Iterator<Item = &PointEvent> + '_ {
        self.events
            .iter()
            .filter(move |e| e.set_number == set_number)
    }

    pub fn side_points(&self, set_number: u8, side: Side) -> u16 {
        self.events_in_set(set_number)
            .filter(|e| e.side == side)
            .count() as u16
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn statistics_for(&self, player_id: PlayerId) -> PlayerStatistics {
        let mut stats = PlayerStatistics {
            player_id,
            ..PlayerStatistics::default()
        };
        for event in self
            .events
            .iter()
            .filter(|e| e.player_id == Some(player_id))
        {
            *stats.by_type.entry(event.point_type).or_insert(0) += 1;
            if event.point_type.scores_for_player() {
                stats.points += 1;
            }
        }
        stats
    }

    /// Player with the most points. Ties go to the player who reached the
    /// tied total first in the log.
    pub fn top_scorer(&self) -> Option<PlayerStatistics> {
        // player -> (points, index of the event that reached them)
        let mut running: BTreeMap<PlayerId, (u32, usize)> = BTreeMap::new();
        for (index, event) in self.events.iter().enumerate() {
            let Some(id) = event.player_id else {
                continue;
            };
            if event.point_type.scores_for_player() {
                let entry = running.entry(id).or_insert((0, index));
                entry.0 += 1;
                entry.1 = index;
            }
        }
        running
            .into_iter()
            .max_by(|(_, (pa, ra)), (_, (pb, rb))| pa.cmp(pb).then(rb.cmp(ra)))
            .map(|(id, _)| self.statistics_for(id))
    }
}
