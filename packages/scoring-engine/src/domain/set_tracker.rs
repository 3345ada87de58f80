//! Live score of the set being played and the results of finished sets.

use serde::{Deserialize, Serialize};
use time::{Duration, OffsetDateTime};

use crate::domain::clock::elapsed;
use crate::domain::roster::Side;
use crate::domain::rules::MatchRules;
use crate::errors::domain::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub home: u16,
    pub away: u16,
}

impl ScoreSnapshot {
    pub const fn get(&self, side: Side) -> u16 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub const fn total(&self) -> u32 {
        self.home as u32 + self.away as u32
    }

    /// Side ahead, `None` when level.
    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Outcome of a finalized set. Never mutated once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetResult {
    pub set_number: u8,
    pub home_score: u16,
    pub away_score: u16,
    /// `None` only for a set frozen level by a manual match end.
    pub winner: Option<Side>,
    pub duration: Duration,
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub ended_at: OffsetDateTime,
}

/// Running state of the set in play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTracker {
    set_number: u8,
    score: ScoreSnapshot,
    timeouts: [u8; 2],
    started_at: OffsetDateTime,
}

impl SetTracker {
    pub fn new(set_number: u8, started_at: OffsetDateTime) -> Self {
        debug_assert!(set_number >= 1, "set numbers are 1-based");
        Self {
            set_number,
            score: ScoreSnapshot::default(),
            timeouts: [0; 2],
            started_at,
        }
    }

    pub fn set_number(&self) -> u8 {
        self.set_number
    }

    pub fn score(&self) -> ScoreSnapshot {
        self.score
    }

    pub fn started_at(&self) -> OffsetDateTime {
        self.started_at
    }

    pub fn timeouts_used(&self, side: Side) -> u8 {
        self.timeouts[side.index()]
    }

    pub fn award(&mut self, side: Side) -> ScoreSnapshot {
        match side {
            Side::Home => self.score.home += 1,
            Side::Away => self.score.away += 1,
        }
        self.score
    }

    /// Take back one point from `side`. Callers only revoke points the
    /// ledger proves were awarded.
    pub fn revoke(&mut self, side: Side) -> ScoreSnapshot {
        let slot = match side {
            Side::Home => &mut self.score.home,
            Side::Away => &mut self.score.away,
        };
        debug_assert!(*slot > 0, "revoking a point that was never awarded");
        *slot = slot.saturating_sub(1);
        self.score
    }

    /// Winner under `rules`, if the set-win condition currently holds.
    pub fn winner(&self, rules: &MatchRules) -> Option<Side> {
        rules.set_winner(self.set_number, self.score.home, self.score.away)
    }

    pub fn call_timeout(&mut self, side: Side, limit: u8) -> Result<u8, ScoringError> {
        let used = &mut self.timeouts[side.index()];
        if *used >= limit {
            return Err(ScoringError::TimeoutsExhausted { side, limit });
        }
        *used += 1;
        Ok(*used)
    }

    /// Freeze the current score into a result. `winner` is passed in because
    /// a manual end may freeze a set that never met the win condition.
    pub fn finalize(&self, winner: Option<Side>, ended_at: OffsetDateTime) -> SetResult {
        SetResult {
            set_number: self.set_number,
            home_score: self.score.home,
            away_score: self.score.away,
            winner,
            duration: elapsed(self.started_at, ended_at),
            started_at: self.started_at,
            ended_at,
        }
    }
}
