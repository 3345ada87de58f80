use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::config::rules::RulesConfigError;
use crate::domain::ledger::ScoringLedger;
use crate::domain::roster::{Lineup, MatchId, PlayerId, Side, Team};
use crate::domain::rules::MatchRules;
use crate::domain::set_tracker::{ScoreSnapshot, SetResult, SetTracker};

/// Match lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    /// Created, lineups not yet accepted.
    Pending,
    InProgress,
    /// Paused by the host; only resume or a manual end are accepted.
    Suspended,
    Finished,
}

/// Sub-state of the set identified by `Match::current_set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetPhase {
    /// Match not started.
    NotStarted,
    InProgress,
    /// Set won; waiting for the next set to be started.
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EndReason {
    /// A side reached the required number of won sets.
    SetsWon,
    /// Ended by the host before the win condition was met.
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SetsWon {
    pub home: u8,
    pub away: u8,
}

impl SetsWon {
    pub const fn get(&self, side: Side) -> u8 {
        match side {
            Side::Home => self.home,
            Side::Away => self.away,
        }
    }

    pub fn leader(&self) -> Option<Side> {
        match self.home.cmp(&self.away) {
            std::cmp::Ordering::Greater => Some(Side::Home),
            std::cmp::Ordering::Less => Some(Side::Away),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// The whole mutable state of one match.
///
/// Fields are crate-private: every change goes through the controller so
/// the ledger, live score and results stay consistent.
#[derive(Debug, Clone)]
pub struct Match {
    pub(crate) id: MatchId,
    pub(crate) teams: [Team; 2],
    pub(crate) rules: MatchRules,
    pub(crate) status: MatchStatus,
    pub(crate) set_phase: SetPhase,
    /// 1-based; stays 1 until the match starts.
    pub(crate) current_set: u8,
    /// Tracker of the current set. Kept after the set is won so the final
    /// score stays visible until the next set starts.
    pub(crate) live: Option<SetTracker>,
    pub(crate) lineups: Option<[Lineup; 2]>,
    pub(crate) set_results: Vec<SetResult>,
    pub(crate) ledger: ScoringLedger,
    pub(crate) winner: Option<Side>,
    pub(crate) end_reason: Option<EndReason>,
    pub(crate) started_at: Option<OffsetDateTime>,
    pub(crate) ended_at: Option<OffsetDateTime>,
}

impl Match {
    /// Build a pending match. `rules` must already be validated; use
    /// [`Match::try_new`] for rules from outside the process.
    pub fn new(id: MatchId, home: Team, away: Team, rules: MatchRules) -> Self {
        debug_assert!(
            rules.validate().is_ok(),
            "match {id} created with invalid rules {rules:?}"
        );
        Self {
            id,
            teams: [home, away],
            rules,
            status: MatchStatus::Pending,
            set_phase: SetPhase::NotStarted,
            current_set: 1,
            live: None,
            lineups: None,
            set_results: Vec::new(),
            ledger: ScoringLedger::new(),
            winner: None,
            end_reason: None,
            started_at: None,
            ended_at: None,
        }
    }

    /// Like [`Match::new`], rejecting rules that fail validation.
    pub fn try_new(
        id: MatchId,
        home: Team,
        away: Team,
        rules: MatchRules,
    ) -> Result<Self, RulesConfigError> {
        rules.validate()?;
        Ok(Self::new(id, home, away, rules))
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    pub fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    pub fn rules(&self) -> &MatchRules {
        &self.rules
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    pub fn set_phase(&self) -> SetPhase {
        self.set_phase
    }

    pub fn current_set(&self) -> u8 {
        self.current_set
    }

    pub fn lineup(&self, side: Side) -> Option<&Lineup> {
        self.lineups.as_ref().map(|l| &l[side.index()])
    }

    /// Starters are exactly the players placed in a lineup at match start.
    pub fn is_starter(&self, player_id: PlayerId) -> bool {
        self.lineups
            .as_ref()
            .is_some_and(|l| l.iter().any(|lineup| lineup.contains(player_id)))
    }

    /// Live score of the current set (0–0 before the match starts).
    pub fn score(&self) -> ScoreSnapshot {
        self.live.as_ref().map(SetTracker::score).unwrap_or_default()
    }

    pub fn timeouts_used(&self, side: Side) -> u8 {
        self.live.as_ref().map_or(0, |t| t.timeouts_used(side))
    }

    pub fn set_results(&self) -> &[SetResult] {
        &self.set_results
    }

    pub fn ledger(&self) -> &ScoringLedger {
        &self.ledger
    }

    /// Derived from the finalized results, never stored.
    pub fn sets_won(&self) -> SetsWon {
        self.set_results
            .iter()
            .fold(SetsWon::default(), |mut acc, r| {
                match r.winner {
                    Some(Side::Home) => acc.home += 1,
                    Some(Side::Away) => acc.away += 1,
                    None => {}
                }
                acc
            })
    }

    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn started_at(&self) -> Option<OffsetDateTime> {
        self.started_at
    }

    pub fn ended_at(&self) -> Option<OffsetDateTime> {
        self.ended_at
    }

    pub fn is_finished(&self) -> bool {
        self.status == MatchStatus::Finished
    }

    /// Consistency checks between the cached score, the ledger and the
    /// results list. Returns a description of the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        if let Some(live) = &self.live {
            if live.set_number() != self.current_set {
                return Err(format!(
                    "tracker is on set {} but match is on set {}",
                    live.set_number(),
                    self.current_set
                ));
            }
            for side in Side::BOTH {
                let cached = live.score().get(side);
                let logged = self.ledger.side_points(self.current_set, side);
                if cached != logged {
                    return Err(format!(
                        "{side} score {cached} diverges from {logged} ledger events in set {}",
                        self.current_set
                    ));
                }
            }
        }

        let finalized = self.set_results.len();
        let current = self.current_set as usize;
        match self.set_phase {
            // A manual end may discard an unplayed 0–0 set.
            _ if self.status == MatchStatus::Finished => {
                if finalized != current && finalized + 1 != current {
                    return Err(format!(
                        "{finalized} finalized sets in a match finished on set {current}"
                    ));
                }
            }
            SetPhase::NotStarted | SetPhase::InProgress if finalized + 1 != current => {
                return Err(format!(
                    "{finalized} finalized sets while set {current} is open"
                ));
            }
            SetPhase::Finished if finalized != current => {
                return Err(format!(
                    "{finalized} finalized sets after set {current} finished"
                ));
            }
            _ => {}
        }

        for (i, result) in self.set_results.iter().enumerate() {
            if result.set_number as usize != i + 1 {
                return Err(format!(
                    "result #{i} carries set number {}",
                    result.set_number
                ));
            }
        }

        let won = self.sets_won();
        let cap = self.rules.sets_to_win;
        if won.home > cap || won.away > cap {
            return Err(format!("sets won {won:?} exceed {cap}"));
        }
        if self.status != MatchStatus::Finished && (won.home == cap || won.away == cap) {
            return Err(format!("sets won {won:?} reached {cap} but match is not finished"));
        }
        Ok(())
    }
}

/// Debug-build guard run after every accepted mutation.
#[inline]
pub(crate) fn debug_check_invariants(m: &Match, ctx: &'static str) {
    if cfg!(debug_assertions) {
        if let Err(violation) = m.check_invariants() {
            panic!("Invariant violated after {ctx}: {violation}");
        }
    }
}
