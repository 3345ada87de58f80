//! Teams, players and lineups as supplied by the roster provider.
//!
//! The engine only reads these; roster edits happen outside a match.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::{LineupProblem, ScoringError};

pub type MatchId = i64;
pub type TeamId = i64;
pub type PlayerId = i64;

/// On-court slots per team.
pub const LINEUP_SLOTS: usize = 6;

/// Which team a point, timeout or result belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Home, Side::Away];

    /// Index into `[home, away]` pairs.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::Home => 0,
            Side::Away => 1,
        }
    }

    #[inline]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Home => Side::Away,
            Side::Away => Side::Home,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Side::Home),
            "away" | "a" => Ok(Side::Away),
            other => Err(format!("unknown side {other:?}")),
        }
    }
}

/// Nominal court position. Informational only; rotation is not modelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    Setter,
    OutsideHitter,
    Opposite,
    MiddleBlocker,
    Libero,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Full roster, starters and bench.
    pub players: Vec<Player>,
}

impl Team {
    pub fn has_player(&self, player_id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn player(&self, player_id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }
}

/// Six on-court slots; `None` marks a slot nobody was assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Lineup {
    pub slots: [Option<PlayerId>; LINEUP_SLOTS],
}

impl Lineup {
    pub const fn new(slots: [Option<PlayerId>; LINEUP_SLOTS]) -> Self {
        Self { slots }
    }

    /// Lineup with every slot filled, in the given order.
    pub fn full(players: [PlayerId; LINEUP_SLOTS]) -> Self {
        Self {
            slots: players.map(Some),
        }
    }

    pub fn contains(&self, player_id: PlayerId) -> bool {
        self.slots.contains(&Some(player_id))
    }

    pub fn filled(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.slots.iter().flatten().copied()
    }
}

/// Check that `lineup` names six distinct players from `team`'s roster.
///
/// Problems are reported in slot order so the first offending slot wins.
pub fn validate_lineup(side: Side, team: &Team, lineup: &Lineup) -> Result<(), ScoringError> {
    let reject = |problem| ScoringError::IncompleteLineup { side, problem };

    let mut seen = HashSet::with_capacity(LINEUP_SLOTS);
    for (slot, entry) in lineup.slots.iter().enumerate() {
        let Some(player_id) = *entry else {
            return Err(reject(LineupProblem::EmptySlot(slot)));
        };
        if !team.has_player(player_id) {
            return Err(reject(LineupProblem::NotOnRoster(player_id)));
        }
        if !seen.insert(player_id) {
            return Err(reject(LineupProblem::DuplicatePlayer(player_id)));
        }
    }
    Ok(())
}
