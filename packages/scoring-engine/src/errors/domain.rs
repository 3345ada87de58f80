//! Domain-level rejections.
//!
//! Every variant is a recoverable, local validation failure. Hosts decide
//! whether to surface, retry or ignore them; nothing here is fatal.

use thiserror::Error;

use crate::domain::roster::{MatchId, PlayerId, Side};
use crate::errors::error_code::ErrorCode;

/// Why a lineup was refused at match start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineupProblem {
    /// Slot index (0-based) has no player.
    EmptySlot(usize),
    /// Player appears in more than one slot.
    DuplicatePlayer(PlayerId),
    /// Player is not on the team's roster.
    NotOnRoster(PlayerId),
}

impl std::fmt::Display for LineupProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineupProblem::EmptySlot(slot) => write!(f, "slot {} is empty", slot + 1),
            LineupProblem::DuplicatePlayer(id) => write!(f, "player {id} is listed twice"),
            LineupProblem::NotOnRoster(id) => write!(f, "player {id} is not on the roster"),
        }
    }
}

/// Central rejection type returned by every match operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoringError {
    #[error("incomplete lineup for {side}: {problem}")]
    IncompleteLineup { side: Side, problem: LineupProblem },
    #[error("no set is in progress")]
    SetNotInProgress,
    #[error("no points to undo in the current set")]
    NoPointsToUndo,
    #[error("invalid point type: {0:?}")]
    InvalidPointType(String),
    #[error("match already finished")]
    MatchAlreadyFinished,
    #[error("match already started")]
    MatchAlreadyStarted,
    #[error("match has not started")]
    MatchNotStarted,
    #[error("match is suspended")]
    MatchSuspended,
    #[error("match is not suspended")]
    MatchNotSuspended,
    #[error("current set is still in progress")]
    SetNotFinished,
    #[error("{0} points must name the scoring player")]
    UnattributedPoint(crate::domain::PointType),
    #[error("player {player_id} is not on court for {side}")]
    PlayerNotOnCourt { side: Side, player_id: PlayerId },
    #[error("{side} already used all {limit} timeouts of this set")]
    TimeoutsExhausted { side: Side, limit: u8 },
}

impl ScoringError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ScoringError::IncompleteLineup { .. } => ErrorCode::IncompleteLineup,
            ScoringError::SetNotInProgress => ErrorCode::SetNotInProgress,
            ScoringError::NoPointsToUndo => ErrorCode::NoPointsToUndo,
            ScoringError::InvalidPointType(_) => ErrorCode::InvalidPointType,
            ScoringError::MatchAlreadyFinished => ErrorCode::MatchAlreadyFinished,
            ScoringError::MatchAlreadyStarted => ErrorCode::MatchAlreadyStarted,
            ScoringError::MatchNotStarted => ErrorCode::MatchNotStarted,
            ScoringError::MatchSuspended => ErrorCode::MatchSuspended,
            ScoringError::MatchNotSuspended => ErrorCode::MatchNotSuspended,
            ScoringError::SetNotFinished => ErrorCode::SetNotFinished,
            ScoringError::UnattributedPoint(_) => ErrorCode::UnattributedPoint,
            ScoringError::PlayerNotOnCourt { .. } => ErrorCode::PlayerNotOnCourt,
            ScoringError::TimeoutsExhausted { .. } => ErrorCode::TimeoutsExhausted,
        }
    }
}

/// Ledger-internal failure; the controller maps it to `NoPointsToUndo`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("ledger has no events for set {set_number}")]
    Empty { set_number: u8 },
}

impl From<LedgerError> for ScoringError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::Empty { .. } => ScoringError::NoPointsToUndo,
        }
    }
}

/// Failures from [`crate::registry::MatchRegistry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("unknown match {0}")]
    UnknownMatch(MatchId),
    #[error("match {0} is already registered")]
    DuplicateMatch(MatchId),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
}

impl RegistryError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RegistryError::UnknownMatch(_) => ErrorCode::UnknownMatch,
            RegistryError::DuplicateMatch(_) => ErrorCode::DuplicateMatch,
            RegistryError::Scoring(err) => err.code(),
        }
    }
}
