//! Error codes for scoring engine rejections.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE so hosts can forward them verbatim.

use core::fmt;

/// Centralized error codes for every rejection the engine can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lifecycle
    /// Match has not been started yet
    MatchNotStarted,
    /// Match was already started
    MatchAlreadyStarted,
    /// Match has finished; nothing can change anymore
    MatchAlreadyFinished,
    /// Match is suspended
    MatchSuspended,
    /// Match is not suspended
    MatchNotSuspended,

    // Sets
    /// No set is being played right now
    SetNotInProgress,
    /// The current set is still being played
    SetNotFinished,

    // Scoring input
    /// Lineup is missing starters, repeats a player or uses an unknown one
    IncompleteLineup,
    /// Unrecognized point-type code
    InvalidPointType,
    /// A non-error point must name the scoring player
    UnattributedPoint,
    /// Player is not on court for that side
    PlayerNotOnCourt,
    /// Undo requested with nothing scored in the current set
    NoPointsToUndo,
    /// Side already used every timeout of this set
    TimeoutsExhausted,

    // Registry
    /// No match registered under that id
    UnknownMatch,
    /// A match with that id is already registered
    DuplicateMatch,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MatchNotStarted => "MATCH_NOT_STARTED",
            Self::MatchAlreadyStarted => "MATCH_ALREADY_STARTED",
            Self::MatchAlreadyFinished => "MATCH_ALREADY_FINISHED",
            Self::MatchSuspended => "MATCH_SUSPENDED",
            Self::MatchNotSuspended => "MATCH_NOT_SUSPENDED",
            Self::SetNotInProgress => "SET_NOT_IN_PROGRESS",
            Self::SetNotFinished => "SET_NOT_FINISHED",
            Self::IncompleteLineup => "INCOMPLETE_LINEUP",
            Self::InvalidPointType => "INVALID_POINT_TYPE",
            Self::UnattributedPoint => "UNATTRIBUTED_POINT",
            Self::PlayerNotOnCourt => "PLAYER_NOT_ON_COURT",
            Self::NoPointsToUndo => "NO_POINTS_TO_UNDO",
            Self::TimeoutsExhausted => "TIMEOUTS_EXHAUSTED",
            Self::UnknownMatch => "UNKNOWN_MATCH",
            Self::DuplicateMatch => "DUPLICATE_MATCH",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
