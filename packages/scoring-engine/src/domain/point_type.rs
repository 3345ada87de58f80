//! Point classifier: the closed set of reasons a rally ends in a point.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::domain::ScoringError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PointType {
    #[serde(rename = "SPK")]
    Spike,
    #[serde(rename = "BLK")]
    Block,
    #[serde(rename = "ACE")]
    Ace,
    #[serde(rename = "ERR")]
    OpponentError,
}

impl PointType {
    pub const ALL: [PointType; 4] = [
        PointType::Spike,
        PointType::Block,
        PointType::Ace,
        PointType::OpponentError,
    ];

    /// Parse a wire code (`SPK`) or name (`spike`), case-insensitive.
    pub fn classify(code: &str) -> Result<PointType, ScoringError> {
        match code.trim().to_ascii_uppercase().as_str() {
            "SPK" | "SPIKE" => Ok(PointType::Spike),
            "BLK" | "BLOCK" => Ok(PointType::Block),
            "ACE" => Ok(PointType::Ace),
            "ERR" | "OPPONENT_ERROR" => Ok(PointType::OpponentError),
            _ => Err(ScoringError::InvalidPointType(code.to_string())),
        }
    }

    /// Short wire code.
    pub const fn code(self) -> &'static str {
        match self {
            PointType::Spike => "SPK",
            PointType::Block => "BLK",
            PointType::Ace => "ACE",
            PointType::OpponentError => "ERR",
        }
    }

    /// Whether the point counts toward a player's own point total.
    pub const fn scores_for_player(self) -> bool {
        !matches!(self, PointType::OpponentError)
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PointType::Spike => "spike",
            PointType::Block => "block",
            PointType::Ace => "ace",
            PointType::OpponentError => "opponent_error",
        };
        f.write_str(name)
    }
}

impl FromStr for PointType {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PointType::classify(s)
    }
}
