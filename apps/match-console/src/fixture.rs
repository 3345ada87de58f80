//! Match fixture file: the roster and lineups a console session plays with.
//!
//! ```json
//! {
//!   "match_id": 7,
//!   "home": { "id": 1, "name": "Lions", "players": [...], "lineup": [101, 102, 103, 104, 105, 106] },
//!   "away": { "id": 2, "name": "Tigers", "players": [...], "lineup": [201, 202, null, 204, 205, 206] },
//!   "rules": { "sets_to_win": 2 }
//! }
//! ```

use std::fs;
use std::path::Path;

use scoring_engine::domain::LINEUP_SLOTS;
use scoring_engine::{
    Lineup, Match, MatchId, MatchRules, Player, PlayerId, RulesConfigError, Team, TeamId,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("cannot read fixture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid fixture {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Rules(#[from] RulesConfigError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamFixture {
    pub id: TeamId,
    pub name: String,
    pub players: Vec<Player>,
    /// `null` leaves a slot empty; the engine rejects such a lineup at start.
    pub lineup: [Option<PlayerId>; LINEUP_SLOTS],
}

impl TeamFixture {
    fn split(self) -> (Team, Lineup) {
        let lineup = Lineup::new(self.lineup);
        let team = Team {
            id: self.id,
            name: self.name,
            players: self.players,
        };
        (team, lineup)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchFixture {
    pub match_id: MatchId,
    pub home: TeamFixture,
    pub away: TeamFixture,
    #[serde(default)]
    pub rules: Option<MatchRules>,
}

/// A fixture turned into an engine match plus the lineups `start` submits.
#[derive(Debug, Clone)]
pub struct PreparedMatch {
    pub game: Match,
    pub home_lineup: Lineup,
    pub away_lineup: Lineup,
}

impl MatchFixture {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FixtureError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|source| FixtureError::Io {
            path: display.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| FixtureError::Json {
            path: display,
            source,
        })
    }

    /// Build the match. `rules` wins over rules embedded in the fixture;
    /// whichever applies must pass validation.
    pub fn prepare(self, rules: Option<MatchRules>) -> Result<PreparedMatch, FixtureError> {
        let rules = rules.or(self.rules).unwrap_or_default();
        let (home, home_lineup) = self.home.split();
        let (away, away_lineup) = self.away.split();
        Ok(PreparedMatch {
            game: Match::try_new(self.match_id, home, away, rules)?,
            home_lineup,
            away_lineup,
        })
    }
}
