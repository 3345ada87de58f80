//! Builders for teams, lineups and matches used across test binaries.
//!
//! Team and player names carry a ULID suffix so assertions never depend on
//! a name another test happened to pick.

use scoring_engine::{Lineup, Match, MatchId, MatchRules, Player, PlayerId, Side, Team, TeamId};

use crate::unique_str;

/// Players per generated roster: six starters plus two on the bench.
pub const ROSTER_SIZE: i64 = 8;

/// Player ids are `team_id * 100 + n` for `n` in `1..=ROSTER_SIZE`.
pub fn player_id(team_id: TeamId, n: i64) -> PlayerId {
    team_id * 100 + n
}

pub fn team(team_id: TeamId) -> Team {
    let name = unique_str("team");
    Team {
        id: team_id,
        players: (1..=ROSTER_SIZE)
            .map(|n| Player {
                id: player_id(team_id, n),
                name: format!("{name}-p{n}"),
                jersey_number: n as u8,
                position: None,
            })
            .collect(),
        name,
    }
}

/// The first six roster players, in slot order.
pub fn starters(team_id: TeamId) -> [PlayerId; 6] {
    [1, 2, 3, 4, 5, 6].map(|n| player_id(team_id, n))
}

/// A bench player of `team_id` (never in [`starters`]).
pub fn bench_player(team_id: TeamId) -> PlayerId {
    player_id(team_id, ROSTER_SIZE)
}

pub fn lineup(team_id: TeamId) -> Lineup {
    Lineup::full(starters(team_id))
}

/// Team id used for `side` by [`new_match`].
pub const fn team_id(side: Side) -> TeamId {
    match side {
        Side::Home => 1,
        Side::Away => 2,
    }
}

/// A pending match between teams 1 (home) and 2 (away).
pub fn new_match(id: MatchId) -> Match {
    new_match_with(id, MatchRules::default())
}

pub fn new_match_with(id: MatchId, rules: MatchRules) -> Match {
    Match::new(
        id,
        team(team_id(Side::Home)),
        team(team_id(Side::Away)),
        rules,
    )
}

/// Lineups for [`new_match`], home first.
pub fn lineups() -> (Lineup, Lineup) {
    (
        lineup(team_id(Side::Home)),
        lineup(team_id(Side::Away)),
    )
}

/// First starter of `side` in a [`new_match`] match.
pub fn scorer(side: Side) -> PlayerId {
    starters(team_id(side))[0]
}
