//! Test-only builders for matches in known states.

use time::macros::datetime;
use time::Duration;

use crate::domain::clock::ManualClock;
use crate::domain::controller::{award_point, start_match, start_next_set, PointRequest};
use crate::domain::point_type::PointType;
use crate::domain::roster::{Lineup, Player, PlayerId, Side, Team};
use crate::domain::rules::MatchRules;
use crate::domain::state::Match;

/// Home players are 1..=8 (1..=6 start), away players 11..=18 (11..=16 start).
pub fn team(side: Side) -> Team {
    let (id, name, base) = match side {
        Side::Home => (1, "Home Hawks", 0),
        Side::Away => (2, "Away Otters", 10),
    };
    Team {
        id,
        name: name.into(),
        players: (1..=8)
            .map(|n| Player {
                id: base + n,
                name: format!("{name} #{n}"),
                jersey_number: n as u8,
                position: None,
            })
            .collect(),
    }
}

pub fn starters(side: Side) -> [PlayerId; 6] {
    match side {
        Side::Home => [1, 2, 3, 4, 5, 6],
        Side::Away => [11, 12, 13, 14, 15, 16],
    }
}

/// First starter of `side`; credited with every point in helpers below.
pub fn scorer(side: Side) -> PlayerId {
    starters(side)[0]
}

pub fn clock() -> ManualClock {
    ManualClock::new(datetime!(2024-05-01 18:00 UTC))
}

pub fn pending_match() -> Match {
    pending_match_with(MatchRules::default())
}

pub fn pending_match_with(rules: MatchRules) -> Match {
    Match::new(42, team(Side::Home), team(Side::Away), rules)
}

pub fn started_match(clock: &ManualClock) -> Match {
    started_match_with(MatchRules::default(), clock)
}

#[allow(clippy::expect_used)]
pub fn started_match_with(rules: MatchRules, clock: &ManualClock) -> Match {
    let mut m = pending_match_with(rules);
    start_match(
        &mut m,
        Lineup::full(starters(Side::Home)),
        Lineup::full(starters(Side::Away)),
        clock,
    )
    .expect("fixture lineups are valid");
    m
}

/// Award `n` spikes to `side`, one second apart.
#[allow(clippy::expect_used)]
pub fn spikes(m: &mut Match, side: Side, n: u16, clock: &ManualClock) {
    for _ in 0..n {
        clock.advance(Duration::seconds(1));
        award_point(m, PointRequest::by(side, scorer(side), PointType::Spike), clock)
            .expect("point accepted");
    }
}

/// Win the current set 25–0 for `side` and open the next one unless the
/// match is over.
#[allow(clippy::expect_used)]
pub fn win_set(m: &mut Match, side: Side, clock: &ManualClock) {
    let target = m.rules().target_for_set(m.current_set());
    spikes(m, side, target, clock);
    if !m.is_finished() {
        start_next_set(m, clock).expect("next set opens");
    }
}
