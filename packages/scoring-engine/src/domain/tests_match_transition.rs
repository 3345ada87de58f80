use crate::domain::controller::{
    award_point, end_match, resume_match, start_match, start_next_set, suspend_match,
    PointRequest,
};
use crate::domain::match_transition::{derive_match_transitions, MatchTransition};
use crate::domain::point_type::PointType;
use crate::domain::roster::{Lineup, Side};
use crate::domain::snapshot::snapshot;
use crate::domain::test_state_helpers::{
    clock, pending_match, spikes, started_match, starters, win_set,
};

#[test]
fn start_emits_match_and_set_start() {
    let clock = clock();
    let mut m = pending_match();
    let before = snapshot(&m);
    let after = start_match(
        &mut m,
        Lineup::full(starters(Side::Home)),
        Lineup::full(starters(Side::Away)),
        &clock,
    )
    .unwrap();

    assert_eq!(
        derive_match_transitions(&before, &after),
        vec![
            MatchTransition::MatchStarted,
            MatchTransition::SetStarted { set_number: 1 },
        ]
    );
}

#[test]
fn ordinary_point_emits_nothing() {
    let clock = clock();
    let mut m = started_match(&clock);
    let before = snapshot(&m);
    let after = award_point(&mut m, PointRequest::by(Side::Home, 4, PointType::Block), &clock)
        .unwrap();
    assert!(derive_match_transitions(&before, &after).is_empty());
}

#[test]
fn set_point_then_next_set() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Away, 24, &clock);
    let before = snapshot(&m);
    let after = award_point(&mut m, PointRequest::opponent_error(Side::Away), &clock).unwrap();
    assert_eq!(
        derive_match_transitions(&before, &after),
        vec![MatchTransition::SetEnded {
            set_number: 1,
            winner: Some(Side::Away)
        }]
    );

    let next = start_next_set(&mut m, &clock).unwrap();
    assert_eq!(
        derive_match_transitions(&after, &next),
        vec![MatchTransition::SetStarted { set_number: 2 }]
    );
}

#[test]
fn match_point_ends_set_and_match() {
    let clock = clock();
    let mut m = started_match(&clock);
    win_set(&mut m, Side::Home, &clock);
    win_set(&mut m, Side::Home, &clock);
    spikes(&mut m, Side::Home, 24, &clock);
    let before = snapshot(&m);
    let after = award_point(&mut m, PointRequest::by(Side::Home, 1, PointType::Ace), &clock)
        .unwrap();

    assert_eq!(
        derive_match_transitions(&before, &after),
        vec![
            MatchTransition::SetEnded {
                set_number: 3,
                winner: Some(Side::Home)
            },
            MatchTransition::MatchEnded {
                winner: Some(Side::Home)
            },
        ]
    );
}

#[test]
fn suspend_resume_and_manual_end() {
    let clock = clock();
    let mut m = started_match(&clock);
    let live = snapshot(&m);
    let paused = suspend_match(&mut m).unwrap();
    assert_eq!(
        derive_match_transitions(&live, &paused),
        vec![MatchTransition::Suspended]
    );
    let resumed = resume_match(&mut m).unwrap();
    assert_eq!(
        derive_match_transitions(&paused, &resumed),
        vec![MatchTransition::Resumed]
    );

    spikes(&mut m, Side::Home, 1, &clock);
    spikes(&mut m, Side::Away, 1, &clock);
    let before = snapshot(&m);
    let ended = end_match(&mut m, &clock).unwrap();
    assert_eq!(
        derive_match_transitions(&before, &ended),
        vec![
            MatchTransition::SetEnded {
                set_number: 1,
                winner: None
            },
            MatchTransition::MatchEnded { winner: None },
        ]
    );
}
