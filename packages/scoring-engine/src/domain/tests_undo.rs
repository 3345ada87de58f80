use proptest::prelude::*;

use crate::domain::controller::{award_point, start_next_set, undo_point, PointRequest};
use crate::domain::point_type::PointType;
use crate::domain::roster::Side;
use crate::domain::snapshot::snapshot;
use crate::domain::state::SetPhase;
use crate::domain::test_gens::{point_type, side};
use crate::domain::test_prelude::proptest_config;
use crate::domain::test_state_helpers::{clock, scorer, spikes, started_match, win_set};
use crate::errors::domain::ScoringError;

#[test]
fn undo_restores_previous_snapshot() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Home, 3, &clock);
    spikes(&mut m, Side::Away, 2, &clock);
    let before = snapshot(&m);

    award_point(
        &mut m,
        PointRequest::by(Side::Away, 14, PointType::Ace),
        &clock,
    )
    .unwrap();
    let after_undo = undo_point(&mut m).unwrap();

    assert_eq!(after_undo, before);
    assert_eq!(m.ledger().len(), 5);
}

#[test]
fn undo_at_love_all_is_rejected_without_change() {
    let clock = clock();
    let mut m = started_match(&clock);
    let before = snapshot(&m);

    assert_eq!(undo_point(&mut m).unwrap_err(), ScoringError::NoPointsToUndo);
    assert_eq!(snapshot(&m), before);
}

#[test]
fn undo_never_reaches_into_a_finished_set() {
    let clock = clock();
    let mut m = started_match(&clock);
    win_set(&mut m, Side::Home, &clock);
    let frozen = m.set_results().to_vec();

    assert_eq!(undo_point(&mut m).unwrap_err(), ScoringError::NoPointsToUndo);
    assert_eq!(m.set_results(), frozen.as_slice());
    assert_eq!(m.ledger().len(), 25);
}

#[test]
fn undo_between_sets_is_rejected() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Away, 25, &clock);
    assert_eq!(m.set_phase(), SetPhase::Finished);

    assert_eq!(undo_point(&mut m).unwrap_err(), ScoringError::SetNotInProgress);
    assert_eq!(m.set_results().len(), 1);
}

#[test]
fn sequence_numbers_are_reused_after_undo() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Home, 2, &clock);
    undo_point(&mut m).unwrap();
    spikes(&mut m, Side::Away, 1, &clock);

    let sequences: Vec<u32> = m.ledger().events().iter().map(|e| e.sequence).collect();
    assert_eq!(sequences, vec![1, 2]);
    let last = m.ledger().last().unwrap();
    assert_eq!((last.home_score_after, last.away_score_after), (1, 1));
}

#[test]
fn sequences_restart_in_each_set() {
    let clock = clock();
    let mut m = started_match(&clock);
    win_set(&mut m, Side::Home, &clock);
    spikes(&mut m, Side::Away, 1, &clock);

    let last = m.ledger().last().unwrap();
    assert_eq!((last.set_number, last.sequence), (2, 1));
    assert_eq!(
        start_next_set(&mut m, &clock).unwrap_err(),
        ScoringError::SetNotFinished
    );
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Award then undo returns the exact prior snapshot for any in-set state.
    #[test]
    fn award_then_undo_is_identity(
        prefix in prop::collection::vec(side(), 0..40),
        scoring_side in side(),
        kind in point_type(),
    ) {
        let clock = clock();
        let mut m = started_match(&clock);
        for rally in prefix {
            if m.set_phase() != SetPhase::InProgress {
                break;
            }
            award_point(&mut m, PointRequest::opponent_error(rally), &clock).unwrap();
        }
        prop_assume!(m.set_phase() == SetPhase::InProgress);
        let before = snapshot(&m);
        let ledger_before = m.ledger().clone();

        award_point(
            &mut m,
            PointRequest::by(scoring_side, scorer(scoring_side), kind),
            &clock,
        )
        .unwrap();
        prop_assume!(m.set_phase() == SetPhase::InProgress);
        undo_point(&mut m).unwrap();

        prop_assert_eq!(snapshot(&m), before);
        prop_assert_eq!(m.ledger(), &ledger_before);
    }
}
