// Property tests driving the controller with arbitrary intent sequences.

use proptest::prelude::*;

use crate::domain::clock::ManualClock;
use crate::domain::controller::{
    award_point, call_timeout, resume_match, start_next_set, suspend_match, undo_point,
    PointRequest,
};
use crate::domain::point_type::PointType;
use crate::domain::roster::Side;
use crate::domain::rules::MatchRules;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::state::{Match, MatchStatus};
use crate::domain::test_gens::{intents, rally_winners, Intent};
use crate::domain::test_prelude::proptest_config;
use crate::domain::test_state_helpers::{clock, scorer, started_match, starters};
use crate::errors::domain::ScoringError;

fn apply(m: &mut Match, intent: Intent, clock: &ManualClock) -> Result<MatchSnapshot, ScoringError> {
    match intent {
        Intent::Point {
            side,
            slot,
            point_type,
            attributed,
        } => {
            let player_id = attributed.then(|| starters(side)[slot]);
            award_point(
                m,
                PointRequest {
                    side,
                    player_id,
                    point_type,
                },
                clock,
            )
        }
        Intent::Undo => undo_point(m),
        Intent::NextSet => start_next_set(m, clock),
        Intent::Timeout(side) => call_timeout(m, side),
        Intent::Suspend => suspend_match(m),
        Intent::Resume => resume_match(m),
    }
}

proptest! {
    #![proptest_config(proptest_config())]

    /// Rejected intents change nothing; accepted ones keep every invariant.
    #[test]
    fn arbitrary_intents_keep_match_consistent(seq in intents(400)) {
        let clock = clock();
        let mut m = started_match(&clock);

        for intent in seq {
            let before = snapshot(&m);
            let ledger_len = m.ledger().len();
            match apply(&mut m, intent, &clock) {
                Ok(after) => prop_assert_eq!(after, snapshot(&m)),
                Err(_) => {
                    prop_assert_eq!(snapshot(&m), before);
                    prop_assert_eq!(m.ledger().len(), ledger_len);
                }
            }
            if let Err(violation) = m.check_invariants() {
                prop_assert!(false, "invariant violated after {:?}: {}", intent, violation);
            }

            let rules = *m.rules();
            let won = m.sets_won();
            prop_assert!(won.home <= rules.sets_to_win && won.away <= rules.sets_to_win);
            prop_assert!(m.current_set() <= rules.max_sets());
            for side in Side::BOTH {
                prop_assert!(m.timeouts_used(side) <= rules.timeouts_per_set);
            }
        }
    }

    /// Straight-line rallies: the scoreboard always matches the ledger and
    /// every finished set satisfies the win rule.
    #[test]
    fn finished_sets_satisfy_win_rule(winners in rally_winners(600)) {
        let clock = clock();
        let mut m = started_match(&clock);

        for side in winners {
            if m.is_finished() {
                break;
            }
            if m.set_results().len() == m.current_set() as usize {
                start_next_set(&mut m, &clock).unwrap();
            }
            award_point(&mut m, PointRequest::by(side, scorer(side), PointType::Spike), &clock)
                .unwrap();
        }

        let rules = MatchRules::default();
        for result in m.set_results() {
            let target = rules.target_for_set(result.set_number);
            let (hi, lo) = if result.home_score > result.away_score {
                (result.home_score, result.away_score)
            } else {
                (result.away_score, result.home_score)
            };
            prop_assert!(hi >= target);
            prop_assert!(hi - lo >= rules.min_lead);
            prop_assert!(hi == target || hi - lo == rules.min_lead);
        }
        if m.status() == MatchStatus::Finished {
            prop_assert_eq!(m.winner(), m.sets_won().leader());
        }
    }
}
