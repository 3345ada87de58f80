use serde_json::json;

use crate::domain::controller::{end_match, suspend_match};
use crate::domain::roster::Side;
use crate::domain::snapshot::{snapshot, MatchSnapshot};
use crate::domain::test_state_helpers::{clock, pending_match, spikes, started_match, win_set};

#[test]
fn pending_snapshot_has_no_timestamps() {
    let snap = snapshot(&pending_match());
    let value = serde_json::to_value(&snap).unwrap();

    assert_eq!(value["status"], "pending");
    assert_eq!(value["set_phase"], "not_started");
    assert_eq!(value["current_set"], 1);
    assert_eq!(value["started_at"], serde_json::Value::Null);
    assert!(value.get("winner").is_none());
    assert!(value.get("end_reason").is_none());
}

#[test]
fn live_snapshot_serializes_scoreboard() {
    let clock = clock();
    let mut m = started_match(&clock);
    win_set(&mut m, Side::Home, &clock);
    spikes(&mut m, Side::Away, 3, &clock);

    let value = serde_json::to_value(snapshot(&m)).unwrap();

    assert_eq!(value["status"], "in_progress");
    assert_eq!(value["current_set"], 2);
    assert_eq!(value["home_score"], 0);
    assert_eq!(value["away_score"], 3);
    assert_eq!(value["points_in_set"], 3);
    assert_eq!(value["sets_won"], json!({"home": 1, "away": 0}));
    assert_eq!(value["timeouts"], json!({"home": 0, "away": 0}));
    assert_eq!(value["started_at"], "2024-05-01T18:00:00Z");

    let first = &value["set_results"][0];
    assert_eq!(first["set_number"], 1);
    assert_eq!(first["winner"], "home");
    assert_eq!(first["started_at"], "2024-05-01T18:00:00Z");
    assert_eq!(first["ended_at"], "2024-05-01T18:00:25Z");
}

#[test]
fn finished_snapshot_reports_outcome() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Away, 1, &clock);
    suspend_match(&mut m).unwrap();
    let value = serde_json::to_value(end_match(&mut m, &clock).unwrap()).unwrap();

    assert_eq!(value["status"], "finished");
    assert_eq!(value["winner"], "away");
    assert_eq!(value["end_reason"], "manual");
    assert_eq!(value["ended_at"], "2024-05-01T18:00:01Z");
}

#[test]
fn snapshot_json_round_trips() {
    let clock = clock();
    let mut m = started_match(&clock);
    spikes(&mut m, Side::Home, 25, &clock);
    let snap = snapshot(&m);

    let text = serde_json::to_string(&snap).unwrap();
    let back: MatchSnapshot = serde_json::from_str(&text).unwrap();
    assert_eq!(back, snap);
}
