//! Tests for session statistics aggregation.

use studymate_core::{aggregate, SessionStats, SessionTally};

fn tally(duration_min: u32, breaks_taken: u32, completed: bool) -> SessionTally {
    SessionTally {
        duration_min,
        breaks_taken,
        completed,
    }
}

#[test]
fn aggregates_mixed_sessions() {
    let stats = aggregate([tally(25, 1, true), tally(30, 2, true), tally(20, 0, false)]);

    assert_eq!(stats.total_sessions, 3);
    assert_eq!(stats.completed_sessions, 2);
    assert_eq!(stats.total_minutes, 75);
    assert_eq!(stats.total_breaks, 3);
    assert_eq!(stats.average_minutes_per_session, 25.0);
}

#[test]
fn empty_input_yields_zeroes() {
    let stats = aggregate(Vec::<SessionTally>::new());

    assert_eq!(stats, SessionStats::default());
    assert_eq!(stats.average_minutes_per_session, 0.0);
    assert!(!stats.average_minutes_per_session.is_nan());
}

#[test]
fn average_keeps_fractional_minutes() {
    let stats = aggregate([tally(25, 0, true), tally(30, 0, true)]);
    assert_eq!(stats.average_minutes_per_session, 27.5);
}

#[test]
fn no_completed_sessions() {
    let stats = aggregate([tally(45, 3, false)]);
    assert_eq!(stats.completed_sessions, 0);
    assert_eq!(stats.total_breaks, 3);
    assert_eq!(stats.average_minutes_per_session, 45.0);
}

#[test]
fn stats_serialize_in_camel_case() {
    let stats = aggregate([tally(25, 1, true)]);
    let value = serde_json::to_value(stats).unwrap();

    assert_eq!(value["totalSessions"], 1);
    assert_eq!(value["completedSessions"], 1);
    assert_eq!(value["totalMinutes"], 25);
    assert_eq!(value["totalBreaks"], 1);
    assert_eq!(value["averageMinutesPerSession"], 25.0);
}

#[test]
fn tally_reads_full_session_records() {
    let json = r#"[
        {"session_id":"x","duration_min":25,"break_time":5,"breaks_taken":1,"completed":true},
        {"duration_min":20}
    ]"#;
    let tallies: Vec<SessionTally> = serde_json::from_str(json).unwrap();

    assert_eq!(tallies, vec![tally(25, 1, true), tally(20, 0, false)]);
}
