//! Tests for `HH:MM` parsing, weekday labels and the slot overlap test.

use studymate_core::{overlaps, to_minutes, Day, ScheduleSlot, StudyError, WallClock};

/// Helper to build a slot from its textual parts.
fn slot(day: &str, start: &str, end: &str) -> ScheduleSlot {
    ScheduleSlot::parse(day, start, end).expect("valid slot")
}

// ─────────────────────────────────────────────────────────────────────────────
// Time parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_minutes_converts_wall_clock() {
    assert_eq!(to_minutes("00:00").unwrap(), 0);
    assert_eq!(to_minutes("08:30").unwrap(), 510);
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
}

#[test]
fn to_minutes_rejects_malformed_input() {
    for bad in ["8:30", "08:3", "0830", "24:00", "12:60", "ab:cd", "", "08:30:00", " 8:30"] {
        assert!(
            matches!(to_minutes(bad), Err(StudyError::InvalidTime(_))),
            "'{}' should be rejected",
            bad
        );
    }
}

#[test]
fn wall_clock_displays_zero_padded() {
    let t: WallClock = "07:05".parse().unwrap();
    assert_eq!(t.minutes(), 425);
    assert_eq!(t.to_string(), "07:05");
    assert_eq!(WallClock::from_hm(7, 5).unwrap(), t);
    assert!(WallClock::from_hm(24, 0).is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Days and slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_accepts_english_and_spanish_labels() {
    assert_eq!("Mon".parse::<Day>().unwrap(), Day::Monday);
    assert_eq!("monday".parse::<Day>().unwrap(), Day::Monday);
    assert_eq!("Lunes".parse::<Day>().unwrap(), Day::Monday);
    assert_eq!("Miércoles".parse::<Day>().unwrap(), Day::Wednesday);
    assert_eq!("Sabado".parse::<Day>().unwrap(), Day::Saturday);
    assert!("Funday".parse::<Day>().is_err());
}

#[test]
fn slot_requires_start_before_end() {
    assert!(matches!(
        ScheduleSlot::parse("Mon", "10:00", "10:00"),
        Err(StudyError::InvalidSlot { .. })
    ));
    assert!(matches!(
        ScheduleSlot::parse("Mon", "11:00", "10:00"),
        Err(StudyError::InvalidSlot { .. })
    ));
    assert_eq!(slot("Mon", "08:00", "09:30").duration_minutes(), 90);
}

#[test]
fn slot_json_uses_original_labels_and_times() {
    let parsed: ScheduleSlot =
        serde_json::from_str(r#"{"day":"Lunes","start":"08:00","end":"10:00"}"#).unwrap();
    assert_eq!(parsed, slot("Mon", "08:00", "10:00"));

    let json = serde_json::to_string(&parsed).unwrap();
    assert_eq!(json, r#"{"day":"Monday","start":"08:00","end":"10:00"}"#);
}

#[test]
fn slot_json_rejects_inverted_range_and_bad_time() {
    let inverted =
        serde_json::from_str::<ScheduleSlot>(r#"{"day":"Mon","start":"12:00","end":"10:00"}"#);
    assert!(inverted.is_err());

    let bad_time =
        serde_json::from_str::<ScheduleSlot>(r#"{"day":"Mon","start":"8am","end":"10:00"}"#);
    assert!(bad_time.is_err());
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlap
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_slots_on_same_day() {
    let a = slot("Mon", "08:00", "10:00");
    let b = slot("Mon", "09:00", "11:00");
    assert!(overlaps(&a, &b));
    assert!(overlaps(&b, &a));
}

#[test]
fn adjacent_slots_do_not_overlap() {
    let a = slot("Mon", "08:00", "10:00");
    let b = slot("Mon", "10:00", "12:00");
    assert!(!overlaps(&a, &b), "end == start is not an overlap");
    assert!(!overlaps(&b, &a));
}

#[test]
fn same_times_on_different_days_do_not_overlap() {
    let a = slot("Mon", "08:00", "10:00");
    let b = slot("Tue", "08:00", "10:00");
    assert!(!a.overlaps(&b));
}

#[test]
fn contained_and_identical_slots_overlap() {
    let outer = slot("Fri", "08:00", "12:00");
    let inner = slot("Fri", "09:00", "10:00");
    assert!(overlaps(&outer, &inner));
    assert!(overlaps(&inner, &outer));
    assert!(overlaps(&outer, &outer));
}

#[test]
fn disjoint_slots_do_not_overlap() {
    let a = slot("Wed", "08:00", "09:00");
    let b = slot("Wed", "14:00", "15:00");
    assert!(!overlaps(&a, &b));
}
