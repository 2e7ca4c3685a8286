//! Tests for conflict detection.

use chrono::Weekday;
use timetable_engine::{find_conflicts, Interval};

/// Helper to create an interval from hour/minute pairs on a given day.
fn event(day: Weekday, start: (u32, u32), end: (u32, u32), id: &'static str) -> Interval<&'static str> {
    Interval::new(day, start.0 * 60 + start.1, end.0 * 60 + end.1, id).unwrap()
}

#[test]
fn two_overlapping_events_detected() {
    // A: 09:00-10:00, B: 09:30-10:30 → 30-min overlap
    let events = vec![
        event(Weekday::Mon, (9, 0), (10, 0), "a"),
        event(Weekday::Mon, (9, 30), (10, 30), "b"),
    ];

    let conflicts = find_conflicts(&events);

    assert_eq!(conflicts.len(), 1, "should detect exactly one conflict");
    assert_eq!(conflicts[0].overlap_minutes, 30);
    assert_eq!(*conflicts[0].first.payload(), "a");
    assert_eq!(*conflicts[0].second.payload(), "b");
}

#[test]
fn non_overlapping_events_no_conflict() {
    let events = vec![
        event(Weekday::Mon, (9, 0), (10, 0), "a"),
        event(Weekday::Mon, (11, 0), (12, 0), "b"),
    ];
    assert!(find_conflicts(&events).is_empty());
}

#[test]
fn adjacent_events_not_a_conflict() {
    // A: 09:00-10:00, B: 10:00-11:00 → adjacent, NOT overlapping
    let events = vec![
        event(Weekday::Tue, (9, 0), (10, 0), "a"),
        event(Weekday::Tue, (10, 0), (11, 0), "b"),
    ];
    assert!(find_conflicts(&events).is_empty());
}

#[test]
fn same_time_different_days_no_conflict() {
    let events = vec![
        event(Weekday::Mon, (9, 0), (10, 0), "a"),
        event(Weekday::Wed, (9, 0), (10, 0), "b"),
    ];
    assert!(find_conflicts(&events).is_empty());
}

#[test]
fn contained_event_overlaps_by_its_length() {
    // A: 09:00-12:00 contains B: 10:00-10:45
    let events = vec![
        event(Weekday::Thu, (9, 0), (12, 0), "outer"),
        event(Weekday::Thu, (10, 0), (10, 45), "inner"),
    ];
    let conflicts = find_conflicts(&events);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].overlap_minutes, 45);
}

#[test]
fn every_overlapping_pair_is_reported_in_input_order() {
    let events = vec![
        event(Weekday::Fri, (9, 0), (11, 0), "a"),
        event(Weekday::Fri, (9, 30), (10, 0), "b"),
        event(Weekday::Fri, (10, 30), (12, 0), "c"),
    ];

    let pairs: Vec<(&str, &str, u32)> = find_conflicts(&events)
        .iter()
        .map(|c| (*c.first.payload(), *c.second.payload(), c.overlap_minutes))
        .collect();

    assert_eq!(pairs, vec![("a", "b", 30), ("a", "c", 30)]);
}

#[test]
fn empty_and_single_inputs_have_no_conflicts() {
    assert!(find_conflicts::<()>(&[]).is_empty());
    assert!(find_conflicts(&[event(Weekday::Mon, (9, 0), (10, 0), "a")]).is_empty());
}
