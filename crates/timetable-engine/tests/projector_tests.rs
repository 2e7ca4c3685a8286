//! Tests for expanding meetings into weekday intervals.

use chrono::Weekday;
use timetable_engine::projector::SkipReason;
use timetable_engine::{project_meetings, MeetingDuration, MeetingSpec, ParseError};

/// Helper: a meeting with the given days, start text and duration.
fn meeting(days: &[&str], start: Option<&str>, duration: MeetingDuration, label: &str) -> MeetingSpec<String> {
    MeetingSpec {
        days: days.iter().map(|d| d.to_string()).collect(),
        start: start.map(str::to_string),
        duration,
        payload: label.to_string(),
    }
}

#[test]
fn one_interval_per_day_sharing_time_and_payload() {
    let meetings = vec![meeting(&["Mon", "Wed", "Fri"], Some("09:30"), 50.into(), "CS 18000")];

    let projection = project_meetings(&meetings);

    assert!(projection.skipped.is_empty());
    let days: Vec<Weekday> = projection.intervals.iter().map(|i| i.day()).collect();
    assert_eq!(days, vec![Weekday::Mon, Weekday::Wed, Weekday::Fri]);
    for interval in &projection.intervals {
        assert_eq!(interval.start_minute(), 570);
        assert_eq!(interval.end_minute(), 620);
        assert_eq!(interval.payload(), "CS 18000");
    }
}

#[test]
fn iso_duration_text_is_accepted() {
    let meetings = vec![meeting(&["T", "R"], Some("1:30 PM"), "PT1H15M".into(), "MA 26100")];

    let projection = project_meetings(&meetings);

    assert_eq!(projection.intervals.len(), 2);
    assert_eq!(projection.intervals[0].day(), Weekday::Tue);
    assert_eq!(projection.intervals[1].day(), Weekday::Thu);
    assert_eq!(projection.intervals[0].duration_minutes(), 75);
    assert_eq!(projection.intervals[0].end_minute(), 885);
}

#[test]
fn output_is_input_order_then_monday_first() {
    let meetings = vec![
        meeting(&["F", "M"], Some("10:00"), 50.into(), "first"),
        meeting(&["W"], Some("08:00"), 50.into(), "second"),
    ];

    let projection = project_meetings(&meetings);

    let seen: Vec<(&str, Weekday)> = projection
        .intervals
        .iter()
        .map(|i| (i.payload().as_str(), i.day()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("first", Weekday::Mon),
            ("first", Weekday::Fri),
            ("second", Weekday::Wed),
        ]
    );
}

#[test]
fn day_synonyms_collapse_to_one_interval() {
    let meetings = vec![meeting(&["Monday", "Mon", "M"], Some("09:00"), 60.into(), "x")];

    let projection = project_meetings(&meetings);

    assert_eq!(projection.intervals.len(), 1);
    assert_eq!(projection.intervals[0].day(), Weekday::Mon);
}

#[test]
fn weekend_days_are_excluded_silently() {
    let meetings = vec![meeting(&["Friday", "Saturday", "Sunday"], Some("09:00"), 60.into(), "x")];

    let projection = project_meetings(&meetings);

    assert_eq!(projection.intervals.len(), 1);
    assert_eq!(projection.intervals[0].day(), Weekday::Fri);
    assert!(projection.skipped.is_empty());
}

#[test]
fn weekend_only_meeting_yields_nothing_and_no_report() {
    let meetings = vec![meeting(&["S", "U"], Some("09:00"), 60.into(), "x")];

    let projection = project_meetings(&meetings);

    assert!(projection.intervals.is_empty());
    assert!(projection.skipped.is_empty());
}

#[test]
fn malformed_duration_drops_meeting_without_failing() {
    let meetings = vec![
        meeting(&["M"], Some("09:00"), "PTXH".into(), "bad"),
        meeting(&["M"], Some("11:00"), 50.into(), "good"),
    ];

    let projection = project_meetings(&meetings);

    assert_eq!(projection.intervals.len(), 1);
    assert_eq!(projection.intervals[0].payload(), "good");
    assert_eq!(projection.skipped.len(), 1);
    assert_eq!(projection.skipped[0].meeting_index, 0);
    assert!(matches!(
        projection.skipped[0].reason,
        SkipReason::InvalidDuration(ParseError::MalformedDuration(_))
    ));
}

#[test]
fn empty_days_are_reported() {
    let projection = project_meetings(&[meeting(&[], Some("09:00"), 50.into(), "x")]);
    assert!(projection.intervals.is_empty());
    assert_eq!(projection.skipped[0].reason, SkipReason::NoDays);
}

#[test]
fn missing_or_blank_start_is_reported() {
    let projection = project_meetings(&[
        meeting(&["M"], None, 50.into(), "x"),
        meeting(&["M"], Some("  "), 50.into(), "y"),
    ]);
    assert!(projection.intervals.is_empty());
    assert_eq!(projection.skipped.len(), 2);
    assert!(projection
        .skipped
        .iter()
        .all(|s| s.reason == SkipReason::MissingStart));
}

#[test]
fn malformed_start_is_reported() {
    let projection = project_meetings(&[meeting(&["M"], Some("25:00"), 50.into(), "x")]);
    assert!(matches!(
        projection.skipped[0].reason,
        SkipReason::InvalidStart(ParseError::HourOutOfRange { hour: 25, .. })
    ));
}

#[test]
fn non_positive_duration_is_reported() {
    let projection = project_meetings(&[
        meeting(&["M"], Some("09:00"), MeetingDuration::Minutes(0), "zero"),
        meeting(&["M"], Some("09:00"), MeetingDuration::Minutes(-15), "negative"),
        meeting(&["M"], Some("09:00"), "PT30S".into(), "seconds only"),
    ]);
    assert!(projection.intervals.is_empty());
    let reasons: Vec<&SkipReason> = projection.skipped.iter().map(|s| &s.reason).collect();
    assert_eq!(
        reasons,
        vec![
            &SkipReason::NonPositiveDuration(0),
            &SkipReason::NonPositiveDuration(-15),
            &SkipReason::NonPositiveDuration(0),
        ]
    );
}

#[test]
fn meeting_past_midnight_is_reported() {
    let projection = project_meetings(&[meeting(&["M"], Some("23:30"), 60.into(), "x")]);
    assert!(projection.intervals.is_empty());
    assert_eq!(
        projection.skipped[0].reason,
        SkipReason::PastMidnight { end_minute: 1470 }
    );
}

#[test]
fn meeting_ending_exactly_at_midnight_is_kept() {
    let projection = project_meetings(&[meeting(&["M"], Some("23:00"), 60.into(), "x")]);
    assert_eq!(projection.intervals.len(), 1);
    assert_eq!(projection.intervals[0].end_minute(), 1440);
}

#[test]
fn unknown_day_is_reported_but_other_days_survive() {
    let projection = project_meetings(&[meeting(&["M", "Xday", "W"], Some("09:00"), 50.into(), "x")]);

    assert_eq!(projection.intervals.len(), 2);
    assert_eq!(projection.skipped.len(), 1);
    assert_eq!(projection.skipped[0].day.as_deref(), Some("Xday"));
    assert!(matches!(
        projection.skipped[0].reason,
        SkipReason::UnknownDay(ParseError::UnknownWeekday(_))
    ));
}

#[test]
fn skipped_meeting_display_names_index_and_day() {
    let projection = project_meetings(&[
        meeting(&["M"], Some("09:00"), 50.into(), "ok"),
        meeting(&["Xday"], Some("09:00"), 50.into(), "x"),
    ]);
    let text = projection.skipped[0].to_string();
    assert!(text.contains("#1"), "{text}");
    assert!(text.contains("Xday"), "{text}");
}

#[test]
fn meeting_spec_deserializes_both_duration_forms() {
    let json = r#"[
        {"days": ["M"], "start": "09:00", "duration": 50, "payload": "a"},
        {"days": ["T"], "start": "10:00", "duration": "PT1H", "payload": "b"},
        {"days": ["W"], "duration": 30, "payload": "c"}
    ]"#;
    let meetings: Vec<MeetingSpec<String>> = serde_json::from_str(json).unwrap();

    assert_eq!(meetings[0].duration, MeetingDuration::Minutes(50));
    assert_eq!(meetings[1].duration, MeetingDuration::Iso8601("PT1H".to_string()));
    assert_eq!(meetings[2].start, None);

    let projection = project_meetings(&meetings);
    assert_eq!(projection.intervals.len(), 2);
    assert_eq!(projection.skipped[0].reason, SkipReason::MissingStart);
}
