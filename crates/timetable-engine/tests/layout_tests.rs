//! End-to-end tests for the weekly layout pipeline.

use chrono::Weekday;
use timetable_engine::range::DEFAULT_TIME_RANGE;
use timetable_engine::{layout_week, CanvasSize, LayoutConfig, MeetingDuration, MeetingSpec};

fn meeting(days: &[&str], start: &str, duration: MeetingDuration, label: &str) -> MeetingSpec<String> {
    MeetingSpec {
        days: days.iter().map(|d| d.to_string()).collect(),
        start: Some(start.to_string()),
        duration,
        payload: label.to_string(),
    }
}

fn sample_week() -> Vec<MeetingSpec<String>> {
    vec![
        meeting(&["M", "W", "F"], "9:30 AM", "PT50M".into(), "CS 18000"),
        meeting(&["T", "R"], "1:30 PM", "PT1H15M".into(), "MA 26100"),
        meeting(&["M"], "10:00 AM", 60.into(), "PHYS 17200"),
    ]
}

#[test]
fn empty_week_uses_default_window() {
    let layout = layout_week(&Vec::<MeetingSpec<String>>::new(), CanvasSize::default(), &LayoutConfig::default());
    assert!(layout.is_empty());
    assert!(layout.skipped.is_empty());
    assert_eq!(layout.time_range, DEFAULT_TIME_RANGE);
}

#[test]
fn malformed_duration_yields_empty_layout_not_error() {
    let layout = layout_week(
        &[meeting(&["M", "W"], "09:00", "PTXH".into(), "bad")],
        CanvasSize::default(),
        &LayoutConfig::default(),
    );
    assert!(layout.is_empty());
    assert_eq!(layout.skipped.len(), 1);
    assert_eq!(layout.time_range, DEFAULT_TIME_RANGE);
}

#[test]
fn sample_week_is_projected_ranged_and_placed() {
    let layout = layout_week(&sample_week(), CanvasSize::default(), &LayoutConfig::default());

    assert_eq!(layout.events.len(), 6);
    // 9:30 earliest, 14:45 latest → hours 9..15 → padded 8..16
    assert_eq!(
        (layout.time_range.start_hour(), layout.time_range.end_hour()),
        (8, 16)
    );

    let monday: Vec<_> = layout
        .events
        .iter()
        .filter(|e| e.placed.interval.day() == Weekday::Mon)
        .collect();
    assert_eq!(monday.len(), 2);
    // 9:30-10:20 and 10:00-11:00 overlap on Monday.
    assert!(monday.iter().all(|e| e.placed.cluster_span == 2));
    assert_ne!(monday[0].placed.column, monday[1].placed.column);

    let wednesday = layout
        .events
        .iter()
        .find(|e| e.placed.interval.day() == Weekday::Wed)
        .unwrap();
    assert_eq!(wednesday.placed.cluster_span, 1);
    assert!((wednesday.geometry.width - 140.0).abs() < 1e-9);
}

#[test]
fn events_follow_projection_order() {
    let layout = layout_week(&sample_week(), CanvasSize::default(), &LayoutConfig::default());
    let order: Vec<(&str, Weekday)> = layout
        .events
        .iter()
        .map(|e| (e.placed.interval.payload().as_str(), e.placed.interval.day()))
        .collect();
    assert_eq!(
        order,
        vec![
            ("CS 18000", Weekday::Mon),
            ("CS 18000", Weekday::Wed),
            ("CS 18000", Weekday::Fri),
            ("MA 26100", Weekday::Tue),
            ("MA 26100", Weekday::Thu),
            ("PHYS 17200", Weekday::Mon),
        ]
    );
}

#[test]
fn boxes_stay_inside_the_canvas() {
    let canvas = CanvasSize::new(1024.0, 768.0);
    let config = LayoutConfig::default();
    let layout = layout_week(&sample_week(), canvas, &config);
    assert_eq!(layout.config, config);

    for event in &layout.events {
        let g = event.geometry;
        assert!(g.x >= config.time_axis_width, "{g:?}");
        assert!(g.x + g.width <= canvas.width, "{g:?}");
        assert!(g.y >= config.header_height, "{g:?}");
        assert!(g.y + g.height <= canvas.height, "{g:?}");
    }
}

#[test]
fn layout_is_deterministic() {
    let a = layout_week(&sample_week(), CanvasSize::default(), &LayoutConfig::default());
    let b = layout_week(&sample_week(), CanvasSize::default(), &LayoutConfig::default());
    assert_eq!(a, b);
    assert_eq!(
        serde_json::to_string(&a).unwrap(),
        serde_json::to_string(&b).unwrap()
    );
}

#[test]
fn bad_meetings_do_not_disturb_good_ones() {
    let mut meetings = sample_week();
    meetings.insert(1, meeting(&["W"], "25:00", 50.into(), "broken"));

    let layout = layout_week(&meetings, CanvasSize::default(), &LayoutConfig::default());
    assert_eq!(layout.events.len(), 6);
    assert_eq!(layout.skipped.len(), 1);
    assert_eq!(layout.skipped[0].meeting_index, 1);
}

#[test]
fn layout_serializes_flat_events() {
    let layout = layout_week(
        &[meeting(&["M"], "09:00", 60.into(), "CS 25000")],
        CanvasSize::default(),
        &LayoutConfig::default(),
    );
    let json = serde_json::to_value(&layout).unwrap();

    let event = &json["events"][0];
    assert_eq!(event["column"], 0);
    assert_eq!(event["cluster_span"], 1);
    assert_eq!(event["interval"]["day"], "Mon");
    assert_eq!(event["interval"]["start_minute"], 540);
    assert_eq!(event["interval"]["payload"], "CS 25000");
    assert!(event["geometry"]["x"].is_number());
    assert_eq!(json["time_range"]["start_hour"], 8);
    assert!(json.get("config").is_none());
}
