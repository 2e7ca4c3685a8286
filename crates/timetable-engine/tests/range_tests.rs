//! Tests for the visible hour window.

use chrono::Weekday;
use timetable_engine::range::{DEFAULT_TIME_RANGE, MIN_VISIBLE_HOURS};
use timetable_engine::{compute_time_range, Interval, TimeRange};

/// Helper: an interval on Monday from `start` to `end` minutes.
fn iv(start: u32, end: u32) -> Interval<()> {
    Interval::new(Weekday::Mon, start, end, ()).unwrap()
}

fn range(intervals: &[Interval<()>]) -> (u32, u32) {
    let r = compute_time_range(intervals);
    (r.start_hour(), r.end_hour())
}

#[test]
fn empty_input_is_eight_to_five() {
    let r = compute_time_range(&Vec::<Interval<()>>::new());
    assert_eq!(r, DEFAULT_TIME_RANGE);
    assert_eq!((r.start_hour(), r.end_hour()), (8, 17));
}

#[test]
fn single_short_meeting_is_padded_and_widened() {
    // 8:00-9:00 → padded 7..10 → widened to 4 hours: 7..11
    assert_eq!(range(&[iv(480, 540)]), (7, 11));
}

#[test]
fn end_rounds_up_to_the_next_hour() {
    // 9:30-10:20 and 13:00-14:10 → hours 9..15 → padded 8..16
    assert_eq!(range(&[iv(570, 620), iv(780, 850)]), (8, 16));
}

#[test]
fn end_on_the_hour_is_not_rounded() {
    // 10:00-12:00 → 9..13, exactly four hours
    assert_eq!(range(&[iv(600, 720)]), (9, 13));
}

#[test]
fn padding_is_clamped_at_midnight() {
    // 0:15-1:00 → start floors to 0, end 2, widened to 0..4
    assert_eq!(range(&[iv(15, 60)]), (0, 4));
}

#[test]
fn late_meeting_pins_window_to_last_four_hours() {
    // 22:30-23:45 → 21..24 is only three hours; cannot pass 24 so 20..24
    assert_eq!(range(&[iv(1350, 1425)]), (20, 24));
}

#[test]
fn meeting_ending_at_midnight() {
    assert_eq!(range(&[iv(1380, 1440)]), (20, 24));
}

#[test]
fn full_day_span() {
    assert_eq!(range(&[iv(0, 30), iv(1400, 1440)]), (0, 24));
}

#[test]
fn order_does_not_matter() {
    let a = [iv(600, 650), iv(480, 530), iv(900, 1000)];
    let b = [iv(900, 1000), iv(600, 650), iv(480, 530)];
    assert_eq!(compute_time_range(&a), compute_time_range(&b));
}

#[test]
fn days_do_not_matter() {
    let mixed = [
        Interval::new(Weekday::Tue, 600, 650, ()).unwrap(),
        Interval::new(Weekday::Fri, 840, 900, ()).unwrap(),
    ];
    assert_eq!(compute_time_range(&mixed), compute_time_range(&[iv(600, 650), iv(840, 900)]));
}

#[test]
fn window_is_never_narrower_than_minimum() {
    for start in (0..1440).step_by(37) {
        let end = (start + 20).min(1440);
        let r = compute_time_range(&[iv(start, end)]);
        assert!(r.hours() >= MIN_VISIBLE_HOURS, "{start}: {r:?}");
        assert!(r.end_hour() <= 24);
        assert!(r.start_minute() <= start && end <= r.end_minute());
    }
}

#[test]
fn constructor_validates_bounds() {
    assert!(TimeRange::new(8, 17).is_ok());
    assert!(TimeRange::new(0, 24).is_ok());
    assert!(TimeRange::new(9, 9).is_err());
    assert!(TimeRange::new(10, 8).is_err());
    assert!(TimeRange::new(20, 25).is_err());
}

#[test]
fn hour_marks_include_both_ends() {
    let r = TimeRange::new(8, 11).unwrap();
    assert_eq!(r.hour_marks().collect::<Vec<_>>(), vec![8, 9, 10, 11]);
}
