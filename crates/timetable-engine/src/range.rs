//! Visible hour window for a weekly grid.

use serde::Serialize;

use crate::error::{Result, TimetableError};
use crate::interval::Interval;
use crate::time::MINUTES_PER_HOUR;

/// Window shown when there is nothing to lay out (8 AM to 5 PM).
pub const DEFAULT_TIME_RANGE: TimeRange = TimeRange {
    start_hour: 8,
    end_hour: 17,
};

/// Smallest window the calculator produces.
pub const MIN_VISIBLE_HOURS: u32 = 4;

/// Padding added on both sides of the busiest span.
pub const PADDING_HOURS: u32 = 1;

/// Whole-hour window `[start_hour, end_hour)` with `0 <= start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeRange {
    start_hour: u32,
    end_hour: u32,
}

impl TimeRange {
    /// # Errors
    /// Returns [`TimetableError::InvalidTimeRange`] unless
    /// `start_hour < end_hour <= 24`.
    pub fn new(start_hour: u32, end_hour: u32) -> Result<Self> {
        if start_hour >= end_hour || end_hour > 24 {
            return Err(TimetableError::InvalidTimeRange(format!(
                "{start_hour}..{end_hour} is not within 0..24"
            )));
        }
        Ok(Self {
            start_hour,
            end_hour,
        })
    }

    pub fn start_hour(&self) -> u32 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u32 {
        self.end_hour
    }

    pub fn hours(&self) -> u32 {
        self.end_hour - self.start_hour
    }

    pub fn start_minute(&self) -> u32 {
        self.start_hour * MINUTES_PER_HOUR
    }

    pub fn end_minute(&self) -> u32 {
        self.end_hour * MINUTES_PER_HOUR
    }

    /// Every hour line of the grid, both bounds included.
    pub fn hour_marks(&self) -> impl Iterator<Item = u32> {
        self.start_hour..=self.end_hour
    }
}

impl Default for TimeRange {
    fn default() -> Self {
        DEFAULT_TIME_RANGE
    }
}

/// Derive the visible window for a set of intervals.
///
/// 1. Empty input yields [`DEFAULT_TIME_RANGE`].
/// 2. Earliest start is floored to its hour, latest end is rounded up to the
///    next whole hour.
/// 3. One hour of padding on each side, clamped to `0..=24`.
/// 4. Windows shorter than [`MIN_VISIBLE_HOURS`] grow at the end; when that
///    would pass midnight the window is pinned to `20..24` instead.
///
/// Depends only on the multiset of `(start, end)` pairs, so repeated calls
/// over the same schedule agree regardless of order.
pub fn compute_time_range<'a, P: 'a>(
    intervals: impl IntoIterator<Item = &'a Interval<P>>,
) -> TimeRange {
    let bounds = intervals
        .into_iter()
        .map(|i| (i.start_minute(), i.end_minute()))
        .reduce(|(lo, hi), (start, end)| (lo.min(start), hi.max(end)));

    let Some((min_start, max_end)) = bounds else {
        return DEFAULT_TIME_RANGE;
    };

    let first_hour = min_start / MINUTES_PER_HOUR;
    let last_hour = max_end.div_ceil(MINUTES_PER_HOUR);

    let mut start_hour = first_hour.saturating_sub(PADDING_HOURS);
    let mut end_hour = (last_hour + PADDING_HOURS).min(24);

    if end_hour - start_hour < MIN_VISIBLE_HOURS {
        end_hour = (start_hour + MIN_VISIBLE_HOURS).min(24);
        start_hour = start_hour.min(end_hour - MIN_VISIBLE_HOURS);
    }

    TimeRange {
        start_hour,
        end_hour,
    }
}
