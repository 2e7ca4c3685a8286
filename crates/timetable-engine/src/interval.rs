//! A single weekly occurrence of a meeting on one day.

use chrono::Weekday;
use serde::Serialize;

use crate::error::{Result, TimetableError};
use crate::time::{day_index, MINUTES_PER_DAY};

/// One `(day, [start, end))` occurrence carrying an opaque payload.
///
/// The range is half-open: a meeting ending at 10:00 and one starting at
/// 10:00 do not overlap. Construction rejects empty ranges and ranges that
/// leave the day, so downstream stages have no error path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interval<P> {
    day: Weekday,
    start_minute: u32,
    end_minute: u32,
    payload: P,
}

impl<P> Interval<P> {
    /// # Errors
    /// Returns [`TimetableError::InvalidInterval`] unless
    /// `start_minute < end_minute <= 1440`.
    pub fn new(day: Weekday, start_minute: u32, end_minute: u32, payload: P) -> Result<Self> {
        if start_minute >= end_minute {
            return Err(TimetableError::InvalidInterval(format!(
                "start {start_minute} is not before end {end_minute}"
            )));
        }
        if end_minute > MINUTES_PER_DAY {
            return Err(TimetableError::InvalidInterval(format!(
                "end {end_minute} is past midnight"
            )));
        }
        Ok(Self {
            day,
            start_minute,
            end_minute,
            payload,
        })
    }

    pub fn day(&self) -> Weekday {
        self.day
    }

    /// Monday-based index, `0..=6`.
    pub fn day_index(&self) -> u8 {
        day_index(self.day)
    }

    pub fn start_minute(&self) -> u32 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u32 {
        self.end_minute
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }

    pub fn payload(&self) -> &P {
        &self.payload
    }

    pub fn into_payload(self) -> P {
        self.payload
    }

    /// Same day and `a.start < b.end && b.start < a.end`.
    pub fn overlaps<Q>(&self, other: &Interval<Q>) -> bool {
        self.day == other.day
            && self.start_minute < other.end_minute
            && other.start_minute < self.end_minute
    }
}
