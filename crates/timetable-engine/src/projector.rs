//! Expand weekly meetings into one [`Interval`] per weekday.
//!
//! A meeting that cannot be placed (no days, missing or malformed start,
//! malformed or non-positive duration, running past midnight) contributes no
//! intervals and is reported in [`Projection::skipped`] instead of failing the
//! whole schedule. Unknown day names are reported per day; the meeting's
//! other days are still projected. Saturday and Sunday are dropped without a
//! report because the grid only shows Monday to Friday.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

use crate::error::ParseError;
use crate::interval::Interval;
use crate::time::{
    day_index, parse_iso8601_duration, parse_time_of_day, parse_weekday, weekday_from_index,
    MINUTES_PER_DAY,
};

/// Number of day columns in the weekly grid (Monday to Friday).
pub const WEEKDAY_COLUMNS: u8 = 5;

/// A recurring weekly meeting as it arrives from the catalog or a client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingSpec<P> {
    /// Weekday names, abbreviations or registrar letters (`"Monday"`, `"Mon"`, `"M"`).
    pub days: Vec<String>,
    /// Start time text, see [`parse_time_of_day`].
    #[serde(default)]
    pub start: Option<String>,
    pub duration: MeetingDuration,
    /// Pass-through data for the renderer.
    pub payload: P,
}

/// Meeting length, either pre-parsed minutes or ISO 8601 `PT..H..M` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeetingDuration {
    Minutes(i64),
    Iso8601(String),
}

impl MeetingDuration {
    pub fn minutes(&self) -> Result<i64, ParseError> {
        match self {
            MeetingDuration::Minutes(minutes) => Ok(*minutes),
            MeetingDuration::Iso8601(text) => parse_iso8601_duration(text).map(i64::from),
        }
    }
}

impl From<u32> for MeetingDuration {
    fn from(minutes: u32) -> Self {
        MeetingDuration::Minutes(i64::from(minutes))
    }
}

impl From<&str> for MeetingDuration {
    fn from(text: &str) -> Self {
        MeetingDuration::Iso8601(text.to_string())
    }
}

/// Why a meeting (or one of its days) produced no interval.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    #[error("meeting has no days")]
    NoDays,

    #[error("meeting has no start time")]
    MissingStart,

    #[error("invalid start time: {0}")]
    InvalidStart(ParseError),

    #[error("invalid duration: {0}")]
    InvalidDuration(ParseError),

    #[error("duration of {0} minutes is not positive")]
    NonPositiveDuration(i64),

    #[error("{0}")]
    UnknownDay(ParseError),

    #[error("meeting would end at minute {end_minute}, past midnight")]
    PastMidnight { end_minute: i64 },
}

/// Diagnostic for input that the projector dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedMeeting {
    /// Position of the meeting in the input slice.
    pub meeting_index: usize,
    /// The offending day text, for day-specific problems.
    pub day: Option<String>,
    #[serde(serialize_with = "serialize_display")]
    pub reason: SkipReason,
}

impl fmt::Display for SkippedMeeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "meeting #{}", self.meeting_index)?;
        if let Some(day) = &self.day {
            write!(f, " ({day})")?;
        }
        write!(f, ": {}", self.reason)
    }
}

fn serialize_display<S: Serializer>(value: &SkipReason, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Output of [`project_meetings`].
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<P> {
    /// Input order, then Monday-first within a meeting.
    pub intervals: Vec<Interval<P>>,
    pub skipped: Vec<SkippedMeeting>,
}

impl<P> Default for Projection<P> {
    fn default() -> Self {
        Self {
            intervals: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// Expand every meeting into its weekday intervals.
///
/// Each meeting yields one interval per distinct Monday-to-Friday day, all
/// sharing its start, duration and a clone of its payload. Repeated day names
/// (`"M"` and `"Monday"`) collapse to one interval.
pub fn project_meetings<P: Clone>(meetings: &[MeetingSpec<P>]) -> Projection<P> {
    let mut projection = Projection::default();

    for (meeting_index, meeting) in meetings.iter().enumerate() {
        project_meeting(meeting_index, meeting, &mut projection);
    }

    for skipped in &projection.skipped {
        debug!("Skipping {skipped}");
    }
    debug!(
        meetings = meetings.len(),
        intervals = projection.intervals.len(),
        skipped = projection.skipped.len();
        "Projected meetings"
    );

    projection
}

fn project_meeting<P: Clone>(
    meeting_index: usize,
    meeting: &MeetingSpec<P>,
    out: &mut Projection<P>,
) {
    let skip = |reason: SkipReason| SkippedMeeting {
        meeting_index,
        day: None,
        reason,
    };

    if meeting.days.is_empty() {
        out.skipped.push(skip(SkipReason::NoDays));
        return;
    }

    let Some(start_text) = meeting.start.as_deref().filter(|s| !s.trim().is_empty()) else {
        out.skipped.push(skip(SkipReason::MissingStart));
        return;
    };

    let start = match parse_time_of_day(start_text) {
        Ok(start) => start.minutes(),
        Err(err) => {
            out.skipped.push(skip(SkipReason::InvalidStart(err)));
            return;
        }
    };

    let duration = match meeting.duration.minutes() {
        Ok(minutes) if minutes > 0 => minutes,
        Ok(minutes) => {
            out.skipped.push(skip(SkipReason::NonPositiveDuration(minutes)));
            return;
        }
        Err(err) => {
            out.skipped.push(skip(SkipReason::InvalidDuration(err)));
            return;
        }
    };

    let end = i64::from(start).saturating_add(duration);
    if end > i64::from(MINUTES_PER_DAY) {
        out.skipped
            .push(skip(SkipReason::PastMidnight { end_minute: end }));
        return;
    }
    // Bounded by MINUTES_PER_DAY above.
    let end = end as u32;

    let mut indices = Vec::with_capacity(meeting.days.len());
    for day_text in &meeting.days {
        match parse_weekday(day_text) {
            Ok(day) if day_index(day) < WEEKDAY_COLUMNS => indices.push(day_index(day)),
            Ok(day) => debug!("Meeting #{meeting_index}: {day} is outside the weekly grid"),
            Err(err) => out.skipped.push(SkippedMeeting {
                meeting_index,
                day: Some(day_text.clone()),
                reason: SkipReason::UnknownDay(err),
            }),
        }
    }
    indices.sort_unstable();
    indices.dedup();

    out.intervals.extend(
        indices
            .into_iter()
            .filter_map(weekday_from_index)
            .filter_map(|day| Interval::new(day, start, end, meeting.payload.clone()).ok()),
    );
}
