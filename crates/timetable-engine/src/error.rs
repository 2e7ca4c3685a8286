//! Error types for timetable-engine operations.

use thiserror::Error;

/// Malformed time-of-day, duration or weekday text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty time text")]
    Empty,

    #[error("Malformed time of day: {0:?}")]
    MalformedTime(String),

    #[error("Hour {hour} out of range in {text:?}")]
    HourOutOfRange { text: String, hour: u32 },

    #[error("Minute {minute} out of range in {text:?}")]
    MinuteOutOfRange { text: String, minute: u32 },

    #[error("Malformed ISO 8601 duration: {0:?}")]
    MalformedDuration(String),

    #[error("Duration overflows minute range: {0:?}")]
    DurationOverflow(String),

    #[error("Unknown weekday: {0:?}")]
    UnknownWeekday(String),
}

#[derive(Error, Debug)]
pub enum TimetableError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    #[error("Invalid time range: {0}")]
    InvalidTimeRange(String),

    #[error("Invalid catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TimetableError>;
