//! Wall-clock time of day, ISO 8601 durations and weekday names, all as
//! integer minutes.
//!
//! Catalog data mixes several spellings for the same thing: `"14:30"`,
//! `"2:30 PM"` and the raw `"14:30:00.0000000"` for start times, `"PT1H15M"`
//! for durations, `"Thursday"`/`"Thu"`/`"R"` for days. Everything here is a
//! pure function returning a descriptive [`ParseError`] instead of a sentinel.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Minutes since midnight, always in `[0, 1440)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct TimeOfDay(u32);

impl TimeOfDay {
    pub const MIDNIGHT: TimeOfDay = TimeOfDay(0);

    /// Build from a minute count, rejecting values at or past midnight.
    pub fn from_minutes(minutes: u32) -> Result<Self, ParseError> {
        if minutes >= MINUTES_PER_DAY {
            return Err(ParseError::HourOutOfRange {
                text: minutes.to_string(),
                hour: minutes / MINUTES_PER_HOUR,
            });
        }
        Ok(Self(minutes))
    }

    /// Build from 24-hour clock components.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self, ParseError> {
        let text = format!("{hour}:{minute:02}");
        if hour > 23 {
            return Err(ParseError::HourOutOfRange { text, hour });
        }
        if minute > 59 {
            return Err(ParseError::MinuteOutOfRange { text, minute });
        }
        Ok(Self(hour * MINUTES_PER_HOUR + minute))
    }

    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hour(self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }
}

impl TryFrom<u32> for TimeOfDay {
    type Error = ParseError;

    fn try_from(minutes: u32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<TimeOfDay> for u32 {
    fn from(time: TimeOfDay) -> Self {
        time.0
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self(time.hour() * MINUTES_PER_HOUR + time.minute())
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(time: TimeOfDay) -> Self {
        NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or_default()
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_time_of_day(s)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Meridiem {
    Am,
    Pm,
}

/// Parse a time of day.
///
/// Accepted forms:
/// - 24-hour `"HH:MM"` (`"09:00"`, `"9:00"`, `"14:30"`)
/// - 24-hour with seconds, as stored in raw catalog data (`"14:30:00"`,
///   `"14:30:00.0000000"`); seconds are validated and ignored
/// - 12-hour with an AM/PM suffix, any case, space optional (`"9:00 AM"`,
///   `"12:15pm"`); the hour must be 1..=12
///
/// # Errors
/// Returns [`ParseError::HourOutOfRange`] / [`ParseError::MinuteOutOfRange`]
/// for well-formed text with impossible components, and
/// [`ParseError::MalformedTime`] for anything else.
pub fn parse_time_of_day(text: &str) -> Result<TimeOfDay, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let (clock, meridiem) = split_meridiem(trimmed);
    let (hour, minute) = split_clock(clock, text)?;

    let hour = match meridiem {
        Some(meridiem) => {
            if !(1..=12).contains(&hour) {
                return Err(ParseError::HourOutOfRange {
                    text: text.to_string(),
                    hour,
                });
            }
            match (meridiem, hour) {
                (Meridiem::Am, 12) => 0,
                (Meridiem::Am, h) => h,
                (Meridiem::Pm, 12) => 12,
                (Meridiem::Pm, h) => h + 12,
            }
        }
        None => {
            if hour > 23 {
                return Err(ParseError::HourOutOfRange {
                    text: text.to_string(),
                    hour,
                });
            }
            hour
        }
    };

    if minute > 59 {
        return Err(ParseError::MinuteOutOfRange {
            text: text.to_string(),
            minute,
        });
    }

    Ok(TimeOfDay(hour * MINUTES_PER_HOUR + minute))
}

fn split_meridiem(text: &str) -> (&str, Option<Meridiem>) {
    let Some(split) = text.len().checked_sub(2) else {
        return (text, None);
    };
    let (Some(clock), Some(suffix)) = (text.get(..split), text.get(split..)) else {
        return (text, None);
    };
    if suffix.eq_ignore_ascii_case("AM") {
        (clock.trim_end(), Some(Meridiem::Am))
    } else if suffix.eq_ignore_ascii_case("PM") {
        (clock.trim_end(), Some(Meridiem::Pm))
    } else {
        (text, None)
    }
}

/// Split `H[H]:MM[:SS[.fff]]` into hour and minute.
fn split_clock(clock: &str, original: &str) -> Result<(u32, u32), ParseError> {
    let malformed = || ParseError::MalformedTime(original.to_string());

    let mut parts = clock.split(':');
    let hour = parts.next().and_then(|h| parse_digits(h, 1, 2));
    let minute = parts.next().and_then(|m| parse_digits(m, 2, 2));
    let (Some(hour), Some(minute)) = (hour, minute) else {
        return Err(malformed());
    };

    if let Some(seconds) = parts.next() {
        let (whole, fraction) = match seconds.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (seconds, None),
        };
        match parse_digits(whole, 2, 2) {
            Some(s) if s <= 59 => {}
            _ => return Err(malformed()),
        }
        if let Some(fraction) = fraction {
            if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
                return Err(malformed());
            }
        }
    }

    if parts.next().is_some() {
        return Err(malformed());
    }

    Ok((hour, minute))
}

fn parse_digits(text: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if text.len() < min_len || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

/// Parse the `PT[nH][nM][nS]` subset of ISO 8601 durations into whole minutes.
///
/// Hours and minutes contribute; seconds are accepted but ignored. Components
/// must appear in H, M, S order and at least one must be present.
///
/// # Errors
/// [`ParseError::MalformedDuration`] for anything outside the subset (e.g.
/// `"PTXH"`, `"P1D"`, `"PT"`), [`ParseError::DurationOverflow`] when the total
/// does not fit in `u32` minutes.
pub fn parse_iso8601_duration(text: &str) -> Result<u32, ParseError> {
    let malformed = || ParseError::MalformedDuration(text.to_string());
    let overflow = || ParseError::DurationOverflow(text.to_string());

    let body = text.trim().strip_prefix("PT").ok_or_else(malformed)?;
    if body.is_empty() {
        return Err(malformed());
    }

    let mut total: u32 = 0;
    let mut last_rank = 0;
    let mut rest = body;

    while !rest.is_empty() {
        let digits = rest
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(malformed)?;
        if digits == 0 {
            return Err(malformed());
        }
        let value: u32 = rest[..digits].parse().map_err(|_| overflow())?;

        let rank = match rest.as_bytes()[digits] {
            b'H' => 1,
            b'M' => 2,
            b'S' => 3,
            _ => return Err(malformed()),
        };
        if rank <= last_rank {
            return Err(malformed());
        }
        last_rank = rank;

        let contribution = match rank {
            1 => value.checked_mul(MINUTES_PER_HOUR).ok_or_else(overflow)?,
            2 => value,
            _ => 0,
        };
        total = total.checked_add(contribution).ok_or_else(overflow)?;

        // Designators are single ASCII bytes.
        rest = &rest[digits + 1..];
    }

    Ok(total)
}

/// Format minutes since midnight as `"H AM"` / `"H:MM PM"`.
///
/// Total over all inputs: values are taken modulo one day, so hour 0 and
/// minute 1440 both print as `"12 AM"`.
pub fn format_twelve_hour(minutes: u32) -> String {
    let minutes = minutes % MINUTES_PER_DAY;
    let hour = minutes / MINUTES_PER_HOUR;
    let minute = minutes % MINUTES_PER_HOUR;
    let period = if hour >= 12 { "PM" } else { "AM" };
    let display_hour = match hour % 12 {
        0 => 12,
        h => h,
    };

    if minute == 0 {
        format!("{display_hour} {period}")
    } else {
        format!("{display_hour}:{minute:02} {period}")
    }
}

/// Label for an hour line on the time axis (`0` and `24` are both midnight).
pub fn format_hour_label(hour: u32) -> String {
    format_twelve_hour(hour * MINUTES_PER_HOUR)
}

/// Resolve a weekday name, three-letter abbreviation or registrar letter
/// (`M T W R F S U`). Case-insensitive.
pub fn parse_weekday(text: &str) -> Result<Weekday, ParseError> {
    let key = text.trim().to_ascii_lowercase();
    let day = match key.as_str() {
        "monday" | "mon" | "mo" | "m" => Weekday::Mon,
        "tuesday" | "tue" | "tues" | "tu" | "t" => Weekday::Tue,
        "wednesday" | "wed" | "we" | "w" => Weekday::Wed,
        "thursday" | "thu" | "thur" | "thurs" | "th" | "r" => Weekday::Thu,
        "friday" | "fri" | "fr" | "f" => Weekday::Fri,
        "saturday" | "sat" | "sa" | "s" => Weekday::Sat,
        "sunday" | "sun" | "su" | "u" => Weekday::Sun,
        _ => return Err(ParseError::UnknownWeekday(text.to_string())),
    };
    Ok(day)
}

/// Monday-based day index (`0..=6`).
pub fn day_index(day: Weekday) -> u8 {
    day.num_days_from_monday() as u8
}

/// Inverse of [`day_index`].
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    match index {
        0 => Some(Weekday::Mon),
        1 => Some(Weekday::Tue),
        2 => Some(Weekday::Wed),
        3 => Some(Weekday::Thu),
        4 => Some(Weekday::Fri),
        5 => Some(Weekday::Sat),
        6 => Some(Weekday::Sun),
        _ => None,
    }
}
