//! # timetable-engine
//!
//! Deterministic weekly schedule layout for course calendars.
//!
//! Given recurring weekly meetings (days, start time, duration), the engine
//! expands them into per-day intervals, packs overlapping intervals into
//! side-by-side columns with the fewest columns possible, picks a visible hour
//! window, and maps every interval to a box on a canvas of any size. All
//! stages are pure functions over owned values; nothing is shared between
//! calls.
//!
//! ## Modules
//!
//! - [`time`]: time-of-day, ISO 8601 duration and weekday parsing, 12-hour formatting
//! - [`interval`]: one validated `(day, [start, end))` occurrence
//! - [`range`]: visible hour window for a set of intervals
//! - [`projector`]: meetings → intervals, with skipped-input diagnostics
//! - [`overlap`]: column assignment and overlap cluster spans
//! - [`geometry`]: placed intervals → canvas boxes
//! - [`layout`]: the whole pipeline in one call
//! - [`conflict`]: pairwise overlapping meetings
//! - [`render`]: drawing capabilities plus SVG and HTML canvases
//! - [`catalog`]: read-only course catalog and search
//! - [`config`]: TOML-backed layout and style configuration
//! - [`error`]: error types
//!
//! ## Example
//! ```
//! use timetable_engine::{layout_week, CanvasSize, LayoutConfig, MeetingSpec};
//!
//! let meetings = vec![MeetingSpec {
//!     days: vec!["M".into(), "W".into(), "F".into()],
//!     start: Some("9:30 AM".into()),
//!     duration: "PT50M".into(),
//!     payload: "CS 18000".to_string(),
//! }];
//! let layout = layout_week(&meetings, CanvasSize::default(), &LayoutConfig::default());
//! assert_eq!(layout.events.len(), 3);
//! assert_eq!(layout.time_range.start_hour(), 8);
//! ```

pub mod catalog;
pub mod config;
pub mod conflict;
pub mod error;
pub mod geometry;
pub mod interval;
pub mod label;
pub mod layout;
pub mod overlap;
pub mod projector;
pub mod range;
pub mod render;
pub mod time;

pub use catalog::Catalog;
pub use config::{AppConfig, LayoutConfig, StyleConfig};
pub use conflict::{find_conflicts, Conflict};
pub use error::{ParseError, TimetableError};
pub use geometry::{map_geometry, CanvasSize, Geometry};
pub use interval::Interval;
pub use label::{Labeled, MeetingLabel};
pub use layout::{layout_week, PositionedInterval, WeekLayout};
pub use overlap::{resolve_overlaps, PlacedInterval};
pub use projector::{project_meetings, MeetingDuration, MeetingSpec, Projection, SkippedMeeting};
pub use range::{compute_time_range, TimeRange};
pub use render::{render_html, render_svg, render_week, Canvas};
pub use time::{format_twelve_hour, parse_iso8601_duration, parse_time_of_day, TimeOfDay};
