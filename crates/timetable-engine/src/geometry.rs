//! Map placed intervals onto a canvas.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;
use crate::overlap::PlacedInterval;
use crate::projector::WEEKDAY_COLUMNS;
use crate::range::TimeRange;
use crate::time::MINUTES_PER_HOUR;

/// Target drawing surface, in renderer units (px for SVG/HTML, pt or mm for
/// paged output).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

impl CanvasSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

/// Axis-aligned box in canvas units, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Geometry {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Width of one weekday column.
pub fn day_column_width(canvas: CanvasSize, config: &LayoutConfig) -> f64 {
    (canvas.width - config.time_axis_width) / f64::from(WEEKDAY_COLUMNS)
}

/// Height of one hour row.
pub fn hour_height(range: TimeRange, canvas: CanvasSize, config: &LayoutConfig) -> f64 {
    (canvas.height - config.header_height) / f64::from(range.hours())
}

/// Vertical position of a minute-of-day within the grid.
pub fn minute_to_y(minute: u32, range: TimeRange, canvas: CanvasSize, config: &LayoutConfig) -> f64 {
    let hours_from_top = f64::from(minute) / f64::from(MINUTES_PER_HOUR) - f64::from(range.start_hour());
    config.header_height + hours_from_top * hour_height(range, canvas, config)
}

/// Compute the box for one placed interval.
///
/// ```text
/// column_width = day_column_width / cluster_span
/// x      = time_axis_width + day * day_column_width + column * column_width + left_margin
/// width  = column_width - horizontal_margin
/// y      = header_height + (start/60 - range.start_hour) * hour_height
/// height = max((end - start)/60 * hour_height, min_event_height)
/// ```
///
/// Pure in its inputs; the same arguments always produce the same box.
pub fn map_geometry<P>(
    placed: &PlacedInterval<P>,
    range: TimeRange,
    canvas: CanvasSize,
    config: &LayoutConfig,
) -> Geometry {
    let interval = &placed.interval;
    let day_width = day_column_width(canvas, config);
    let column_width = day_width / placed.cluster_span.max(1) as f64;

    let x = config.time_axis_width
        + f64::from(interval.day_index()) * day_width
        + placed.column as f64 * column_width
        + config.left_margin;
    let y = minute_to_y(interval.start_minute(), range, canvas, config);

    let duration_hours = f64::from(interval.duration_minutes()) / f64::from(MINUTES_PER_HOUR);
    let height = (duration_hours * hour_height(range, canvas, config)).max(config.min_event_height);

    Geometry {
        x,
        y,
        width: column_width - config.horizontal_margin,
        height,
    }
}
