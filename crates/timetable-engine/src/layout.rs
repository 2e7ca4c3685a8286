//! End-to-end weekly layout: meetings in, positioned boxes out.

use log::debug;
use serde::Serialize;

use crate::config::LayoutConfig;
use crate::geometry::{map_geometry, CanvasSize, Geometry};
use crate::overlap::{resolve_overlaps, PlacedInterval};
use crate::projector::{project_meetings, MeetingSpec, SkippedMeeting};
use crate::range::{compute_time_range, TimeRange};

/// A placed interval together with its box on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionedInterval<P> {
    #[serde(flatten)]
    pub placed: PlacedInterval<P>,
    pub geometry: Geometry,
}

/// Everything a renderer needs to draw one week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekLayout<P> {
    pub time_range: TimeRange,
    pub canvas: CanvasSize,
    /// Projection order.
    pub events: Vec<PositionedInterval<P>>,
    /// Meetings that produced no interval, see [`crate::projector`].
    pub skipped: Vec<SkippedMeeting>,
    /// Grid constants the boxes were mapped with; renderers draw the grid
    /// from the same values.
    #[serde(skip)]
    pub config: LayoutConfig,
}

impl<P> WeekLayout<P> {
    /// True when no interval survived projection ("no classes to display").
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Project, range, resolve overlaps and map geometry in one call.
pub fn layout_week<P: Clone>(
    meetings: &[MeetingSpec<P>],
    canvas: CanvasSize,
    config: &LayoutConfig,
) -> WeekLayout<P> {
    let projection = project_meetings(meetings);
    let time_range = compute_time_range(&projection.intervals);
    let placed = resolve_overlaps(projection.intervals);

    let events: Vec<PositionedInterval<P>> = placed
        .into_iter()
        .map(|placed| {
            let geometry = map_geometry(&placed, time_range, canvas, config);
            PositionedInterval { placed, geometry }
        })
        .collect();

    debug!(
        events = events.len(),
        start_hour = time_range.start_hour(),
        end_hour = time_range.end_hour();
        "Laid out week"
    );

    WeekLayout {
        time_range,
        canvas,
        events,
        skipped: projection.skipped,
        config: config.clone(),
    }
}
