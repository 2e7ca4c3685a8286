//! WASM bindings for timetable-engine.
//!
//! Exposes weekly layout, SVG/HTML rendering and conflict detection to
//! JavaScript via `wasm-bindgen`. Meetings cross the boundary as a JSON array
//! of `{days, start, duration, payload}` objects, where `payload` is
//! `{title, kind?, instructor?, location?, category?}`.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/timetable_wasm.wasm
//! ```

use serde::Serialize;
use timetable_engine::time::format_twelve_hour;
use timetable_engine::{
    CanvasSize, Conflict, Interval, LayoutConfig, MeetingLabel, MeetingSpec, StyleConfig,
    WeekLayout,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IntervalDto<'a> {
    day: String,
    start_minute: u32,
    end_minute: u32,
    start_time: String,
    end_time: String,
    label: &'a MeetingLabel,
}

impl<'a> From<&'a Interval<MeetingLabel>> for IntervalDto<'a> {
    fn from(interval: &'a Interval<MeetingLabel>) -> Self {
        Self {
            day: interval.day().to_string(),
            start_minute: interval.start_minute(),
            end_minute: interval.end_minute(),
            start_time: format_twelve_hour(interval.start_minute()),
            end_time: format_twelve_hour(interval.end_minute()),
            label: interval.payload(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct EventDto<'a> {
    #[serde(flatten)]
    interval: IntervalDto<'a>,
    column: usize,
    cluster_span: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LayoutDto<'a> {
    start_hour: u32,
    end_hour: u32,
    events: Vec<EventDto<'a>>,
    /// Human-readable reasons for meetings that produced no box.
    skipped: Vec<String>,
}

impl<'a> From<&'a WeekLayout<MeetingLabel>> for LayoutDto<'a> {
    fn from(layout: &'a WeekLayout<MeetingLabel>) -> Self {
        Self {
            start_hour: layout.time_range.start_hour(),
            end_hour: layout.time_range.end_hour(),
            events: layout
                .events
                .iter()
                .map(|e| EventDto {
                    interval: IntervalDto::from(&e.placed.interval),
                    column: e.placed.column,
                    cluster_span: e.placed.cluster_span,
                    x: e.geometry.x,
                    y: e.geometry.y,
                    width: e.geometry.width,
                    height: e.geometry.height,
                })
                .collect(),
            skipped: layout.skipped.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictDto<'a> {
    first: IntervalDto<'a>,
    second: IntervalDto<'a>,
    overlap_minutes: u32,
}

impl<'a> From<&'a Conflict<MeetingLabel>> for ConflictDto<'a> {
    fn from(c: &'a Conflict<MeetingLabel>) -> Self {
        Self {
            first: IntervalDto::from(&c.first),
            second: IntervalDto::from(&c.second),
            overlap_minutes: c.overlap_minutes,
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_meetings_json(json: &str) -> Result<Vec<MeetingSpec<MeetingLabel>>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid meetings JSON: {}", e)))
}

fn layout(meetings_json: &str, width: f64, height: f64) -> Result<WeekLayout<MeetingLabel>, JsValue> {
    if !(width > 0.0 && height > 0.0) {
        return Err(JsValue::from_str(&format!(
            "Canvas size must be positive, got {}x{}",
            width, height
        )));
    }
    let meetings = parse_meetings_json(meetings_json)?;
    Ok(timetable_engine::layout_week(
        &meetings,
        CanvasSize::new(width, height),
        &LayoutConfig::default(),
    ))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out a week of meetings on a `width` x `height` canvas.
///
/// Returns a JSON string `{startHour, endHour, events, skipped}` where each
/// event carries its day, minutes, 12-hour times, label, `column`,
/// `clusterSpan` and box `{x, y, width, height}`.
#[wasm_bindgen(js_name = "layoutSchedule")]
pub fn layout_schedule(meetings_json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    let layout = layout(meetings_json, width, height)?;

    serde_json::to_string(&LayoutDto::from(&layout))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Render a week of meetings as an SVG document.
#[wasm_bindgen(js_name = "renderScheduleSvg")]
pub fn render_schedule_svg(meetings_json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    let layout = layout(meetings_json, width, height)?;
    Ok(timetable_engine::render_svg(&layout, &StyleConfig::default()))
}

/// Render a week of meetings as a standalone HTML document, suitable for
/// printing to PDF from the browser.
#[wasm_bindgen(js_name = "renderScheduleHtml")]
pub fn render_schedule_html(meetings_json: &str, width: f64, height: f64) -> Result<String, JsValue> {
    let layout = layout(meetings_json, width, height)?;
    Ok(timetable_engine::render_html(&layout, &StyleConfig::default()))
}

/// Find all pairs of meetings that overlap on the same day.
///
/// Returns a JSON string containing an array of `{first, second, overlapMinutes}`.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(meetings_json: &str) -> Result<String, JsValue> {
    let meetings = parse_meetings_json(meetings_json)?;
    let projection = timetable_engine::project_meetings(&meetings);
    let conflicts = timetable_engine::find_conflicts(&projection.intervals);

    let dtos: Vec<ConflictDto> = conflicts.iter().map(ConflictDto::from).collect();

    serde_json::to_string(&dtos)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
