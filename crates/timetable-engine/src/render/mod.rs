//! Draw a [`WeekLayout`] onto any surface that can draw boxes and text.
//!
//! The grid, hour labels and meeting boxes are computed once in
//! [`render_week`]; each output format only implements [`Canvas`].

mod html;
mod svg;

pub use self::html::HtmlCanvas;
pub use self::svg::SvgCanvas;

use std::collections::HashMap;

use chrono::Weekday;

use crate::config::{LayoutConfig, StyleConfig};
use crate::geometry::{day_column_width, minute_to_y, CanvasSize, Geometry};
use crate::label::Labeled;
use crate::layout::{PositionedInterval, WeekLayout};
use crate::projector::WEEKDAY_COLUMNS;
use crate::time::{format_hour_label, weekday_from_index, MINUTES_PER_HOUR};

/// Message drawn when no meeting survived projection.
pub const EMPTY_SCHEDULE_MESSAGE: &str = "No classes to display";

const GRID_LINE: f64 = 1.0;
const LABEL_SIZE: f64 = 12.0;
const HEADER_SIZE: f64 = 14.0;
const TITLE_SIZE: f64 = 12.0;
const DETAIL_SIZE: f64 = 10.0;
const BADGE_SIZE: f64 = 8.0;
const BADGE_WIDTH: f64 = 24.0;
const BADGE_HEIGHT: f64 = 12.0;
const TEXT_INSET: f64 = 4.0;
const LINE_GAP: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxStyle<'a> {
    pub fill: &'a str,
    pub stroke: Option<&'a str>,
    pub corner_radius: f64,
}

/// `(x, y)` passed alongside a `TextStyle` is the baseline anchor point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle<'a> {
    pub color: &'a str,
    pub size: f64,
    pub bold: bool,
    pub anchor: TextAnchor,
    pub font_family: &'a str,
}

/// Drawing capabilities a renderer must provide.
pub trait Canvas {
    /// Begin a new page; every later call draws onto it.
    fn start_page(&mut self, size: CanvasSize);

    fn draw_rect(&mut self, rect: Geometry, style: &BoxStyle<'_>);

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle<'_>);

    /// Serialize everything drawn so far.
    fn finish(self) -> String;
}

/// Draw one week: background, day headers, hour grid, then every meeting.
///
/// An empty layout gets the grid plus [`EMPTY_SCHEDULE_MESSAGE`] instead of
/// a blank canvas. The grid uses `layout.config`, so it always lines up with
/// the event boxes.
pub fn render_week<C: Canvas, P: Labeled>(canvas: &mut C, layout: &WeekLayout<P>, style: &StyleConfig) {
    let layout_config = &layout.config;
    let size = layout.canvas;
    canvas.start_page(size);
    canvas.draw_rect(
        Geometry {
            x: 0.0,
            y: 0.0,
            width: size.width,
            height: size.height,
        },
        &BoxStyle {
            fill: &style.background,
            stroke: None,
            corner_radius: 0.0,
        },
    );

    draw_grid(canvas, layout, layout_config, style);

    if layout.is_empty() {
        let text = TextStyle {
            color: &style.label_color,
            size: HEADER_SIZE,
            bold: false,
            anchor: TextAnchor::Middle,
            font_family: &style.font_family,
        };
        let x = layout_config.time_axis_width + (size.width - layout_config.time_axis_width) / 2.0;
        let y = layout_config.header_height + (size.height - layout_config.header_height) / 2.0;
        canvas.draw_text(x, y, EMPTY_SCHEDULE_MESSAGE, &text);
        return;
    }

    let mut palette = PaletteIndex::default();
    for event in &layout.events {
        let payload = event.placed.interval.payload();
        let ordinal = palette.ordinal(payload.category(), payload.title());
        let fill = style.color_for(payload.category(), ordinal);
        draw_event(canvas, event, fill, style);
    }
}

fn draw_grid<C: Canvas, P>(
    canvas: &mut C,
    layout: &WeekLayout<P>,
    config: &LayoutConfig,
    style: &StyleConfig,
) {
    let size = layout.canvas;
    let day_width = day_column_width(size, config);
    let header = BoxStyle {
        fill: &style.header_fill,
        stroke: Some(&style.grid_color),
        corner_radius: 0.0,
    };
    let line = BoxStyle {
        fill: &style.grid_color,
        stroke: None,
        corner_radius: 0.0,
    };
    let label = TextStyle {
        color: &style.label_color,
        size: LABEL_SIZE,
        bold: false,
        anchor: TextAnchor::Middle,
        font_family: &style.font_family,
    };

    // Time axis column.
    canvas.draw_rect(
        Geometry {
            x: 0.0,
            y: 0.0,
            width: config.time_axis_width,
            height: size.height,
        },
        &header,
    );
    if let Some(title) = &style.title {
        canvas.draw_text(
            config.time_axis_width / 2.0,
            config.header_height / 2.0,
            title,
            &TextStyle { bold: true, ..label },
        );
    }

    for (day, index) in (0..WEEKDAY_COLUMNS).filter_map(|i| weekday_from_index(i).map(|d| (d, i))) {
        let x = config.time_axis_width + f64::from(index) * day_width;
        canvas.draw_rect(
            Geometry {
                x,
                y: 0.0,
                width: day_width,
                height: config.header_height,
            },
            &header,
        );
        canvas.draw_text(
            x + day_width / 2.0,
            config.header_height * 0.6,
            day_name(day),
            &TextStyle {
                size: HEADER_SIZE,
                bold: true,
                ..label
            },
        );
    }

    for hour in layout.time_range.hour_marks() {
        let y = minute_to_y(hour * MINUTES_PER_HOUR, layout.time_range, size, config);
        canvas.draw_rect(
            Geometry {
                x: config.time_axis_width,
                y: y - GRID_LINE / 2.0,
                width: size.width - config.time_axis_width,
                height: GRID_LINE,
            },
            &line,
        );
        canvas.draw_text(
            config.time_axis_width / 2.0,
            y + LABEL_SIZE / 3.0,
            &format_hour_label(hour),
            &label,
        );
    }

    for index in 0..=WEEKDAY_COLUMNS {
        let x = config.time_axis_width + f64::from(index) * day_width;
        canvas.draw_rect(
            Geometry {
                x: x - GRID_LINE / 2.0,
                y: 0.0,
                width: GRID_LINE,
                height: size.height,
            },
            &line,
        );
    }
}

fn draw_event<C: Canvas, P: Labeled>(
    canvas: &mut C,
    event: &PositionedInterval<P>,
    fill: &str,
    style: &StyleConfig,
) {
    let payload = event.placed.interval.payload();
    let rect = event.geometry;

    canvas.draw_rect(
        rect,
        &BoxStyle {
            fill,
            stroke: Some(&style.background),
            corner_radius: 4.0,
        },
    );

    let text = TextStyle {
        color: &style.text_color,
        size: TITLE_SIZE,
        bold: true,
        anchor: TextAnchor::Start,
        font_family: &style.font_family,
    };
    let left = rect.x + TEXT_INSET;
    let bottom = rect.y + rect.height;

    let mut baseline = rect.y + TEXT_INSET + TITLE_SIZE;
    canvas.draw_text(left, baseline, payload.title(), &text);

    if let Some(badge) = payload.badge() {
        if rect.height > BADGE_HEIGHT + 2.0 * TEXT_INSET && rect.width > 2.0 * BADGE_WIDTH {
            let badge_rect = Geometry {
                x: rect.x + rect.width - BADGE_WIDTH - TEXT_INSET,
                y: rect.y + TEXT_INSET,
                width: BADGE_WIDTH,
                height: BADGE_HEIGHT,
            };
            canvas.draw_rect(
                badge_rect,
                &BoxStyle {
                    fill: "#000000",
                    stroke: None,
                    corner_radius: 2.0,
                },
            );
            canvas.draw_text(
                badge_rect.x + BADGE_WIDTH / 2.0,
                badge_rect.y + BADGE_HEIGHT - 3.0,
                &badge.to_uppercase(),
                &TextStyle {
                    color: &style.default_color,
                    size: BADGE_SIZE,
                    anchor: TextAnchor::Middle,
                    ..text
                },
            );
        }
    }

    for detail in payload.details() {
        let next = baseline + LINE_GAP + DETAIL_SIZE;
        if next > bottom - LINE_GAP {
            break;
        }
        baseline = next;
        canvas.draw_text(
            left,
            baseline,
            detail,
            &TextStyle {
                size: DETAIL_SIZE,
                bold: false,
                ..text
            },
        );
    }
}

fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Hands out palette positions: each distinct title within a category gets
/// the next slot, in order of first appearance.
#[derive(Debug, Default)]
struct PaletteIndex {
    seen: HashMap<String, Vec<String>>,
}

impl PaletteIndex {
    fn ordinal(&mut self, category: Option<&str>, title: &str) -> usize {
        let titles = self.seen.entry(category.unwrap_or_default().to_string()).or_default();
        match titles.iter().position(|t| t == title) {
            Some(pos) => pos,
            None => {
                titles.push(title.to_string());
                titles.len() - 1
            }
        }
    }
}

/// Render a layout to an SVG document.
pub fn render_svg<P: Labeled>(layout: &WeekLayout<P>, style: &StyleConfig) -> String {
    let mut canvas = SvgCanvas::new();
    render_week(&mut canvas, layout, style);
    canvas.finish()
}

/// Render a layout to a standalone HTML document.
pub fn render_html<P: Labeled>(layout: &WeekLayout<P>, style: &StyleConfig) -> String {
    let mut canvas = HtmlCanvas::new(style.title.clone());
    render_week(&mut canvas, layout, style);
    canvas.finish()
}
