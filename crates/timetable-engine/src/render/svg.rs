//! Vector markup output.

use ::svg::node::element as svg_element;
use ::svg::{Document, Node};

use super::{BoxStyle, Canvas, TextAnchor, TextStyle};
use crate::geometry::{CanvasSize, Geometry};

struct Page {
    size: CanvasSize,
    nodes: Vec<Box<dyn Node>>,
}

/// Builds one SVG document. Additional pages are stacked below the first.
#[derive(Default)]
pub struct SvgCanvas {
    pages: Vec<Page>,
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, node: Box<dyn Node>) {
        if self.pages.is_empty() {
            self.start_page(CanvasSize::default());
        }
        if let Some(page) = self.pages.last_mut() {
            page.nodes.push(node);
        }
    }
}

impl Canvas for SvgCanvas {
    fn start_page(&mut self, size: CanvasSize) {
        self.pages.push(Page {
            size,
            nodes: Vec::new(),
        });
    }

    fn draw_rect(&mut self, rect: Geometry, style: &BoxStyle<'_>) {
        let mut node = svg_element::Rectangle::new()
            .set("x", round(rect.x))
            .set("y", round(rect.y))
            .set("width", round(rect.width))
            .set("height", round(rect.height))
            .set("fill", style.fill);
        if let Some(stroke) = style.stroke {
            node = node.set("stroke", stroke).set("stroke-width", 1);
        }
        if style.corner_radius > 0.0 {
            node = node
                .set("rx", style.corner_radius)
                .set("ry", style.corner_radius);
        }
        self.push(Box::new(node));
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle<'_>) {
        let anchor = match style.anchor {
            TextAnchor::Start => "start",
            TextAnchor::Middle => "middle",
            TextAnchor::End => "end",
        };
        let mut node = svg_element::Text::new(text)
            .set("x", round(x))
            .set("y", round(y))
            .set("text-anchor", anchor)
            .set("font-family", style.font_family)
            .set("font-size", style.size)
            .set("fill", style.color);
        if style.bold {
            node = node.set("font-weight", "bold");
        }
        self.push(Box::new(node));
    }

    fn finish(self) -> String {
        let width = self
            .pages
            .iter()
            .map(|p| p.size.width)
            .fold(0.0_f64, f64::max);
        let height: f64 = self.pages.iter().map(|p| p.size.height).sum();

        let mut document = Document::new()
            .set("viewBox", format!("0 0 {} {}", round(width), round(height)))
            .set("width", round(width))
            .set("height", round(height));

        let mut offset = 0.0;
        for page in self.pages {
            let mut group = svg_element::Group::new()
                .set("class", "timetable-page")
                .set("transform", format!("translate(0, {})", round(offset)));
            for node in page.nodes {
                group = group.add(node);
            }
            document = document.add(group);
            offset += page.size.height;
        }

        document.to_string()
    }
}

/// One decimal place keeps output compact and stable across platforms.
fn round(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
