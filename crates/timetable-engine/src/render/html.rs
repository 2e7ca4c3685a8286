//! Absolutely positioned HTML, for capture by a headless browser.

use std::fmt::Write;

use super::{BoxStyle, Canvas, TextAnchor, TextStyle};
use crate::geometry::{CanvasSize, Geometry};

/// Builds a standalone HTML document, one `<div class="timetable-page">`
/// per page.
#[derive(Debug, Default)]
pub struct HtmlCanvas {
    title: Option<String>,
    body: String,
    page_open: bool,
}

impl HtmlCanvas {
    pub fn new(title: Option<String>) -> Self {
        Self {
            title,
            ..Self::default()
        }
    }

    fn close_page(&mut self) {
        if self.page_open {
            self.body.push_str("</div>\n");
            self.page_open = false;
        }
    }

    fn ensure_page(&mut self) {
        if !self.page_open {
            self.start_page(CanvasSize::default());
        }
    }
}

impl Canvas for HtmlCanvas {
    fn start_page(&mut self, size: CanvasSize) {
        self.close_page();
        // Writing to a String cannot fail.
        let _ = writeln!(
            self.body,
            r#"<div class="timetable-page" style="position:relative;width:{:.1}px;height:{:.1}px;overflow:hidden;page-break-after:always">"#,
            size.width, size.height
        );
        self.page_open = true;
    }

    fn draw_rect(&mut self, rect: Geometry, style: &BoxStyle<'_>) {
        self.ensure_page();
        let border = style
            .stroke
            .map(|stroke| format!("border:1px solid {};box-sizing:border-box;", escape(stroke)))
            .unwrap_or_default();
        let _ = writeln!(
            self.body,
            r#"<div style="position:absolute;left:{:.1}px;top:{:.1}px;width:{:.1}px;height:{:.1}px;background:{};{}border-radius:{:.1}px"></div>"#,
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            escape(style.fill),
            border,
            style.corner_radius
        );
    }

    fn draw_text(&mut self, x: f64, y: f64, text: &str, style: &TextStyle<'_>) {
        self.ensure_page();
        let shift = match style.anchor {
            TextAnchor::Start => "0",
            TextAnchor::Middle => "-50%",
            TextAnchor::End => "-100%",
        };
        let weight = if style.bold { "bold" } else { "normal" };
        // Box top sits one font size above the baseline.
        let _ = writeln!(
            self.body,
            r#"<div style="position:absolute;left:{:.1}px;top:{:.1}px;transform:translateX({});white-space:nowrap;line-height:1;color:{};font-family:{};font-size:{:.1}px;font-weight:{}">{}</div>"#,
            x,
            y - style.size,
            shift,
            escape(style.color),
            escape(style.font_family),
            style.size,
            weight,
            escape(text)
        );
    }

    fn finish(mut self) -> String {
        self.close_page();
        let title = escape(self.title.as_deref().unwrap_or("Weekly schedule"));
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body style=\"margin:0\">\n{}</body>\n</html>\n",
            self.body
        )
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
