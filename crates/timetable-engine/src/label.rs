//! Text a renderer may attach to a meeting box.
//!
//! The layout engine never looks at payloads; renderers read them through
//! [`Labeled`].

use serde::{Deserialize, Serialize};

/// Read-only view of a payload for drawing.
pub trait Labeled {
    /// First line, always drawn.
    fn title(&self) -> &str;

    /// Short tag drawn in the box corner (section type such as `LEC`).
    fn badge(&self) -> Option<&str> {
        None
    }

    /// Further lines, drawn while they fit.
    fn details(&self) -> Vec<&str> {
        Vec::new()
    }

    /// Key into [`crate::config::StyleConfig::category_colors`].
    fn category(&self) -> Option<&str> {
        None
    }
}

impl Labeled for String {
    fn title(&self) -> &str {
        self
    }
}

impl Labeled for &str {
    fn title(&self) -> &str {
        self
    }
}

/// Payload used by the catalog, the CLI and the WASM bindings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeetingLabel {
    /// Display name, e.g. `"CS 18000"`.
    pub title: String,
    /// Section type, e.g. `"Lecture"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Subject code used for coloring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl MeetingLabel {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

impl Labeled for MeetingLabel {
    fn title(&self) -> &str {
        &self.title
    }

    fn badge(&self) -> Option<&str> {
        let kind = self.kind.as_deref()?.trim();
        if kind.is_empty() {
            return None;
        }
        // First three characters, whatever their byte width.
        let end = kind.char_indices().nth(3).map_or(kind.len(), |(i, _)| i);
        Some(&kind[..end])
    }

    fn details(&self) -> Vec<&str> {
        [self.instructor.as_deref(), self.location.as_deref()]
            .into_iter()
            .flatten()
            .filter(|line| !line.is_empty())
            .collect()
    }

    fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }
}
