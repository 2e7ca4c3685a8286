//! Layout and style configuration.
//!
//! All types deserialize from TOML with every field optional:
//!
//! ```toml
//! [layout]
//! header_height = 48.0
//! min_event_height = 16.0
//!
//! [style]
//! default_color = "#CFB991"
//!
//! [style.category_colors]
//! CS = ["#CFB991", "#B8A47E"]
//! ECE = ["#4169E1", "#6495ED"]
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// Top-level configuration: geometry constants plus presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub style: StyleConfig,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| TimetableError::Config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = path.display().to_string(); "Loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Geometry constants for the weekly grid, in canvas units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the day-name header band.
    pub header_height: f64,
    /// Width of the hour-label column on the left.
    pub time_axis_width: f64,
    /// Gap between a column's left edge and its box.
    pub left_margin: f64,
    /// Total horizontal space taken out of each column (both sides).
    pub horizontal_margin: f64,
    /// Floor for box height so short meetings stay legible.
    pub min_event_height: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 60.0,
            time_axis_width: 80.0,
            left_margin: 2.0,
            horizontal_margin: 4.0,
            min_event_height: 12.0,
        }
    }
}

/// Presentation choices, resolved by the caller and injected into renderers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill for meetings whose category has no palette.
    pub default_color: String,
    /// Category (e.g. subject code) to palette. Distinct titles within a
    /// category walk the palette in order of first appearance.
    pub category_colors: BTreeMap<String, Vec<String>>,
    /// Text drawn on top of meeting boxes.
    pub text_color: String,
    /// Text on the grid (day names, hour labels, empty-state message).
    pub label_color: String,
    pub grid_color: String,
    pub header_fill: String,
    pub background: String,
    pub font_family: String,
    /// Optional page heading.
    pub title: Option<String>,
}

impl StyleConfig {
    /// Fill color for the `ordinal`-th distinct title in `category`.
    pub fn color_for(&self, category: Option<&str>, ordinal: usize) -> &str {
        category
            .and_then(|c| self.category_colors.get(c))
            .filter(|palette| !palette.is_empty())
            .map(|palette| palette[ordinal % palette.len()].as_str())
            .unwrap_or(&self.default_color)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_color: "#CFB991".to_string(),
            category_colors: BTreeMap::new(),
            text_color: "#FFFFFF".to_string(),
            label_color: "#3C3C3C".to_string(),
            grid_color: "#E9ECEF".to_string(),
            header_fill: "#F8F9FA".to_string(),
            background: "#FFFFFF".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            title: None,
        }
    }
}
