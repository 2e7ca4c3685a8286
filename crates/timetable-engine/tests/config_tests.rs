//! Tests for TOML configuration.

use std::io::Write;

use timetable_engine::{AppConfig, LayoutConfig, StyleConfig, TimetableError};

#[test]
fn empty_document_gives_defaults() {
    let config = AppConfig::from_toml_str("").unwrap();
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.layout.header_height, 60.0);
    assert_eq!(config.layout.time_axis_width, 80.0);
    assert_eq!(config.layout.min_event_height, 12.0);
    assert_eq!(config.style.default_color, "#CFB991");
}

#[test]
fn partial_tables_keep_other_defaults() {
    let config = AppConfig::from_toml_str(
        r##"
[layout]
header_height = 48.0

[style]
title = "Spring 2025"

[style.category_colors]
CS = ["#CFB991", "#B8A47E"]
ECE = ["#4169E1"]
"##,
    )
    .unwrap();

    assert_eq!(config.layout.header_height, 48.0);
    assert_eq!(config.layout.time_axis_width, LayoutConfig::default().time_axis_width);
    assert_eq!(config.style.title.as_deref(), Some("Spring 2025"));
    assert_eq!(config.style.font_family, StyleConfig::default().font_family);
    assert_eq!(config.style.category_colors["CS"].len(), 2);
}

#[test]
fn wrong_type_is_a_config_error() {
    let err = AppConfig::from_toml_str("[layout]\nheader_height = \"tall\"\n").unwrap_err();
    assert!(matches!(err, TimetableError::Config(_)), "{err:?}");
}

#[test]
fn load_reads_a_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[layout]\nmin_event_height = 20.0").unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.layout.min_event_height, 20.0);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = AppConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, TimetableError::Io(_)), "{err:?}");
}

#[test]
fn color_for_walks_the_palette() {
    let mut style = StyleConfig::default();
    style
        .category_colors
        .insert("CS".to_string(), vec!["#a".to_string(), "#b".to_string()]);
    style.category_colors.insert("EMPTY".to_string(), Vec::new());

    assert_eq!(style.color_for(Some("CS"), 0), "#a");
    assert_eq!(style.color_for(Some("CS"), 1), "#b");
    assert_eq!(style.color_for(Some("CS"), 2), "#a");
    assert_eq!(style.color_for(Some("EMPTY"), 0), "#CFB991");
    assert_eq!(style.color_for(Some("BIOL"), 0), "#CFB991");
    assert_eq!(style.color_for(None, 3), "#CFB991");
}
