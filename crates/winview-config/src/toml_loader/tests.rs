//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LayoutMode, WinviewConfig};
use std::path::Path;
use winview_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_winview_config.toml"));
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::FileNotFound(_)));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r##"
[thumbnail]
scale = 0.15
background = "#202020"

[layout]
mode = "flat"
"##,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.thumbnail.scale - 0.15).abs() < f64::EPSILON);
    assert_eq!(config.thumbnail.background, "#202020");
    assert_eq!(config.layout.mode, LayoutMode::Flat);
    // Defaults preserved
    assert_eq!(config.thumbnail.reference_width, 1920);
    assert_eq!(config.icons.size, 32);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(err, ConfigError::ParseError(_)));
}

#[test]
fn load_config_with_invalid_values_keeps_parsed_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[icons]
size = 1000
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.icons.size, 1000);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("winview").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Window Overview");
    assert_eq!(
        config.icons.overrides.get("Alacritty").map(String::as_str),
        Some("Alacritty.png")
    );
}

#[test]
fn default_config_toml_is_valid() {
    let content = default_config_toml();
    let config: WinviewConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.layout.mode, LayoutMode::Grouped);
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("winview"));
        assert!(path_str.ends_with("config.toml"));
    }
}
