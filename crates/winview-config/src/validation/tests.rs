//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = WinviewConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_scale_too_large() {
    let mut config = WinviewConfig::default();
    config.thumbnail.scale = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thumbnail.scale"));
}

#[test]
fn catches_scale_nan() {
    let mut config = WinviewConfig::default();
    config.thumbnail.scale = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thumbnail.scale"));
}

#[test]
fn catches_shrink_zero() {
    let mut config = WinviewConfig::default();
    config.thumbnail.shrink = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thumbnail.shrink"));
}

#[test]
fn catches_reference_width_too_small() {
    let mut config = WinviewConfig::default();
    config.thumbnail.reference_width = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thumbnail.reference_width"));
}

#[test]
fn catches_bad_background_colour() {
    let mut config = WinviewConfig::default();
    config.thumbnail.background = "white".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("thumbnail.background"));
}

#[test]
fn catches_bad_window_text_colour() {
    let mut config = WinviewConfig::default();
    config.window.text = "#12".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.text"));
}

#[test]
fn catches_icon_size_out_of_range() {
    let mut config = WinviewConfig::default();
    config.icons.size = 4;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("icons.size"));
}

#[test]
fn catches_empty_override_path() {
    let mut config = WinviewConfig::default();
    config.icons.overrides.insert("Firefox".into(), "  ".into());
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("icons.overrides.Firefox"));
}

#[test]
fn catches_spacing_too_large() {
    let mut config = WinviewConfig::default();
    config.layout.spacing = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.spacing"));
}

#[test]
fn refresh_zero_is_allowed() {
    let mut config = WinviewConfig::default();
    config.refresh.interval_ms = 0;
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_refresh_too_fast() {
    let mut config = WinviewConfig::default();
    config.refresh.interval_ms = 5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("refresh.interval_ms"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = WinviewConfig::default();
    config.icons.size = 0;
    config.layout.spacing = 1000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("icons.size"));
    assert!(err.contains("layout.spacing"));
    assert!(err.contains("; "));
}

#[test]
fn non_ascii_colour_is_reported_not_fatal() {
    let mut config = WinviewConfig::default();
    config.window.text = "aé123".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.text"));
}
