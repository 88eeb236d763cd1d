//! Overview window validation (minimum size, colours).

use crate::schema::WinviewConfig;

use super::helpers::{validate_color, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &WinviewConfig) {
    validate_range(
        errors,
        "window.default_width",
        config.window.default_width,
        100,
        16384,
    );
    validate_range(
        errors,
        "window.default_height",
        config.window.default_height,
        100,
        16384,
    );
    validate_color(errors, "window.background", &config.window.background);
    validate_color(errors, "window.text", &config.window.text);
}
