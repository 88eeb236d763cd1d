//! Thumbnail geometry validation.

use crate::schema::WinviewConfig;

use super::helpers::{validate_color, validate_range, validate_range_f64};

/// Validate the reference size, scale factors, and fill colour.
pub(crate) fn validate_thumbnail(errors: &mut Vec<String>, config: &WinviewConfig) {
    let thumb = &config.thumbnail;
    validate_range(
        errors,
        "thumbnail.reference_width",
        thumb.reference_width,
        100,
        16384,
    );
    validate_range(
        errors,
        "thumbnail.reference_height",
        thumb.reference_height,
        100,
        16384,
    );
    validate_range_f64(errors, "thumbnail.scale", thumb.scale, 0.01, 1.0);
    validate_range_f64(errors, "thumbnail.shrink", thumb.shrink, 0.1, 1.0);
    validate_color(errors, "thumbnail.background", &thumb.background);
}
