//! Icon, layout, and refresh validation.

use crate::schema::WinviewConfig;

use super::helpers::validate_range;

pub(crate) fn validate_icons(errors: &mut Vec<String>, config: &WinviewConfig) {
    validate_range(errors, "icons.size", config.icons.size, 8, 256);
    for (class, path) in &config.icons.overrides {
        if path.trim().is_empty() {
            errors.push(format!("icons.overrides.{class} has an empty path"));
        }
    }
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &WinviewConfig) {
    validate_range(errors, "layout.spacing", config.layout.spacing, 0, 100);
}

pub(crate) fn validate_refresh(errors: &mut Vec<String>, config: &WinviewConfig) {
    let interval = config.refresh.interval_ms;
    if interval != 0 && !(100..=60_000).contains(&interval) {
        errors.push(format!(
            "refresh.interval_ms = {interval} must be 0 or within [100, 60000]"
        ));
    }
}
