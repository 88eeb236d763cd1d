use image::RgbaImage;
use tracing::debug;
use winview_platform::{DisplayServer, ExternalWindow};

use crate::snapshot::SurfaceIndex;

/// Current pixels of `window`, or `None` when there is nothing to show.
///
/// Minimized windows, windows without a normal surface, and windows that
/// vanished or cannot be read all yield `None`.
pub fn capture_screenshot(
    display: &dyn DisplayServer,
    surfaces: &SurfaceIndex,
    window: &ExternalWindow,
) -> Option<RgbaImage> {
    if window.is_minimized {
        return None;
    }
    let Some(surface) = surfaces.normal(window.id) else {
        debug!(window = %window.id, "no normal surface");
        return None;
    };
    match display.capture_surface(surface) {
        Ok(image) => Some(image),
        Err(e) => {
            debug!(window = %window.id, "capture failed: {e}");
            None
        }
    }
}
