//! Thumbnail composition.
//!
//! A thumbnail is recomposed from scratch on every repaint: fill with the
//! background colour, then paint the scaled screenshot centred in the box.

use image::RgbaImage;
use tiny_skia::{FilterQuality, IntSize, Pixmap, PixmapPaint, Transform};
use tracing::debug;
use winview_common::Color;
use winview_config::ThumbnailConfig;

/// Thumbnail box size and the factor screenshots are scaled by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbnailGeometry {
    pub width: u32,
    pub height: u32,
    /// `scale * shrink`; keeps a full-screen window clear of the box edges.
    pub factor: f32,
}

impl ThumbnailGeometry {
    pub fn from_config(config: &ThumbnailConfig) -> Self {
        let edge = |reference: u32| ((f64::from(reference) * config.scale).round() as u32).max(1);
        Self {
            width: edge(config.reference_width),
            height: edge(config.reference_height),
            factor: (config.scale * config.shrink) as f32,
        }
    }
}

impl Default for ThumbnailGeometry {
    fn default() -> Self {
        Self::from_config(&ThumbnailConfig::default())
    }
}

/// Compose one thumbnail. Returns `None` only if the geometry is too large
/// to allocate.
pub fn render_thumbnail(
    geometry: &ThumbnailGeometry,
    background: Color,
    capture: Option<&RgbaImage>,
) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(geometry.width, geometry.height)?;
    pixmap.fill(tiny_skia::Color::from_rgba8(
        background.r,
        background.g,
        background.b,
        background.a,
    ));

    let Some(capture) = capture else {
        return Some(pixmap);
    };
    let Some(source) = capture_pixmap(capture) else {
        debug!("empty capture, leaving thumbnail blank");
        return Some(pixmap);
    };

    let scaled_w = capture.width() as f32 * geometry.factor;
    let scaled_h = capture.height() as f32 * geometry.factor;
    let x_offset = (geometry.width as f32 - scaled_w) / 2.0;
    let y_offset = (geometry.height as f32 - scaled_h) / 2.0;
    if x_offset <= 0.0 || y_offset <= 0.0 {
        debug!(x_offset, y_offset, "screenshot overflows thumbnail");
    }

    let transform =
        Transform::from_scale(geometry.factor, geometry.factor).post_translate(x_offset, y_offset);
    pixmap.draw_pixmap(
        0,
        0,
        source.as_ref(),
        &PixmapPaint {
            quality: FilterQuality::Bicubic,
            ..PixmapPaint::default()
        },
        transform,
        None,
    );
    Some(pixmap)
}

/// Wrap captured pixels as a pixmap. Captures are opaque, so straight and
/// premultiplied alpha coincide.
fn capture_pixmap(capture: &RgbaImage) -> Option<Pixmap> {
    let size = IntSize::from_wh(capture.width(), capture.height())?;
    Pixmap::from_vec(capture.as_raw().clone(), size)
}
