//! Internal types and constants for the app state module.

use std::time::Duration;

use winview_common::{Color, Rect};
use winview_config::WinviewConfig;
use winview_overview::{Metrics, Placement, ThumbnailGeometry};
use x11rb::protocol::xproto::{Font, Gcontext, Rectangle, Window};

/// How often to poll for X events.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

/// Core font used for every label.
pub(super) const FONT_NAME: &[u8] = b"fixed";

/// `WM_CLASS` of the overview window.
pub(super) const WM_CLASS: &[u8] = b"winview\0Winview\0";

/// Longest string `ImageText8` accepts.
pub(super) const MAX_TEXT8: usize = 255;

/// Metrics of the opened core font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct FontMetrics {
    pub ascent: u32,
    pub descent: u32,
    pub char_width: u32,
}

impl FontMetrics {
    pub fn line_height(&self) -> u32 {
        self.ascent + self.descent
    }
}

/// Server-side resources of the overview window.
#[derive(Debug, Clone, Copy)]
pub(super) struct View {
    pub window: Window,
    pub gc: Gcontext,
    pub font: Font,
    pub font_metrics: FontMetrics,
    pub width: u16,
    pub height: u16,
}

/// Resolved colours.
#[derive(Debug, Clone, Copy)]
pub(super) struct Palette {
    pub background: Color,
    pub text: Color,
    pub thumbnail: Color,
}

impl Palette {
    pub fn from_config(config: &WinviewConfig) -> Self {
        let parse = |hex: &str, fallback: Color| Color::from_hex(hex).unwrap_or(fallback);
        Self {
            background: parse(&config.window.background, Color::from_rgba(0xec, 0xec, 0xec, 0xff)),
            text: parse(&config.window.text, Color::BLACK),
            thumbnail: parse(&config.thumbnail.background, Color::WHITE),
        }
    }
}

pub(super) fn layout_metrics(
    config: &WinviewConfig,
    thumbnail: &ThumbnailGeometry,
    font: &FontMetrics,
) -> Metrics {
    Metrics {
        spacing: config.layout.spacing,
        indent: Metrics::TAB_CHARS * font.char_width,
        icon_size: config.icons.size,
        char_width: font.char_width,
        line_height: font.line_height(),
        thumbnail_width: thumbnail.width,
        thumbnail_height: thumbnail.height,
    }
}

/// Window size: the content extent, but never below the configured size.
pub(super) fn window_size(placement: &Placement, config: &WinviewConfig) -> (u16, u16) {
    let (width, height) = placement.size();
    let clamp = |v: u32| u16::try_from(v).unwrap_or(u16::MAX).max(1);
    (
        clamp(width.max(config.window.default_width)),
        clamp(height.max(config.window.default_height)),
    )
}

/// Top-left corner that centres a `width` x `height` window in `area`.
/// A window larger than the area is pinned to its top-left corner.
pub(super) fn centred_origin(area: &Rect, width: u16, height: u16) -> (i16, i16) {
    let offset = |extent: u32, size: u16| (extent.saturating_sub(u32::from(size)) / 2) as i32;
    (
        saturate_i16(area.x.saturating_add(offset(area.width, width))),
        saturate_i16(area.y.saturating_add(offset(area.height, height))),
    )
}

/// Protocol rectangle, saturated to the 16-bit coordinate space.
pub(super) fn x11_rect(rect: &Rect) -> Rectangle {
    Rectangle {
        x: saturate_i16(rect.x),
        y: saturate_i16(rect.y),
        width: u16::try_from(rect.width).unwrap_or(u16::MAX),
        height: u16::try_from(rect.height).unwrap_or(u16::MAX),
    }
}

pub(super) fn saturate_i16(v: i32) -> i16 {
    v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}
