//! Property readers shared by the window-manager and display halves.

use image::{Rgba, RgbaImage};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Atom, ConnectionExt as _, Window};

use super::OrRequest;
use crate::Result;

/// `_NET_WM_DESKTOP` value for windows shown on every workspace.
pub(super) const ALL_DESKTOPS: u32 = 0xFFFF_FFFF;

/// Largest icon edge accepted from `_NET_WM_ICON`.
const MAX_ICON_EDGE: u32 = 1024;

/// Read a format-32 property. Missing or mistyped properties read as empty.
pub(super) fn cardinals(
    conn: &impl Connection,
    window: Window,
    property: impl Into<Atom>,
    type_: impl Into<Atom>,
) -> Result<Vec<u32>> {
    let reply = conn
        .get_property(false, window, property, type_, 0, u32::MAX)
        .or_request()?
        .reply()
        .or_request()?;
    Ok(reply.value32().map(|v| v.collect()).unwrap_or_default())
}

/// Read a format-8 text property.
pub(super) fn text(
    conn: &impl Connection,
    window: Window,
    property: impl Into<Atom>,
    type_: impl Into<Atom>,
) -> Result<Option<String>> {
    let reply = conn
        .get_property(false, window, property, type_, 0, u32::MAX)
        .or_request()?
        .reply()
        .or_request()?;
    if reply.format != 8 || reply.value.is_empty() {
        return Ok(None);
    }
    Ok(Some(String::from_utf8_lossy(&reply.value).into_owned()))
}

/// Class part of a `WM_CLASS` value (`instance\0class\0`).
pub(super) fn class_group(raw: &str) -> Option<&str> {
    raw.split('\0').nth(1).filter(|class| !class.is_empty())
}

/// `_NET_WM_DESKTOP` to an optional workspace index.
pub(super) fn desktop_index(value: Option<u32>) -> Option<u32> {
    value.filter(|&d| d != ALL_DESKTOPS)
}

/// Pick the largest image from a `_NET_WM_ICON` value and convert it from
/// packed ARGB to RGBA.
pub(super) fn largest_icon(data: &[u32]) -> Option<RgbaImage> {
    let mut best: Option<(u32, u32, &[u32])> = None;
    let mut rest = data;
    while let [width, height, tail @ ..] = rest {
        let (width, height) = (*width, *height);
        if width == 0 || height == 0 || width > MAX_ICON_EDGE || height > MAX_ICON_EDGE {
            break;
        }
        let len = (width * height) as usize;
        if tail.len() < len {
            break;
        }
        let (pixels, next) = tail.split_at(len);
        if best.map_or(true, |(w, h, _)| width * height > w * h) {
            best = Some((width, height, pixels));
        }
        rest = next;
    }

    let (width, height, pixels) = best?;
    let mut image = RgbaImage::new(width, height);
    for (pixel, argb) in image.pixels_mut().zip(pixels) {
        *pixel = Rgba([
            (argb >> 16) as u8,
            (argb >> 8) as u8,
            *argb as u8,
            (argb >> 24) as u8,
        ]);
    }
    Some(image)
}
