//! Conversions between X11 Z-pixmap data and RGBA buffers.
//!
//! Only 24 and 32 bit depths with 32 bits per pixel are handled, which
//! covers TrueColor visuals on every server in practice.

use image::RgbaImage;
use winview_common::PlatformError;
use x11rb::protocol::xproto::ImageOrder;

use crate::Result;

const BYTES_PER_PIXEL: usize = 4;

/// Convert a `GetImage` Z-pixmap reply to RGBA with opaque alpha.
pub fn zpixmap_to_rgba(
    depth: u8,
    width: u16,
    height: u16,
    data: &[u8],
    order: ImageOrder,
) -> Result<RgbaImage> {
    if depth != 24 && depth != 32 {
        return Err(PlatformError::NotSupported(format!(
            "capture of depth {depth} drawables"
        )));
    }
    let (width, height) = (u32::from(width), u32::from(height));
    let needed = width as usize * height as usize * BYTES_PER_PIXEL;
    if data.len() < needed {
        return Err(PlatformError::Image(format!(
            "short image data: {} bytes for {width}x{height}",
            data.len()
        )));
    }

    let mut rgba = Vec::with_capacity(needed);
    for px in data[..needed].chunks_exact(BYTES_PER_PIXEL) {
        let (r, g, b) = if order == ImageOrder::MSB_FIRST {
            (px[1], px[2], px[3])
        } else {
            (px[2], px[1], px[0])
        };
        rgba.extend_from_slice(&[r, g, b, 0xff]);
    }
    RgbaImage::from_raw(width, height, rgba)
        .ok_or_else(|| PlatformError::Image("pixel buffer size mismatch".into()))
}

/// Pack RGBA pixels into Z-pixmap data for `PutImage`, dropping alpha.
pub fn rgba_to_zpixmap(rgba: &[u8], order: ImageOrder) -> Vec<u8> {
    let mut out = Vec::with_capacity(rgba.len());
    for px in rgba.chunks_exact(BYTES_PER_PIXEL) {
        if order == ImageOrder::MSB_FIRST {
            out.extend_from_slice(&[0, px[0], px[1], px[2]]);
        } else {
            out.extend_from_slice(&[px[2], px[1], px[0], 0]);
        }
    }
    out
}
