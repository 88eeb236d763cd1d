//! Drawing: labels, buttons, icons, and thumbnails.

use image::RgbaImage;
use tracing::{debug, warn};
use winview_common::{Color, Rect, Result};
use winview_overview::{capture_screenshot, render_thumbnail, Button, ButtonKind, Label};
use winview_platform::x11::pixels::rgba_to_zpixmap;
use winview_platform::x11::OrRequest;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{ConnectionExt as _, ImageFormat};

use super::core::OverviewApp;
use super::types::{saturate_i16, x11_rect, MAX_TEXT8};

impl OverviewApp {
    /// Repaint the whole window.
    pub(super) fn redraw(&mut self) -> Result<()> {
        let conn = self.desktop.connection();
        conn.clear_area(false, self.view.window, 0, 0, 0, 0).or_request()?;

        for label in &self.placement.labels {
            self.draw_label(label)?;
        }
        for button in &self.placement.buttons {
            self.draw_button(button)?;
        }
        self.draw_thumbnails()?;
        self.needs_redraw = false;
        Ok(())
    }

    /// Re-read window state and surfaces, then repaint every thumbnail.
    pub(super) fn draw_thumbnails(&mut self) -> Result<()> {
        if let Err(e) = self.snapshot.refresh(&self.desktop) {
            warn!("Desktop state unavailable, keeping the previous one: {e}");
        }

        for slot in &self.placement.thumbnails {
            let capture = self
                .snapshot
                .window(slot.window)
                .and_then(|w| capture_screenshot(&self.desktop, &self.snapshot.surfaces, w));
            let Some(pixmap) =
                render_thumbnail(&self.thumbnail, self.palette.thumbnail, capture.as_ref())
            else {
                debug!(window = %slot.window, "thumbnail too large to allocate");
                continue;
            };
            self.put_rgba(&slot.rect, pixmap.width(), pixmap.height(), pixmap.data())?;
        }
        self.desktop.connection().flush().or_request()?;
        Ok(())
    }

    fn draw_label(&self, label: &Label) -> Result<()> {
        let metrics = self.view.font_metrics;
        self.draw_text(
            &label.text,
            label.rect.x,
            label.rect.y + metrics.ascent as i32,
        )
    }

    fn draw_button(&self, button: &Button) -> Result<()> {
        let conn = self.desktop.connection();
        let outline = Rect::new(
            button.rect.x,
            button.rect.y,
            button.rect.width.saturating_sub(1),
            button.rect.height.saturating_sub(1),
        );
        conn.poly_rectangle(self.view.window, self.view.gc, &[x11_rect(&outline)])
            .or_request()?;

        match button.kind {
            ButtonKind::Icon(window) => {
                if let Some(icon) = self.icons.get(&window) {
                    self.draw_icon(&button.rect, icon)?;
                }
            }
            ButtonKind::Close => {
                let metrics = self.view.font_metrics;
                let x = button.rect.x
                    + (button.rect.width.saturating_sub(metrics.char_width) / 2) as i32;
                let y = button.rect.y
                    + (button.rect.height.saturating_sub(metrics.line_height()) / 2) as i32
                    + metrics.ascent as i32;
                self.draw_text("X", x, y)?;
            }
        }
        Ok(())
    }

    /// Icons carry alpha; blend them over the window background first.
    fn draw_icon(&self, rect: &Rect, icon: &RgbaImage) -> Result<()> {
        let flattened = flatten(icon, self.palette.background);
        self.put_rgba(rect, icon.width(), icon.height(), &flattened)
    }

    fn draw_text(&self, text: &str, x: i32, baseline: i32) -> Result<()> {
        let bytes = text.as_bytes();
        let bytes = &bytes[..bytes.len().min(MAX_TEXT8)];
        self.desktop
            .connection()
            .image_text8(
                self.view.window,
                self.view.gc,
                saturate_i16(x),
                saturate_i16(baseline),
                bytes,
            )
            .or_request()?;
        Ok(())
    }

    fn put_rgba(&self, rect: &Rect, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
        let conn = self.desktop.connection();
        let (Ok(width), Ok(height)) = (u16::try_from(width), u16::try_from(height)) else {
            debug!(width, height, "image too large for PutImage");
            return Ok(());
        };
        let data = rgba_to_zpixmap(rgba, conn.setup().image_byte_order);
        conn.put_image(
            ImageFormat::Z_PIXMAP,
            self.view.window,
            self.view.gc,
            width,
            height,
            saturate_i16(rect.x),
            saturate_i16(rect.y),
            0,
            self.desktop.screen().root_depth,
            &data,
        )
        .or_request()?;
        Ok(())
    }
}

/// Composite straight-alpha RGBA over an opaque background colour.
fn flatten(icon: &RgbaImage, background: Color) -> Vec<u8> {
    let blend = |fg: u8, bg: u8, alpha: u8| -> u8 {
        let (fg, bg, alpha) = (u32::from(fg), u32::from(bg), u32::from(alpha));
        ((fg * alpha + bg * (255 - alpha) + 127) / 255) as u8
    };
    icon.pixels()
        .flat_map(|p| {
            let [r, g, b, a] = p.0;
            [
                blend(r, background.r, a),
                blend(g, background.g, a),
                blend(b, background.b, a),
                255,
            ]
        })
        .collect()
}
