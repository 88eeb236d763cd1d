use image::RgbaImage;
use tracing::{debug, warn};
use winview_common::{Monitor, PlatformError, Rect, WindowId};
use x11rb::connection::Connection;
use x11rb::protocol::randr::ConnectionExt as _;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt as _, ImageFormat, Window};

use super::{pixels, props, xid, OrRequest, X11Desktop};
use crate::{DisplayServer, Result, Surface, SurfaceKind};

impl DisplayServer for X11Desktop {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        let reply = self
            .conn
            .randr_get_monitors(self.root(), true)
            .or_request()
            .and_then(|cookie| cookie.reply().or_request());
        match reply {
            Ok(reply) if !reply.monitors.is_empty() => Ok(reply
                .monitors
                .iter()
                .zip(0u32..)
                .map(|(m, number)| {
                    Monitor::new(
                        number,
                        m.x.into(),
                        m.y.into(),
                        m.width.into(),
                        m.height.into(),
                    )
                })
                .collect()),
            Ok(_) => Ok(vec![self.whole_screen()]),
            Err(e) => {
                warn!("RandR monitor query failed, using the whole screen: {e}");
                Ok(vec![self.whole_screen()])
            }
        }
    }

    fn surface_stack(&self) -> Result<Vec<Surface>> {
        let root = self.root();
        let mut ids = props::cardinals(
            &self.conn,
            root,
            self.atoms._NET_CLIENT_LIST_STACKING,
            AtomEnum::WINDOW,
        )?;
        if ids.is_empty() {
            ids = props::cardinals(&self.conn, root, self.atoms._NET_CLIENT_LIST, AtomEnum::WINDOW)?;
        }

        let mut surfaces = Vec::with_capacity(ids.len());
        for id in ids {
            match self.describe_surface(id) {
                Ok(surface) => surfaces.push(surface),
                Err(e) => debug!(window = id, "skipping surface: {e}"),
            }
        }
        Ok(surfaces)
    }

    fn capture_surface(&self, surface: &Surface) -> Result<RgbaImage> {
        let id = xid(surface.id)?;
        let (width, height) = capture_size(&surface.geometry).ok_or_else(|| {
            PlatformError::Image(format!(
                "surface {} has unusable size {}x{}",
                surface.id, surface.geometry.width, surface.geometry.height
            ))
        })?;
        let reply = self
            .conn
            .get_image(ImageFormat::Z_PIXMAP, id, 0, 0, width, height, !0)
            .or_request()?
            .reply()
            .or_request()?;
        pixels::zpixmap_to_rgba(
            reply.depth,
            width,
            height,
            &reply.data,
            self.conn.setup().image_byte_order,
        )
    }
}

impl X11Desktop {
    fn whole_screen(&self) -> Monitor {
        let screen = self.screen();
        Monitor::new(
            0,
            0,
            0,
            screen.width_in_pixels.into(),
            screen.height_in_pixels.into(),
        )
    }

    fn describe_surface(&self, id: Window) -> Result<Surface> {
        let types = props::cardinals(
            &self.conn,
            id,
            self.atoms._NET_WM_WINDOW_TYPE,
            AtomEnum::ATOM,
        )?;
        let kind = match types.first() {
            None => SurfaceKind::Normal,
            Some(&t) if t == self.atoms._NET_WM_WINDOW_TYPE_NORMAL => SurfaceKind::Normal,
            Some(&t) if t == self.atoms._NET_WM_WINDOW_TYPE_DIALOG => SurfaceKind::Dialog,
            Some(&t) if t == self.atoms._NET_WM_WINDOW_TYPE_DOCK => SurfaceKind::Dock,
            Some(_) => SurfaceKind::Other,
        };
        let geometry = self.conn.get_geometry(id).or_request()?.reply().or_request()?;
        Ok(Surface {
            id: WindowId(id.into()),
            kind,
            geometry: Rect::new(
                geometry.x.into(),
                geometry.y.into(),
                geometry.width.into(),
                geometry.height.into(),
            ),
        })
    }
}

/// Width and height for `GetImage`, or `None` when the surface is empty or
/// exceeds the protocol's 16-bit limits.
fn capture_size(geometry: &Rect) -> Option<(u16, u16)> {
    if geometry.is_empty() {
        return None;
    }
    Some((
        u16::try_from(geometry.width).ok()?,
        u16::try_from(geometry.height).ok()?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_size_of_regular_window() {
        assert_eq!(capture_size(&Rect::new(5, 5, 800, 600)), Some((800, 600)));
    }

    #[test]
    fn capture_size_rejects_empty_and_oversized() {
        assert_eq!(capture_size(&Rect::new(0, 0, 0, 600)), None);
        assert_eq!(capture_size(&Rect::new(0, 0, 70_000, 10)), None);
    }
}
