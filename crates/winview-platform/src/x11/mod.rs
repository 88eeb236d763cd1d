//! X11 implementation of [`WindowManager`](crate::WindowManager) and
//! [`DisplayServer`](crate::DisplayServer).
//!
//! Window-manager state is read from EWMH root and client properties,
//! monitors from RandR 1.5, and pixels with core `GetImage`. Control
//! requests are EWMH client messages sent to the root window, with the
//! source indication set to "pager".

mod atoms;
mod display;
pub mod pixels;
mod props;
mod window_management;

pub use atoms::Atoms;

use tracing::info;
use winview_common::{PlatformError, WindowId};
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{Screen, Window};
use x11rb::rust_connection::RustConnection;

use crate::Result;

/// An X11 session: one connection plus the interned EWMH atoms.
pub struct X11Desktop {
    conn: RustConnection,
    screen_num: usize,
    atoms: Atoms,
}

impl X11Desktop {
    /// Connect to `display`, or to `$DISPLAY` when `None`.
    pub fn connect(display: Option<&str>) -> Result<Self> {
        let (conn, screen_num) =
            x11rb::connect(display).map_err(|e| PlatformError::Connection(e.to_string()))?;
        let atoms = Atoms::new(&conn).or_request()?.reply().or_request()?;
        info!(screen = screen_num, "connected to X server");
        Ok(Self {
            conn,
            screen_num,
            atoms,
        })
    }

    pub fn connection(&self) -> &RustConnection {
        &self.conn
    }

    pub fn screen(&self) -> &Screen {
        &self.conn.setup().roots[self.screen_num]
    }

    pub fn root(&self) -> Window {
        self.screen().root
    }

    pub fn atoms(&self) -> &Atoms {
        &self.atoms
    }
}

/// Map any x11rb error into [`PlatformError::Request`].
pub trait OrRequest<T> {
    fn or_request(self) -> Result<T>;
}

impl<T, E: std::fmt::Display> OrRequest<T> for std::result::Result<T, E> {
    fn or_request(self) -> Result<T> {
        self.map_err(|e| PlatformError::Request(e.to_string()))
    }
}

/// Narrow a [`WindowId`] to an X11 resource id.
pub(crate) fn xid(id: WindowId) -> Result<Window> {
    Window::try_from(id.0)
        .map_err(|_| PlatformError::Request(format!("{id} is not an X11 window id")))
}
