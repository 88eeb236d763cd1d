//! Release server-side resources.

use tracing::debug;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::ConnectionExt as _;

use super::core::OverviewApp;

impl OverviewApp {
    /// Free the GC and font and destroy the window. Errors only mean the
    /// connection is already gone.
    pub(super) fn shutdown(&mut self) {
        let conn = self.desktop.connection();
        let view = self.view;
        let result = conn
            .free_gc(view.gc)
            .and_then(|_| conn.close_font(view.font))
            .and_then(|_| conn.destroy_window(view.window))
            .and_then(|_| conn.flush());
        if let Err(e) = result {
            debug!("cleanup failed: {e}");
        }
    }
}
