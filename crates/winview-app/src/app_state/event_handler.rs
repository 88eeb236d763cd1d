//! X event handling.

use tracing::{debug, info, warn};
use winview_overview::dispatch;
use x11rb::protocol::xproto::{ButtonPressEvent, ClientMessageEvent};
use x11rb::protocol::Event;

use super::core::OverviewApp;

/// Primary pointer button.
const LEFT_BUTTON: u8 = 1;

impl OverviewApp {
    pub(super) fn handle_event(&mut self, event: Event) {
        match event {
            Event::Expose(e) if e.count == 0 => self.needs_redraw = true,
            Event::ButtonPress(e) => self.handle_click(&e),
            Event::ClientMessage(e) => self.handle_client_message(&e),
            Event::Error(e) => warn!("X error: {e:?}"),
            _ => {}
        }
    }

    fn handle_click(&mut self, event: &ButtonPressEvent) {
        if event.detail != LEFT_BUTTON {
            return;
        }
        let (x, y) = (i32::from(event.event_x), i32::from(event.event_y));
        match self.placement.hit(x, y) {
            Some(action) => dispatch(&self.desktop, action, event.time),
            None => debug!(x, y, "click outside any button"),
        }
    }

    fn handle_client_message(&mut self, event: &ClientMessageEvent) {
        let atoms = self.desktop.atoms();
        if event.type_ == atoms.WM_PROTOCOLS
            && event.data.as_data32()[0] == atoms.WM_DELETE_WINDOW
        {
            info!("Overview window closed");
            self.should_exit = true;
        }
    }
}
