//! Main loop and the thumbnail refresh timer.

use std::time::Instant;

use winview_common::Result;
use winview_platform::x11::OrRequest;
use x11rb::connection::Connection;

use super::core::OverviewApp;
use super::types::POLL_INTERVAL;

impl OverviewApp {
    /// Run until the overview window is closed.
    pub fn run(&mut self) -> Result<()> {
        let result = self.event_loop();
        self.shutdown();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        while !self.should_exit {
            while let Some(event) = self.desktop.connection().poll_for_event().or_request()? {
                self.handle_event(event);
            }
            if self.should_exit {
                break;
            }
            self.poll_and_redraw()?;
            std::thread::sleep(POLL_INTERVAL);
        }
        Ok(())
    }

    /// Repaint on expose, otherwise refresh thumbnails when the interval elapses.
    fn poll_and_redraw(&mut self) -> Result<()> {
        let now = Instant::now();
        if self.needs_redraw {
            self.last_refresh = now;
            return self.redraw();
        }
        match self.config.refresh.interval() {
            Some(interval) if now.duration_since(self.last_refresh) >= interval => {
                self.last_refresh = now;
                self.draw_thumbnails()
            }
            _ => Ok(()),
        }
    }
}
