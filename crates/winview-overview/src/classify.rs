use winview_common::Monitor;
use winview_platform::ExternalWindow;

/// Whether `window` belongs to `monitor`.
///
/// Only the left edge is tested against the monitor's horizontal span;
/// the vertical position is ignored, so monitors stacked on top of each
/// other are not told apart.
pub fn is_on_monitor(monitor: &Monitor, window: &ExternalWindow) -> bool {
    let x = i64::from(window.frame.x);
    i64::from(monitor.bounds.x) <= x && x < monitor.bounds.right()
}
