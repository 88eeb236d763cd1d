//! Window-management and display-service access.
//!
//! Both services are traits so the overview can be driven by the real X11
//! session or by [`fake::FakeDesktop`] in tests.

pub mod fake;
mod types;
pub mod x11;

pub use fake::FakeDesktop;
pub use types::*;
pub use x11::X11Desktop;

use image::RgbaImage;
use winview_common::{Monitor, PlatformError, WindowId, WorkspaceId};

pub type Result<T> = std::result::Result<T, PlatformError>;

/// X server timestamp of the user event that caused a request.
pub type Timestamp = u32;

/// Introspection and control of the windows the window manager tracks.
pub trait WindowManager {
    /// Every managed window, in the window manager's client-list order.
    fn list_windows(&self) -> Result<Vec<ExternalWindow>>;
    fn list_workspaces(&self) -> Result<Vec<Workspace>>;
    /// The window's own icon, if it publishes one.
    fn window_icon(&self, window: WindowId) -> Result<Option<RgbaImage>>;
    fn activate_workspace(&self, workspace: WorkspaceId, time: Timestamp) -> Result<()>;
    fn activate_window(&self, window: WindowId, time: Timestamp) -> Result<()>;
    fn close_window(&self, window: WindowId, time: Timestamp) -> Result<()>;
}

/// Monitors, on-screen surfaces, and pixel read-back.
pub trait DisplayServer {
    fn list_monitors(&self) -> Result<Vec<Monitor>>;
    /// On-screen surfaces, bottom to top.
    fn surface_stack(&self) -> Result<Vec<Surface>>;
    /// Current contents of the surface at its reported size.
    fn capture_surface(&self, surface: &Surface) -> Result<RgbaImage>;
}
