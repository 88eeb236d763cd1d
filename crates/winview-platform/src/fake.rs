//! In-memory desktop.
//!
//! Serves windows, workspaces, monitors, surfaces, and pixel buffers from
//! plain data and records every control request, so the overview can be
//! exercised without an X server.

use std::cell::RefCell;
use std::collections::HashMap;

use image::RgbaImage;
use winview_common::{Monitor, PlatformError, Rect, WindowId, WorkspaceId};

use super::{
    DisplayServer, ExternalWindow, Result, Surface, SurfaceKind, Timestamp, WindowManager,
    Workspace,
};

/// A control request received by [`FakeDesktop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    ActivateWorkspace(WorkspaceId, Timestamp),
    ActivateWindow(WindowId, Timestamp),
    CloseWindow(WindowId, Timestamp),
}

#[derive(Debug, Default)]
pub struct FakeDesktop {
    windows: Vec<ExternalWindow>,
    workspaces: Vec<Workspace>,
    monitors: Vec<Monitor>,
    surfaces: Vec<Surface>,
    pixels: HashMap<WindowId, RgbaImage>,
    icons: HashMap<WindowId, RgbaImage>,
    requests: RefCell<Vec<Request>>,
}

impl FakeDesktop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` workspaces numbered from 0.
    pub fn with_workspaces(mut self, count: u32) -> Self {
        self.workspaces = (0..count)
            .map(|n| Workspace {
                id: WorkspaceId(n),
                name: None,
            })
            .collect();
        self
    }

    pub fn with_monitor(mut self, monitor: Monitor) -> Self {
        self.monitors.push(monitor);
        self
    }

    /// Add a window together with a matching normal surface.
    pub fn with_window(mut self, window: ExternalWindow) -> Self {
        self.surfaces.push(Surface {
            id: window.id,
            kind: SurfaceKind::Normal,
            geometry: window.frame,
        });
        self.windows.push(window);
        self
    }

    /// Add a surface with no window-manager counterpart, or override the
    /// kind of an existing one.
    pub fn with_surface(mut self, surface: Surface) -> Self {
        self.surfaces.retain(|s| s.id != surface.id);
        self.surfaces.push(surface);
        self
    }

    /// Pixels returned when the window's surface is captured.
    pub fn with_pixels(mut self, window: WindowId, image: RgbaImage) -> Self {
        self.pixels.insert(window, image);
        self
    }

    pub fn with_icon(mut self, window: WindowId, image: RgbaImage) -> Self {
        self.icons.insert(window, image);
        self
    }

    /// Drop a window and its surface, as if it closed after enumeration.
    pub fn remove_window(&mut self, window: WindowId) {
        self.windows.retain(|w| w.id != window);
        self.surfaces.retain(|s| s.id != window);
        self.pixels.remove(&window);
    }

    /// Change a window's minimized state, as if the user iconified or
    /// restored it.
    pub fn set_minimized(&mut self, window: WindowId, minimized: bool) {
        for w in self.windows.iter_mut().filter(|w| w.id == window) {
            w.is_minimized = minimized;
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.borrow().clone()
    }

    fn record(&self, request: Request) {
        self.requests.borrow_mut().push(request);
    }

    fn known(&self, window: WindowId) -> Result<()> {
        if self.windows.iter().any(|w| w.id == window) {
            Ok(())
        } else {
            Err(PlatformError::Request(format!("BadWindow {window}")))
        }
    }
}

/// Convenience constructor for tests: a named, unminimized window.
pub fn window(id: u64, workspace: Option<u32>, frame: Rect, class_group: &str) -> ExternalWindow {
    ExternalWindow {
        id: WindowId(id),
        workspace: workspace.map(WorkspaceId),
        frame,
        is_minimized: false,
        class_group: class_group.to_string(),
        title: class_group.to_string(),
    }
}

impl WindowManager for FakeDesktop {
    fn list_windows(&self) -> Result<Vec<ExternalWindow>> {
        Ok(self.windows.clone())
    }

    fn list_workspaces(&self) -> Result<Vec<Workspace>> {
        Ok(self.workspaces.clone())
    }

    fn window_icon(&self, window: WindowId) -> Result<Option<RgbaImage>> {
        Ok(self.icons.get(&window).cloned())
    }

    fn activate_workspace(&self, workspace: WorkspaceId, time: Timestamp) -> Result<()> {
        self.record(Request::ActivateWorkspace(workspace, time));
        Ok(())
    }

    fn activate_window(&self, window: WindowId, time: Timestamp) -> Result<()> {
        self.known(window)?;
        self.record(Request::ActivateWindow(window, time));
        Ok(())
    }

    fn close_window(&self, window: WindowId, time: Timestamp) -> Result<()> {
        self.known(window)?;
        self.record(Request::CloseWindow(window, time));
        Ok(())
    }
}

impl DisplayServer for FakeDesktop {
    fn list_monitors(&self) -> Result<Vec<Monitor>> {
        Ok(self.monitors.clone())
    }

    fn surface_stack(&self) -> Result<Vec<Surface>> {
        Ok(self.surfaces.clone())
    }

    fn capture_surface(&self, surface: &Surface) -> Result<RgbaImage> {
        self.pixels
            .get(&surface.id)
            .cloned()
            .ok_or_else(|| PlatformError::Request(format!("BadDrawable {}", surface.id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FakeDesktop {
        FakeDesktop::new()
            .with_workspaces(2)
            .with_monitor(Monitor::new(0, 0, 0, 1920, 1080))
            .with_window(window(1, Some(0), Rect::new(10, 10, 800, 600), "Firefox"))
    }

    #[test]
    fn list_empty() {
        let desktop = FakeDesktop::new();
        assert!(desktop.list_windows().unwrap().is_empty());
        assert!(desktop.list_monitors().unwrap().is_empty());
    }

    #[test]
    fn window_gets_normal_surface() {
        let desktop = sample();
        let surfaces = desktop.surface_stack().unwrap();
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].id, WindowId(1));
        assert_eq!(surfaces[0].kind, SurfaceKind::Normal);
    }

    #[test]
    fn with_surface_overrides_kind() {
        let desktop = sample().with_surface(Surface {
            id: WindowId(1),
            kind: SurfaceKind::Dialog,
            geometry: Rect::new(0, 0, 10, 10),
        });
        let surfaces = desktop.surface_stack().unwrap();
        assert_eq!(surfaces.len(), 1);
        assert_eq!(surfaces[0].kind, SurfaceKind::Dialog);
    }

    #[test]
    fn capture_without_pixels_fails() {
        let desktop = sample();
        let surface = desktop.surface_stack().unwrap()[0];
        assert!(desktop.capture_surface(&surface).is_err());
    }

    #[test]
    fn capture_returns_configured_pixels() {
        let desktop = sample().with_pixels(WindowId(1), RgbaImage::new(4, 3));
        let surface = desktop.surface_stack().unwrap()[0];
        let image = desktop.capture_surface(&surface).unwrap();
        assert_eq!(image.dimensions(), (4, 3));
    }

    #[test]
    fn requests_are_recorded_in_order() {
        let desktop = sample();
        desktop.activate_workspace(WorkspaceId(0), 7).unwrap();
        desktop.activate_window(WindowId(1), 7).unwrap();
        desktop.close_window(WindowId(1), 9).unwrap();
        assert_eq!(
            desktop.requests(),
            vec![
                Request::ActivateWorkspace(WorkspaceId(0), 7),
                Request::ActivateWindow(WindowId(1), 7),
                Request::CloseWindow(WindowId(1), 9),
            ]
        );
    }

    #[test]
    fn set_minimized_is_reported() {
        let mut desktop = sample();
        desktop.set_minimized(WindowId(1), true);
        assert!(desktop.list_windows().unwrap()[0].is_minimized);
        desktop.set_minimized(WindowId(1), false);
        assert!(!desktop.list_windows().unwrap()[0].is_minimized);
    }

    #[test]
    fn removed_window_rejects_requests() {
        let mut desktop = sample();
        desktop.remove_window(WindowId(1));
        assert!(desktop.close_window(WindowId(1), 0).is_err());
        assert!(desktop.requests().is_empty());
        assert!(desktop.surface_stack().unwrap().is_empty());
    }
}
