//! One consistent read of the desktop, taken per layout pass.

use std::collections::HashMap;

use tracing::info;
use winview_common::{Monitor, WindowId};
use winview_platform::{
    DisplayServer, ExternalWindow, Result, Surface, SurfaceKind, WindowManager, Workspace,
};

use crate::filter::collect_windows;

/// On-screen surfaces keyed by window id.
#[derive(Debug, Clone, Default)]
pub struct SurfaceIndex {
    by_id: HashMap<WindowId, Surface>,
}

impl SurfaceIndex {
    /// Index a surface stack. When an id repeats, the topmost entry wins.
    pub fn new(surfaces: impl IntoIterator<Item = Surface>) -> Self {
        Self {
            by_id: surfaces.into_iter().map(|s| (s.id, s)).collect(),
        }
    }

    /// The normal (toplevel, non-dialog) surface for `window`, if any.
    pub fn normal(&self, window: WindowId) -> Option<&Surface> {
        self.by_id
            .get(&window)
            .filter(|s| s.kind == SurfaceKind::Normal)
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Windows, workspaces, monitors, and surfaces read together.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    /// Windows that sit on a workspace, in client-list order.
    pub windows: Vec<ExternalWindow>,
    pub workspaces: Vec<Workspace>,
    pub monitors: Vec<Monitor>,
    pub surfaces: SurfaceIndex,
}

impl Snapshot {
    pub fn take<D>(desktop: &D) -> Result<Self>
    where
        D: WindowManager + DisplayServer,
    {
        let monitors = desktop.list_monitors()?;
        for monitor in &monitors {
            info!("{monitor}");
        }
        let snapshot = Self {
            windows: collect_windows(desktop)?,
            workspaces: desktop.list_workspaces()?,
            monitors,
            surfaces: SurfaceIndex::new(desktop.surface_stack()?),
        };
        info!(
            windows = snapshot.windows.len(),
            workspaces = snapshot.workspaces.len(),
            monitors = snapshot.monitors.len(),
            "desktop snapshot taken"
        );
        Ok(snapshot)
    }

    /// Re-read the surface stack and each window's minimized state.
    ///
    /// The window list and monitors stay as they were; windows that have
    /// closed keep their last state and lose their surface.
    pub fn refresh<D>(&mut self, desktop: &D) -> Result<()>
    where
        D: WindowManager + DisplayServer,
    {
        self.surfaces = SurfaceIndex::new(desktop.surface_stack()?);
        let live: HashMap<WindowId, bool> = desktop
            .list_windows()?
            .into_iter()
            .map(|w| (w.id, w.is_minimized))
            .collect();
        for window in &mut self.windows {
            if let Some(&minimized) = live.get(&window.id) {
                window.is_minimized = minimized;
            }
        }
        Ok(())
    }

    pub fn window(&self, id: WindowId) -> Option<&ExternalWindow> {
        self.windows.iter().find(|w| w.id == id)
    }
}
