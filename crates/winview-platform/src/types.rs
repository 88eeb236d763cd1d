use serde::{Deserialize, Serialize};
use winview_common::{Rect, WindowId, WorkspaceId};

/// A window as seen by the window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalWindow {
    pub id: WindowId,
    /// `None` for windows shown on every workspace or not assigned to one.
    pub workspace: Option<WorkspaceId>,
    /// Position and size in root coordinates.
    pub frame: Rect,
    pub is_minimized: bool,
    /// Class part of `WM_CLASS`; used for icon lookup and as the card title.
    pub class_group: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: Option<String>,
}

impl Workspace {
    pub fn number(&self) -> u32 {
        self.id.0
    }
}

/// Window type hint of an on-screen surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Normal,
    Dialog,
    Dock,
    Other,
}

/// A display-server-level window, cross-referenced to [`ExternalWindow`]
/// through the shared id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub id: WindowId,
    pub kind: SurfaceKind,
    pub geometry: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workspace_number_is_index() {
        let ws = Workspace {
            id: WorkspaceId(2),
            name: Some("web".into()),
        };
        assert_eq!(ws.number(), 2);
    }

    #[test]
    fn surface_kind_serialization() {
        let json = serde_json::to_string(&SurfaceKind::Normal).unwrap();
        let deserialized: SurfaceKind = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, SurfaceKind::Normal);
    }
}
