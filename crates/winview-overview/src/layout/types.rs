//! Overview tree and placement types.

use winview_common::{Monitor, Rect, WindowId, WorkspaceId};

/// What a click on a card button asks the window manager to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Switch to `workspace`, then raise and focus `window`.
    Activate {
        window: WindowId,
        workspace: WorkspaceId,
    },
    Close {
        window: WindowId,
    },
}

/// One window in the overview: title row plus thumbnail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowCard {
    pub window: WindowId,
    pub workspace: WorkspaceId,
    /// Class-group name shown next to the icon.
    pub title: String,
}

impl WindowCard {
    /// Action bound to the icon button.
    pub fn activate(&self) -> Action {
        Action::Activate {
            window: self.window,
            workspace: self.workspace,
        }
    }

    /// Action bound to the close button.
    pub fn close(&self) -> Action {
        Action::Close {
            window: self.window,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorGroup {
    pub label: String,
    pub monitor: Monitor,
    pub cards: Vec<WindowCard>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceGroup {
    pub label: String,
    pub workspace: WorkspaceId,
    pub monitors: Vec<MonitorGroup>,
}

/// The overview content, independent of any drawing surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overview {
    /// Workspace -> monitor -> cards.
    Grouped(Vec<WorkspaceGroup>),
    /// A single row of cards.
    Flat(Vec<WindowCard>),
}

impl Overview {
    /// Every card, in display order.
    pub fn cards(&self) -> Vec<&WindowCard> {
        match self {
            Overview::Grouped(groups) => groups
                .iter()
                .flat_map(|g| &g.monitors)
                .flat_map(|m| &m.cards)
                .collect(),
            Overview::Flat(cards) => cards.iter().collect(),
        }
    }
}

/// Text sizes and gaps used to turn an [`Overview`] into pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    /// Gap between boxes.
    pub spacing: u32,
    /// One tab stop.
    pub indent: u32,
    /// Edge of the square icon and close buttons.
    pub icon_size: u32,
    pub char_width: u32,
    pub line_height: u32,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
}

impl Metrics {
    /// Tab stops are eight characters wide.
    pub const TAB_CHARS: u32 = 8;

    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().count() as u32 * self.char_width
    }
}

impl Default for Metrics {
    /// Core `fixed` font (6x13), 32px icons, 192x108 thumbnails.
    fn default() -> Self {
        Self {
            spacing: 10,
            indent: Self::TAB_CHARS * 6,
            icon_size: 32,
            char_width: 6,
            line_height: 13,
            thumbnail_width: 192,
            thumbnail_height: 108,
        }
    }
}

/// A text run and the box it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Shows the window icon.
    Icon(WindowId),
    /// Shows an "X".
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub rect: Rect,
    pub kind: ButtonKind,
    pub action: Action,
}

/// Where a window's thumbnail is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSlot {
    pub window: WindowId,
    pub rect: Rect,
}

/// Absolute positions of everything the overview window draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placement {
    pub labels: Vec<Label>,
    pub buttons: Vec<Button>,
    pub thumbnails: Vec<ThumbnailSlot>,
    pub(super) width: u32,
    pub(super) height: u32,
}

impl Placement {
    /// Action of the button under `(x, y)`.
    pub fn hit(&self, x: i32, y: i32) -> Option<Action> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(x, y))
            .map(|b| b.action)
    }

    /// Content extent including the outer margin.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}
