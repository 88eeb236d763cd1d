//! Overview model: which windows go where, and what their thumbnails show.
//!
//! Everything here works against the [`WindowManager`] and
//! [`DisplayServer`] traits, so it runs unchanged on the X11 backend and on
//! [`FakeDesktop`](winview_platform::FakeDesktop).
//!
//! [`WindowManager`]: winview_platform::WindowManager
//! [`DisplayServer`]: winview_platform::DisplayServer

pub mod capture;
pub mod classify;
pub mod dispatch;
pub mod filter;
pub mod icon;
pub mod layout;
pub mod report;
pub mod snapshot;
pub mod thumbnail;

pub use capture::capture_screenshot;
pub use classify::is_on_monitor;
pub use dispatch::dispatch;
pub use filter::{collect_windows, filter_by_monitor, filter_by_workspace};
pub use icon::IconResolver;
pub use layout::{
    build_overview, place, Action, Button, ButtonKind, Label, Metrics, MonitorGroup, Overview,
    Placement, ThumbnailSlot, WindowCard, WorkspaceGroup,
};
pub use snapshot::{Snapshot, SurfaceIndex};
pub use thumbnail::{render_thumbnail, ThumbnailGeometry};
