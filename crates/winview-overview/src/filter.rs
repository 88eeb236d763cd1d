//! Window list filters. Both filters keep the input order and are
//! idempotent.

use tracing::debug;
use winview_common::{Monitor, WorkspaceId};
use winview_platform::{ExternalWindow, Result, WindowManager};

use crate::classify::is_on_monitor;

pub fn filter_by_workspace(workspace: WorkspaceId, windows: &[ExternalWindow]) -> Vec<ExternalWindow> {
    windows
        .iter()
        .filter(|w| w.workspace == Some(workspace))
        .cloned()
        .collect()
}

pub fn filter_by_monitor(monitor: &Monitor, windows: &[ExternalWindow]) -> Vec<ExternalWindow> {
    windows
        .iter()
        .filter(|w| is_on_monitor(monitor, w))
        .cloned()
        .collect()
}

/// Every managed window that sits on a workspace. Sticky windows and
/// windows the window manager has not placed are left out.
pub fn collect_windows(wm: &dyn WindowManager) -> Result<Vec<ExternalWindow>> {
    let mut windows = wm.list_windows()?;
    windows.retain(|w| {
        if w.workspace.is_none() {
            debug!(window = %w.id, class = %w.class_group, "window has no workspace");
        }
        w.workspace.is_some()
    });
    Ok(windows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use winview_common::Rect;
    use winview_platform::fake::window;
    use winview_platform::FakeDesktop;

    fn ids(windows: &[ExternalWindow]) -> Vec<u64> {
        windows.iter().map(|w| w.id.0).collect()
    }

    fn sample() -> Vec<ExternalWindow> {
        vec![
            window(1, Some(0), Rect::new(0, 0, 100, 100), "A"),
            window(2, Some(1), Rect::new(2000, 0, 100, 100), "B"),
            window(3, Some(0), Rect::new(2500, 0, 100, 100), "C"),
            window(4, None, Rect::new(10, 0, 100, 100), "D"),
            window(5, Some(0), Rect::new(50, 0, 100, 100), "E"),
        ]
    }

    #[test]
    fn workspace_filter_keeps_matching_in_order() {
        let out = filter_by_workspace(WorkspaceId(0), &sample());
        assert_eq!(ids(&out), vec![1, 3, 5]);
    }

    #[test]
    fn workspace_filter_never_matches_unplaced_windows() {
        for ws in 0..3 {
            let out = filter_by_workspace(WorkspaceId(ws), &sample());
            assert!(!ids(&out).contains(&4));
        }
    }

    #[test]
    fn monitor_filter_keeps_matching_in_order() {
        let b = Monitor::new(1, 1920, 0, 1920, 1080);
        let out = filter_by_monitor(&b, &sample());
        assert_eq!(ids(&out), vec![2, 3]);
    }

    #[test]
    fn filters_are_idempotent() {
        let windows = sample();
        let once = filter_by_workspace(WorkspaceId(0), &windows);
        assert_eq!(filter_by_workspace(WorkspaceId(0), &once), once);

        let a = Monitor::new(0, 0, 0, 1920, 1080);
        let once = filter_by_monitor(&a, &windows);
        assert_eq!(filter_by_monitor(&a, &once), once);
    }

    #[test]
    fn composed_filters_are_idempotent() {
        let a = Monitor::new(0, 0, 0, 1920, 1080);
        let composed = filter_by_monitor(&a, &filter_by_workspace(WorkspaceId(0), &sample()));
        assert_eq!(ids(&composed), vec![1, 5]);

        let again = filter_by_monitor(&a, &filter_by_workspace(WorkspaceId(0), &composed));
        assert_eq!(again, composed);
        let swapped = filter_by_workspace(WorkspaceId(0), &filter_by_monitor(&a, &composed));
        assert_eq!(swapped, composed);
    }

    #[test]
    fn empty_input() {
        assert!(filter_by_workspace(WorkspaceId(0), &[]).is_empty());
        assert!(filter_by_monitor(&Monitor::new(0, 0, 0, 1, 1), &[]).is_empty());
    }

    #[test]
    fn collect_drops_windows_without_workspace() {
        let desktop = sample()
            .into_iter()
            .fold(FakeDesktop::new(), FakeDesktop::with_window);
        let windows = collect_windows(&desktop).unwrap();
        assert_eq!(ids(&windows), vec![1, 2, 3, 5]);
    }
}
