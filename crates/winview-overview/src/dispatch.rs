use tracing::{info, warn};
use winview_platform::{Timestamp, WindowManager};

use crate::layout::Action;

/// Carry out a button action. `time` is the timestamp of the click.
///
/// Failures (typically a window that closed meanwhile) are logged and
/// otherwise ignored.
pub fn dispatch(wm: &dyn WindowManager, action: Action, time: Timestamp) {
    info!(?action, "dispatching");
    match action {
        Action::Activate { window, workspace } => {
            if let Err(e) = wm.activate_workspace(workspace, time) {
                warn!(%workspace, "workspace activation failed: {e}");
            }
            if let Err(e) = wm.activate_window(window, time) {
                warn!(%window, "window activation failed: {e}");
            }
        }
        Action::Close { window } => {
            if let Err(e) = wm.close_window(window, time) {
                warn!(%window, "close request failed: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winview_common::{Rect, WindowId, WorkspaceId};
    use winview_platform::fake::{window, Request};
    use winview_platform::FakeDesktop;

    fn desktop() -> FakeDesktop {
        FakeDesktop::new()
            .with_workspaces(2)
            .with_window(window(5, Some(1), Rect::new(0, 0, 10, 10), "A"))
    }

    #[test]
    fn activate_switches_workspace_first() {
        let desktop = desktop();
        dispatch(
            &desktop,
            Action::Activate {
                window: WindowId(5),
                workspace: WorkspaceId(1),
            },
            1234,
        );
        assert_eq!(
            desktop.requests(),
            vec![
                Request::ActivateWorkspace(WorkspaceId(1), 1234),
                Request::ActivateWindow(WindowId(5), 1234),
            ]
        );
    }

    #[test]
    fn close_sends_one_request() {
        let desktop = desktop();
        dispatch(&desktop, Action::Close { window: WindowId(5) }, 99);
        assert_eq!(desktop.requests(), vec![Request::CloseWindow(WindowId(5), 99)]);
    }

    #[test]
    fn vanished_window_is_tolerated() {
        let mut desktop = desktop();
        desktop.remove_window(WindowId(5));
        dispatch(&desktop, Action::Close { window: WindowId(5) }, 1);
        dispatch(
            &desktop,
            Action::Activate {
                window: WindowId(5),
                workspace: WorkspaceId(1),
            },
            2,
        );
        // Only the workspace switch reaches the fake.
        assert_eq!(
            desktop.requests(),
            vec![Request::ActivateWorkspace(WorkspaceId(1), 2)]
        );
    }
}
