//! Overview tree construction from a desktop snapshot.

use winview_config::LayoutMode;
use winview_platform::{ExternalWindow, Workspace};

use super::types::{MonitorGroup, Overview, WindowCard, WorkspaceGroup};
use crate::filter::{filter_by_monitor, filter_by_workspace};
use crate::snapshot::Snapshot;

pub fn build_overview(snapshot: &Snapshot, mode: LayoutMode) -> Overview {
    match mode {
        LayoutMode::Grouped => Overview::Grouped(
            snapshot
                .workspaces
                .iter()
                .map(|ws| group_workspace(snapshot, ws))
                .collect(),
        ),
        LayoutMode::Flat => Overview::Flat(snapshot.windows.iter().filter_map(card).collect()),
    }
}

fn group_workspace(snapshot: &Snapshot, workspace: &Workspace) -> WorkspaceGroup {
    let on_workspace = filter_by_workspace(workspace.id, &snapshot.windows);
    let monitors = snapshot
        .monitors
        .iter()
        .map(|monitor| MonitorGroup {
            label: format!("Monitor {}:", monitor.number),
            monitor: *monitor,
            cards: filter_by_monitor(monitor, &on_workspace)
                .iter()
                .filter_map(card)
                .collect(),
        })
        .collect();
    WorkspaceGroup {
        label: format!("Workspace {}:", workspace.number()),
        workspace: workspace.id,
        monitors,
    }
}

fn card(window: &ExternalWindow) -> Option<WindowCard> {
    Some(WindowCard {
        window: window.id,
        workspace: window.workspace?,
        title: window.class_group.clone(),
    })
}
