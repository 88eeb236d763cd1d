use winview_common::{Monitor, Rect, WindowId, WorkspaceId};
use winview_config::LayoutMode;
use winview_platform::fake::window;
use winview_platform::FakeDesktop;

use super::*;
use crate::snapshot::Snapshot;

fn two_monitors() -> Snapshot {
    let desktop = FakeDesktop::new()
        .with_workspaces(2)
        .with_monitor(Monitor::new(0, 0, 0, 1920, 1080))
        .with_monitor(Monitor::new(1, 1920, 0, 1920, 1080))
        .with_window(window(1, Some(0), Rect::new(100, 50, 800, 600), "Firefox"))
        .with_window(window(2, Some(0), Rect::new(2000, 50, 800, 600), "Alacritty"))
        .with_window(window(3, Some(1), Rect::new(300, 50, 800, 600), "Gimp"))
        .with_window(window(4, None, Rect::new(0, 0, 1920, 30), "Panel"));
    Snapshot::take(&desktop).unwrap()
}

fn card_ids(cards: &[WindowCard]) -> Vec<u64> {
    cards.iter().map(|c| c.window.0).collect()
}

fn one_card() -> Overview {
    Overview::Flat(vec![WindowCard {
        window: WindowId(1),
        workspace: WorkspaceId(0),
        title: "Firefox".into(),
    }])
}

// =============================================================================
// Builder
// =============================================================================

#[test]
fn grouped_by_workspace_then_monitor() {
    let overview = build_overview(&two_monitors(), LayoutMode::Grouped);
    let Overview::Grouped(groups) = overview else {
        panic!("expected grouped overview");
    };
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Workspace 0:");
    assert_eq!(groups[0].monitors[0].label, "Monitor 0:");
    assert_eq!(card_ids(&groups[0].monitors[0].cards), vec![1]);
    assert_eq!(card_ids(&groups[0].monitors[1].cards), vec![2]);
    assert_eq!(card_ids(&groups[1].monitors[0].cards), vec![3]);
    assert!(groups[1].monitors[1].cards.is_empty());
}

#[test]
fn window_without_workspace_is_nowhere() {
    let overview = build_overview(&two_monitors(), LayoutMode::Grouped);
    assert!(overview.cards().iter().all(|c| c.window != WindowId(4)));
    assert_eq!(overview.cards().len(), 3);
}

#[test]
fn card_title_is_class_group() {
    let overview = build_overview(&two_monitors(), LayoutMode::Grouped);
    assert_eq!(overview.cards()[1].title, "Alacritty");
}

#[test]
fn flat_mode_is_one_row() {
    let overview = build_overview(&two_monitors(), LayoutMode::Flat);
    let Overview::Flat(cards) = overview else {
        panic!("expected flat overview");
    };
    assert_eq!(card_ids(&cards), vec![1, 2, 3]);
}

#[test]
fn no_monitors_means_no_cards() {
    let snapshot = Snapshot {
        monitors: Vec::new(),
        ..two_monitors()
    };
    let overview = build_overview(&snapshot, LayoutMode::Grouped);
    let Overview::Grouped(groups) = &overview else {
        panic!("expected grouped overview");
    };
    assert_eq!(groups.len(), 2);
    assert!(overview.cards().is_empty());
}

#[test]
fn card_actions() {
    let card = WindowCard {
        window: WindowId(7),
        workspace: WorkspaceId(2),
        title: "x".into(),
    };
    assert_eq!(
        card.activate(),
        Action::Activate {
            window: WindowId(7),
            workspace: WorkspaceId(2)
        }
    );
    assert_eq!(card.close(), Action::Close { window: WindowId(7) });
}

// =============================================================================
// Placement
// =============================================================================

#[test]
fn flat_card_geometry() {
    let placement = place(&one_card(), &Metrics::default());
    // Icon at the margin, title 10px right of it, close button after the title.
    assert_eq!(placement.buttons[0].rect, Rect::new(10, 10, 32, 32));
    assert_eq!(placement.labels[0].rect, Rect::new(52, 19, 42, 13));
    assert_eq!(placement.buttons[1].rect, Rect::new(104, 10, 32, 32));
    assert_eq!(placement.thumbnails[0].rect, Rect::new(10, 52, 192, 108));
    assert_eq!(placement.size(), (212, 170));
}

#[test]
fn grouped_rows_are_indented_by_tab_stops() {
    let overview = build_overview(&two_monitors(), LayoutMode::Grouped);
    let placement = place(&overview, &Metrics::default());

    let label = |text: &str| {
        placement
            .labels
            .iter()
            .find(|l| l.text == text)
            .map(|l| l.rect)
            .unwrap()
    };
    assert_eq!(label("Workspace 0:").x, 10);
    assert_eq!(label("Workspace 0:").y, 10);
    assert_eq!(label("Monitor 0:").x, 58);
    assert_eq!(label("Monitor 0:").y, 33);
    assert_eq!(placement.thumbnails[0].rect.x, 106);
}

#[test]
fn cards_in_a_row_are_spaced() {
    let overview = Overview::Flat(vec![
        WindowCard {
            window: WindowId(1),
            workspace: WorkspaceId(0),
            title: "A".into(),
        },
        WindowCard {
            window: WindowId(2),
            workspace: WorkspaceId(0),
            title: "B".into(),
        },
    ]);
    let placement = place(&overview, &Metrics::default());
    assert_eq!(placement.thumbnails[0].rect.x, 10);
    assert_eq!(placement.thumbnails[1].rect.x, 212);
}

#[test]
fn long_title_widens_card() {
    let overview = Overview::Flat(vec![
        WindowCard {
            window: WindowId(1),
            workspace: WorkspaceId(0),
            title: "a-very-long-window-class-name".into(),
        },
        WindowCard {
            window: WindowId(2),
            workspace: WorkspaceId(0),
            title: "B".into(),
        },
    ]);
    let placement = place(&overview, &Metrics::default());
    let first_close = placement.buttons[1].rect;
    assert!(i64::from(placement.thumbnails[1].rect.x) > first_close.right());
}

#[test]
fn hit_maps_clicks_to_actions() {
    let placement = place(&one_card(), &Metrics::default());
    assert_eq!(
        placement.hit(20, 20),
        Some(Action::Activate {
            window: WindowId(1),
            workspace: WorkspaceId(0)
        })
    );
    assert_eq!(
        placement.hit(120, 25),
        Some(Action::Close { window: WindowId(1) })
    );
    // Title text and thumbnail are not buttons.
    assert_eq!(placement.hit(60, 25), None);
    assert_eq!(placement.hit(100, 100), None);
    assert_eq!(placement.hit(-5, -5), None);
}

#[test]
fn hit_picks_the_right_card() {
    let overview = build_overview(&two_monitors(), LayoutMode::Grouped);
    let placement = place(&overview, &Metrics::default());
    for button in &placement.buttons {
        let hit = placement.hit(button.rect.x + 1, button.rect.y + 1);
        assert_eq!(hit, Some(button.action));
    }
    let icons: Vec<_> = placement
        .buttons
        .iter()
        .filter_map(|b| match b.kind {
            ButtonKind::Icon(id) => Some(id.0),
            ButtonKind::Close => None,
        })
        .collect();
    assert_eq!(icons, vec![1, 2, 3]);
}

#[test]
fn empty_overview_has_margin_only() {
    let placement = place(&Overview::Flat(Vec::new()), &Metrics::default());
    assert!(placement.buttons.is_empty());
    assert_eq!(placement.size(), (10, 10));
}
