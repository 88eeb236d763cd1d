//! Plain-text listing of the grouped overview, for `--list`.

use std::fmt::Write;

use winview_config::LayoutMode;

use crate::layout::{build_overview, Overview};
use crate::snapshot::Snapshot;

/// One block per workspace, one tab-separated line per monitor.
///
/// ```text
/// Workspace 0:
/// 	Monitor 0:	Name: Firefox	Name: Alacritty	
/// 	Monitor 1:	
///
/// ```
pub fn render(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let Overview::Grouped(groups) = build_overview(snapshot, LayoutMode::Grouped) else {
        return out;
    };
    for group in &groups {
        let _ = writeln!(out, "{}", group.label);
        for monitor in &group.monitors {
            let _ = write!(out, "\t{}\t", monitor.label);
            for card in &monitor.cards {
                let _ = write!(out, "Name: {}\t", card.title);
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
