//! Overview layout configuration types.

use serde::{Deserialize, Serialize};

/// How window cards are arranged.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LayoutMode {
    /// Workspace -> monitor -> windows.
    #[default]
    Grouped,
    /// A single row of every window that has a workspace.
    Flat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub mode: LayoutMode,
    /// Gap between boxes in pixels (valid range: 0-100).
    pub spacing: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mode: LayoutMode::Grouped,
            spacing: 10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_mode_serialization() {
        let json = serde_json::to_string(&LayoutMode::Flat).unwrap();
        assert_eq!(json, "\"flat\"");
        let deserialized: LayoutMode = serde_json::from_str("\"grouped\"").unwrap();
        assert_eq!(deserialized, LayoutMode::Grouped);
    }

    #[test]
    fn layout_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.mode, LayoutMode::Grouped);
        assert_eq!(config.spacing, 10);
    }
}
