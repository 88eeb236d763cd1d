//! Overview window configuration types.

use serde::{Deserialize, Serialize};

/// Appearance of the overview window itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Minimum window width in pixels; grows to fit the content.
    pub default_width: u32,
    /// Minimum window height in pixels; grows to fit the content.
    pub default_height: u32,
    /// Window background colour (`#rrggbb`).
    pub background: String,
    /// Label text colour (`#rrggbb`).
    pub text: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Window Overview".into(),
            default_width: 400,
            default_height: 400,
            background: "#ececec".into(),
            text: "#000000".into(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "Window Overview");
        assert_eq!(config.default_width, 400);
        assert_eq!(config.default_height, 400);
        assert_eq!(config.text, "#000000");
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Desktops"
default_width = 800
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Desktops");
        assert_eq!(config.default_width, 800);
        // Defaults preserved
        assert_eq!(config.default_height, 400);
        assert_eq!(config.background, "#ececec");
    }
}
