//! Icon configuration types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Icon size and per-application image overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Edge length of the square icon button image (valid range: 8-256).
    pub size: u32,
    /// Class-group name -> image file used instead of the window's own icon.
    pub overrides: BTreeMap<String, String>,
}

impl Default for IconConfig {
    fn default() -> Self {
        let mut overrides = BTreeMap::new();
        overrides.insert("Alacritty".to_string(), "Alacritty.png".to_string());
        Self { size: 32, overrides }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_config_defaults() {
        let config = IconConfig::default();
        assert_eq!(config.size, 32);
        assert_eq!(config.overrides.len(), 1);
    }

    #[test]
    fn overrides_table_replaces_default_map() {
        let config: IconConfig = toml::from_str(
            r#"
[overrides]
kitty = "/usr/share/icons/kitty.png"
"#,
        )
        .unwrap();
        assert_eq!(config.size, 32);
        assert_eq!(config.overrides.len(), 1);
        assert!(config.overrides.contains_key("kitty"));
    }
}
