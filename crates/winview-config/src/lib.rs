//! winview configuration system.
//!
//! TOML-based configuration with full validation. All config sections use
//! sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use winview_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    IconConfig, LayoutConfig, LayoutMode, LogLevel, LoggingConfig, RefreshConfig, ThumbnailConfig,
    WindowConfig, WinviewConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use winview_common::ConfigError;

/// Load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory and creates a default if
/// none exists. Out-of-range values are logged and kept; call
/// [`validation::validate`] to inspect them.
pub fn load_config() -> Result<WinviewConfig, ConfigError> {
    toml_loader::load_default()
}

/// Load config from an explicit path (the `--config` override).
pub fn load_config_from(path: &Path) -> Result<WinviewConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }
    toml_loader::load_from_path(path)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &WinviewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
