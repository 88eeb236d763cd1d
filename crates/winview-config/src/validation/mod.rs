//! Full configuration validation.
//!
//! Validates numeric ranges and colour formats. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod helpers;
mod misc;
mod thumbnail;
mod window;

#[cfg(test)]
mod tests;

use crate::schema::WinviewConfig;
use winview_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WinviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    window::validate_window(&mut errors, config);
    thumbnail::validate_thumbnail(&mut errors, config);
    misc::validate_icons(&mut errors, config);
    misc::validate_layout(&mut errors, config);
    misc::validate_refresh(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
