//! Thumbnail geometry configuration.

use serde::{Deserialize, Serialize};

/// Size and scaling of window thumbnails.
///
/// The thumbnail box is `reference_width * scale` by
/// `reference_height * scale`. Screenshots are scaled by
/// `scale * shrink` and centred in the box.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThumbnailConfig {
    pub reference_width: u32,
    pub reference_height: u32,
    /// Valid range: 0.01-1.0.
    pub scale: f64,
    /// Margin factor applied on top of `scale` (valid range: 0.1-1.0).
    pub shrink: f64,
    /// Fill colour behind the screenshot (`#rrggbb`).
    pub background: String,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            reference_width: 1920,
            reference_height: 1080,
            scale: 0.1,
            shrink: 0.95,
            background: "#ffffff".into(),
        }
    }
}
