//! Configuration schema types for winview.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the overview was designed
//! around (1920x1080 reference, 0.1 scale, 32px icons).

mod icons;
mod layout;
mod refresh;
mod system;
mod thumbnail;
mod window;

pub use icons::*;
pub use layout::*;
pub use refresh::*;
pub use system::*;
pub use thumbnail::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for winview.
///
/// All options have sensible defaults. Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WinviewConfig {
    pub window: WindowConfig,
    pub thumbnail: ThumbnailConfig,
    pub icons: IconConfig,
    pub layout: LayoutConfig,
    pub refresh: RefreshConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
