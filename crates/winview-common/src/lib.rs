pub mod errors;
pub mod types;

pub use errors::{ConfigError, PlatformError, WinviewError};
pub use types::{Color, Monitor, Rect, WindowId, WorkspaceId};

pub type Result<T> = std::result::Result<T, WinviewError>;
