//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing_subscriber` filter directive scoped to this workspace.
    pub fn directive(&self) -> &'static str {
        match self {
            LogLevel::Trace => "winview=trace",
            LogLevel::Debug => "winview=debug",
            LogLevel::Info => "winview=info",
            LogLevel::Warn => "winview=warn",
            LogLevel::Error => "winview=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
