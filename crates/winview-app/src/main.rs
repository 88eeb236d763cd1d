mod app_state;
mod cli;

use std::path::Path;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;
use winview_config::WinviewConfig;
use winview_overview::{report, Snapshot};
use winview_platform::X11Desktop;

const DEFAULT_DIRECTIVE: &str = "winview=info";

fn main() -> ExitCode {
    // Parse CLI arguments
    let args = cli::parse();

    // Load config before logging so `logging.level` can pick the filter
    let loaded = match args.config.as_deref() {
        Some(path) => winview_config::load_config_from(Path::new(path)),
        None => winview_config::load_config(),
    };

    // Initialize logging
    let log_directive = args.log_level.as_deref().unwrap_or(match &loaded {
        Ok(config) => config.logging.level.directive(),
        Err(_) => DEFAULT_DIRECTIVE,
    });
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(
            log_directive.parse().unwrap_or_else(|e| {
                eprintln!("invalid log directive {log_directive:?}: {e}");
                tracing_subscriber::filter::LevelFilter::INFO.into()
            }),
        ))
        .init();

    tracing::info!("winview v{} starting...", env!("CARGO_PKG_VERSION"));

    if let Some(ref path) = args.config {
        tracing::info!("Using config override: {path}");
    }
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        WinviewConfig::default()
    });
    if let Err(e) = winview_config::validation::validate(&config) {
        tracing::warn!("Config has invalid values, keeping them as written: {e}");
    }

    let desktop = match X11Desktop::connect(args.display.as_deref()) {
        Ok(desktop) => desktop,
        Err(e) => {
            tracing::error!("Cannot open X display: {e}");
            return ExitCode::FAILURE;
        }
    };

    if args.list {
        return match Snapshot::take(&desktop) {
            Ok(snapshot) => {
                print!("{}", report::render(&snapshot));
                ExitCode::SUCCESS
            }
            Err(e) => {
                tracing::error!("Failed to read desktop state: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let mut app = match app_state::OverviewApp::new(desktop, config) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to build overview: {e}");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!("Entering event loop");
    let code = match app.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Event loop error: {e}");
            ExitCode::FAILURE
        }
    };
    tracing::info!("Shutdown complete");
    code
}
