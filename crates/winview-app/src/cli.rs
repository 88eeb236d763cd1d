use clap::Parser;

/// winview: an overview of every window, grouped by workspace and monitor.
#[derive(Parser, Debug)]
#[command(name = "winview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter directive override (e.g. `winview=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the window list grouped by workspace and monitor, then exit.
    #[arg(long)]
    pub list: bool,

    /// X display to connect to instead of `$DISPLAY`.
    #[arg(long)]
    pub display: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
