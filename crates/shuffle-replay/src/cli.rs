use std::path::PathBuf;

use clap::Parser;

/// Replay a recorded drag against the geometry engine and print what it
/// decides at every step.
#[derive(Parser, Debug)]
#[command(name = "shuffle-replay", version, about)]
pub struct Args {
    /// Scenario file (JSON): dimensions, viewport, dragged item and steps.
    #[arg(short = 's', long)]
    pub scenario: PathBuf,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `shuffle=debug`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// Pretty-print each step record.
    #[arg(long)]
    pub pretty: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
