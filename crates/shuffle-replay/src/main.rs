mod cli;
mod scenario;
mod session;

use std::io::Write;
use std::process::ExitCode;

use shuffle_common::ShuffleError;
use shuffle_config::ShuffleConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "shuffle=info";

fn init_logging(directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: &cli::Args, config: ShuffleConfig) -> Result<(), ShuffleError> {
    let scenario = scenario::load_from_path(&args.scenario)?;
    let records = session::replay(scenario, config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for record in &records {
        let line = if args.pretty {
            serde_json::to_string_pretty(record)?
        } else {
            serde_json::to_string(record)?
        };
        writeln!(out, "{line}")?;
    }
    tracing::info!(steps = records.len(), "replay finished");
    Ok(())
}

fn main() -> ExitCode {
    let args = cli::parse();

    // Config decides the default log level, so load it before logging is up
    // and report the outcome afterwards.
    let loaded = shuffle_config::load_config(args.config.as_deref());
    let directive = args
        .log_level
        .clone()
        .or_else(|| loaded.as_ref().ok().map(|config| config.logging.directive()))
        .unwrap_or_else(|| DEFAULT_DIRECTIVE.to_string());
    init_logging(&directive);

    tracing::info!("shuffle-replay v{} starting", env!("CARGO_PKG_VERSION"));
    let config = loaded.unwrap_or_else(|e| {
        tracing::warn!("config load failed, using defaults: {e}");
        ShuffleConfig::default()
    });

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("replay failed: {e}");
            ExitCode::FAILURE
        }
    }
}
