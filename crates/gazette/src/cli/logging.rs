//! Subscriber setup for the binary.
//!
//! Logs go to stderr so stdout carries only command output.

use crate::cli::Cli;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber selected by the CLI flags.
///
/// `RUST_LOG` overrides the default `info` level (`debug` with `--verbose`).
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let default_filter = if cli.verbose {
        "debug,hyper=info,reqwest=info"
    } else {
        "info"
    };

    if cli.otel {
        return gazette::init_telemetry(default_filter);
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if cli.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| e as Box<dyn std::error::Error>)
}
