//! Application entry point.
//!
//! Parses command-line arguments and delegates execution to [`runner::run`].

use construction::{cli::Cli, diagnostics, runner};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::fmt;

fn main() -> ExitCode {
    let cli = Cli::parse_with_default();
    let max_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::ERROR
    };
    fmt()
        .with_max_level(max_level)
        .with_writer(std::io::stderr)
        .init();
    match runner::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %format_args!("{err:#}"), "runner failed");
            let report = diagnostics::render_error(&err);
            if let Err(write_err) = io::stderr().lock().write_all(report.as_bytes()) {
                tracing::debug!(error = %write_err, "failed to write error report");
            }
            ExitCode::FAILURE
        }
    }
}
