//! campus-nav - route search over a campus map
//!
//! Loads a campus map, runs BFS or DFS between two locations, and replays
//! the search as a timed animation.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use campus_nav_core::error::{ExitCode as NavExitCode, NavError};
use campus_nav_core::logging;
use cli::{Cli, OutputFormat};

fn main() -> ExitCode {
    let start = Instant::now();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::dispatch::run(&cli, start) {
        Ok(()) => ExitCode::from(NavExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

/// Report a clap failure, as a JSON envelope when `--format json` appears on
/// the raw command line. Help output is not an error and goes through clap.
fn usage_failure(err: clap::Error) -> ExitCode {
    if !err.use_stderr() || !format_json_requested(env::args().skip(1)) {
        err.exit();
    }

    let nav_error = NavError::UsageError(err.to_string().trim_end().to_string());
    eprintln!("{}", nav_error.to_json());
    ExitCode::from(nav_error.exit_code() as u8)
}

fn format_json_requested(args: impl IntoIterator<Item = String>) -> bool {
    let mut previous_was_format = false;
    for arg in args {
        if arg == "--format=json" || (previous_was_format && arg == "json") {
            return true;
        }
        previous_was_format = arg == "--format";
    }
    false
}
