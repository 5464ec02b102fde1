//! Uwuify command-line tool.
//!
//! This binary delegates to `uwuify::cli` for argument handling and I/O,
//! keeping the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use uwuify::UwuifySettings;
use uwuify::cli::{Cli, CliError, build_uwuifier, run};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version requests also arrive here and exit with 0.
            drop(err.print());
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: &Cli) -> Result<(), CliError> {
    let settings = UwuifySettings::load()?;
    let uwuifier = build_uwuifier(cli, settings)?;
    run(cli, &uwuifier, io::stdin().lock(), io::stdout().lock())
}
