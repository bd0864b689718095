//! CLI entry point for the interactive bikeshare explorer.
//!
//! Parses command-line arguments with clap, initialises structured logging,
//! and runs the interactive session over locked stdin/stdout, mapping
//! failures to a non-zero exit code. Diagnostics go to `stderr` via
//! `tracing` so the report on `stdout` stays clean.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use bikeshare_cli::{
    cli::{Cli, run_session},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = BufWriter::new(stdout.lock());
    run_session(&mut reader, &mut writer, &cli.data_dir).context("session failed")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        error!(error = %err, "session terminated with an error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialised"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialise logging: {err}");
}
