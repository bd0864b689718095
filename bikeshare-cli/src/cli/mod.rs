//! Interactive command-line surface for the bikeshare explorer.
//!
//! Gathers the filter selection through validated prompts, renders the
//! statistics report with per-section timing, pages raw records on demand,
//! and loops until the user declines a restart.

mod pager;
mod prompt;
mod report;
mod session;

use std::path::PathBuf;

use clap::Parser;

pub use session::{SessionError, run_session};

/// Command-line options for the `bikeshare` binary.
///
/// The analysis parameters (city, month, day) are gathered interactively;
/// the only configuration is where the dataset files live.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "bikeshare",
    about = "Explore bicycle-share trip statistics interactively."
)]
pub struct Cli {
    /// Directory containing the city dataset CSV files.
    #[arg(long = "data-dir", default_value = ".")]
    pub data_dir: PathBuf,
}
