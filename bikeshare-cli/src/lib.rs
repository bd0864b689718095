//! Support library for the bikeshare binary.
//!
//! Re-exports the CLI modules so unit tests can exercise the prompt loop,
//! pager, and session state machine without forking a subprocess.

pub mod cli;
pub mod logging;
