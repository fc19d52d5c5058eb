//! CLI module for podium
//!
//! Provides command-line interface for:
//! - replay: feed snapshots through a detector from stdin
//! - rank: one-shot leaderboard and strikes report
//! - watch: periodic refresh loop

mod args;
mod commands;
mod errors;
mod io;
mod replay;

pub use args::{Cli, Command};
pub use commands::{rank, replay, run, run_command, watch};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_requests, write_error, write_response};
pub use replay::{ReplayRequest, ReplaySession};
