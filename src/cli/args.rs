//! CLI argument definitions using clap
//!
//! Commands:
//! - podium replay --config <path>
//! - podium rank --config <path>
//! - podium watch --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// podium - leaderboard podium watcher for the ticket queue
#[derive(Parser, Debug)]
#[command(name = "podium")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Feed ranking snapshots from stdin (one JSON request per line)
    Replay {
        /// Path to configuration file (defaults apply if missing)
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },

    /// Print the current leaderboard, podium and strikes, then exit
    Rank {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },

    /// Refresh the leaderboard periodically until interrupted
    Watch {
        /// Path to configuration file
        #[arg(long, default_value = "./podium.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
