//! Command-line interface for strictly_noughts.

use clap::{Parser, Subcommand};

/// Strictly Noughts - tic-tac-toe against a heuristic opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_noughts")]
#[command(about = "Tic-tac-toe rule engine with a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the heuristic opponent on the terminal
    Play {
        /// Path to a TOML session config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Seed for the opponent (overrides the config)
        #[arg(long)]
        seed: Option<u64>,

        /// Opponent reply delay in milliseconds (overrides the config)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Run heuristic-vs-heuristic self-play and report the tally
    Simulate {
        /// Number of games to play
        #[arg(short, long, default_value = "10000")]
        games: u32,

        /// Seed for the heuristic
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
}
