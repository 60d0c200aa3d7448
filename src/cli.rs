//! Command-line interface for the tic-tac-toe binary.

use crate::settings::MoveOrder;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it does not exist)
    #[arg(short, long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Log file, overriding the config file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Initial move-list order, overriding the config file
        #[arg(long, value_enum)]
        order: Option<MoveOrder>,
    },

    /// Play a scripted list of moves and print the board, status and move list
    Replay {
        /// Comma-separated cells, as indices 0-8 or labels, e.g. "0,center,8"
        #[arg(short, long)]
        moves: String,

        /// History index to view after the moves are played
        #[arg(short, long)]
        jump: Option<usize>,

        /// Move-list order, overriding the config file
        #[arg(long, value_enum)]
        order: Option<MoveOrder>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { order: None }
    }
}
