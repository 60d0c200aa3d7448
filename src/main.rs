//! Tic-tac-toe binary: interactive terminal game or scripted replay.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_tui::cli::{Cli, Command};
use tictactoe_tui::{TuiConfig, replay, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load_or_default(&cli.config)?.with_log_file(cli.log_file.clone());

    match cli.command.clone().unwrap_or_default() {
        Command::Play { order } => {
            let config = config.with_move_order(order);
            init_file_tracing(config.log_file())?;
            run_tui(config.settings())
        }
        Command::Replay { moves, jump, order } => {
            let config = config.with_move_order(order);
            init_stderr_tracing();
            run_replay(&moves, jump, &config)
        }
    }
}

/// Prints the replayed game to stdout.
#[instrument(skip(config))]
fn run_replay(moves: &str, jump: Option<usize>, config: &TuiConfig) -> Result<()> {
    let text = replay(moves, jump, *config.move_order()).context("Failed to replay moves")?;
    info!("Replay rendered");
    print!("{}", text);
    Ok(())
}

/// Logs to a file so output does not interfere with the TUI.
fn init_file_tracing(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_engine=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

fn init_stderr_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}
