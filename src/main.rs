//! Connect Four - Unified CLI
//!
//! Terminal front end for the connect-four model.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command, GameOptions};
use connect_four::{ConnectFour, Flow, GameConfig};
use std::io::{BufRead, Write};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { options } => run_play(&options),
        Command::Replay { options, moves } => run_replay(&options, &moves),
    }
}

/// Resolve defaults, config file and flags into one configuration
#[instrument]
fn load_config(options: &GameOptions) -> Result<GameConfig> {
    let config = match &options.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(config.with_overrides(options.side, options.output))
}

/// Build a view writing to stdout
fn open_view(options: &GameOptions) -> Result<ConnectFour<std::io::Stdout>> {
    let config = load_config(options)?;
    let view = ConnectFour::new(config.board_config()?, *config.output(), std::io::stdout());
    info!(side = view.model().side(), "Game ready");
    Ok(view)
}

/// Play interactively from stdin
#[instrument]
fn run_play(options: &GameOptions) -> Result<()> {
    let mut view = open_view(options)?;
    view.create_board()?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        if view.handle_input(&line?)? == Flow::Quit {
            break;
        }
    }

    std::io::stdout().flush()?;
    Ok(())
}

/// Apply scripted moves
#[instrument]
fn run_replay(options: &GameOptions, moves: &[String]) -> Result<()> {
    let mut view = open_view(options)?;
    view.create_board()?;

    let accepted = view.play_moves(moves.iter().map(String::as_str))?;
    info!(accepted, total = moves.len(), "Replay finished");

    Ok(())
}
