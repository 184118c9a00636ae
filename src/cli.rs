//! Command-line interface for connect_four.

use clap::{Args, Parser, Subcommand};
use connect_four::OutputFormat;
use std::path::PathBuf;

/// Connect Four - N×N connect four in the terminal
#[derive(Parser, Debug)]
#[command(name = "connect_four")]
#[command(about = "Connect four on a configurable square board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct GameOptions {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub side: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, one "row,col" move per line on stdin
    Play {
        #[command(flatten)]
        options: GameOptions,
    },

    /// Apply a fixed sequence of moves and render each one
    Replay {
        #[command(flatten)]
        options: GameOptions,

        /// Moves as "row,col", in playing order starting with X
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
