//! Command-line interface for strictly_mill.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Mill - three-piece mill with a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_mill")]
#[command(about = "Play three-piece mill against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game in the terminal
    Play {
        /// Let two people share the terminal instead of playing the AI
        #[arg(long)]
        human: bool,

        /// Seed for reproducible starting boards
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print generated starting boards
    Generate {
        /// Number of boards to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: u32,

        /// Seed for reproducible boards
        #[arg(long)]
        seed: Option<u64>,

        /// Print JSON instead of a drawing
        #[arg(long)]
        json: bool,
    },

    /// Ask the AI for White's move on a board
    Suggest {
        /// Board layout, 9 cells of B, W, or . in row-major order
        layout: String,

        /// Override the configured search depth
        #[arg(long)]
        depth: Option<u32>,
    },
}
