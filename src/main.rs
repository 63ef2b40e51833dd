//! Strictly Mill - Unified CLI
//!
//! Terminal play, board generation, and move suggestions.

#![warn(missing_docs)]

mod cli;
mod play;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_mill::{Board, MillConfig, OpponentMode, SearchConfig, generator, search};
use tracing::{debug, info};
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
    let config = match &cli.config {
        Some(path) => MillConfig::from_file(path)?,
        None => MillConfig::default(),
    };
    debug!(?config, "Resolved configuration");

    match cli.command {
        Command::Play { human, seed } => {
            let mode = if human {
                OpponentMode::Human
            } else {
                OpponentMode::Ai
            };
            play::run(config.with_opponent(mode), rng(seed))
        }
        Command::Generate { count, seed, json } => run_generate(&config, count, seed, json),
        Command::Suggest { layout, depth } => run_suggest(&config, &layout, depth),
    }
}

fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Print generated starting boards
fn run_generate(config: &MillConfig, count: u32, seed: Option<u64>, json: bool) -> Result<()> {
    let mut rng = rng(seed);
    for index in 0..count {
        let generated = generator::generate_board(&mut rng, config.generator());
        if json {
            println!("{}", serde_json::to_string(&generated)?);
        } else {
            println!("Board {} ({:?})", index + 1, generated.provenance());
            println!("{}\n", generated.board().display());
        }
    }
    info!(count, "Generated boards");
    Ok(())
}

/// Ask the AI for White's move on a board
fn run_suggest(config: &MillConfig, layout: &str, depth: Option<u32>) -> Result<()> {
    let board = Board::from_layout(layout).context("Invalid board layout")?;
    let search_config = depth.map_or(*config.search(), SearchConfig::new);

    println!("{}\n", board.display());
    let outcome = search::search(&board, &search_config);
    match outcome.best_move() {
        Some(mv) => println!(
            "White plays {} (score {}, {} nodes)",
            mv,
            outcome.score().unwrap_or_default(),
            outcome.nodes()
        ),
        None => println!("White has no legal move"),
    }
    Ok(())
}
