//! Noughts - unified CLI
//!
//! Play in the terminal, or query the computer player from scripts.

#![warn(missing_docs)]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use noughts::{Cli, CliCommand, GameConfig, Overrides};
use noughts_engine::{Board, Difficulty, Mark, SearchMode};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let overrides = cli.command.overrides();

    match cli.command {
        CliCommand::Play { config, .. } => run_play(config, overrides).await,
        CliCommand::Suggest {
            board,
            ai,
            search,
            depth_limit,
        } => {
            init_stderr_logging();
            run_suggest(board, ai, search, depth_limit)
        }
        CliCommand::Simulate { games, x, o, seed } => {
            init_stderr_logging();
            run_simulate(games, x, o, seed)
        }
    }
}

/// Logging for commands that do not own the terminal.
fn init_stderr_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the terminal game
async fn run_play(config_path: Option<PathBuf>, overrides: Overrides) -> Result<()> {
    let mut config = GameConfig::load(config_path.as_deref())?;
    config.apply_overrides(&overrides)?;

    noughts::tui::init_file_logging(&config)?;
    info!(?config, "Starting noughts");

    noughts::tui::run(&config).await
}

/// Print the best move for a board
#[instrument]
fn run_suggest(board: Board, ai: Option<Mark>, search: SearchMode, depth_limit: u8) -> Result<()> {
    let decision = noughts::suggest(&board, ai, search, depth_limit)?;
    let ai = ai.unwrap_or_else(|| noughts::side_to_move(&board));

    println!("{}", board.grid());
    println!();
    println!(
        "{} plays {} ({})",
        ai,
        decision.position,
        decision.position.label()
    );
    if let Some(score) = decision.score {
        println!("score {}, {} nodes searched ({})", score, decision.nodes, search);
    }
    Ok(())
}

/// Play computer against computer and print the tally
#[instrument]
fn run_simulate(games: u32, x: Difficulty, o: Difficulty, seed: Option<u64>) -> Result<()> {
    let stats = noughts::simulate(games, x, o, seed)?;

    println!("X ({}) vs O ({}), {} games", x, o, stats.games());
    println!(
        "X wins: {}   O wins: {}   draws: {}",
        stats.wins(),
        stats.losses(),
        stats.draws()
    );
    println!(
        "X win rate: {:.1}%   longest X streak: {}",
        stats.win_rate(),
        stats.best_streak()
    );
    Ok(())
}
