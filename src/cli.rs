//! Command-line interface for noughts.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use noughts_engine::{Board, Difficulty, Mark, SearchMode};

use crate::config::Overrides;

/// Noughts - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Terminal tic-tac-toe with a minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file (defaults to ./noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preselected difficulty: easy, medium, hard, impossible
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Search variant: minimax, alpha-beta, depth-limited
        #[arg(long)]
        search: Option<SearchMode>,

        /// Ply limit for depth-limited search
        #[arg(long)]
        depth_limit: Option<u8>,

        /// RNG seed for reproducible computer mistakes
        #[arg(long)]
        seed: Option<u64>,

        /// Pause before the computer moves, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Disable the terminal bell
        #[arg(long)]
        mute: bool,
    },

    /// Print the best move for a board
    Suggest {
        /// Nine cells, row by row: X, O, or . for empty (e.g. ".XX.O....")
        board: Board,

        /// Side to search for (defaults to whoever is to move)
        #[arg(long)]
        ai: Option<Mark>,

        /// Search variant: minimax, alpha-beta, depth-limited
        #[arg(long, default_value = "alpha-beta")]
        search: SearchMode,

        /// Ply limit for depth-limited search
        #[arg(long, default_value = "4")]
        depth_limit: u8,
    },

    /// Play computer against computer and print the tally
    Simulate {
        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Difficulty for X
        #[arg(short = 'x', long = "x", default_value = "impossible")]
        x: Difficulty,

        /// Difficulty for O
        #[arg(short = 'o', long = "o", default_value = "impossible")]
        o: Difficulty,

        /// Base RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Command {
    /// Collects the `play` flags that override file configuration.
    pub fn overrides(&self) -> Overrides {
        match self {
            Command::Play {
                difficulty,
                search,
                depth_limit,
                seed,
                delay_ms,
                mute,
                ..
            } => Overrides {
                difficulty: *difficulty,
                search: *search,
                depth_limit: *depth_limit,
                ai_delay_ms: *delay_ms,
                seed: *seed,
                mute: *mute,
            },
            _ => Overrides::default(),
        }
    }
}
