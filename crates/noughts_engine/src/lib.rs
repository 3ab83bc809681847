//! Tic-tac-toe game logic and computer opponent.
//!
//! Pure, I/O-free building blocks:
//!
//! - [`Board`], [`Mark`], [`Position`]: the nine cells and what occupies them.
//! - [`rules`]: the outcome evaluator ([`rules::has_won`], [`rules::is_draw`],
//!   [`rules::empty_cells`]).
//! - [`Game`]: an owned game with turn order and history.
//! - [`MoveSelector`]: minimax (optionally pruned or depth-limited) behind a
//!   per-[`Difficulty`] chance of a random mistake.
//! - [`SessionStats`]: wins, losses, draws, streaks and best time.
//!
//! ```
//! use noughts_engine::{Difficulty, Game, Mark, MoveSelector, Position};
//!
//! let mut game = Game::new();
//! game.place(Position::Center).unwrap();
//!
//! let mut ai = MoveSelector::new(Mark::O, Difficulty::Impossible).with_seed(1);
//! let decision = ai.play(&mut game).unwrap().unwrap();
//! assert!(Position::CORNERS.contains(&decision.position));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
pub mod ai;
mod difficulty;
mod game;
mod position;
pub mod rules;
mod stats;
mod types;

pub use action::{Move, MoveError};
pub use ai::{Decision, MoveSelector, SearchMode};
pub use difficulty::Difficulty;
pub use game::Game;
pub use position::Position;
pub use stats::{GameOutcome, SessionStats};
pub use types::{Board, BoardParseError, GameStatus, Mark, Square};
