//! Difficulty-aware move selection.

use derive_getters::Getters;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::search::{self, DEFAULT_DEPTH_LIMIT, SearchMode};
use crate::action::MoveError;
use crate::game::Game;
use crate::rules;
use crate::types::{Board, Mark};
use crate::{Difficulty, Position};

/// What the selector played and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// The chosen cell.
    pub position: Position,
    /// Search score, or `None` for a random mistake.
    pub score: Option<i32>,
    /// Nodes searched (0 for a mistake).
    pub nodes: u64,
    /// True if the cell was picked at random instead of searched.
    pub mistake: bool,
}

/// Picks the AI's cell for a given board.
///
/// Each turn first rolls against the difficulty's mistake chance; a hit
/// plays a uniformly random empty cell, otherwise a full search runs.
#[derive(Debug, Clone, Getters)]
pub struct MoveSelector {
    ai: Mark,
    difficulty: Difficulty,
    search_mode: SearchMode,
    depth_limit: u8,
    #[getter(skip)]
    rng: SmallRng,
}

impl MoveSelector {
    /// Creates a selector playing `ai`, seeded from the OS.
    #[instrument]
    pub fn new(ai: Mark, difficulty: Difficulty) -> Self {
        Self {
            ai,
            difficulty,
            search_mode: SearchMode::default(),
            depth_limit: DEFAULT_DEPTH_LIMIT,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Reseeds the random source so games can be replayed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    /// Sets the search variant.
    pub fn with_search(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Sets the ply limit used by [`SearchMode::DepthLimited`].
    pub fn with_depth_limit(mut self, depth_limit: u8) -> Self {
        self.depth_limit = depth_limit;
        self
    }

    /// Changes difficulty between games.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Chooses a cell for the AI on `board`.
    ///
    /// Returns `None` when the board is full. The board is not modified.
    #[instrument(skip(self, board), fields(board = %board, ai = %self.ai, difficulty = %self.difficulty))]
    pub fn decide(&mut self, board: &Board) -> Option<Decision> {
        let empty = rules::empty_cells(board);
        if empty.is_empty() {
            debug!("No empty cells, nothing to decide");
            return None;
        }

        let roll: f64 = self.rng.r#gen();
        if roll < self.difficulty.mistake_chance() {
            let position = *empty.choose(&mut self.rng)?;
            debug!(roll, position = %position, "Playing a random mistake");
            return Some(Decision {
                position,
                score: None,
                nodes: 0,
                mistake: true,
            });
        }

        let result = search::best_move(board, self.ai, self.search_mode, self.depth_limit)?;
        debug!(
            position = %result.position,
            score = result.score,
            nodes = result.nodes,
            "Search finished"
        );
        Some(Decision {
            position: result.position,
            score: Some(result.score),
            nodes: result.nodes,
            mistake: false,
        })
    }

    /// Chooses a cell without reporting how.
    pub fn choose_move(&mut self, board: &Board) -> Option<Position> {
        self.decide(board).map(|d| d.position)
    }

    /// Chooses and places the AI's mark in `game`.
    ///
    /// Returns `Ok(None)` without touching the game when it is over or not
    /// the AI's turn.
    ///
    /// # Errors
    ///
    /// Propagates [`MoveError`] from [`Game::place`].
    #[instrument(skip(self, game))]
    pub fn play(&mut self, game: &mut Game) -> Result<Option<Decision>, MoveError> {
        if game.is_over() {
            return Ok(None);
        }
        if game.to_move() != self.ai {
            warn!(to_move = %game.to_move(), ai = %self.ai, "Asked to move out of turn");
            return Ok(None);
        }

        let Some(decision) = self.decide(game.board()) else {
            return Ok(None);
        };
        game.place(decision.position)?;
        info!(
            position = %decision.position,
            mistake = decision.mistake,
            status = ?game.status(),
            "AI moved"
        );
        Ok(Some(decision))
    }
}
