//! The owned game object: board, side to move, status and history.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::action::{Move, MoveError};
use crate::rules;
use crate::types::{Board, GameStatus, Mark, Square};
use crate::Position;

/// A single game of tic-tac-toe.
///
/// X always moves first and marks alternate strictly, so the number of
/// marks on the board always equals the length of the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    to_move: Mark,
    status: GameStatus,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to move next.
    ///
    /// Once the game is over this is the mark that made the final move.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns true if the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Mark> {
        self.status.winner()
    }

    /// Empty cells, ascending.
    pub fn empty_cells(&self) -> Vec<Position> {
        rules::empty_cells(&self.board)
    }

    /// Places the current mark at `pos` and re-evaluates the board.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] once the game has finished and
    /// [`MoveError::SquareOccupied`] if the cell is taken.
    #[instrument(skip(self), fields(position = %pos, mark = %self.to_move))]
    pub fn place(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let mark = self.to_move;
        self.board.set(pos, Square::Occupied(mark));
        self.history.push(Move::new(mark, pos));
        self.status = rules::status(&self.board);

        if !self.is_over() {
            self.to_move = mark.opponent();
        }

        debug!(status = ?self.status, moves = self.history.len(), "Move applied");
        Ok(self.status)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
