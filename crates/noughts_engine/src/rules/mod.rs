//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board against the fixed win-lines. Nothing
//! here mutates state or caches results; every call reflects the board it
//! is given.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WIN_LINES, has_won, winner};

use tracing::instrument;

use crate::{Board, GameStatus, Position};

/// Empty cells in ascending order (1 through 9).
pub fn empty_cells(board: &Board) -> Vec<Position> {
    Position::valid_moves(board)
}

/// Derives the game status from the board.
///
/// A win takes precedence over a full board: a ninth move that completes a
/// line is a win, not a draw.
#[instrument(level = "trace", skip(board))]
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if is_draw(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mark;

    #[test]
    fn test_empty_cells_ascending() {
        let board: Board = ".XX.O....".parse().unwrap();
        let numbers: Vec<u8> = empty_cells(&board).iter().map(|p| p.number()).collect();
        assert_eq!(numbers, vec![1, 4, 6, 7, 8, 9]);
        assert!(!has_won(&board, Mark::X));
        assert!(!has_won(&board, Mark::O));
    }

    #[test]
    fn test_status_prefers_win_over_full_board() {
        // X completes the left column with the ninth mark.
        let board: Board = "XOXXOOXXO".parse().unwrap();
        assert!(is_full(&board));
        assert_eq!(status(&board), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_status_draw_and_in_progress() {
        let drawn: Board = "XOXXOOOXX".parse().unwrap();
        assert_eq!(status(&drawn), GameStatus::Draw);
        assert_eq!(status(&Board::new()), GameStatus::InProgress);
    }
}
