//! Draw detection logic for tic-tac-toe.

use crate::{Board, Square};

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// True iff no empty cell remains.
///
/// This does not look for a winning line. Callers check
/// [`has_won`](super::has_won) first, as [`status`](super::status) does.
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
}
