//! Computer opponent: minimax search behind a difficulty-driven mistake roll.

mod search;
mod selector;

pub use search::{DEFAULT_DEPTH_LIMIT, SearchMode, SearchResult, WIN_SCORE, best_move};
pub use selector::{Decision, MoveSelector};
