//! Exhaustive adversarial search over the remaining cells.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::rules;
use crate::types::{Board, Mark};
use crate::Position;

/// Score of an immediate AI win; each extra ply costs one point.
pub const WIN_SCORE: i32 = 10;

/// Default ply limit for [`SearchMode::DepthLimited`].
pub const DEFAULT_DEPTH_LIMIT: u8 = 4;

const INFINITY: i32 = 1_000;

/// Which variant of minimax to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SearchMode {
    /// Plain minimax over the full tree.
    Minimax,
    /// Minimax with alpha-beta pruning. Same choice, fewer nodes.
    #[default]
    AlphaBeta,
    /// Minimax that scores any non-terminal node at the depth limit as 0.
    ///
    /// Faster but weaker: it can miss forced lines longer than the limit.
    DepthLimited,
}

/// Outcome of a search from one position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best cell for the searching side.
    pub position: Position,
    /// Its minimax score from the searching side's point of view.
    pub score: i32,
    /// Nodes visited.
    pub nodes: u64,
}

/// Searches `board` for the best cell for `ai`, who is to move.
///
/// Candidates are tried in ascending cell order and only a strictly better
/// score replaces the current best, so ties go to the lowest cell. The
/// caller's board is left untouched. Returns `None` if no cell is empty.
#[instrument(skip(board), fields(board = %board))]
pub fn best_move(board: &Board, ai: Mark, mode: SearchMode, depth_limit: u8) -> Option<SearchResult> {
    let mut searcher = Searcher {
        ai,
        mode,
        depth_limit,
        nodes: 0,
    };
    let mut scratch = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in rules::empty_cells(&scratch) {
        let alpha = match (mode, best) {
            (SearchMode::AlphaBeta, Some((_, score))) => score,
            _ => -INFINITY,
        };
        let score = scratch.with_mark(pos, ai, |b| searcher.search(b, 0, false, alpha, INFINITY));
        debug!(position = %pos, score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }

    debug_assert_eq!(&scratch, board);
    best.map(|(position, score)| SearchResult {
        position,
        score,
        nodes: searcher.nodes,
    })
}

struct Searcher {
    ai: Mark,
    mode: SearchMode,
    depth_limit: u8,
    nodes: u64,
}

impl Searcher {
    /// Scores `board` from the AI's point of view, `depth` plies below the
    /// position reached by the candidate move.
    fn search(&mut self, board: &mut Board, depth: u8, maximizing: bool, mut alpha: i32, mut beta: i32) -> i32 {
        self.nodes += 1;

        if rules::has_won(board, self.ai) {
            return WIN_SCORE - i32::from(depth);
        }
        if rules::has_won(board, self.ai.opponent()) {
            return i32::from(depth) - WIN_SCORE;
        }
        if rules::is_draw(board) {
            return 0;
        }
        if self.mode == SearchMode::DepthLimited && depth >= self.depth_limit {
            return 0;
        }

        let mark = if maximizing { self.ai } else { self.ai.opponent() };
        let mut best = if maximizing { -INFINITY } else { INFINITY };

        for pos in rules::empty_cells(board) {
            let score = board.with_mark(pos, mark, |b| {
                self.search(b, depth + 1, !maximizing, alpha, beta)
            });
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(best);
            } else {
                best = best.min(score);
                beta = beta.min(best);
            }
            if self.mode == SearchMode::AlphaBeta && alpha >= beta {
                break;
            }
        }

        best
    }
}
