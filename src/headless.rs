//! Commands that run without the terminal UI.

use std::time::Instant;

use noughts_engine::{
    Board, Decision, Difficulty, Game, GameOutcome, Mark, MoveError, MoveSelector, SearchMode,
    SessionStats, rules,
};
use tracing::{debug, info, instrument};

/// The side to move on `board`, assuming X started.
pub fn side_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) > board.count(Mark::O) {
        Mark::O
    } else {
        Mark::X
    }
}

/// Best move for `ai` (or the side to move) on `board`, with no mistakes.
///
/// # Errors
///
/// [`MoveError::GameOver`] if the board is already won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn suggest(
    board: &Board,
    ai: Option<Mark>,
    search: SearchMode,
    depth_limit: u8,
) -> Result<Decision, MoveError> {
    if rules::status(board).is_over() {
        return Err(MoveError::GameOver);
    }
    let ai = ai.unwrap_or_else(|| side_to_move(board));
    let mut selector = MoveSelector::new(ai, Difficulty::Impossible)
        .with_search(search)
        .with_depth_limit(depth_limit);
    selector.decide(board).ok_or(MoveError::GameOver)
}

/// Plays `games` computer-vs-computer games and tallies them for X.
///
/// With a seed, X uses `seed` and O uses `seed + 1`, so runs repeat.
///
/// # Errors
///
/// Propagates a [`MoveError`] if a selector places an illegal mark.
#[instrument]
pub fn simulate(
    games: u32,
    x: Difficulty,
    o: Difficulty,
    seed: Option<u64>,
) -> Result<SessionStats, MoveError> {
    let (mut x_selector, mut o_selector) = match seed {
        Some(seed) => (
            MoveSelector::new(Mark::X, x).with_seed(seed),
            MoveSelector::new(Mark::O, o).with_seed(seed.wrapping_add(1)),
        ),
        None => (MoveSelector::new(Mark::X, x), MoveSelector::new(Mark::O, o)),
    };

    let mut stats = SessionStats::new();
    for round in 0..games {
        let started = Instant::now();
        let mut game = Game::new();
        while !game.is_over() {
            let selector = match game.to_move() {
                Mark::X => &mut x_selector,
                Mark::O => &mut o_selector,
            };
            if selector.play(&mut game)?.is_none() {
                break;
            }
        }

        if let Some(outcome) = GameOutcome::for_player(game.status(), Mark::X) {
            debug!(round, %outcome, moves = game.history().len(), "Simulated game finished");
            stats.record(outcome, started.elapsed());
        }
    }

    info!(
        wins = *stats.wins(),
        losses = *stats.losses(),
        draws = *stats.draws(),
        "Simulation finished"
    );
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use noughts_engine::Position;

    #[test]
    fn test_side_to_move() {
        assert_eq!(side_to_move(&Board::new()), Mark::X);
        assert_eq!(side_to_move(&"X........".parse().unwrap()), Mark::O);
        assert_eq!(side_to_move(&"XO.......".parse().unwrap()), Mark::X);
    }

    #[test]
    fn test_suggest_blocks() {
        let board: Board = "XX..O....".parse().unwrap();
        let decision = suggest(&board, None, SearchMode::AlphaBeta, 4).unwrap();
        assert_eq!(decision.position, Position::TopRight);
        assert!(!decision.mistake);
    }

    #[test]
    fn test_suggest_on_finished_board() {
        let board: Board = "XXXOO....".parse().unwrap();
        assert_eq!(
            suggest(&board, None, SearchMode::AlphaBeta, 4),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_perfect_play_always_draws() {
        let stats = simulate(5, Difficulty::Impossible, Difficulty::Impossible, Some(1)).unwrap();
        assert_eq!(*stats.draws(), 5);
        assert_eq!(stats.games(), 5);
    }
}
