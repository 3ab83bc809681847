//! Tests for the suggest and simulate commands.

use noughts::{simulate, suggest};
use noughts_engine::{Board, Difficulty, Mark, MoveError, Position, SearchMode};

#[test]
fn test_suggest_prefers_win_over_block() {
    // O to move: O can win on 6 while X threatens 3.
    let board: Board = "XX.OO...X".parse().unwrap();
    for search in [SearchMode::Minimax, SearchMode::AlphaBeta, SearchMode::DepthLimited] {
        let decision = suggest(&board, None, search, 4).unwrap();
        assert_eq!(decision.position, Position::MiddleRight, "{search}");
        assert_eq!(decision.score, Some(10));
    }
}

#[test]
fn test_suggest_for_explicit_side() {
    // Same board, asking what X would do: X wins on 3.
    let board: Board = "XX.OO...X".parse().unwrap();
    let decision = suggest(&board, Some(Mark::X), SearchMode::AlphaBeta, 4).unwrap();
    assert_eq!(decision.position, Position::TopRight);
}

#[test]
fn test_suggest_full_board() {
    let board: Board = "XOXXOOOXX".parse().unwrap();
    assert_eq!(
        suggest(&board, None, SearchMode::AlphaBeta, 4),
        Err(MoveError::GameOver)
    );
}

#[test]
fn test_easy_x_never_beats_impossible_o() {
    let stats = simulate(20, Difficulty::Easy, Difficulty::Impossible, Some(11)).unwrap();
    assert_eq!(stats.games(), 20);
    assert_eq!(*stats.wins(), 0);
}

#[test]
fn test_simulation_is_reproducible() {
    let a = simulate(10, Difficulty::Easy, Difficulty::Medium, Some(5)).unwrap();
    let b = simulate(10, Difficulty::Easy, Difficulty::Medium, Some(5)).unwrap();
    assert_eq!(a.wins(), b.wins());
    assert_eq!(a.losses(), b.losses());
    assert_eq!(a.draws(), b.draws());
}
