//! Span output of the hot rule helpers during a search.

use std::io;
use std::sync::{Arc, Mutex};

use noughts_engine::ai::{DEFAULT_DEPTH_LIMIT, best_move};
use noughts_engine::rules::{empty_cells, status};
use noughts_engine::{Board, Mark, SearchMode};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn spans_at(level: Level, run: impl FnOnce()) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::NEW)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, run);
    let bytes = captured.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}

fn search_opening() {
    let board: Board = "X...O...X".parse().unwrap();
    assert!(!status(&board).is_over());
    assert_eq!(empty_cells(&board).len(), 6);
    best_move(&board, Mark::O, SearchMode::Minimax, DEFAULT_DEPTH_LIMIT).unwrap();
}

#[test]
fn test_rule_helpers_silent_at_debug() {
    let output = spans_at(Level::DEBUG, search_opening);
    assert!(output.contains("best_move"));
    assert!(!output.contains("valid_moves"));
    assert!(!output.contains("status"));
}

#[test]
fn test_rule_helpers_traced_at_trace() {
    let output = spans_at(Level::TRACE, search_opening);
    assert!(output.contains("valid_moves"));
    assert!(output.contains("status"));
    // Only the search entry point records the board.
    for line in output.lines().filter(|line| line.contains("valid_moves")) {
        assert!(!line.contains("valid_moves{board="), "{line}");
    }
}
