//! Shared layout geometry.
//!
//! Rendering and mouse hit-testing both go through these functions so a
//! click always lands on what was drawn.

use noughts_engine::Position;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of one board cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one board cell in rows.
pub const CELL_HEIGHT: u16 = 3;

const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Areas of the game screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top bar.
    pub header: Rect,
    /// Back button inside the header.
    pub back: Rect,
    /// Mode label inside the header.
    pub headline: Rect,
    /// Turn indicator inside the header.
    pub turn: Rect,
    /// The whole grid including separators.
    pub grid: Rect,
    /// Each cell, indexed by [`Position::index`].
    pub cells: [Rect; 9],
    /// End-of-game overlay, also the restart button.
    pub overlay: Rect,
    /// Stats bar.
    pub scoreboard: Rect,
    /// Key help bar.
    pub help: Rect,
}

impl BoardLayout {
    /// Splits `area` into the game screen's parts.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(BOARD_HEIGHT),
                Constraint::Length(3),
                Constraint::Length(3),
            ])
            .split(area);

        let header = chunks[0];
        let bar = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(10),
                Constraint::Min(10),
                Constraint::Length(22),
            ])
            .split(header);

        let grid = center_rect(chunks[1], BOARD_WIDTH, BOARD_HEIGHT);
        let cells = Position::ALL.map(|pos| {
            Rect::new(
                grid.x + pos.col() as u16 * (CELL_WIDTH + 1),
                grid.y + pos.row() as u16 * (CELL_HEIGHT + 1),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(area)
        });

        Self {
            header,
            back: bar[0],
            headline: bar[1],
            turn: bar[2],
            grid,
            cells,
            overlay: center_rect(chunks[1], 24, 5),
            scoreboard: chunks[2],
            help: chunks[3],
        }
    }

    /// The cell under a terminal coordinate, if any.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<Position> {
        let point = ratatui::layout::Position::new(column, row);
        Position::ALL
            .into_iter()
            .find(|pos| self.cells[pos.index()].contains(point))
    }
}

/// Areas of a menu screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered list of options.
    pub list: Rect,
    /// Key help bar.
    pub help: Rect,
}

impl MenuLayout {
    /// Splits `area` into a menu screen's parts.
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(5),
                Constraint::Length(3),
            ])
            .split(area);
        Self {
            title: chunks[0],
            list: chunks[1],
            help: chunks[2],
        }
    }

    /// The option index under a terminal coordinate, for a list of `count`.
    pub fn item_at(&self, column: u16, row: u16, count: usize) -> Option<usize> {
        let inner = Rect::new(
            self.list.x.saturating_add(1),
            self.list.y.saturating_add(1),
            self.list.width.saturating_sub(2),
            self.list.height.saturating_sub(2),
        );
        if !inner.contains(ratatui::layout::Position::new(column, row)) {
            return None;
        }
        let index = usize::from(row - inner.y);
        (index < count).then_some(index)
    }
}

/// A `width` x `height` rectangle centered in `area`, clipped to it.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
