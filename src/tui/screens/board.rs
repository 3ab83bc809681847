//! Game screen: the board, scoreboard and end-of-game overlay.

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_engine::{Mark, Position, Square};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tracing::{debug, instrument};

use crate::session::{Command, Mode, Session};
use crate::tui::input::{digit_cell, move_cursor};
use crate::tui::screen::Screen;
use crate::tui::ui::{BoardLayout, CELL_WIDTH};

/// State for the game screen.
#[derive(Debug)]
pub struct BoardScreen {
    cursor: Position,
}

impl BoardScreen {
    /// Creates the game screen with the cursor on the center cell.
    pub fn new() -> Self {
        Self {
            cursor: Position::Center,
        }
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    fn turn_text(session: &Session) -> String {
        let game = session.game();
        if let Some(banner) = session.banner() {
            return banner.to_string();
        }
        match (*session.mode(), game.to_move()) {
            (Mode::VsComputer, Mark::O) => "Computer thinking...".to_string(),
            (Mode::VsComputer, _) => "Your move (X)".to_string(),
            (Mode::VsHuman, mark) => format!("{} to move", mark),
        }
    }

    fn draw_cell(&self, frame: &mut Frame, area: Rect, session: &Session, pos: Position) {
        let (symbol, base_style) = match session.game().board().get(pos) {
            Square::Empty => (
                pos.number().to_string(),
                Style::default().fg(Color::DarkGray),
            ),
            Square::Occupied(Mark::X) => (
                "X".to_string(),
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            Square::Occupied(Mark::O) => (
                "O".to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        };

        let style = if pos == self.cursor && !session.game().is_over() {
            base_style.bg(Color::White).fg(Color::Black)
        } else {
            base_style
        };

        let blank = " ".repeat(usize::from(CELL_WIDTH));
        let paragraph = Paragraph::new(vec![
            Line::from(Span::styled(blank.clone(), style)),
            Line::from(Span::styled(format!("{symbol:^width$}", width = usize::from(CELL_WIDTH)), style)),
            Line::from(Span::styled(blank, style)),
        ]);
        frame.render_widget(paragraph, area);
    }

    fn draw_grid(&self, frame: &mut Frame, layout: &BoardLayout, session: &Session) {
        let separator = Style::default().fg(Color::DarkGray);
        let [first, .., last] = layout.cells;

        for (left, right) in [(0, 1), (1, 2)] {
            let x = layout.cells[left].right();
            if x >= layout.cells[right].x {
                continue;
            }
            let column = Rect::new(x, first.y, 1, last.bottom().saturating_sub(first.y));
            let bar = Paragraph::new(vec![Line::from("│"); usize::from(column.height)]).style(separator);
            frame.render_widget(bar, column.intersection(frame.area()));
        }
        for (upper, lower) in [(0, 3), (3, 6)] {
            let y = layout.cells[upper].bottom();
            if y >= layout.cells[lower].y {
                continue;
            }
            let row = Rect::new(first.x, y, last.right().saturating_sub(first.x), 1);
            let line = format!(
                "{0}┼{0}┼{0}",
                "─".repeat(usize::from(CELL_WIDTH))
            );
            frame.render_widget(Paragraph::new(line).style(separator), row.intersection(frame.area()));
        }

        for pos in Position::ALL {
            self.draw_cell(frame, layout.cells[pos.index()], session, pos);
        }
    }

    fn draw_overlay(frame: &mut Frame, area: Rect, banner: &str) {
        let text = vec![
            Line::from(Span::styled(
                banner.to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("[ RESTART ]  (r)"),
        ];
        frame.render_widget(Clear, area);
        frame.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            area,
        );
    }
}

/// Seconds with one decimal, e.g. `12.3s`.
fn format_secs(duration: Duration) -> String {
    format!("{:.1}s", duration.as_secs_f64())
}

impl Screen for BoardScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let layout = BoardLayout::new(frame.area());

        frame.render_widget(
            Paragraph::new("[ BACK ]")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            layout.back,
        );
        frame.render_widget(
            Paragraph::new(session.headline())
                .style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            layout.headline,
        );
        frame.render_widget(
            Paragraph::new(Self::turn_text(session))
                .style(Style::default().fg(Color::Yellow))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            layout.turn,
        );

        self.draw_grid(frame, &layout, session);

        let stats = session.stats();
        let best = (*stats.best_time())
            .map(format_secs)
            .unwrap_or_else(|| "-".to_string());
        let score = format!(
            "W:{} L:{} D:{}   Streak: {} (best {})   Best: {}   Time: {}",
            stats.wins(),
            stats.losses(),
            stats.draws(),
            stats.current_streak(),
            stats.best_streak(),
            best,
            format_secs(session.elapsed()),
        );
        frame.render_widget(
            Paragraph::new(score)
                .style(Style::default().fg(Color::Green))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title("Session")),
            layout.scoreboard,
        );

        frame.render_widget(
            Paragraph::new("1-9/arrows+Enter/click: Play | r: Restart | Esc/b: Back | q: Quit")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            layout.help,
        );

        if let Some(banner) = session.banner() {
            Self::draw_overlay(frame, layout.overlay, banner);
        }
    }

    #[instrument(skip(self, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<Command> {
        if let Some(pos) = digit_cell(key.code) {
            self.cursor = pos;
            return Some(Command::PlayCell(pos));
        }
        match key.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key.code);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') if session.game().is_over() => Some(Command::Restart),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Command::PlayCell(self.cursor)),
            KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, session: &Session) -> Option<Command> {
        let layout = BoardLayout::new(area);
        let point = ratatui::layout::Position::new(mouse.column, mouse.row);

        if let MouseEventKind::Moved = mouse.kind {
            if let Some(pos) = layout.cell_at(mouse.column, mouse.row) {
                self.cursor = pos;
            }
            return None;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }

        if layout.back.contains(point) {
            return Some(Command::Back);
        }
        if session.game().is_over() {
            return layout.overlay.contains(point).then_some(Command::Restart);
        }
        let pos = layout.cell_at(mouse.column, mouse.row)?;
        debug!(position = %pos, "Cell clicked");
        self.cursor = pos;
        Some(Command::PlayCell(pos))
    }
}
