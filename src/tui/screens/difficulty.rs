//! Difficulty screen: choose how often the computer blunders.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use noughts_engine::Difficulty;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

use crate::session::{Command, Session};
use crate::tui::screen::Screen;
use crate::tui::ui::MenuLayout;

/// Levels in menu order followed by a BACK entry.
fn options() -> Vec<Option<Difficulty>> {
    Difficulty::iter().map(Some).chain([None]).collect()
}

/// State for the difficulty screen.
#[derive(Debug)]
pub struct DifficultyScreen {
    list_state: ListState,
}

impl DifficultyScreen {
    /// Creates the screen with `current` highlighted.
    #[instrument]
    pub fn new(current: Difficulty) -> Self {
        let index = options()
            .iter()
            .position(|opt| *opt == Some(current))
            .unwrap_or(0);
        debug!(index, "Initializing DifficultyScreen");
        Self {
            list_state: ListState::default().with_selected(Some(index)),
        }
    }

    fn step(&mut self, forward: bool) {
        let count = options().len();
        let i = self.list_state.selected().unwrap_or(0);
        let i = if forward {
            (i + 1) % count
        } else {
            (i + count - 1) % count
        };
        self.list_state.select(Some(i));
    }

    fn activate(&self) -> Command {
        let options = options();
        let idx = self.list_state.selected().unwrap_or(0);
        match options[idx.min(options.len() - 1)] {
            Some(difficulty) => {
                info!(%difficulty, "Difficulty selected");
                Command::ChooseDifficulty(difficulty)
            }
            None => Command::Back,
        }
    }
}

impl Screen for DifficultyScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, _session: &Session) {
        let layout = MenuLayout::new(frame.area());

        let title = Paragraph::new("SELECT LEVEL")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        let items: Vec<ListItem> = options()
            .into_iter()
            .map(|opt| match opt {
                Some(difficulty) => ListItem::new(format!(
                    "{:<12} {:>3.0}% random",
                    difficulty.to_string(),
                    difficulty.mistake_chance() * 100.0
                )),
                None => ListItem::new("BACK").style(Style::default().fg(Color::Gray)),
            })
            .collect();

        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Level"))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, layout.list, &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter/click: Start | Esc/b: Back | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<Command> {
        match key.code {
            KeyCode::Up => {
                self.step(false);
                None
            }
            KeyCode::Down => {
                self.step(true);
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => Some(Command::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, _session: &Session) -> Option<Command> {
        let layout = MenuLayout::new(area);
        let index = layout.item_at(mouse.column, mouse.row, options().len())?;
        self.list_state.select(Some(index));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(self.activate()),
            _ => None,
        }
    }
}
