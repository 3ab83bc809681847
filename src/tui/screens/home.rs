//! Home screen: choose an opponent.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tracing::{info, instrument};

use crate::session::{Command, Mode, Session};
use crate::tui::screen::Screen;
use crate::tui::ui::MenuLayout;

/// Menu options on the home screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HomeOption {
    VsComputer,
    VsHuman,
    Quit,
}

impl HomeOption {
    const ALL: [HomeOption; 3] = [Self::VsComputer, Self::VsHuman, Self::Quit];

    fn label(self) -> &'static str {
        match self {
            Self::VsComputer => "VS COMPUTER",
            Self::VsHuman => "VS HUMAN",
            Self::Quit => "QUIT",
        }
    }

    fn command(self) -> Command {
        match self {
            Self::VsComputer => Command::ChooseMode(Mode::VsComputer),
            Self::VsHuman => Command::ChooseMode(Mode::VsHuman),
            Self::Quit => Command::Quit,
        }
    }
}

/// State for the home screen.
#[derive(Debug)]
pub struct HomeScreen {
    list_state: ListState,
}

impl HomeScreen {
    /// Creates the home screen with the first option highlighted.
    pub fn new() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }

    fn select_previous(&mut self) {
        let count = HomeOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) if i > 0 => i - 1,
            _ => count - 1,
        };
        self.list_state.select(Some(i));
    }

    fn select_next(&mut self) {
        let count = HomeOption::ALL.len();
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn selected_option(&self) -> HomeOption {
        let idx = self.list_state.selected().unwrap_or(0);
        HomeOption::ALL[idx.min(HomeOption::ALL.len() - 1)]
    }

    fn activate(&self) -> Command {
        let option = self.selected_option();
        info!(option = ?option, "Home option selected");
        option.command()
    }
}

impl Screen for HomeScreen {
    #[instrument(skip_all)]
    fn render(&self, frame: &mut Frame, session: &Session) {
        let layout = MenuLayout::new(frame.area());

        let title = Paragraph::new("TIC TAC TOE")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, layout.title);

        let items: Vec<ListItem> = HomeOption::ALL
            .iter()
            .map(|opt| ListItem::new(opt.label()))
            .collect();

        let stats = session.stats();
        let menu = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Play   W:{} L:{} D:{}",
                stats.wins(),
                stats.losses(),
                stats.draws()
            )))
            .highlight_style(
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        let mut list_state = self.list_state;
        frame.render_stateful_widget(menu, layout.list, &mut list_state);

        let help = Paragraph::new("↑↓: Navigate | Enter/click: Select | q: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, layout.help);
    }

    #[instrument(skip(self, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &Session) -> Option<Command> {
        match key.code {
            KeyCode::Up => {
                self.select_previous();
                None
            }
            KeyCode::Down => {
                self.select_next();
                None
            }
            KeyCode::Enter | KeyCode::Char(' ') => Some(self.activate()),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
            _ => None,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, _session: &Session) -> Option<Command> {
        let layout = MenuLayout::new(area);
        let index = layout.item_at(mouse.column, mouse.row, HomeOption::ALL.len())?;
        self.list_state.select(Some(index));
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(self.activate()),
            _ => None,
        }
    }
}
