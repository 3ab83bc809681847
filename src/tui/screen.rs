//! Screen trait for the terminal front end.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{Frame, layout::Rect};

use crate::session::{Command, Session};

/// Trait implemented by each screen.
///
/// Screens own only presentation state (menu highlight, board cursor).
/// Everything else lives in the [`Session`], which they read when drawing
/// and drive by returning a [`Command`]. `None` means stay put.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &Session);

    /// Handles a key press.
    fn handle_key(&mut self, key: KeyEvent, session: &Session) -> Option<Command>;

    /// Handles a mouse event. `area` is the full terminal area the screen
    /// was last drawn into.
    fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect, session: &Session) -> Option<Command> {
        let _ = (mouse, area, session);
        None
    }
}
