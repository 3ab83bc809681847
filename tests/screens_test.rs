//! Rendering and input tests for the terminal screens.

use std::time::Duration;

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use noughts::tui::{BoardLayout, Controller};
use noughts::{Flow, Muted, Scene, Session};
use noughts_engine::{Difficulty, GameStatus, Mark, MoveSelector, Position};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};

const WIDTH: u16 = 60;
const HEIGHT: u16 = 24;

fn controller() -> Controller {
    let session = Session::new(MoveSelector::new(Mark::O, Difficulty::Medium).with_seed(9));
    Controller::new(session, Box::new(Muted), Duration::ZERO, Duration::from_millis(16))
}

fn area() -> Rect {
    Rect::new(0, 0, WIDTH, HEIGHT)
}

fn key(controller: &mut Controller, code: KeyCode) -> Flow {
    controller.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)), area())
}

fn click(controller: &mut Controller, column: u16, row: u16) -> Flow {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    controller.handle_event(Event::Mouse(mouse), area())
}

fn screen_text(controller: &Controller) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal.draw(|f| controller.render(f)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn test_home_screen_renders_menu() {
    let controller = controller();
    let text = screen_text(&controller);
    assert!(text.contains("TIC TAC TOE"));
    assert!(text.contains("VS COMPUTER"));
    assert!(text.contains("VS HUMAN"));
    assert!(text.contains("> VS COMPUTER"));
}

#[test]
fn test_keyboard_path_to_ai_game() {
    let mut c = controller();
    key(&mut c, KeyCode::Enter);
    assert_eq!(*c.session().scene(), Scene::Difficulty);

    let text = screen_text(&c);
    assert!(text.contains("SELECT LEVEL"));
    // Current difficulty is highlighted.
    assert!(text.contains("> MEDIUM"));

    key(&mut c, KeyCode::Down);
    key(&mut c, KeyCode::Down);
    key(&mut c, KeyCode::Enter);
    assert_eq!(*c.session().scene(), Scene::Game);
    assert_eq!(*c.session().difficulty(), Difficulty::Impossible);

    key(&mut c, KeyCode::Char('5'));
    assert!(c.session().ai_pending());
    assert!(screen_text(&c).contains("Computer thinking"));

    let decision = c.take_ai_turn().unwrap();
    assert!(Position::CORNERS.contains(&decision.position));
    let text = screen_text(&c);
    assert!(text.contains("AI | IMPOSSIBLE"));
    assert!(text.contains("Your move (X)"));
}

#[test]
fn test_key_release_is_ignored() {
    let mut c = controller();
    let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    c.handle_event(Event::Key(release), area());
    assert_eq!(*c.session().scene(), Scene::Home);
}

#[test]
fn test_mouse_plays_cells_in_pvp() {
    let mut c = controller();
    key(&mut c, KeyCode::Down);
    key(&mut c, KeyCode::Enter);
    assert_eq!(*c.session().scene(), Scene::Game);
    assert!(screen_text(&c).contains("PVP"));

    let layout = BoardLayout::new(area());
    for n in [1, 4, 2, 5, 3] {
        let cell = layout.cells[Position::from_number(n).unwrap().index()];
        click(&mut c, cell.x + 1, cell.y + 1);
    }
    assert_eq!(c.session().game().status(), GameStatus::Won(Mark::X));

    let text = screen_text(&c);
    assert!(text.contains("X WINS!"));
    assert!(text.contains("RESTART"));

    // Clicking the overlay restarts.
    click(&mut c, layout.overlay.x + 2, layout.overlay.y + 2);
    assert_eq!(c.session().game().board().occupied(), 0);
    assert_eq!(*c.session().stats().wins(), 1);
}

#[test]
fn test_back_button_and_quit() {
    let mut c = controller();
    key(&mut c, KeyCode::Down);
    key(&mut c, KeyCode::Enter);

    let layout = BoardLayout::new(area());
    click(&mut c, layout.back.x + 2, layout.back.y + 1);
    assert_eq!(*c.session().scene(), Scene::Home);
    assert_eq!(key(&mut c, KeyCode::Char('q')), Flow::Quit);
}

#[test]
fn test_arrow_keys_and_enter_play_cursor_cell() {
    let mut c = controller();
    key(&mut c, KeyCode::Down);
    key(&mut c, KeyCode::Enter);

    key(&mut c, KeyCode::Up);
    key(&mut c, KeyCode::Left);
    key(&mut c, KeyCode::Enter);
    assert_eq!(c.session().game().board().count(Mark::X), 1);
    assert!(!c.session().game().board().is_empty(Position::TopLeft));
}

fn draw_at(controller: &Controller, width: u16, height: u16) {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| controller.render(f)).unwrap();
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    const SIZES: [(u16, u16); 2] = [(12, 6), (1, 1)];

    let mut c = controller();
    for (width, height) in SIZES {
        draw_at(&c, width, height);
    }

    key(&mut c, KeyCode::Enter);
    assert_eq!(*c.session().scene(), Scene::Difficulty);
    for (width, height) in SIZES {
        draw_at(&c, width, height);
    }

    key(&mut c, KeyCode::Enter);
    assert_eq!(*c.session().scene(), Scene::Game);
    for (width, height) in SIZES {
        draw_at(&c, width, height);
    }

    // Clicks resolve against the squeezed layout too.
    for (width, height) in SIZES {
        let tiny = Rect::new(0, 0, width, height);
        let layout = BoardLayout::new(tiny);
        for cell in layout.cells {
            let mouse = MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: cell.x,
                row: cell.y,
                modifiers: KeyModifiers::NONE,
            };
            c.handle_event(Event::Mouse(mouse), tiny);
            if c.session().ai_pending() {
                c.take_ai_turn();
            }
            draw_at(&c, width, height);
        }
    }
}
