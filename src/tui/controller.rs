//! Frame loop driving the session and its screens.

use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use noughts_engine::Decision;
use ratatui::{Frame, Terminal, backend::Backend, layout::Rect};
use tokio::time::sleep;
use tracing::{debug, info, instrument};

use crate::config::GameConfig;
use crate::session::{Flow, Scene, Session};
use crate::sound::{Muted, TerminalBell, ToneSink};
use crate::tui::screen::Screen;
use crate::tui::screens::{BoardScreen, DifficultyScreen, HomeScreen};

/// Screen currently shown, kept in step with [`Session::scene`].
#[derive(Debug)]
enum ActiveScreen {
    Home(HomeScreen),
    Difficulty(DifficultyScreen),
    Game(BoardScreen),
}

impl ActiveScreen {
    fn for_scene(scene: Scene, session: &Session) -> Self {
        match scene {
            Scene::Home => Self::Home(HomeScreen::new()),
            Scene::Difficulty => Self::Difficulty(DifficultyScreen::new(*session.difficulty())),
            Scene::Game => Self::Game(BoardScreen::new()),
        }
    }

    fn scene(&self) -> Scene {
        match self {
            Self::Home(_) => Scene::Home,
            Self::Difficulty(_) => Scene::Difficulty,
            Self::Game(_) => Scene::Game,
        }
    }

    fn screen(&self) -> &dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::Difficulty(s) => s,
            Self::Game(s) => s,
        }
    }

    fn screen_mut(&mut self) -> &mut dyn Screen {
        match self {
            Self::Home(s) => s,
            Self::Difficulty(s) => s,
            Self::Game(s) => s,
        }
    }
}

/// Owns the session and turns terminal events into session commands.
///
/// Call [`Controller::run`] to start the frame loop.
pub struct Controller {
    session: Session,
    screen: ActiveScreen,
    sink: Box<dyn ToneSink>,
    ai_delay: Duration,
    tick: Duration,
}

impl Controller {
    /// Creates a controller around an existing session.
    pub fn new(session: Session, sink: Box<dyn ToneSink>, ai_delay: Duration, tick: Duration) -> Self {
        let screen = ActiveScreen::for_scene(*session.scene(), &session);
        Self {
            session,
            screen,
            sink,
            ai_delay,
            tick,
        }
    }

    /// Creates a controller with a fresh session built from `config`.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let sink: Box<dyn ToneSink> = if *config.sound() {
            Box::new(TerminalBell)
        } else {
            Box::new(Muted)
        };
        Self::new(Session::from_config(config), sink, config.ai_delay(), config.tick())
    }

    /// The session being played.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Draws the active screen.
    pub fn render(&self, frame: &mut Frame) {
        self.screen.screen().render(frame, &self.session);
    }

    /// Routes one terminal event to the active screen and applies the
    /// resulting command. `area` is the terminal area used for hit-testing.
    #[instrument(skip(self, event))]
    pub fn handle_event(&mut self, event: Event, area: Rect) -> Flow {
        let command = match event {
            // Skip key release events (crossterm fires both press and release).
            Event::Key(key) if key.kind == KeyEventKind::Release => None,
            Event::Key(key) => self.screen.screen_mut().handle_key(key, &self.session),
            Event::Mouse(mouse) => self.screen.screen_mut().handle_mouse(mouse, area, &self.session),
            _ => None,
        };

        let Some(command) = command else {
            return Flow::Continue;
        };
        let flow = self.session.apply(command);

        let scene = *self.session.scene();
        if scene != self.screen.scene() {
            debug!(?scene, "Switching screen");
            self.screen = ActiveScreen::for_scene(scene, &self.session);
        }
        flow
    }

    /// Lets the computer place its mark if it owes one.
    pub fn take_ai_turn(&mut self) -> Option<Decision> {
        self.session.take_ai_turn()
    }

    /// Plays every queued sound cue.
    pub fn flush_cues(&mut self) {
        for cue in self.session.drain_cues() {
            self.sink.play(cue);
        }
    }

    /// Runs the frame loop until the user quits.
    #[instrument(skip(self, terminal))]
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> anyhow::Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting frame loop");

        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(self.tick)? {
                let event = event::read()?;
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                if self.handle_event(event, area) == Flow::Quit {
                    self.flush_cues();
                    info!("Frame loop quitting");
                    return Ok(());
                }
            }

            if self.session.ai_pending() {
                // Show the human's mark before the computer answers.
                terminal.draw(|f| self.render(f))?;
                self.flush_cues();
                sleep(self.ai_delay).await;
                self.take_ai_turn();
            }

            self.flush_cues();
            tokio::task::yield_now().await;
        }
    }
}
