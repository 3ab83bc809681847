//! Session state machine: menus, the current game, and running statistics.
//!
//! `HOME → DIFFICULTY (computer only) → GAME → HOME | GAME (restart)`.
//! The session owns everything a frame loop needs; the UI only sends
//! [`Command`]s and reads state back.

use std::time::{Duration, Instant};

use derive_getters::Getters;
use noughts_engine::{
    Decision, Difficulty, Game, GameOutcome, GameStatus, Mark, MoveSelector, Position,
    SessionStats,
};
use tracing::{debug, info, instrument, warn};

use crate::config::GameConfig;
use crate::sound::SoundCue;

/// The human plays X and always moves first.
pub const HUMAN_MARK: Mark = Mark::X;

/// The computer plays O.
pub const AI_MARK: Mark = Mark::O;

/// Which screen the session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scene {
    /// Mode selection.
    Home,
    /// Difficulty selection (computer mode only).
    Difficulty,
    /// A game in progress or finished.
    Game,
}

/// Who the human is playing against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Mode {
    /// Against the move selector.
    #[strum(to_string = "AI")]
    VsComputer,
    /// Two humans taking turns.
    #[strum(to_string = "PVP")]
    VsHuman,
}

/// Input from the UI, already resolved to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Pick an opponent on the home screen.
    ChooseMode(Mode),
    /// Pick a level on the difficulty screen and start.
    ChooseDifficulty(Difficulty),
    /// Place the current mark on a cell.
    PlayCell(Position),
    /// Return to the home screen.
    Back,
    /// Start a new game after one has finished.
    Restart,
    /// Leave the application.
    Quit,
}

/// Whether the frame loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep going.
    Continue,
    /// Exit the loop.
    Quit,
}

/// All state for one run of the application.
#[derive(Debug, Getters)]
pub struct Session {
    scene: Scene,
    mode: Mode,
    difficulty: Difficulty,
    game: Game,
    stats: SessionStats,
    last_decision: Option<Decision>,
    #[getter(skip)]
    selector: MoveSelector,
    #[getter(skip)]
    started_at: Instant,
    #[getter(skip)]
    finished_in: Option<Duration>,
    #[getter(skip)]
    cues: Vec<SoundCue>,
}

impl Session {
    /// Creates a session on the home screen using `selector` for the computer.
    #[instrument(skip(selector))]
    pub fn new(selector: MoveSelector) -> Self {
        Self {
            scene: Scene::Home,
            mode: Mode::VsComputer,
            difficulty: *selector.difficulty(),
            game: Game::new(),
            stats: SessionStats::new(),
            last_decision: None,
            selector,
            started_at: Instant::now(),
            finished_in: None,
            cues: Vec::new(),
        }
    }

    /// Creates a session whose computer player follows `config`.
    #[instrument(skip(config))]
    pub fn from_config(config: &GameConfig) -> Self {
        let selector = MoveSelector::new(AI_MARK, *config.difficulty())
            .with_search(*config.search())
            .with_depth_limit(*config.depth_limit());
        let selector = match config.seed() {
            Some(seed) => selector.with_seed(*seed),
            None => selector,
        };
        Self::new(selector)
    }

    /// Applies one UI command.
    #[instrument(skip(self), fields(scene = ?self.scene))]
    pub fn apply(&mut self, command: Command) -> Flow {
        match (self.scene, command) {
            (_, Command::Quit) => {
                info!("Quit requested");
                return Flow::Quit;
            }

            (Scene::Home, Command::ChooseMode(Mode::VsComputer)) => {
                self.cues.push(SoundCue::Click);
                self.scene = Scene::Difficulty;
            }
            (Scene::Home, Command::ChooseMode(Mode::VsHuman)) => {
                self.cues.push(SoundCue::Click);
                self.mode = Mode::VsHuman;
                self.start_game();
            }

            (Scene::Difficulty, Command::ChooseDifficulty(difficulty)) => {
                self.cues.push(SoundCue::Click);
                self.difficulty = difficulty;
                self.selector.set_difficulty(difficulty);
                self.mode = Mode::VsComputer;
                self.start_game();
            }

            (Scene::Difficulty | Scene::Game, Command::Back) => {
                self.cues.push(SoundCue::Click);
                info!("Returning to home screen");
                self.scene = Scene::Home;
            }

            (Scene::Game, Command::Restart) if self.game.is_over() => {
                self.cues.push(SoundCue::Click);
                self.start_game();
            }

            (Scene::Game, Command::PlayCell(pos)) => self.play_human(pos),

            (scene, command) => {
                debug!(?scene, ?command, "Command ignored in this scene");
            }
        }
        Flow::Continue
    }

    /// True when the computer owes a move.
    pub fn ai_pending(&self) -> bool {
        self.scene == Scene::Game
            && self.mode == Mode::VsComputer
            && !self.game.is_over()
            && self.game.to_move() == AI_MARK
    }

    /// Lets the computer place exactly one mark, if it is its turn.
    #[instrument(skip(self))]
    pub fn take_ai_turn(&mut self) -> Option<Decision> {
        if !self.ai_pending() {
            return None;
        }
        match self.selector.play(&mut self.game) {
            Ok(Some(decision)) => {
                self.last_decision = Some(decision);
                self.after_move(AI_MARK);
                Some(decision)
            }
            Ok(None) => None,
            Err(e) => {
                warn!(error = %e, "Computer move rejected");
                None
            }
        }
    }

    /// Time spent on the current game, frozen once it finishes.
    pub fn elapsed(&self) -> Duration {
        self.finished_in
            .unwrap_or_else(|| self.started_at.elapsed())
    }

    /// Takes the sound cues queued since the last call.
    pub fn drain_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    /// Short mode label, e.g. `AI | MEDIUM` or `PVP`.
    pub fn headline(&self) -> String {
        match self.mode {
            Mode::VsComputer => format!("{} | {}", self.mode, self.difficulty),
            Mode::VsHuman => self.mode.to_string(),
        }
    }

    /// End-of-game banner, once the game is over.
    pub fn banner(&self) -> Option<&'static str> {
        match self.game.status() {
            GameStatus::InProgress => None,
            GameStatus::Won(Mark::X) => Some("X WINS!"),
            GameStatus::Won(Mark::O) => Some("O WINS!"),
            GameStatus::Draw => Some("DRAW!"),
        }
    }

    fn start_game(&mut self) {
        info!(mode = %self.mode, difficulty = %self.difficulty, "Starting new game");
        self.game = Game::new();
        self.last_decision = None;
        self.started_at = Instant::now();
        self.finished_in = None;
        self.scene = Scene::Game;
    }

    fn play_human(&mut self, pos: Position) {
        if self.game.is_over() || self.ai_pending() {
            debug!(position = %pos, "Not the human's turn");
            return;
        }
        if !self.game.board().is_empty(pos) {
            debug!(position = %pos, "Cell occupied");
            self.cues.push(SoundCue::Invalid);
            return;
        }

        let mark = self.game.to_move();
        if let Err(e) = self.game.place(pos) {
            warn!(error = %e, "Human move rejected");
            return;
        }
        self.after_move(mark);
    }

    fn after_move(&mut self, mark: Mark) {
        self.cues.push(SoundCue::Place(mark));

        let status = self.game.status();
        let Some(outcome) = GameOutcome::for_player(status, HUMAN_MARK) else {
            return;
        };

        let elapsed = self.started_at.elapsed();
        self.finished_in = Some(elapsed);
        self.stats.record(outcome, elapsed);
        info!(?status, %outcome, elapsed_ms = elapsed.as_millis() as u64, "Game over");

        let cue = match (self.mode, outcome) {
            (_, GameOutcome::Draw) => SoundCue::Draw,
            (Mode::VsHuman, _) | (Mode::VsComputer, GameOutcome::Win) => SoundCue::Win,
            (Mode::VsComputer, GameOutcome::Loss) => SoundCue::Lose,
        };
        self.cues.push(cue);
    }
}
