//! Noughts - terminal tic-tac-toe against a minimax opponent
//!
//! The game rules and the computer player live in [`noughts_engine`]. This
//! crate adds everything around them:
//!
//! - **Session**: menus, mode and difficulty choice, running statistics
//! - **Config**: TOML file plus command-line overrides
//! - **TUI**: ratatui screens with keyboard and mouse input
//! - **Headless**: `suggest` and `simulate` commands for scripting
//!
//! # Example
//!
//! ```
//! use noughts::{Command, Mode, Session};
//! use noughts_engine::{Difficulty, Mark, MoveSelector, Position};
//!
//! let mut session = Session::new(MoveSelector::new(Mark::O, Difficulty::Impossible));
//! session.apply(Command::ChooseMode(Mode::VsComputer));
//! session.apply(Command::ChooseDifficulty(Difficulty::Impossible));
//! session.apply(Command::PlayCell(Position::Center));
//!
//! let reply = session.take_ai_turn().unwrap();
//! assert!(Position::CORNERS.contains(&reply.position));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod headless;
mod session;
mod sound;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command as CliCommand};

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, GameConfig, Overrides};

// Crate-level exports - Headless commands
pub use headless::{side_to_move, simulate, suggest};

// Crate-level exports - Session state machine
pub use session::{AI_MARK, Command, Flow, HUMAN_MARK, Mode, Scene, Session};

// Crate-level exports - Sound
pub use sound::{Muted, SoundCue, TerminalBell, Tone, ToneSink};
