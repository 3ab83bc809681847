//! Screen implementations, one per session scene.

mod board;
mod difficulty;
mod home;

pub use board::BoardScreen;
pub use difficulty::DifficultyScreen;
pub use home::HomeScreen;
