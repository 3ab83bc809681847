//! Session statistics: results, streaks and best completion time.

use std::time::Duration;

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::types::{GameStatus, Mark};

/// Game outcome from one player's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum GameOutcome {
    /// The player won.
    Win,
    /// The player lost.
    Loss,
    /// Game ended in a draw.
    Draw,
}

impl GameOutcome {
    /// Reads a finished status from `mark`'s side. `None` while in progress.
    pub fn for_player(status: GameStatus, mark: Mark) -> Option<Self> {
        match status {
            GameStatus::InProgress => None,
            GameStatus::Draw => Some(Self::Draw),
            GameStatus::Won(winner) if winner == mark => Some(Self::Win),
            GameStatus::Won(_) => Some(Self::Loss),
        }
    }
}

/// Counters accumulated over a session. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionStats {
    wins: u32,
    losses: u32,
    draws: u32,
    current_streak: u32,
    best_streak: u32,
    /// Fastest win.
    best_time: Option<Duration>,
}

impl SessionStats {
    /// Creates empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one finished game that took `elapsed`.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: GameOutcome, elapsed: Duration) {
        match outcome {
            GameOutcome::Win => {
                self.wins += 1;
                self.current_streak += 1;
                self.best_streak = self.best_streak.max(self.current_streak);
                if self.best_time.is_none_or(|best| elapsed < best) {
                    self.best_time = Some(elapsed);
                }
            }
            GameOutcome::Loss => {
                self.losses += 1;
                self.current_streak = 0;
            }
            GameOutcome::Draw => {
                self.draws += 1;
                self.current_streak = 0;
            }
        }
        debug!(
            wins = self.wins,
            losses = self.losses,
            draws = self.draws,
            streak = self.current_streak,
            "Stats updated"
        );
    }

    /// Total games recorded.
    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.draws
    }

    /// Win rate as a percentage (0.0-100.0).
    pub fn win_rate(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => f64::from(self.wins) / f64::from(n) * 100.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_perspective() {
        let won = GameStatus::Won(Mark::X);
        assert_eq!(GameOutcome::for_player(won, Mark::X), Some(GameOutcome::Win));
        assert_eq!(GameOutcome::for_player(won, Mark::O), Some(GameOutcome::Loss));
        assert_eq!(GameOutcome::for_player(GameStatus::Draw, Mark::O), Some(GameOutcome::Draw));
        assert_eq!(GameOutcome::for_player(GameStatus::InProgress, Mark::X), None);
    }

    #[test]
    fn test_streaks() {
        let mut stats = SessionStats::new();
        let t = Duration::from_secs(10);
        stats.record(GameOutcome::Win, t);
        stats.record(GameOutcome::Win, t);
        stats.record(GameOutcome::Draw, t);
        stats.record(GameOutcome::Win, t);

        assert_eq!(*stats.current_streak(), 1);
        assert_eq!(*stats.best_streak(), 2);
        assert_eq!(stats.games(), 4);
        assert_eq!(stats.win_rate(), 75.0);
    }

    #[test]
    fn test_best_time_tracks_fastest_win_only() {
        let mut stats = SessionStats::new();
        stats.record(GameOutcome::Loss, Duration::from_secs(1));
        assert_eq!(*stats.best_time(), None);

        stats.record(GameOutcome::Win, Duration::from_secs(12));
        stats.record(GameOutcome::Win, Duration::from_secs(30));
        stats.record(GameOutcome::Win, Duration::from_secs(8));
        assert_eq!(*stats.best_time(), Some(Duration::from_secs(8)));
    }

    #[test]
    fn test_empty_win_rate() {
        assert_eq!(SessionStats::new().win_rate(), 0.0);
    }
}
