//! Difficulty levels and their mistake probabilities.

use serde::{Deserialize, Serialize};

/// How often the AI ignores its search and plays a random cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Difficulty {
    /// Random half the time.
    Easy,
    /// Occasional blunders.
    #[default]
    Medium,
    /// Rare blunders.
    Hard,
    /// Never blunders.
    Impossible,
}

/// Mistake probability per difficulty, in declaration order.
const MISTAKE_CHANCE: [(Difficulty, f64); 4] = [
    (Difficulty::Easy, 0.50),
    (Difficulty::Medium, 0.15),
    (Difficulty::Hard, 0.05),
    (Difficulty::Impossible, 0.0),
];

impl Difficulty {
    /// Probability in [0, 1] that a turn is played at random.
    pub fn mistake_chance(self) -> f64 {
        MISTAKE_CHANCE[self as usize].1
    }
}
