//! Short sound cues and the sinks that play them.
//!
//! Tone synthesis is left to the host. A cue maps to a fixed frequency and
//! length; the terminal sink can only ring the bell, so it ignores both.

use std::io::Write;

use noughts_engine::Mark;
use tracing::{debug, trace, warn};

/// A fixed-frequency tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    /// Pitch in hertz.
    pub frequency_hz: u16,
    /// Length in milliseconds.
    pub duration_ms: u16,
}

/// Game events that make a sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    /// A menu choice was made.
    Click,
    /// A mark was placed.
    Place(Mark),
    /// A click on an occupied cell.
    Invalid,
    /// The tracked player won.
    Win,
    /// The tracked player lost.
    Lose,
    /// The game was drawn.
    Draw,
}

impl SoundCue {
    /// The tone for this cue.
    pub const fn tone(self) -> Tone {
        let (frequency_hz, duration_ms) = match self {
            SoundCue::Click => (660, 40),
            SoundCue::Place(Mark::X) => (523, 60),
            SoundCue::Place(Mark::O) => (392, 60),
            SoundCue::Invalid => (150, 80),
            SoundCue::Win => (880, 300),
            SoundCue::Lose => (220, 300),
            SoundCue::Draw => (440, 200),
        };
        Tone {
            frequency_hz,
            duration_ms,
        }
    }
}

/// Something that can play a tone.
pub trait ToneSink {
    /// Plays (or schedules) a tone. Must not block the frame loop.
    fn play(&mut self, cue: SoundCue);
}

/// Rings the terminal bell for outcome cues.
///
/// Placement and click cues are too frequent for a bell and are dropped.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl ToneSink for TerminalBell {
    fn play(&mut self, cue: SoundCue) {
        let tone = cue.tone();
        if matches!(cue, SoundCue::Click | SoundCue::Place(_)) {
            trace!(?cue, ?tone, "Cue below bell threshold");
            return;
        }
        debug!(?cue, frequency_hz = tone.frequency_hz, duration_ms = tone.duration_ms, "Ringing bell");
        let mut stdout = std::io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|()| stdout.flush()) {
            warn!(error = %e, "Failed to ring terminal bell");
        }
    }
}

/// Discards every cue.
#[derive(Debug, Default)]
pub struct Muted;

impl ToneSink for Muted {
    fn play(&mut self, cue: SoundCue) {
        trace!(?cue, "Muted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_tones_are_distinct() {
        let win = SoundCue::Win.tone();
        let lose = SoundCue::Lose.tone();
        let draw = SoundCue::Draw.tone();
        assert!(win.frequency_hz > draw.frequency_hz);
        assert!(draw.frequency_hz > lose.frequency_hz);
        assert_ne!(SoundCue::Place(Mark::X).tone(), SoundCue::Place(Mark::O).tone());
    }
}
