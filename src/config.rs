//! Game configuration loaded from TOML.

use std::path::{Path, PathBuf};
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_engine::{Difficulty, SearchMode, ai::DEFAULT_DEPTH_LIMIT};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// File looked for in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "noughts.toml";

/// Configuration for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Difficulty highlighted when the level menu opens.
    difficulty: Difficulty,

    /// Minimax variant used by the computer.
    search: SearchMode,

    /// Ply limit for the depth-limited search.
    depth_limit: u8,

    /// Pause before the computer moves, in milliseconds.
    ai_delay_ms: u64,

    /// Frame interval, in milliseconds.
    tick_ms: u64,

    /// Whether to ring the terminal bell for sound cues.
    sound: bool,

    /// Fixed RNG seed for reproducible games.
    seed: Option<u64>,

    /// Where logs go while the terminal UI owns the screen.
    log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            search: SearchMode::default(),
            depth_limit: DEFAULT_DEPTH_LIMIT,
            ai_delay_ms: 500,
            tick_ms: 16,
            sound: true,
            seed: None,
            log_file: PathBuf::from("noughts.log"),
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, search = %config.search, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] if present, else defaults.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_ms == 0 {
            return Err(ConfigError::new("tick_ms must be at least 1".to_string()));
        }
        if self.depth_limit == 0 || self.depth_limit > 9 {
            return Err(ConfigError::new(format!(
                "depth_limit must be between 1 and 9, got {}",
                self.depth_limit
            )));
        }
        Ok(())
    }

    /// Pause before the computer moves.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }

    /// Frame interval.
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn apply_overrides(&mut self, overrides: &Overrides) -> Result<(), ConfigError> {
        if let Some(difficulty) = overrides.difficulty {
            self.difficulty = difficulty;
        }
        if let Some(search) = overrides.search {
            self.search = search;
        }
        if let Some(depth_limit) = overrides.depth_limit {
            self.depth_limit = depth_limit;
        }
        if let Some(delay) = overrides.ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if overrides.seed.is_some() {
            self.seed = overrides.seed;
        }
        if overrides.mute {
            self.sound = false;
        }
        self.validate()
    }
}

/// Values supplied on the command line, each replacing the file value when set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Difficulty override.
    pub difficulty: Option<Difficulty>,
    /// Search override.
    pub search: Option<SearchMode>,
    /// Depth limit override.
    pub depth_limit: Option<u8>,
    /// AI delay override.
    pub ai_delay_ms: Option<u64>,
    /// Seed override.
    pub seed: Option<u64>,
    /// Turn sound off.
    pub mute: bool,
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(GameConfig::from_toml("").unwrap(), GameConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = GameConfig::from_toml(
            r#"
            difficulty = "impossible"
            search = "depth-limited"
            seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Impossible);
        assert_eq!(*config.search(), SearchMode::DepthLimited);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(config.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_rejects_unknown_keys_and_bad_values() {
        assert!(GameConfig::from_toml("colour = \"blue\"").is_err());
        assert!(GameConfig::from_toml("difficulty = \"nightmare\"").is_err());
        let err = GameConfig::from_toml("depth_limit = 0").unwrap_err();
        assert!(err.message.contains("depth_limit"));
    }

    #[test]
    fn test_overrides_win() {
        let mut config = GameConfig::default();
        config
            .apply_overrides(&Overrides {
                difficulty: Some(Difficulty::Easy),
                ai_delay_ms: Some(0),
                mute: true,
                ..Overrides::default()
            })
            .unwrap();
        assert_eq!(*config.difficulty(), Difficulty::Easy);
        assert_eq!(config.ai_delay(), Duration::ZERO);
        assert!(!config.sound());
    }
}
