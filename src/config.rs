use std::{fs, path::Path};

use serde::Deserialize;

use crate::{Result, DEFAULT_LAYOUT_ATTEMPTS, DEFAULT_PLACEMENT_ATTEMPTS};

/// Tunable constants of a game session.
///
/// Every field has a default, so a TOML file only needs to list what it changes.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Seconds on the countdown when a session starts.
    pub time_limit_secs: u32,

    /// Hints a player may use per session.
    pub max_hints: u32,

    /// Leading letters of a word a hint reveals.
    pub hint_letters: usize,

    /// Words drawn from the category per session.
    pub words_per_game: usize,

    /// Random positions tried per word.
    pub placement_attempts: usize,

    /// Fresh layouts tried before unplaceable words are dropped.
    pub layout_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 12,
            time_limit_secs: 300,
            max_hints: 2,
            hint_letters: 2,
            words_per_game: 6,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            layout_attempts: DEFAULT_LAYOUT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    /// Parses a config from TOML.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_toml(&fs::read_to_string(path)?)
    }
}
