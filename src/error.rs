use thiserror::Error;

/// An error that happened while setting up a word search or one of its collaborators.
#[derive(Debug, Error)]
pub enum Error {
    /// A word is longer than the grid is wide, so it can't be placed in any direction.
    #[error("grid of size {size}x{size} is too small for word {word:?}")]
    DimensionsTooSmall {
        /// The side length of the grid.
        size: usize,
        /// The word that doesn't fit.
        word: String,
    },

    /// The grid has no cells at all.
    #[error("grid size must be at least 1")]
    EmptyGrid,

    /// A word was empty or contained something other than letters.
    #[error("word {0:?} must be non-empty and only contain letters")]
    InvalidWord(String),

    /// No word category is known by this key.
    #[error("unknown word category {0:?}")]
    UnknownCategory(String),

    /// The game configuration couldn't be parsed.
    #[error("invalid game config: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A record file didn't contain the expected JSON.
    #[error("record store is corrupt: {0}")]
    Json(#[from] serde_json::Error),
}

/// Shorthand for results whose error is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
