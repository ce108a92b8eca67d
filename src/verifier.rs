use crate::{Coord, Grid};

/// Points awarded per letter of a found word.
pub const POINTS_PER_LETTER: u32 = 10;

/// What the letters under a released selection spell, and which target word they matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchResult {
    /// The selected letters in selection order.
    pub forward: String,

    /// The selected letters in reverse order.
    pub reversed: String,

    /// The first target word spelled either way that hasn't been found yet.
    pub matched: Option<String>,
}

/// Reads the letters under `selected` and checks them, forwards and backwards, against the target
/// words that are not in `found`.
pub fn verify(
    selected: &[Coord],
    grid: &Grid,
    targets: &[String],
    found: &[String],
) -> MatchResult {
    let forward = grid.read(selected);
    let reversed: String = forward.chars().rev().collect();

    let matched = targets
        .iter()
        .find(|word| (**word == forward || **word == reversed) && !found.contains(*word))
        .cloned();

    MatchResult {
        forward,
        reversed,
        matched,
    }
}

/// The bonus for finding a word quickly: 20 while more than four fifths of the time limit
/// remain, 10 while more than two fifths remain, nothing after that.
pub fn time_bonus(time_remaining: u32, time_limit: u32) -> u32 {
    let (remaining, limit) = (u64::from(time_remaining) * 5, u64::from(time_limit));

    if remaining > limit * 4 {
        20
    } else if remaining > limit * 2 {
        10
    } else {
        0
    }
}

/// Points for finding `word` with `time_remaining` seconds left.
pub fn word_score(word: &str, time_remaining: u32, time_limit: u32) -> u32 {
    let letters = u32::try_from(word.chars().count()).unwrap_or(u32::MAX);

    letters
        .saturating_mul(POINTS_PER_LETTER)
        .saturating_add(time_bonus(time_remaining, time_limit))
}
