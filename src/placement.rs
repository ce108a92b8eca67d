use crate::{Coord, Direction};

/// Describes where a target word's letters are placed in the grid: a beginning coordinate and a
/// direction, plus whether the player has found it yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPlacement {
    /// The placed word.
    pub word: String,

    /// The coordinate of the word's first letter.
    pub begin: Coord,

    /// The direction the word is read in.
    pub direction: Direction,

    /// Whether the player has found this word.
    pub found: bool,
}

impl WordPlacement {
    /// Creates a new, not yet found, placement.
    pub fn new(word: impl Into<String>, begin: Coord, direction: Direction) -> Self {
        Self {
            word: word.into(),
            begin,
            direction,
            found: false,
        }
    }

    /// The number of letters in the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Whether the placed word is empty. Generated placements never are.
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Returns all coordinates of the grid that the word spans across, in reading order.
    ///
    /// Steps that would leave a grid of side length `size` are cut off.
    pub fn indices(&self, size: usize) -> Vec<Coord> {
        (0..self.len())
            .map_while(|i| self.direction.offset(self.begin, i, size))
            .collect()
    }

    /// Whether the whole word fits inside a grid of side length `size`.
    pub fn in_bounds(&self, size: usize) -> bool {
        self.indices(size).len() == self.len()
    }
}
