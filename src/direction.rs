use rand::Rng;

/// A grid coordinate as `(row, column)`, with the origin in the top left corner.
pub type Coord = (usize, usize);

/// The direction a word is placed in inside the word search grid.
///
/// Words are only placed in these four forward directions; the player may still select them
/// backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The word goes right from the start position.
    Horizontal,

    /// The word goes down from the start position.
    Vertical,

    /// The word goes diagonally down and right from the start position.
    DiagonalDown,

    /// The word goes diagonally up and right from the start position.
    DiagonalUp,
}

impl Direction {
    /// Every direction a word can be placed in.
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDown,
        Direction::DiagonalUp,
    ];

    /// Returns a random direction.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// The `(row, column)` step taken between two consecutive letters.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }

    /// Steps `steps` letters away from `begin`, returning `None` when that leaves a grid of
    /// side length `size`.
    pub fn offset(self, begin: Coord, steps: usize, size: usize) -> Option<Coord> {
        let (d_row, d_col) = self.delta();
        let steps = isize::try_from(steps).ok()?;

        let row = begin.0.checked_add_signed(d_row.checked_mul(steps)?)?;
        let col = begin.1.checked_add_signed(d_col.checked_mul(steps)?)?;

        (row < size && col < size).then_some((row, col))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn offset_follows_delta() {
        assert_eq!(Direction::Horizontal.offset((2, 2), 3, 12), Some((2, 5)));
        assert_eq!(Direction::Vertical.offset((2, 2), 3, 12), Some((5, 2)));
        assert_eq!(Direction::DiagonalDown.offset((2, 2), 3, 12), Some((5, 5)));
        assert_eq!(Direction::DiagonalUp.offset((5, 2), 3, 12), Some((2, 5)));
    }

    #[test]
    fn offset_rejects_out_of_bounds() {
        assert_eq!(Direction::Horizontal.offset((0, 10), 2, 12), None);
        assert_eq!(Direction::DiagonalUp.offset((1, 0), 2, 12), None);
        assert_eq!(Direction::Vertical.offset((11, 0), 0, 12), Some((11, 0)));
    }

    #[test]
    fn random_covers_every_direction() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..200 {
            seen.insert(Direction::random(&mut rng));
        }

        assert_eq!(seen.len(), Direction::ALL.len());
    }
}
