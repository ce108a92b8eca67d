use std::fmt::Display;

use array2d::Array2D;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::{debug, warn};

use crate::{Cell, Coord, Direction, Error, Grid, Result, WordPlacement};

/// How many random positions are tried for a single word before the layout is given up on.
pub const DEFAULT_PLACEMENT_ATTEMPTS: usize = 100;

/// How many fresh layouts are tried before unplaceable words are dropped.
pub const DEFAULT_LAYOUT_ATTEMPTS: usize = 10;

/// The configuration for a puzzle. See [`Puzzle::generate`] for details.
#[derive(Clone, Copy, Debug)]
pub struct PuzzleConfig<'a> {
    /// The side length of the square grid.
    pub size: usize,

    /// The list of words that will be hidden in the grid.
    pub words: &'a [String],

    /// The number of random `(row, column, direction)` triples tried per word.
    pub placement_attempts: usize,

    /// The number of fresh layouts tried when a word can't be placed.
    pub layout_attempts: usize,
}

impl<'a> PuzzleConfig<'a> {
    /// A config for `words` in a `size`x`size` grid with the default retry budgets.
    pub fn new(size: usize, words: &'a [String]) -> Self {
        Self {
            size,
            words,
            placement_attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            layout_attempts: DEFAULT_LAYOUT_ATTEMPTS,
        }
    }
}

/// A generated word search: the letter grid and where each target word was hidden.
#[derive(Clone, Debug)]
pub struct Puzzle {
    grid: Grid,
    placements: Vec<WordPlacement>,
    dropped: Vec<String>,
}

impl Puzzle {
    /// Generates a puzzle using the thread-local random number generator.
    pub fn new(config: &PuzzleConfig<'_>) -> Result<Self> {
        Self::generate(config, &mut rand::thread_rng())
    }

    /// Generates a reproducible puzzle from `seed`.
    pub fn seeded(config: &PuzzleConfig<'_>, seed: u64) -> Result<Self> {
        Self::generate(config, &mut StdRng::seed_from_u64(seed))
    }

    /// Creates and generates a new puzzle with the specified configuration, or returns an error
    /// if the words can't be used.
    ///
    /// Words are upper-cased before being placed. Every word must consist of letters only and be
    /// no longer than `config.size`. Words may cross each other where they share a letter.
    ///
    /// When a word can't be placed within `config.placement_attempts` tries, the whole layout is
    /// started again, up to `config.layout_attempts` times. If some words still don't fit, the
    /// layout placing the most words is kept and the others are reported by [`Puzzle::dropped`];
    /// they are not part of [`Puzzle::placements`] and can't be found.
    pub fn generate<R: Rng + ?Sized>(config: &PuzzleConfig<'_>, rng: &mut R) -> Result<Self> {
        let words = normalize_words(config)?;

        let mut layout = Layout::place_all(config.size, &words, config.placement_attempts, rng);

        for attempt in 1..config.layout_attempts {
            if layout.unplaced.is_empty() {
                break;
            }

            debug!(
                attempt,
                unplaced = layout.unplaced.len(),
                "layout left words unplaced, starting over"
            );

            let next = Layout::place_all(config.size, &words, config.placement_attempts, rng);
            if next.placements.len() > layout.placements.len() {
                layout = next;
            }
        }

        for word in &layout.unplaced {
            warn!(
                word = word.as_str(),
                size = config.size,
                "word could not be placed, removing it from the target list"
            );
        }

        let grid = layout.fill(rng);

        Ok(Self {
            grid,
            placements: layout.placements,
            dropped: layout.unplaced,
        })
    }

    /// The letter grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Where each playable word was placed, in input order.
    pub fn placements(&self) -> &[WordPlacement] {
        &self.placements
    }

    /// Words that could not be placed and were removed from the playable list.
    pub fn dropped(&self) -> &[String] {
        &self.dropped
    }

    /// The playable words, in input order.
    pub fn words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }

    pub(crate) fn into_parts(self) -> (Grid, Vec<WordPlacement>, Vec<String>) {
        (self.grid, self.placements, self.dropped)
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_with_words(f, &self.grid, &self.placements)
    }
}

/// Writes the grid with the word list alongside, one word per row, found words ticked.
pub(crate) fn write_with_words(
    f: &mut std::fmt::Formatter<'_>,
    grid: &Grid,
    placements: &[WordPlacement],
) -> std::fmt::Result {
    let mut words_iter = placements.iter();

    for row in grid.rows() {
        for cell in row {
            write!(f, "{} ", cell.letter)?;
        }

        match words_iter.next() {
            Some(placement) if placement.found => writeln!(f, "| {} ✓", placement.word)?,
            Some(placement) => writeln!(f, "| {}", placement.word)?,
            None => writeln!(f, "|")?,
        }
    }

    Ok(())
}

fn normalize_words(config: &PuzzleConfig<'_>) -> Result<Vec<String>> {
    if config.size == 0 {
        return Err(Error::EmptyGrid);
    }

    config
        .words
        .iter()
        .map(|word| {
            let word = word.trim().to_uppercase();

            if word.is_empty() || !word.chars().all(char::is_alphabetic) {
                return Err(Error::InvalidWord(word));
            }

            // check that the grid is big enough to hold the word in some direction
            if word.chars().count() > config.size {
                return Err(Error::DimensionsTooSmall {
                    size: config.size,
                    word,
                });
            }

            Ok(word)
        })
        .collect()
}

fn random_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

/// One attempt at hiding every word in an empty grid.
struct Layout {
    letters: Array2D<Option<char>>,
    placements: Vec<WordPlacement>,
    unplaced: Vec<String>,
}

impl Layout {
    fn place_all<R: Rng + ?Sized>(
        size: usize,
        words: &[String],
        placement_attempts: usize,
        rng: &mut R,
    ) -> Self {
        let mut layout = Self {
            letters: Array2D::filled_with(None, size, size),
            placements: Vec::with_capacity(words.len()),
            unplaced: Vec::new(),
        };

        for word in words {
            let letters: Vec<char> = word.chars().collect();

            let found = (0..placement_attempts).find_map(|_| {
                let direction = Direction::random(rng);
                let begin = (rng.gen_range(0..size), rng.gen_range(0..size));

                layout
                    .can_place(&letters, begin, direction)
                    .then_some((begin, direction))
            });

            match found {
                Some((begin, direction)) => {
                    let placement = WordPlacement::new(word.as_str(), begin, direction);
                    layout.place(&letters, &placement);
                    debug!(word = word.as_str(), ?begin, ?direction, "placed word");
                    layout.placements.push(placement);
                }
                None => layout.unplaced.push(word.clone()),
            }
        }

        layout
    }

    fn size(&self) -> usize {
        self.letters.num_rows()
    }

    /// Every letter position must be in bounds and either empty or already holding that letter.
    fn can_place(&self, letters: &[char], begin: Coord, direction: Direction) -> bool {
        letters.iter().enumerate().all(|(i, &ch)| {
            match direction.offset(begin, i, self.size()) {
                Some(coord) => self.letters[coord].map_or(true, |placed| placed == ch),
                None => false,
            }
        })
    }

    fn place(&mut self, letters: &[char], placement: &WordPlacement) {
        let size = self.size();

        for (&ch, coord) in letters.iter().zip(placement.indices(size)) {
            self.letters[coord] = Some(ch);
        }
    }

    fn fill<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        let size = self.size();
        let mut cells = Array2D::filled_with(Cell::new(' ', false), size, size);

        for row in 0..size {
            for col in 0..size {
                cells[(row, col)] = match self.letters[(row, col)] {
                    Some(ch) => Cell::new(ch, true),
                    None => Cell::new(random_letter(rng), false),
                };
            }
        }

        Grid::from_cells(cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    fn word_list(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn assert_placements_readable(puzzle: &Puzzle) {
        let size = puzzle.grid().size();

        for placement in puzzle.placements() {
            assert!(placement.in_bounds(size), "{placement:?} leaves the grid");
            assert_eq!(puzzle.grid().read(&placement.indices(size)), placement.word);

            for coord in placement.indices(size) {
                assert!(puzzle.grid()[coord].is_part_of_word);
            }
        }
    }

    #[test]
    fn generate_word_search() {
        let words = word_list(&["GATO", "PERRO", "LEON", "OSO", "PATO", "RANA"]);

        for seed in 0..50 {
            let puzzle = Puzzle::seeded(&PuzzleConfig::new(12, &words), seed).unwrap();

            assert_eq!(puzzle.words(), words);
            assert!(puzzle.dropped().is_empty());
            assert!(puzzle.placements().iter().all(|p| !p.found));
            assert_placements_readable(&puzzle);
        }
    }

    #[test]
    fn fills_every_cell_with_uppercase_letter() {
        let words = word_list(&["kiwi", "uva"]);
        let puzzle = Puzzle::seeded(&PuzzleConfig::new(12, &words), 3).unwrap();

        assert_eq!(puzzle.words(), vec!["KIWI".to_string(), "UVA".to_string()]);

        for row in puzzle.grid().rows() {
            for cell in row {
                assert!(cell.letter.is_alphabetic() && cell.letter.is_uppercase());
                assert!(!cell.is_selected && !cell.is_found_word);
            }
        }
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let words = word_list(&["ROJO", "AZUL", "VERDE"]);
        let config = PuzzleConfig::new(12, &words);

        let a = Puzzle::seeded(&config, 42).unwrap();
        let b = Puzzle::seeded(&config, 42).unwrap();

        assert_eq!(a.placements(), b.placements());
        assert_eq!(a.grid().to_string(), b.grid().to_string());
    }

    #[test]
    fn empty_word_search() {
        let puzzle = Puzzle::new(&PuzzleConfig::new(10, &[])).unwrap();

        assert!(puzzle.placements().is_empty());
        assert_eq!(puzzle.grid().size(), 10);
    }

    #[test]
    fn grid_too_small() {
        let words = word_list(&["MANZANA", "PERA"]);
        let puzzle = Puzzle::new(&PuzzleConfig::new(5, &words));

        assert!(matches!(
            puzzle,
            Err(Error::DimensionsTooSmall { size: 5, ref word }) if word == "MANZANA"
        ));
    }

    #[test]
    fn rejects_invalid_words() {
        let words = word_list(&["GATO", "ROJO2"]);
        let puzzle = Puzzle::new(&PuzzleConfig::new(12, &words));
        assert!(matches!(puzzle, Err(Error::InvalidWord(_))));

        let words = word_list(&["  "]);
        let puzzle = Puzzle::new(&PuzzleConfig::new(12, &words));
        assert!(matches!(puzzle, Err(Error::InvalidWord(_))));

        assert!(matches!(
            Puzzle::new(&PuzzleConfig::new(0, &[])),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    #[traced_test]
    fn unplaceable_words_are_dropped_and_reported() {
        // four cells can hold at most two of these words
        let words = word_list(&["AB", "CD", "EF", "GH"]);
        let puzzle = Puzzle::seeded(&PuzzleConfig::new(2, &words), 9).unwrap();

        assert!(puzzle.placements().len() <= 2);
        assert!(!puzzle.placements().is_empty());
        assert_eq!(
            puzzle.placements().len() + puzzle.dropped().len(),
            words.len()
        );

        for dropped in puzzle.dropped() {
            assert!(!puzzle.words().contains(dropped));
        }

        assert_placements_readable(&puzzle);
        assert!(logs_contain("word could not be placed"));
    }

    #[test]
    fn words_may_share_letters() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut layout = Layout::place_all(12, &[], DEFAULT_PLACEMENT_ATTEMPTS, &mut rng);
        let gato: Vec<char> = "GATO".chars().collect();
        layout.place(&gato, &WordPlacement::new("GATO", (0, 0), Direction::Horizontal));

        let oso: Vec<char> = "OSO".chars().collect();
        let pez: Vec<char> = "PEZ".chars().collect();

        assert!(layout.can_place(&oso, (0, 3), Direction::Vertical));
        assert!(!layout.can_place(&pez, (0, 3), Direction::Vertical));
        assert!(!layout.can_place(&oso, (10, 11), Direction::Vertical));
        assert!(!layout.can_place(&oso, (1, 0), Direction::DiagonalUp));
    }

    #[test]
    fn display_lists_words_next_to_grid() {
        let words = word_list(&["GATO"]);
        let puzzle = Puzzle::seeded(&PuzzleConfig::new(4, &words), 1).unwrap();
        let shown = puzzle.to_string();

        assert_eq!(shown.lines().count(), 4);
        assert!(shown.lines().next().unwrap().ends_with("| GATO"));
    }
}
