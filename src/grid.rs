use std::{fmt::Display, ops::Index};

use array2d::Array2D;

use crate::Coord;

/// Number of distinct colours found words cycle through.
pub const FOUND_PALETTE_SIZE: usize = 6;

/// A single letter of the word search grid, together with its display state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The uppercase letter shown in this cell.
    pub letter: char,

    /// Whether the cell is currently highlighted by a drag or a hint.
    pub is_selected: bool,

    /// Whether a target word was placed through this cell. Never shown to the player.
    pub is_part_of_word: bool,

    /// Whether this cell belongs to a word the player has found.
    pub is_found_word: bool,

    /// The order in which the word covering this cell was found, if any.
    pub found_word_index: Option<usize>,
}

impl Cell {
    pub(crate) fn new(letter: char, is_part_of_word: bool) -> Self {
        Self {
            letter,
            is_selected: false,
            is_part_of_word,
            is_found_word: false,
            found_word_index: None,
        }
    }

    /// The palette slot to colour this cell with, if it belongs to a found word.
    pub fn palette_slot(&self) -> Option<usize> {
        self.found_word_index
            .filter(|_| self.is_found_word)
            .map(|index| index % FOUND_PALETTE_SIZE)
    }
}

/// A square grid of [`Cell`]s.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Array2D<Cell>,
}

impl Grid {
    pub(crate) fn from_cells(cells: Array2D<Cell>) -> Self {
        debug_assert_eq!(cells.num_rows(), cells.num_columns());
        Self { cells }
    }

    /// The side length of the grid.
    pub fn size(&self) -> usize {
        self.cells.num_rows()
    }

    /// Whether `coord` lies inside the grid.
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size() && col < self.size()
    }

    /// Gets the cell at the specified coordinate, returning [`Option::None`] if it is out of bounds.
    pub fn get(&self, (row, col): Coord) -> Option<&Cell> {
        self.cells.get(row, col)
    }

    /// Gets the letter at the specified coordinate, returning [`Option::None`] if it is out of bounds.
    pub fn letter(&self, coord: Coord) -> Option<char> {
        self.get(coord).map(|cell| cell.letter)
    }

    /// Reads the letters under `coords` in order. Coordinates outside the grid are skipped.
    pub fn read(&self, coords: &[Coord]) -> String {
        coords.iter().filter_map(|&coord| self.letter(coord)).collect()
    }

    /// Iterates over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = &Cell>> {
        self.cells.rows_iter()
    }

    /// Highlights exactly the cells in `coords` and clears every other highlight.
    pub fn highlight(&mut self, coords: &[Coord]) {
        self.for_each_cell(|coord, cell| cell.is_selected = coords.contains(&coord));
    }

    /// Removes all highlights.
    pub fn clear_selection(&mut self) {
        self.for_each_cell(|_, cell| cell.is_selected = false);
    }

    /// Marks the cells in `coords` as belonging to the `index`-th found word.
    pub fn mark_found(&mut self, coords: &[Coord], index: usize) {
        for &(row, col) in coords {
            if let Some(cell) = self.cells.get_mut(row, col) {
                cell.is_found_word = true;
                cell.found_word_index = Some(index);
            }
        }
    }

    /// Highlights the cells in `coords` that are not already part of a found word.
    pub(crate) fn highlight_unfound(&mut self, coords: &[Coord]) {
        self.for_each_cell(|coord, cell| {
            cell.is_selected = coords.contains(&coord) && !cell.is_found_word;
        });
    }

    /// Coordinates of every highlighted cell, in row-major order.
    pub fn selected(&self) -> Vec<Coord> {
        let mut selected = Vec::new();

        for row in 0..self.size() {
            for col in 0..self.size() {
                if self.cells[(row, col)].is_selected {
                    selected.push((row, col));
                }
            }
        }

        selected
    }

    fn for_each_cell(&mut self, mut f: impl FnMut(Coord, &mut Cell)) {
        let size = self.size();

        for row in 0..size {
            for col in 0..size {
                f((row, col), &mut self.cells[(row, col)]);
            }
        }
    }
}

impl Index<Coord> for Grid {
    type Output = Cell;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell.letter)?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn grid(rows: &[&str]) -> Grid {
        let rows: Vec<Vec<Cell>> = rows
            .iter()
            .map(|row| row.chars().map(|ch| Cell::new(ch, false)).collect())
            .collect();

        Grid::from_cells(Array2D::from_rows(&rows).unwrap())
    }

    #[test]
    fn read_skips_out_of_bounds() {
        let grid = grid(&["AB", "CD"]);

        assert_eq!(grid.read(&[(0, 0), (1, 1), (5, 5)]), "AD");
        assert_eq!(grid.letter((2, 0)), None);
    }

    #[test]
    fn highlight_replaces_previous_selection() {
        let mut grid = grid(&["ABC", "DEF", "GHI"]);

        grid.highlight(&[(0, 0), (0, 1)]);
        grid.highlight(&[(1, 1), (2, 2)]);

        assert_eq!(grid.selected(), vec![(1, 1), (2, 2)]);

        grid.clear_selection();
        assert!(grid.selected().is_empty());
    }

    #[test]
    fn found_cells_cycle_through_palette() {
        let mut grid = grid(&["AB", "CD"]);

        grid.mark_found(&[(0, 0)], 1);
        grid.mark_found(&[(1, 1)], FOUND_PALETTE_SIZE + 2);

        assert_eq!(grid[(0, 0)].palette_slot(), Some(1));
        assert_eq!(grid[(1, 1)].palette_slot(), Some(2));
        assert_eq!(grid[(0, 1)].palette_slot(), None);
    }

    #[test]
    fn hint_highlight_skips_found_cells() {
        let mut grid = grid(&["AB", "CD"]);

        grid.mark_found(&[(0, 0)], 0);
        grid.highlight_unfound(&[(0, 0), (0, 1)]);

        assert_eq!(grid.selected(), vec![(0, 1)]);
    }

    #[test]
    fn display_prints_rows() {
        let grid = grid(&["AB", "CD"]);

        assert_eq!(grid.to_string(), "A B \nC D \n");
    }
}
