use crate::Coord;

/// Computes the straight line of cells a drag from `start` to `end` covers, both ends included.
///
/// Only horizontal, vertical and exact 45° diagonal lines are allowed, matching the directions words
/// can be placed in. Any other drag collapses to just the `start` cell. The line has
/// `max(|rows|, |columns|) + 1` cells; use [`compute_line_within`] for coordinates that come
/// straight from a gesture.
pub fn compute_line(start: Coord, end: Coord) -> Vec<Coord> {
    let rows = start.0.abs_diff(end.0);
    let cols = start.1.abs_diff(end.1);

    let straight = rows == 0 || cols == 0 || rows == cols;
    if !straight {
        return vec![start];
    }

    let distance = rows.max(cols);

    (0..=distance)
        .map(|i| (step(start.0, end.0, i), step(start.1, end.1, i)))
        .collect()
}

/// Like [`compute_line`], but collapses to `[start]` unless both ends lie inside a grid of side
/// length `size`.
pub fn compute_line_within(start: Coord, end: Coord, size: usize) -> Vec<Coord> {
    let inside = |(row, col): Coord| row < size && col < size;

    if inside(start) && inside(end) {
        compute_line(start, end)
    } else {
        vec![start]
    }
}

/// Moves `i` cells from `from` towards `to`, never past it.
fn step(from: usize, to: usize, i: usize) -> usize {
    if to > from {
        from + i.min(to - from)
    } else {
        from - i.min(from - to)
    }
}

/// An in-progress drag gesture: the anchor cell and the line currently covered.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    start: Coord,
    size: usize,
    cells: Vec<Coord>,
}

impl Selection {
    /// Starts a drag on `start` in a grid of side length `size`.
    pub fn begin(start: Coord, size: usize) -> Self {
        Self {
            start,
            size,
            cells: vec![start],
        }
    }

    /// Moves the drag's end to `end`, recomputing the covered line. An `end` outside the grid
    /// collapses the line to the anchor.
    pub fn extend_to(&mut self, end: Coord) -> &[Coord] {
        self.cells = compute_line_within(self.start, end, self.size);
        &self.cells
    }

    /// The cell the drag started on.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// The cells currently covered, starting with the anchor.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Ends the drag, returning the covered cells.
    pub fn finish(self) -> Vec<Coord> {
        self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_cell() {
        for p in [(0, 0), (5, 7), (11, 11)] {
            assert_eq!(compute_line(p, p), vec![p]);
        }
    }

    #[test]
    fn straight_lines() {
        assert_eq!(compute_line((2, 1), (2, 4)), vec![(2, 1), (2, 2), (2, 3), (2, 4)]);
        assert_eq!(compute_line((3, 0), (0, 0)), vec![(3, 0), (2, 0), (1, 0), (0, 0)]);
        assert_eq!(compute_line((1, 1), (3, 3)), vec![(1, 1), (2, 2), (3, 3)]);
        assert_eq!(compute_line((3, 0), (0, 3)), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
        assert_eq!(compute_line((0, 3), (3, 0)), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    }

    #[test]
    fn crooked_drag_collapses_to_start() {
        assert_eq!(compute_line((0, 0), (1, 2)), vec![(0, 0)]);
        assert_eq!(compute_line((4, 4), (0, 5)), vec![(4, 4)]);
    }

    #[test]
    fn only_straight_lines_have_length() {
        for end_row in 0..6 {
            for end_col in 0..6 {
                let (d_row, d_col) = (end_row as isize - 2, end_col as isize - 3);
                let line = compute_line((2, 3), (end_row, end_col));
                let straight = d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs();

                if line.len() > 1 {
                    assert!(straight);
                    assert_eq!(line.len(), d_row.unsigned_abs().max(d_col.unsigned_abs()) + 1);
                    assert_eq!(line.last(), Some(&(end_row, end_col)));
                } else {
                    assert!(!straight || (d_row, d_col) == (0, 0));
                }
            }
        }
    }

    #[test]
    fn selection_follows_drag() {
        let mut selection = Selection::begin((0, 0), 12);

        assert_eq!(selection.extend_to((0, 2)), &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(selection.extend_to((1, 2)), &[(0, 0)]);
        assert_eq!(selection.extend_to((2, 2)), &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(selection.start(), (0, 0));
        assert_eq!(selection.finish(), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        const FAR: usize = 1 << 63;

        assert_eq!(compute_line((0, 0), (FAR, 1)), vec![(0, 0)]);
        assert_eq!(compute_line((FAR, 0), (0, 1)), vec![(FAR, 0)]);
        assert_eq!(
            compute_line((usize::MAX, 0), (usize::MAX - 2, 2)),
            vec![(usize::MAX, 0), (usize::MAX - 1, 1), (usize::MAX - 2, 2)]
        );
        assert_eq!(compute_line((usize::MAX, 5), (usize::MAX, 5)), vec![(usize::MAX, 5)]);
    }

    #[test]
    fn ends_outside_grid_collapse_to_start() {
        assert_eq!(compute_line_within((0, 0), (1 << 63, 1 << 63), 12), vec![(0, 0)]);
        assert_eq!(compute_line_within((0, 0), (0, 12), 12), vec![(0, 0)]);
        assert_eq!(compute_line_within((0, 0), (0, 2), 12), vec![(0, 0), (0, 1), (0, 2)]);

        let mut selection = Selection::begin((3, 3), 12);
        selection.extend_to((3, 5));
        assert_eq!(selection.extend_to((usize::MAX, usize::MAX)), &[(3, 3)]);
    }
}
