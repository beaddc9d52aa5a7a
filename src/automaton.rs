//! A two-state cellular automaton on a fixed rectangular grid of lights.
//!
//! Cells are addressed by `(x, y)` where `x` is the row and `y` is the column. Every generation is
//! computed from a complete snapshot of the previous one, and the grid never changes size.
//!
//! The neighbor rule is the standard one: a light that is on stays on with 2 or 3 neighbors on,
//! and a light that is off turns on with exactly 3 neighbors on. In stuck-corners mode the four
//! corner lights are always on instead.

use std::fmt::{self, Display};

use nalgebra::DMatrix;

/// A rectangular grid of lights, on (`true`) or off (`false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: DMatrix<bool>,
}

impl Grid {
    /// Build a grid of `height` rows and `width` columns from cells in row-major order.
    ///
    /// # Panics
    ///
    /// If the iterator does not hold exactly `height * width` cells.
    pub fn from_row_iterator(
        height: usize,
        width: usize,
        cells: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            cells: DMatrix::from_row_iterator(height, width, cells),
        }
    }

    /// A grid with every light off.
    #[cfg(test)]
    pub fn all_off(height: usize, width: usize) -> Self {
        Self {
            cells: DMatrix::from_element(height, width, false),
        }
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the light at row `x`, column `y` is on.
    pub fn is_on(&self, x: usize, y: usize) -> bool {
        self.cells[(x, y)]
    }

    /// Whether `(x, y)` is one of the four corners of the grid.
    fn is_corner(&self, x: usize, y: usize) -> bool {
        let last_x = self.height().saturating_sub(1);
        let last_y = self.width().saturating_sub(1);
        (x == 0 || x == last_x) && (y == 0 || y == last_y)
    }

    /// Turn on the four corner lights.
    ///
    /// Stuck-corners mode only keeps corners on from the first generation onward, so the initial
    /// grid should be prepared with this first.
    pub fn with_corners_on(mut self) -> Self {
        if self.cells.is_empty() {
            return self;
        }
        let last_x = self.height() - 1;
        let last_y = self.width() - 1;
        for corner in [(0, 0), (0, last_y), (last_x, 0), (last_x, last_y)] {
            self.cells[corner] = true;
        }
        self
    }

    /// Count the lights that are on among the up to eight cells around `(x, y)`.
    ///
    /// Neighbors beyond the edges of the grid count as off.
    pub fn neighbor_on_count(&self, x: usize, y: usize) -> usize {
        let rows = x.saturating_sub(1)..=(x + 1).min(self.height() - 1);
        let columns = y.saturating_sub(1)..=(y + 1).min(self.width() - 1);

        rows.flat_map(|row| columns.clone().map(move |column| (row, column)))
            .filter(|&position| position != (x, y) && self.cells[position])
            .count()
    }

    /// The state of the light at `(x, y)` in the next generation.
    pub fn next_cell_state(&self, x: usize, y: usize, corners_stuck: bool) -> bool {
        if corners_stuck && self.is_corner(x, y) {
            return true;
        }
        matches!(
            (self.is_on(x, y), self.neighbor_on_count(x, y)),
            (true, 2 | 3) | (false, 3)
        )
    }

    /// Compute the next generation as a new grid, leaving this one untouched.
    pub fn step(&self, corners_stuck: bool) -> Self {
        Self {
            cells: DMatrix::from_fn(self.height(), self.width(), |x, y| {
                self.next_cell_state(x, y, corners_stuck)
            }),
        }
    }

    /// Step through a number of generations, returning the final grid.
    ///
    /// Zero generations returns an unchanged copy.
    pub fn iterate(&self, generations: usize, corners_stuck: bool) -> Self {
        let mut grid = self.clone();
        for _ in 0..generations {
            grid = grid.step(corners_stuck);
        }
        grid
    }

    /// Count the lights that are on across the whole grid.
    pub fn count_on(&self) -> usize {
        self.cells.iter().filter(|&&on| on).count()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, row) in self.cells.row_iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            for &on in row.iter() {
                write!(f, "{}", if on { '#' } else { '.' })?;
            }
        }
        Ok(())
    }
}
