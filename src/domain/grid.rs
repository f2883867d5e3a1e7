use rand::Rng;

use super::{Cell, GridError};

/// Grid owns the 2D cell arena: a row-major `Vec<Cell>` with dimensions
/// fixed at construction. Coordinates outside `[0, rows) x [0, cols)` are
/// rejected, never wrapped; the board edge is a hard edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        })
    }

    /// Rebuild a grid from an already-computed cell arena (engine output)
    pub(crate) fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert 2D coordinates to the row-major index
    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(self.index(row, col))
        } else {
            Err(GridError::OutOfBounds { row, col })
        }
    }

    /// Get cell state at position
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.checked_index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = cell;
        Ok(())
    }

    /// Flip the cell at position (Alive <-> Dead)
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let idx = self.checked_index(row, col)?;
        self.cells[idx] = self.cells[idx].toggle();
        Ok(())
    }

    /// Infallible access for coordinates already known to be in bounds
    /// (the engine's scan path)
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[self.index(row, col)]
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Randomize the grid: every cell independently alive or dead with
    /// equal probability, drawn from the given source
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = if rng.random_bool(0.5) {
                Cell::Alive
            } else {
                Cell::Dead
            };
        });
    }

    /// Count alive cells
    pub fn count_alive(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .map(|(row, col)| (row, col, self.cell(row, col)))
    }
}
