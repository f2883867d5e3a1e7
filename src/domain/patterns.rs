use super::{Cell, Grid};

/// A named arrangement of alive cells that can be stamped onto the grid
#[derive(Clone)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub rows: usize,
    pub cols: usize,
    /// Relative (row, col) offsets of alive cells
    pub cells: Vec<(usize, usize)>,
}

impl Pattern {
    /// Create a new pattern from alive cell offsets
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let rows = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let cols = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self {
            name,
            description,
            rows,
            cols,
            cells,
        }
    }

    /// Stamp the pattern onto the grid with its top-left corner at
    /// (row, col). Cells that would land past the board edge are dropped.
    pub fn place_on(&self, grid: &mut Grid, row: usize, col: usize) {
        for &(dr, dc) in &self.cells {
            let _ = grid.set(row + dr, col + dc, Cell::Alive);
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            "Still life",
            vec![(0, 0), (0, 1), (1, 0), (1, 1)],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            "Oscillator (period 2)",
            vec![(1, 0), (1, 1), (1, 2)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "Toad",
            "Oscillator (period 2)",
            vec![(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "Beacon",
            "Oscillator (period 2)",
            vec![(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
        )
    }

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            "Moves diagonally (period 4)",
            vec![(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_extent_is_derived_from_cells() {
        let block = presets::block();
        assert_eq!((block.rows, block.cols), (2, 2));

        let blinker = presets::blinker();
        assert_eq!((blinker.rows, blinker.cols), (2, 3));
    }

    #[test]
    fn test_place_on_stamps_alive_cells() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::block().place_on(&mut grid, 4, 4);

        assert_eq!(grid.count_alive(), 4);
        assert_eq!(grid.get(4, 4), Ok(Cell::Alive));
        assert_eq!(grid.get(5, 5), Ok(Cell::Alive));
    }

    #[test]
    fn test_place_on_drops_cells_past_the_edge() {
        let mut grid = Grid::new(10, 10).unwrap();
        presets::blinker().place_on(&mut grid, 8, 8);

        // Only the offsets landing inside the board are stamped
        assert_eq!(grid.count_alive(), 2);
        assert_eq!(grid.get(9, 8), Ok(Cell::Alive));
        assert_eq!(grid.get(9, 9), Ok(Cell::Alive));
    }
}
