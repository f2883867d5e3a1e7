use super::Grid;

/// Compute the next generation from a snapshot of the grid.
///
/// Pure function: the input grid is untouched and the result has the same
/// dimensions. Every cell's next state is derived from the same snapshot,
/// so scan order cannot leak into the output.
pub fn next_generation(grid: &Grid) -> Grid {
    let (rows, cols) = grid.dimensions();

    let cells = (0..rows)
        .flat_map(|row| (0..cols).map(move |col| (row, col)))
        .map(|(row, col)| {
            grid.cell(row, col)
                .next_state(live_neighbors(grid, row, col))
        })
        .collect();

    Grid::from_cells(rows, cols, cells)
}

/// Count alive cells in the 3x3 block around (row, col), excluding the
/// center. The block is clipped at the board edge; cells outside the grid
/// do not exist and are never counted (no toroidal wrap).
fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, cols) = grid.dimensions();
    let mut count = 0;

    for nr in row.saturating_sub(1)..(row + 2).min(rows) {
        for nc in col.saturating_sub(1)..(col + 2).min(cols) {
            if (nr, nc) != (row, col) && grid.cell(nr, nc).is_alive() {
                count += 1;
            }
        }
    }

    count
}
