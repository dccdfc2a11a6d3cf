//! Moore-neighbourhood counting with clipped edges.

use super::Grid;
use crate::error::Result;

/// The eight (drow, dcol) offsets around a cell.
const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Count live neighbours of `(row, col)`.
///
/// Neighbours past the board edge are skipped, not wrapped, so border
/// cells see at most 5 and corners at most 3.
pub fn count_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8> {
    grid.get(row, col)?;
    Ok(count_clipped(grid, row, col))
}

/// Same as [`count_neighbors`] for a coordinate already known to be on the board.
pub(crate) fn count_clipped(grid: &Grid, row: usize, col: usize) -> u8 {
    let (rows, columns) = grid.dimensions();
    let cells = grid.cells();

    OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < rows)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < columns)?;
            Some(r * columns + c)
        })
        .filter(|&idx| cells.get(idx))
        .count() as u8
}
