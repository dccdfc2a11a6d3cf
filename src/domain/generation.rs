//! Generation advance.
//!
//! The next generation is always computed into a second buffer from an
//! untouched copy of the current one, then swapped in. Writing into the
//! buffer that is still being read would let freshly updated cells leak
//! into their neighbours' counts.

use super::{BitCells, Cell, Grid, neighbors::count_clipped};

/// Double-buffered generation engine.
///
/// Keeps the back buffer between ticks so steady-state advancing does
/// not allocate.
#[derive(Debug, Default)]
pub struct GenerationEngine {
    back: Option<BitCells>,
}

impl GenerationEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace `grid`'s cells with the next generation
    pub fn advance(&mut self, grid: &mut Grid) {
        let len = grid.rows() * grid.columns();
        let mut next = match self.back.take() {
            Some(buf) if buf.len() == len => buf,
            _ => BitCells::new(len),
        };

        compute_into(grid, &mut next);
        grid.swap_cells(&mut next);

        // `next` now holds the previous generation; keep it as scratch
        self.back = Some(next);
    }

    /// Kill every cell
    pub fn clear_all(&mut self, grid: &mut Grid) {
        clear_all(grid);
    }
}

/// Write the successor of `grid` into `next`, reading only from `grid`.
fn compute_into(grid: &Grid, next: &mut BitCells) {
    let (rows, columns) = grid.dimensions();
    let current = grid.cells();

    for row in 0..rows {
        for col in 0..columns {
            let idx = row * columns + col;
            let state = Cell::from(current.get(idx));
            let neighbors = count_clipped(grid, row, col);
            next.set(idx, state.evolve(neighbors).is_alive());
        }
    }
}

/// Advance one generation in place (allocates a fresh back buffer)
pub fn advance(grid: &mut Grid) {
    GenerationEngine::new().advance(grid);
}

/// Pure form: return the next generation, leaving `grid` unchanged
pub fn next_generation(grid: &Grid) -> Grid {
    let mut next = grid.clone();
    advance(&mut next);
    next
}

/// Kill every cell; calling it twice is the same as once
pub fn clear_all(grid: &mut Grid) {
    grid.clear_cells();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn empty(rows: usize, columns: usize) -> Grid {
        let limits = Limits {
            min_rows: 1,
            min_columns: 1,
            ..Limits::default()
        };
        Grid::with_limits(rows, columns, 100, limits).unwrap()
    }

    fn live(grid: &Grid) -> Vec<(usize, usize)> {
        grid.iter_live().collect()
    }

    #[test]
    fn test_blinker_period_two() {
        let mut grid = empty(5, 5);
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }
        let start = grid.clone();

        let mut engine = GenerationEngine::new();
        engine.advance(&mut grid);
        assert_eq!(live(&grid), vec![(1, 2), (2, 2), (3, 2)]);

        engine.advance(&mut grid);
        assert_eq!(grid, start);
        assert_eq!(live(&grid), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn test_block_still_life() {
        let mut grid = empty(6, 6);
        grid.set(2, 2, true).unwrap();
        grid.set(2, 3, true).unwrap();
        grid.set(3, 2, true).unwrap();
        grid.set(3, 3, true).unwrap();
        let start = grid.clone();

        let mut engine = GenerationEngine::new();
        for _ in 0..10 {
            engine.advance(&mut grid);
            assert_eq!(grid, start);
        }
    }

    #[test]
    fn test_block_in_corner_is_still() {
        // Clipped edges: a block hugging the corner must not be disturbed
        let mut grid = empty(4, 4);
        grid.set(0, 0, true).unwrap();
        grid.set(0, 1, true).unwrap();
        grid.set(1, 0, true).unwrap();
        grid.set(1, 1, true).unwrap();
        let start = grid.clone();
        advance(&mut grid);
        assert_eq!(grid, start);
    }

    #[test]
    fn test_tromino_completes_block() {
        let mut grid = empty(4, 4);
        grid.set(0, 0, true).unwrap();
        grid.set(1, 0, true).unwrap();
        grid.set(1, 1, true).unwrap();

        advance(&mut grid);
        assert_eq!(live(&grid), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_glider_translates() {
        let mut grid = empty(10, 10);
        for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set(r, c, true).unwrap();
        }

        let mut engine = GenerationEngine::new();
        for _ in 0..4 {
            engine.advance(&mut grid);
        }
        assert_eq!(live(&grid), vec![(1, 2), (2, 3), (3, 1), (3, 2), (3, 3)]);
    }

    #[test]
    fn test_next_generation_is_pure() {
        let mut grid = empty(5, 5);
        for col in 1..=3 {
            grid.set(2, col, true).unwrap();
        }
        let before = grid.clone();
        let next = next_generation(&grid);
        assert_eq!(grid, before);
        assert_eq!(live(&next), vec![(1, 2), (2, 2), (3, 2)]);
        assert_eq!(next.tick_delay_ms(), before.tick_delay_ms());
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid = empty(3, 3);
        grid.set(1, 1, true).unwrap();
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_engine_survives_resized_board() {
        let mut engine = GenerationEngine::new();
        let mut small = empty(3, 3);
        engine.advance(&mut small);

        let mut big = empty(8, 8);
        for col in 2..=4 {
            big.set(4, col, true).unwrap();
        }
        engine.advance(&mut big);
        assert_eq!(live(&big), vec![(3, 3), (4, 3), (5, 3)]);
    }

    #[test]
    fn test_clear_all_idempotent() {
        let mut grid = empty(5, 7);
        grid.set(0, 0, true).unwrap();
        grid.set(4, 6, true).unwrap();

        let mut engine = GenerationEngine::new();
        engine.clear_all(&mut grid);
        let once = grid.clone();
        clear_all(&mut grid);
        assert_eq!(grid, once);

        for r in 0..5 {
            for c in 0..7 {
                assert!(!grid.get(r, c).unwrap());
            }
        }
    }

    #[test]
    fn test_empty_board_stays_empty() {
        let mut grid = empty(15, 30);
        advance(&mut grid);
        assert_eq!(grid.population(), 0);
    }
}
