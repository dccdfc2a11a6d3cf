use super::BitCells;
use crate::config::Limits;
use crate::error::{LifeError, Result};
use rand::Rng;

/// Grid owns the bounded board: its dimensions, tick delay and bit-packed cells.
///
/// Cells are addressed `(row, col)` and stored row-major at `row * columns + col`.
/// Callers outside the crate can read and flip single cells; only the
/// generation engine and the persistence codec replace the whole buffer.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: usize,
    columns: usize,
    tick_delay_ms: u32,
    limits: Limits,
    cells: BitCells,
}

impl Grid {
    /// Create an all-dead board checked against the default limits
    pub fn create(rows: usize, columns: usize, tick_delay_ms: u32) -> Result<Self> {
        Self::with_limits(rows, columns, tick_delay_ms, Limits::default())
    }

    /// Create an all-dead board checked against custom limits
    pub fn with_limits(
        rows: usize,
        columns: usize,
        tick_delay_ms: u32,
        limits: Limits,
    ) -> Result<Self> {
        limits.validate(rows, columns, tick_delay_ms)?;
        Ok(Self {
            rows,
            columns,
            tick_delay_ms,
            limits,
            cells: BitCells::new(rows * columns),
        })
    }

    /// Assemble a board from a fully populated buffer
    pub(crate) fn from_cells(
        rows: usize,
        columns: usize,
        tick_delay_ms: u32,
        limits: Limits,
        cells: BitCells,
    ) -> Result<Self> {
        limits.validate(rows, columns, tick_delay_ms)?;
        if cells.len() != rows * columns {
            return Err(LifeError::ConfigDrift {
                expected: rows * columns,
                found: cells.len(),
            });
        }
        Ok(Self {
            rows,
            columns,
            tick_delay_ms,
            limits,
            cells,
        })
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub const fn tick_delay_ms(&self) -> u32 {
        self.tick_delay_ms
    }

    pub const fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Change the pause between generations; rejected outside the limits
    pub fn set_tick_delay(&mut self, delay_ms: u32) -> Result<()> {
        self.limits.validate(self.rows, self.columns, delay_ms)?;
        self.tick_delay_ms = delay_ms;
        Ok(())
    }

    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if row < self.rows && col < self.columns {
            Ok(row * self.columns + col)
        } else {
            Err(LifeError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                columns: self.columns,
            })
        }
    }

    /// Read one cell
    pub fn get(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        Ok(self.cells.get(idx))
    }

    /// Write one cell
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<()> {
        let idx = self.index(row, col)?;
        self.cells.set(idx, alive);
        Ok(())
    }

    /// Flip one cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool> {
        let idx = self.index(row, col)?;
        let alive = !self.cells.get(idx);
        self.cells.set(idx, alive);
        Ok(alive)
    }

    /// Cell state for drawing.
    ///
    /// Takes signed coordinates because camera offsets can point past the
    /// board; anything off the board reads as dead instead of failing.
    pub fn is_alive(&self, row: i64, col: i64) -> bool {
        match (usize::try_from(row), usize::try_from(col)) {
            (Ok(r), Ok(c)) => self.get(r, c).unwrap_or(false),
            _ => false,
        }
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.count_alive()
    }

    /// Live cells as (row, col), row-major
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells.iter_alive().map(move |i| (i / columns, i % columns))
    }

    /// Reseed with exactly `living` distinct live cells (capped at board size)
    pub fn randomize<R: Rng + ?Sized>(&mut self, living: usize, rng: &mut R) {
        let total = self.cells.len();
        self.cells.clear();
        for idx in rand::seq::index::sample(rng, total, living.min(total)).iter() {
            self.cells.set(idx, true);
        }
    }

    pub(crate) fn cells(&self) -> &BitCells {
        &self.cells
    }

    /// Exchange the whole buffer with `next`; both must cover the board
    pub(crate) fn swap_cells(&mut self, next: &mut BitCells) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }

    pub(crate) fn clear_cells(&mut self) {
        self.cells.clear();
    }
}

/// Boards compare by shape, delay and every cell; limits are not board state.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self.tick_delay_ms == other.tick_delay_ms
            && self.cells == other.cells
    }
}

impl Eq for Grid {}
