//! Explicit configuration values handed to the board and viewport constructors.

use crate::application::CameraAnchor;
use crate::error::{LifeError, Result};

/// Hard ceiling on cells per board; the bit-packed store keeps this at ~125KB.
pub const MAX_CELLS: usize = 1_000_000;

/// Inclusive bounds a board's dimensions and tick delay must respect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub min_rows: usize,
    pub max_rows: usize,
    pub min_columns: usize,
    pub max_columns: usize,
    pub min_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_rows: 15,
            max_rows: 45,
            min_columns: 30,
            max_columns: 80,
            min_delay_ms: 20,
            max_delay_ms: 1000,
        }
    }
}

impl Limits {
    /// Check a board shape against these bounds
    pub fn validate(&self, rows: usize, columns: usize, delay_ms: u32) -> Result<()> {
        if rows == 0 || columns == 0 {
            return Err(LifeError::Config(format!(
                "board must have at least one cell, got {rows}x{columns}"
            )));
        }
        if !(self.min_rows..=self.max_rows).contains(&rows) {
            return Err(LifeError::Config(format!(
                "rows {rows} outside [{}, {}]",
                self.min_rows, self.max_rows
            )));
        }
        if !(self.min_columns..=self.max_columns).contains(&columns) {
            return Err(LifeError::Config(format!(
                "columns {columns} outside [{}, {}]",
                self.min_columns, self.max_columns
            )));
        }
        if !(self.min_delay_ms..=self.max_delay_ms).contains(&delay_ms) {
            return Err(LifeError::Config(format!(
                "delay {delay_ms}ms outside [{}, {}]",
                self.min_delay_ms, self.max_delay_ms
            )));
        }
        if rows.saturating_mul(columns) > MAX_CELLS {
            return Err(LifeError::Config(format!(
                "{rows}x{columns} exceeds {MAX_CELLS} cells"
            )));
        }
        Ok(())
    }

    /// Clamp a delay into range (used by the speed keys)
    pub fn clamp_delay(&self, delay_ms: u32) -> u32 {
        delay_ms.clamp(self.min_delay_ms, self.max_delay_ms)
    }
}

/// Everything the front end needs to build a board and its viewport.
#[derive(Clone, Debug)]
pub struct Settings {
    pub limits: Limits,
    pub window_width: u32,
    pub window_height: u32,
    /// Step applied by the faster/slower keys
    pub delay_step_ms: u32,
    pub pan_speed_cells: i32,
    pub anchor: CameraAnchor,
    /// Board shape used when no saved board can be read
    pub fallback_rows: usize,
    pub fallback_columns: usize,
    pub fallback_delay_ms: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            window_width: 800,
            window_height: 600,
            delay_step_ms: 20,
            pan_speed_cells: 1,
            anchor: CameraAnchor::default(),
            fallback_rows: 30,
            fallback_columns: 60,
            fallback_delay_ms: 100,
        }
    }
}
