mod cell;
mod grid;
mod bit_grid;
pub mod neighbors;
pub mod generation;

pub use cell::Cell;
pub use grid::Grid;
pub use bit_grid::BitCells;
pub use neighbors::count_neighbors;
pub use generation::{GenerationEngine, advance, clear_all, next_generation};
