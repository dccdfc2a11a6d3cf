// Domain layer - board storage, neighbour counting, generation rule
pub mod domain;

// Application layer - pacing and camera
pub mod application;

// Persistence and shared plumbing
pub mod persistence;
pub mod config;
pub mod error;

// Infrastructure layer - rendering, input
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, GenerationEngine, count_neighbors, advance, clear_all};
pub use application::{Simulation, ViewPort, CameraAnchor};
pub use config::{Limits, Settings};
pub use error::{LifeError, Result};
