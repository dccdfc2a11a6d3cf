mod game_state;
mod viewport;

pub use game_state::Simulation;
pub use viewport::{CameraAnchor, ViewPort};
