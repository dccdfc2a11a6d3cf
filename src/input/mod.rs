use macroquad::prelude::*;
use tracing::debug;

use crate::application::{Simulation, ViewPort};
use crate::domain::Grid;

/// Pan the camera with WASD
pub fn handle_pan(view: &mut ViewPort) {
    let moves = [
        (KeyCode::W, (-1, 0)),
        (KeyCode::S, (1, 0)),
        (KeyCode::A, (0, -1)),
        (KeyCode::D, (0, 1)),
    ];

    moves
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .for_each(|&(_, (d_rows, d_cols))| view.pan(d_rows, d_cols));
}

/// Board cell under a window pixel, if the pixel lands on the board
pub fn cell_under(grid: &Grid, view: &ViewPort, mouse_pos: (f32, f32)) -> Option<(usize, usize)> {
    let (row, col) = view.pixel_to_board(mouse_pos.0.floor() as i32, mouse_pos.1.floor() as i32);
    let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
    (row < grid.rows() && col < grid.columns()).then_some((row, col))
}

/// Left click toggles a cell, right drag erases
pub fn handle_mouse(sim: &mut Simulation, view: &ViewPort, mouse_pos: (f32, f32)) {
    let Some((row, col)) = cell_under(&sim.grid, view, mouse_pos) else {
        return;
    };

    if is_mouse_button_pressed(MouseButton::Left) {
        match sim.grid.toggle(row, col) {
            Ok(alive) => debug!(row, col, alive, "toggled cell"),
            Err(err) => debug!(%err, "toggle ignored"),
        }
    } else if is_mouse_button_down(MouseButton::Right) {
        if let Err(err) = sim.grid.set(row, col, false) {
            debug!(%err, "erase ignored");
        }
    }
}

/// Process keyboard input functionally
pub fn process_keyboard_input(sim: Simulation) -> Simulation {
    type KeyAction = (KeyCode, fn(Simulation) -> Simulation);

    let actions: [KeyAction; 5] = [
        (KeyCode::Space, Simulation::toggle_running),
        (KeyCode::C, Simulation::clear),
        (KeyCode::R, |s| s.randomize(&mut ::rand::rng())),
        (KeyCode::Up, Simulation::faster),
        (KeyCode::Down, Simulation::slower),
    ];

    let mut sim = actions.iter().fold(sim, |s, (key, action)| {
        if is_key_pressed(*key) { action(s) } else { s }
    });

    // N steps a single generation while paused
    if !sim.is_running && is_key_pressed(KeyCode::N) {
        sim.step();
    }
    sim
}

/// Q or a window close request
pub fn wants_quit() -> bool {
    is_key_pressed(KeyCode::Q) || is_quit_requested()
}
