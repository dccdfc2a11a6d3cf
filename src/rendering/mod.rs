use macroquad::prelude::*;

use crate::application::{Simulation, ViewPort};
use crate::domain::Grid;

const LIVING_CELL: Color = Color::new(125.0 / 255.0, 81.0 / 255.0, 227.0 / 255.0, 1.0);
const DEAD_CELL: Color = Color::new(240.0 / 255.0, 240.0 / 255.0, 240.0 / 255.0, 1.0);
pub const BACKGROUND: Color = Color::new(245.0 / 255.0, 245.0 / 255.0, 245.0 / 255.0, 1.0);
const GRID_LINE: Color = Color::new(0.85, 0.85, 0.85, 1.0);
const STATUS_TEXT: Color = Color::new(0.2, 0.2, 0.2, 1.0);

/// Draw the on-screen part of the board
pub fn draw_grid(grid: &Grid, view: &ViewPort) {
    let size = view.cell_size_px as f32;
    let draw_lines = view.cell_size_px >= 4;
    let (rows, cols) = view.visible_range();

    for row in rows {
        for col in cols.clone() {
            let Some((x, y)) = view.cell_to_pixel(row, col) else {
                continue;
            };
            let (x, y) = (x as f32, y as f32);
            let color = if grid.is_alive(row as i64, col as i64) {
                LIVING_CELL
            } else {
                DEAD_CELL
            };
            draw_rectangle(x, y, size, size, color);
            if draw_lines {
                draw_rectangle_lines(x, y, size, size, 1.0, GRID_LINE);
            }
        }
    }
}

/// Generation, speed and run state in the top-left corner
pub fn draw_status(sim: &Simulation) {
    let state = if sim.is_running {
        "running".to_owned()
    } else {
        format!("paused, next {}", sim.upcoming_population())
    };
    let status = format!(
        "Gen {}  |  {} alive  |  {}ms  |  {}",
        sim.generation,
        sim.grid.population(),
        sim.grid.tick_delay_ms(),
        state,
    );
    draw_rectangle(0.0, 0.0, measure_text(&status, None, 16, 1.0).width + 12.0, 22.0, BACKGROUND);
    draw_text(&status, 6.0, 16.0, 16.0, STATUS_TEXT);
}
