use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use life_board::{Settings, Simulation, ViewPort, input, persistence, rendering};

/// Conway's Game of Life on a bounded board, saved between runs.
#[derive(Parser)]
#[command(name = "life_board")]
struct Args {
    /// Config record: board shape and tick delay
    config: PathBuf,
    /// Data record: one row of 0/1 cells per line
    data: PathBuf,
}

fn window_conf() -> Conf {
    let settings = Settings::default();
    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: settings.window_width as i32,
        window_height: settings.window_height as i32,
        window_resizable: true,
        ..Default::default()
    }
}

fn startup(args: &Args, settings: &Settings) -> Result<(Simulation, ViewPort)> {
    let grid = persistence::load_or_empty(&args.config, &args.data, settings)
        .with_context(|| format!("cannot start from {}", args.config.display()))?;

    let view = ViewPort::fit_with(
        grid.rows(),
        grid.columns(),
        screen_width() as u32,
        screen_height() as u32,
        settings.anchor,
        settings.pan_speed_cells,
    );
    Ok((Simulation::new(grid, settings.delay_step_ms), view))
}

fn shutdown(args: &Args, sim: &Simulation) {
    // A failed save is reported but never takes the session down with it
    if let Err(err) = persistence::save(&args.config, &args.data, &sim.grid) {
        error!(%err, "could not save board");
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    // `#[macroquad::main]` opens the window before this body runs, so a
    // usage error still flashes a window. Parse first to keep that brief.
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::default();

    let (mut sim, mut view) = match startup(&args, &settings) {
        Ok(state) => state,
        Err(err) => {
            error!("{err:#}");
            std::process::exit(1);
        }
    };

    prevent_quit();
    info!("controls: space pause, N step, C clear, R random, up/down speed, WASD pan, Q quit");

    loop {
        let (width, height) = (screen_width() as u32, screen_height() as u32);
        if (width, height) != (view.window_width_px, view.window_height_px) {
            view.refit(width, height);
            info!(width, height, cell_size = view.cell_size_px, anchor = ?view.anchor(), "window resized");
        }

        if input::wants_quit() {
            shutdown(&args, &sim);
            break;
        }

        input::handle_pan(&mut view);
        input::handle_mouse(&mut sim, &view, mouse_position());
        sim = input::process_keyboard_input(sim);
        sim.tick(Duration::from_secs_f32(get_frame_time()));

        clear_background(rendering::BACKGROUND);
        rendering::draw_grid(&sim.grid, &view);
        rendering::draw_status(&sim);

        next_frame().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_args_need_both_paths() {
        assert!(Args::try_parse_from(["life_board"]).is_err());
        assert!(Args::try_parse_from(["life_board", "config"]).is_err());

        let args = Args::try_parse_from(["life_board", "config", "data.txt"]).unwrap();
        assert_eq!(args.config, PathBuf::from("config"));
        assert_eq!(args.data, PathBuf::from("data.txt"));
    }
}
