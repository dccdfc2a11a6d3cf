use std::time::Duration;

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::{GenerationEngine, Grid, next_generation};

/// Simulation paces generation advances for the front end.
/// It owns the board; the render/input layer borrows it between ticks.
pub struct Simulation {
    pub grid: Grid,
    engine: GenerationEngine,
    pub is_running: bool,
    pub generation: u64,
    update_timer: Duration,
    delay_step_ms: u32,
}

impl Simulation {
    pub fn new(grid: Grid, delay_step_ms: u32) -> Self {
        Self {
            grid,
            engine: GenerationEngine::new(),
            is_running: true,
            generation: 0,
            update_timer: Duration::ZERO,
            delay_step_ms,
        }
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!(running = self.is_running, "toggled simulation");
        self
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(mut self) -> Self {
        self.engine.clear_all(&mut self.grid);
        self.generation = 0;
        debug!("cleared board");
        self
    }

    /// Seed roughly a quarter of the board and reset the generation counter
    pub fn randomize<R: Rng + ?Sized>(mut self, rng: &mut R) -> Self {
        let living = self.grid.rows() * self.grid.columns() / 4;
        self.grid.randomize(living, rng);
        self.generation = 0;
        debug!(living, "randomized board");
        self
    }

    /// Shorten the tick delay by one step
    pub fn faster(self) -> Self {
        let delay = self.grid.tick_delay_ms().saturating_sub(self.delay_step_ms);
        self.with_delay(delay)
    }

    /// Lengthen the tick delay by one step
    pub fn slower(self) -> Self {
        let delay = self.grid.tick_delay_ms().saturating_add(self.delay_step_ms);
        self.with_delay(delay)
    }

    fn with_delay(mut self, delay_ms: u32) -> Self {
        let delay_ms = self.grid.limits().clamp_delay(delay_ms);
        match self.grid.set_tick_delay(delay_ms) {
            Ok(()) => debug!(delay_ms, "tick delay changed"),
            Err(err) => warn!(%err, "tick delay unchanged"),
        }
        self
    }

    /// Advance exactly one generation regardless of pacing
    pub fn step(&mut self) {
        self.engine.advance(&mut self.grid);
        self.generation += 1;
    }

    /// Population the board will have after the next step, leaving it untouched
    pub fn upcoming_population(&self) -> usize {
        next_generation(&self.grid).population()
    }

    /// Feed wall-clock time; advances at most one generation once the
    /// accumulated time reaches the board's tick delay.
    /// Returns whether a generation was computed.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if !self.is_running {
            return false;
        }

        self.update_timer += elapsed;
        let interval = Duration::from_millis(u64::from(self.grid.tick_delay_ms()));

        if self.update_timer < interval {
            return false;
        }

        self.step();
        self.update_timer = Duration::ZERO;
        true
    }
}
