use crate::domain::{Algorithm, Result, SeedStrategy, Universe};

use super::UniverseConfig;

/// Simulation paces a universe for a host loop.
/// The universe itself has no notion of time; this layer decides when the
/// next generation is due and keeps the counters a driver displays.
pub struct Simulation {
    universe: Universe,
    pub algorithm: Algorithm,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    pub updates_per_second: f32,
    pub last_step_time_ms: f32,
}

impl Simulation {
    pub fn new(universe: Universe) -> Self {
        Self {
            universe,
            algorithm: Algorithm::default(),
            is_running: true,
            generation: 0,
            update_timer: 0.0,
            updates_per_second: 10.0,
            last_step_time_ms: 0.0,
        }
    }

    pub fn from_config(config: &UniverseConfig) -> Result<Self> {
        Ok(Self::new(config.build()?))
    }

    pub fn universe(&self) -> &Universe {
        &self.universe
    }

    /// Mutable access for direct edits such as pattern placement
    pub fn universe_mut(&mut self) -> &mut Universe {
        &mut self.universe
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        tracing::debug!(algorithm = algorithm.name(), "algorithm selected");
        self.algorithm = algorithm;
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    pub fn with_speed(mut self, updates_per_second: f32) -> Self {
        self.updates_per_second = updates_per_second.clamp(1.0, 60.0);
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        self
    }

    /// Adjust simulation speed
    pub fn adjust_speed(mut self, delta: f32) -> Self {
        self.updates_per_second = (self.updates_per_second + delta).clamp(1.0, 60.0);
        self
    }

    /// Replace every cell from `seed` and reset the generation counter
    pub fn reseed(mut self, seed: &SeedStrategy) -> Self {
        self.universe.reseed(seed);
        self.generation = 0;
        self
    }

    /// Clear grid and reset generation counter
    pub fn clear(mut self) -> Self {
        self.universe.clear();
        self.generation = 0;
        self.is_running = false;
        self
    }

    /// Advance exactly one generation regardless of pacing
    pub fn step(&mut self) {
        let start = std::time::Instant::now();
        self.algorithm.step(&mut self.universe);
        self.last_step_time_ms = start.elapsed().as_secs_f32() * 1000.0;
        self.generation += 1;
    }

    /// Update simulation by one frame.
    /// At most one generation is produced per call.
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        self.update_timer += delta_time;
        let update_interval = 1.0 / self.updates_per_second;

        if self.update_timer >= update_interval {
            self.step();
            self.update_timer = 0.0;
        }

        self
    }

    /// Current text snapshot of the universe
    pub fn snapshot(&self) -> String {
        self.universe.render()
    }
}
