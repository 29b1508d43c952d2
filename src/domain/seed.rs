//! Initial-state strategies for a freshly built universe.

use rand::{Rng, SeedableRng, rngs::StdRng};

use super::Cell;

/// Decides the initial state of every cell, by row-major index.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum SeedStrategy {
    /// Alive when the index is even or a multiple of 7
    #[default]
    Reference,
    /// Every cell dead
    Empty,
    /// Reproducible pseudo-random fill with the given alive probability
    Random { seed: u64, density: f64 },
}

impl SeedStrategy {
    /// Produce `len` cells in row-major order.
    pub fn generate(&self, len: usize) -> Vec<Cell> {
        let mut cells = vec![Cell::Dead; len];
        self.fill(&mut cells);
        cells
    }

    /// Overwrite `cells` (row-major) in place.
    pub fn fill(&self, cells: &mut [Cell]) {
        match *self {
            SeedStrategy::Reference => cells
                .iter_mut()
                .enumerate()
                .for_each(|(i, cell)| *cell = Cell::from_alive(i % 2 == 0 || i % 7 == 0)),
            SeedStrategy::Empty => cells.fill(Cell::Dead),
            SeedStrategy::Random { seed, density } => {
                // NaN falls through to 0.0 so random_bool never panics
                let p = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
                let mut rng = StdRng::seed_from_u64(seed);
                cells
                    .iter_mut()
                    .for_each(|cell| *cell = Cell::from_alive(rng.random_bool(p)));
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SeedStrategy::Reference => "reference",
            SeedStrategy::Empty => "empty",
            SeedStrategy::Random { .. } => "random",
        }
    }
}
