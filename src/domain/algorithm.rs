//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants produce identical grids; they differ only in how the
//! rows of the next generation are scheduled.

use super::Universe;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Row by row on the calling thread
    #[default]
    Serial,
    /// Rows computed in parallel with rayon
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Double-buffered, 1 byte/cell, serial rows",
            Algorithm::Parallel => "Double-buffered, 1 byte/cell, rayon rows",
        }
    }

    /// Advance `universe` by one generation
    pub fn step(&self, universe: &mut Universe) {
        match self {
            Algorithm::Serial => universe.tick(),
            Algorithm::Parallel => universe.tick_parallel(),
        }
    }
}
