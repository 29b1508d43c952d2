use crate::domain::{Result, SeedStrategy, Universe};

/// Parameters for building a universe.
/// The default mirrors the classic 64x64 board with the reference seed.
#[derive(Debug, Clone, PartialEq)]
pub struct UniverseConfig {
    pub width: u32,
    pub height: u32,
    pub seed: SeedStrategy,
}

impl Default for UniverseConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            seed: SeedStrategy::Reference,
        }
    }
}

impl UniverseConfig {
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_seed(mut self, seed: SeedStrategy) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(&self) -> Result<Universe> {
        Universe::with_seed(self.width, self.height, &self.seed)
    }
}
