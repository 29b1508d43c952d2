mod cell;
mod error;
mod seed;
mod universe;
mod patterns;
mod algorithm;

pub use cell::Cell;
pub use error::{Result, UniverseError};
pub use seed::SeedStrategy;
pub use universe::Universe;
pub use patterns::{Pattern, presets};
pub use algorithm::Algorithm;
