// Domain layer - Core simulation engine
pub mod domain;

// Application layer - Pacing and configuration for host drivers
pub mod application;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Pattern, SeedStrategy, Universe, UniverseError, presets};
pub use application::{Simulation, UniverseConfig};
