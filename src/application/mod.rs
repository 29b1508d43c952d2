mod config;
mod simulation;

pub use config::UniverseConfig;
pub use simulation::Simulation;
