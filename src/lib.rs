//! Solarbench library
//!
//! The physics core and driver of the outer solar system N-body benchmark,
//! exposed as a library for the binary, the benches and integration tests.

pub mod cli;
pub mod config;
pub mod physics;
pub mod plugins;
pub mod prelude;
pub mod simulation;

pub use config::SimulationConfig;
pub use physics::{
    Body, SimulationError, SolarSystem, advance, math::Scalar, math::Vector, offset_momentum,
    report_energy,
};
pub use plugins::BenchmarkPlugin;
pub use simulation::{Simulation, run};
