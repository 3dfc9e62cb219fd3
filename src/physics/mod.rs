//! Physics core: body store, momentum offset, pairwise advancers and energy

pub mod advancers;
pub mod bodies;
pub mod energy;
pub mod error;
pub mod math;
pub mod momentum;

pub use advancers::advance;
pub use bodies::{Body, SolarSystem};
pub use energy::report_energy;
pub use error::SimulationError;
pub use momentum::offset_momentum;
