//! Solarbench prelude module
//!
//! Re-exports the types most modules and tests reach for.

// External crate re-exports
pub use bevy::prelude::*;

// Internal re-exports - Config
pub use crate::config::{RunConfig, SimulationConfig};

// Internal re-exports - Physics
pub use crate::physics::advancers::{Advancer, AdvancerRegistry};
pub use crate::physics::math::{Scalar, Vector};
pub use crate::physics::{
    Body, SimulationError, SolarSystem, advance, offset_momentum, report_energy,
};

// Internal re-exports - Simulation
pub use crate::simulation::{LoopEnergy, Simulation, TIME_STEP};
