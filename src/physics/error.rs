//! Errors raised while setting up a simulation

use crate::physics::math::Scalar;
use std::fmt;

/// Configuration errors detected before any time step runs
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The reference body named for momentum offsetting is not in the system
    UnknownBody {
        name: String,
        available: Vec<String>,
    },
    /// A body was constructed with zero, negative or non-finite mass
    NonPositiveMass { name: String, mass: Scalar },
    /// No advancer is registered under the requested name
    UnknownAdvancer(String),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownBody { name, available } => write!(
                f,
                "Unknown reference body: '{name}'. Available bodies: {}",
                available.join(", ")
            ),
            SimulationError::NonPositiveMass { name, mass } => {
                write!(f, "Body '{name}' must have a positive mass, got {mass}")
            }
            SimulationError::UnknownAdvancer(message) => write!(f, "{message}"),
        }
    }
}

impl std::error::Error for SimulationError {}
