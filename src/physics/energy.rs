//! Total energy diagnostic
//!
//! A correct integrator keeps this value nearly constant, so it is the main
//! correctness oracle for the benchmark. It plays no part in the dynamics.

use crate::physics::bodies::{Body, SolarSystem};
use crate::physics::math::{Scalar, length};

/// Gravitational potential energy of one pair, `-m_i·m_j / r`
///
/// Uses the plain distance, not the inverse cube the advancer needs.
#[inline]
pub fn pair_potential(body: &Body, other: &Body) -> Scalar {
    -(body.mass() * other.mass()) / length(body.position - other.position)
}

/// Kinetic energy `m·|v|²/2`
#[inline]
pub fn kinetic(body: &Body) -> Scalar {
    body.mass() * body.velocity.length_squared() / 2.0
}

/// Total energy of the system
///
/// Starting from zero, every pair's potential is subtracted in pair order,
/// then every body's kinetic energy is added in body order. That order is
/// part of the contract: it is what the golden values were produced with.
pub fn report_energy(system: &SolarSystem) -> Scalar {
    let bodies = system.bodies();
    let mut energy = 0.0;

    for (i, body) in bodies.iter().enumerate() {
        for other in &bodies[i + 1..] {
            energy += pair_potential(body, other);
        }
    }

    for body in bodies {
        energy += kinetic(body);
    }

    energy
}
