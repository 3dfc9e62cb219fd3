//! Deferred-accumulation pairwise advancer

use super::Advancer;
use crate::physics::bodies::SolarSystem;
use crate::physics::math::{Scalar, Vector, inverse_cube};

/// Pairwise advancer that collects impulses before touching any velocity
///
/// Every pair contributes to a per-body impulse buffer; the buffer is added
/// to the velocities once all pairs are done, then positions drift as in
/// [`advance`](super::advance). Impulses depend only on positions, so this
/// is the same step with a different summation order: energies agree with
/// the sequential scheme to rounding, not bit for bit.
///
/// The buffer is allocated per step.
#[derive(Debug, Copy, Clone, Default)]
pub struct DeferredPairwise;

impl Advancer for DeferredPairwise {
    fn clone_box(&self) -> Box<dyn Advancer> {
        Box::new(*self)
    }

    fn advance(&self, dt: Scalar, system: &mut SolarSystem) {
        let bodies = system.bodies_mut();
        let mut impulses = vec![Vector::ZERO; bodies.len()];

        for i in 0..bodies.len() {
            for j in (i + 1)..bodies.len() {
                let delta = bodies[i].position - bodies[j].position;
                let mag = dt * inverse_cube(delta.length_squared());

                impulses[i] -= delta * (bodies[j].mass() * mag);
                impulses[j] += delta * (bodies[i].mass() * mag);
            }
        }

        for (body, impulse) in bodies.iter_mut().zip(impulses) {
            body.velocity += impulse;
            body.position += body.velocity * dt;
        }
    }

    fn name(&self) -> &'static str {
        "deferred"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["accumulate"]
    }
}
