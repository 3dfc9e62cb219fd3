//! The canonical in-place pairwise advancer
//!
//! This is the benchmark's hot loop. It runs `loops * iterations` times and
//! dominates total runtime.

use super::Advancer;
use crate::physics::bodies::SolarSystem;
use crate::physics::math::{Scalar, inverse_cube};

/// Advance the system by one time step, updating velocities in place
///
/// # Algorithm
///
/// ```text
/// for each pair i < j, in body order:
///   d    = p_i - p_j
///   mag  = dt * |d|^-3
///   v_i -= d * (m_j * mag)
///   v_j += d * (m_i * mag)
/// then for each body:
///   p   += v * dt
/// ```
///
/// Velocities are written back immediately, so the impulse from pair (i, k)
/// is added to a velocity that already holds the impulse from pair (i, j).
/// Collecting impulses first and applying them afterwards (see
/// [`DeferredPairwise`](super::DeferredPairwise)) is the same physics with
/// different rounding, and does not reproduce the reference energies bit for
/// bit.
///
/// The drift pass starts only after every pair is done; a position is never
/// moved with a partially updated velocity.
///
/// Coincident bodies give a zero distance and non-finite velocities. This is
/// not guarded against.
pub fn advance(dt: Scalar, system: &mut SolarSystem) {
    let bodies = system.bodies_mut();

    for i in 0..bodies.len() {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let body = &mut head[i];

        for other in tail.iter_mut() {
            let delta = body.position - other.position;
            let mag = dt * inverse_cube(delta.length_squared());

            let body_scale = other.mass() * mag;
            let other_scale = body.mass() * mag;
            body.velocity -= delta * body_scale;
            other.velocity += delta * other_scale;
        }
    }

    for body in bodies.iter_mut() {
        body.position += body.velocity * dt;
    }
}

/// [`advance`] as a registrable [`Advancer`]
#[derive(Debug, Copy, Clone, Default)]
pub struct SequentialPairwise;

impl Advancer for SequentialPairwise {
    fn clone_box(&self) -> Box<dyn Advancer> {
        Box::new(*self)
    }

    #[inline]
    fn advance(&self, dt: Scalar, system: &mut SolarSystem) {
        advance(dt, system);
    }

    fn name(&self) -> &'static str {
        "sequential"
    }

    fn aliases(&self) -> Vec<&'static str> {
        vec!["opt", "canonical"]
    }
}
