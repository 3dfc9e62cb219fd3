//! Body store for the outer solar system
//!
//! Bodies live in one contiguous buffer in a fixed order. The order matters:
//! the pairwise loops in [`advance`](crate::physics::advance) and
//! [`report_energy`](crate::physics::energy::report_energy) walk it as-is and
//! floating-point summation is not associative, so a different order gives a
//! different (though physically equivalent) energy trajectory.

use crate::physics::error::SimulationError;
use crate::physics::math::{Scalar, Vector};

pub const PI: Scalar = std::f64::consts::PI;
pub const SOLAR_MASS: Scalar = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: Scalar = 365.24;

/// Literal initial conditions for one body
///
/// Positions are in AU, velocities in AU/day and masses in solar masses.
/// [`SolarSystem::from_records`] converts them to the simulation's units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyRecord {
    pub name: &'static str,
    pub position: [Scalar; 3],
    pub daily_velocity: [Scalar; 3],
    pub solar_masses: Scalar,
}

impl BodyRecord {
    fn velocity(&self) -> Vector {
        let [x, y, z] = self.daily_velocity;
        Vector::new(x * DAYS_PER_YEAR, y * DAYS_PER_YEAR, z * DAYS_PER_YEAR)
    }

    fn mass(&self) -> Scalar {
        self.solar_masses * SOLAR_MASS
    }
}

/// The sun and the four gas giants, in iteration order
pub const CANONICAL_BODIES: [BodyRecord; 5] = [
    BodyRecord {
        name: "sun",
        position: [0.0, 0.0, 0.0],
        daily_velocity: [0.0, 0.0, 0.0],
        solar_masses: 1.0,
    },
    BodyRecord {
        name: "jupiter",
        position: [
            4.84143144246472090e+00,
            -1.16032004402742839e+00,
            -1.03622044471123109e-01,
        ],
        daily_velocity: [
            1.66007664274403694e-03,
            7.69901118419740425e-03,
            -6.90460016972063023e-05,
        ],
        solar_masses: 9.54791938424326609e-04,
    },
    BodyRecord {
        name: "saturn",
        position: [
            8.34336671824457987e+00,
            4.12479856412430479e+00,
            -4.03523417114321381e-01,
        ],
        daily_velocity: [
            -2.76742510726862411e-03,
            4.99852801234917238e-03,
            2.30417297573763929e-05,
        ],
        solar_masses: 2.85885980666130812e-04,
    },
    BodyRecord {
        name: "uranus",
        position: [
            1.28943695621391310e+01,
            -1.51111514016986312e+01,
            -2.23307578892655734e-01,
        ],
        daily_velocity: [
            2.96460137564761618e-03,
            2.37847173959480950e-03,
            -2.96589568540237556e-05,
        ],
        solar_masses: 4.36624404335156298e-05,
    },
    BodyRecord {
        name: "neptune",
        position: [
            1.53796971148509165e+01,
            -2.59193146099879641e+01,
            1.79258772950371181e-01,
        ],
        daily_velocity: [
            2.68067772490389322e-03,
            1.62824170038242295e-03,
            -9.51592254519715870e-05,
        ],
        solar_masses: 5.15138902046611451e-05,
    },
];

/// A point mass
///
/// Position and velocity are public and mutated in place by the integrator.
/// Mass is fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    mass: Scalar,
}

impl Body {
    /// Create a body, rejecting non-positive or non-finite masses
    pub fn new(
        name: &str,
        position: Vector,
        velocity: Vector,
        mass: Scalar,
    ) -> Result<Self, SimulationError> {
        if !(mass > 0.0 && mass.is_finite()) {
            return Err(SimulationError::NonPositiveMass {
                name: name.to_string(),
                mass,
            });
        }

        Ok(Self {
            position,
            velocity,
            mass,
        })
    }

    #[inline]
    pub fn mass(&self) -> Scalar {
        self.mass
    }

    /// Linear momentum `m·v`
    #[inline]
    pub fn momentum(&self) -> Vector {
        self.velocity * self.mass
    }
}

/// Ordered, fixed-size collection of named bodies
///
/// Names are stored apart from the body records so the hot loop only touches
/// positions, velocities and masses.
#[derive(Debug, Clone, PartialEq)]
pub struct SolarSystem {
    names: Vec<String>,
    bodies: Vec<Body>,
}

impl SolarSystem {
    /// Fresh copy of the canonical five-body system
    pub fn canonical() -> Self {
        let names = CANONICAL_BODIES
            .iter()
            .map(|record| record.name.to_string())
            .collect();
        let bodies = CANONICAL_BODIES
            .iter()
            .map(|record| Body {
                position: Vector::from_array(record.position),
                velocity: record.velocity(),
                mass: record.mass(),
            })
            .collect();

        Self { names, bodies }
    }

    /// Build a system from literal records, validating every mass
    pub fn from_records(records: &[BodyRecord]) -> Result<Self, SimulationError> {
        records
            .iter()
            .map(|record| {
                Body::new(
                    record.name,
                    Vector::from_array(record.position),
                    record.velocity(),
                    record.mass(),
                )
                .map(|body| (record.name.to_string(), body))
            })
            .collect()
    }

    /// Build a system from already-constructed bodies, in the given order
    pub fn from_bodies(bodies: impl IntoIterator<Item = (String, Body)>) -> Self {
        bodies.into_iter().collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|candidate| candidate == name)
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.index_of(name).map(|index| &self.bodies[index])
    }

    #[inline]
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Mutable access to the body buffer
    ///
    /// A slice rather than the `Vec` itself so bodies can be updated but
    /// never added or removed.
    #[inline]
    pub fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    /// Total linear momentum `Σ m·v`, summed in body order
    pub fn total_momentum(&self) -> Vector {
        self.bodies
            .iter()
            .fold(Vector::ZERO, |total, body| total + body.momentum())
    }
}

impl FromIterator<(String, Body)> for SolarSystem {
    fn from_iter<I: IntoIterator<Item = (String, Body)>>(iter: I) -> Self {
        let (names, bodies) = iter.into_iter().unzip();
        Self { names, bodies }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_order() {
        let system = SolarSystem::canonical();
        assert_eq!(
            system.names(),
            &["sun", "jupiter", "saturn", "uranus", "neptune"]
        );
        assert_eq!(system.len(), 5);
    }

    #[test]
    fn test_canonical_masses_are_positive() {
        let system = SolarSystem::canonical();
        assert!(system.bodies().iter().all(|body| body.mass() > 0.0));
    }

    #[test]
    fn test_sun_mass_is_solar_mass() {
        let system = SolarSystem::canonical();
        let sun = system.body("sun").unwrap();
        assert_eq!(sun.mass(), SOLAR_MASS);
        assert_eq!(sun.velocity, Vector::ZERO);
    }

    #[test]
    fn test_velocities_are_scaled_to_years() {
        let system = SolarSystem::canonical();
        let jupiter = system.body("jupiter").unwrap();
        assert_eq!(jupiter.velocity.x, 1.66007664274403694e-03 * DAYS_PER_YEAR);
        assert_eq!(jupiter.mass(), 9.54791938424326609e-04 * SOLAR_MASS);
    }

    #[test]
    fn test_canonical_is_rebuilt_fresh() {
        let mut first = SolarSystem::canonical();
        first.bodies_mut()[1].velocity = Vector::ZERO;

        let second = SolarSystem::canonical();
        assert_ne!(first, second);
        assert_eq!(second, SolarSystem::canonical());
    }

    #[test]
    fn test_from_records_matches_canonical() {
        let system = SolarSystem::from_records(&CANONICAL_BODIES).unwrap();
        assert_eq!(system, SolarSystem::canonical());
    }

    #[test]
    fn test_from_records_rejects_zero_mass() {
        let mut records = CANONICAL_BODIES;
        records[2].solar_masses = 0.0;

        let error = SolarSystem::from_records(&records).unwrap_err();
        assert_eq!(
            error,
            SimulationError::NonPositiveMass {
                name: "saturn".to_string(),
                mass: 0.0,
            }
        );
    }

    #[test]
    fn test_body_new_rejects_nan_mass() {
        let result = Body::new("nan", Vector::ZERO, Vector::ZERO, Scalar::NAN);
        assert!(result.is_err());
    }

    #[test]
    fn test_index_of_unknown_body() {
        let system = SolarSystem::canonical();
        assert_eq!(system.index_of("neptune"), Some(4));
        assert_eq!(system.index_of("pluto"), None);
    }
}
