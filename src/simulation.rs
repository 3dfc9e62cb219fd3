//! Simulation driver
//!
//! Offsets momentum once, then for each outer loop records a baseline
//! energy, advances the system a fixed number of steps and emits the energy
//! again.

use crate::config::RunConfig;
use crate::physics::advancers::{Advancer, AdvancerRegistry, SequentialPairwise};
use crate::physics::bodies::SolarSystem;
use crate::physics::energy::report_energy;
use crate::physics::error::SimulationError;
use crate::physics::math::Scalar;
use crate::physics::momentum::offset_momentum;
use bevy::prelude::*;

/// Fixed integration step, one hundredth of the dataset's time unit
pub const TIME_STEP: Scalar = 0.01;

/// Energies around one outer loop
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopEnergy {
    pub index: usize,
    /// Energy before the loop's steps
    pub baseline: Scalar,
    /// Energy after the loop's steps; the value the benchmark emits
    pub energy: Scalar,
}

impl LoopEnergy {
    pub fn drift(&self) -> Scalar {
        self.energy - self.baseline
    }
}

/// A prepared run: a momentum-offset system plus the advancer that drives it
pub struct Simulation {
    system: SolarSystem,
    advancer: Box<dyn Advancer>,
    loops: usize,
    iterations: usize,
}

impl Simulation {
    /// Offset `system`'s momentum around `reference_body` and wrap it for running
    ///
    /// Fails before any step runs if the reference body is unknown.
    pub fn new(
        mut system: SolarSystem,
        reference_body: &str,
        advancer: Box<dyn Advancer>,
        loops: usize,
        iterations: usize,
    ) -> Result<Self, SimulationError> {
        offset_momentum(&mut system, reference_body)?;

        Ok(Self {
            system,
            advancer,
            loops,
            iterations,
        })
    }

    /// Canonical system with the advancer named in `config`
    pub fn from_config(
        config: &RunConfig,
        registry: &AdvancerRegistry,
    ) -> Result<Self, SimulationError> {
        let advancer = registry
            .create(&config.advancer)
            .map_err(SimulationError::UnknownAdvancer)?;

        Self::new(
            SolarSystem::canonical(),
            &config.reference_body,
            advancer,
            config.loops,
            config.iterations,
        )
    }

    pub fn system(&self) -> &SolarSystem {
        &self.system
    }

    pub fn advancer_name(&self) -> &'static str {
        self.advancer.name()
    }

    /// Total number of time steps a full run takes
    pub fn total_steps(&self) -> usize {
        self.loops.saturating_mul(self.iterations)
    }

    pub fn energy(&self) -> Scalar {
        report_energy(&self.system)
    }

    /// Advance by a single time step
    #[inline]
    pub fn step(&mut self) {
        self.advancer.advance(TIME_STEP, &mut self.system);
    }

    /// Run every outer loop, handing each loop's energies to `on_loop`
    pub fn run_with(&mut self, mut on_loop: impl FnMut(LoopEnergy)) {
        for index in 0..self.loops {
            let baseline = self.energy();

            for _ in 0..self.iterations {
                self.step();
            }

            let report = LoopEnergy {
                index,
                baseline,
                energy: self.energy(),
            };
            debug!(
                "Loop {}: energy {:.9} -> {:.9} (drift {:e})",
                index,
                report.baseline,
                report.energy,
                report.drift()
            );
            on_loop(report);
        }
    }

    /// Run every outer loop and collect the emitted energies
    pub fn run(&mut self) -> Vec<Scalar> {
        let mut energies = Vec::with_capacity(self.loops);
        self.run_with(|report| energies.push(report.energy));
        energies
    }
}

/// Run the canonical benchmark and return one energy per outer loop
///
/// Uses the canonical system, [`SequentialPairwise`] and [`TIME_STEP`].
pub fn run(
    loop_count: usize,
    reference_body: &str,
    iterations: usize,
) -> Result<Vec<Scalar>, SimulationError> {
    let mut simulation = Simulation::new(
        SolarSystem::canonical(),
        reference_body,
        Box::new(SequentialPairwise),
        loop_count,
        iterations,
    )?;

    Ok(simulation.run())
}
