//! Benchmark plugin
//!
//! Runs the whole simulation in a single startup system. With bevy's default
//! run-once runner the app performs one update, so the run is synchronous
//! and the app exits with the status the system writes.

use crate::prelude::*;
use crate::simulation::{LoopEnergy, Simulation};
use std::time::Instant;

/// Every loop's energies from the last run, in order
#[derive(Resource, Deref, DerefMut, Debug, Default, Clone, PartialEq)]
pub struct EnergyLog(pub Vec<LoopEnergy>);

#[derive(Resource, Debug, Clone, Copy)]
struct EnergyOutput {
    print: bool,
}

pub struct BenchmarkPlugin {
    config: Option<SimulationConfig>,
    print_energies: bool,
}

impl BenchmarkPlugin {
    pub fn new() -> Self {
        Self {
            config: None,
            print_energies: true,
        }
    }

    pub fn with_config(config: SimulationConfig) -> Self {
        Self {
            config: Some(config),
            ..Self::new()
        }
    }

    /// Keep energies in [`EnergyLog`] only, without printing them to stdout
    pub fn quiet(mut self) -> Self {
        self.print_energies = false;
        self
    }
}

impl Default for BenchmarkPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for BenchmarkPlugin {
    fn build(&self, app: &mut App) {
        let config = self
            .config
            .clone()
            .unwrap_or_else(SimulationConfig::load_from_user_config);

        match config.to_toml() {
            Ok(toml_string) => {
                debug!("=== Current Configuration (TOML) ===\n{}", toml_string);
                debug!("=== End Configuration ===");
            }
            Err(e) => {
                error!("Failed to serialize configuration to TOML: {}", e);
            }
        }

        app.insert_resource(config);
        app.init_resource::<AdvancerRegistry>();
        app.init_resource::<EnergyLog>();
        app.insert_resource(EnergyOutput {
            print: self.print_energies,
        });

        app.add_systems(Startup, run_benchmark);
    }
}

fn run_benchmark(
    config: Res<SimulationConfig>,
    registry: Res<AdvancerRegistry>,
    output: Res<EnergyOutput>,
    mut energy_log: ResMut<EnergyLog>,
    mut exit: EventWriter<AppExit>,
) {
    let mut simulation = match Simulation::from_config(&config.run, &registry) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Cannot start simulation: {}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    info!(
        "Running {} loops x {} iterations with the {} advancer around {}",
        config.run.loops,
        config.run.iterations,
        simulation.advancer_name(),
        config.run.reference_body
    );

    energy_log.clear();
    let started = Instant::now();
    simulation.run_with(|report| {
        if output.print {
            println!("{}", report.energy);
        }
        energy_log.push(report);
    });
    let elapsed = started.elapsed().as_secs_f64();

    if elapsed > 0.0 {
        info!(
            "Time taken to execute {} = {:.3} seconds ({:.0} steps/s)",
            simulation.advancer_name(),
            elapsed,
            simulation.total_steps() as f64 / elapsed
        );
    }

    exit.write(AppExit::Success);
}
