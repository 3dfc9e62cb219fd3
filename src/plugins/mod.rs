pub mod benchmark;

pub use benchmark::{BenchmarkPlugin, EnergyLog};
