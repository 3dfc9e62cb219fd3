//! Pairwise gravity advancers
//!
//! An advancer moves the whole system forward by one fixed time step:
//! gravitational velocity impulses for every unordered pair of bodies, then a
//! position drift using the updated velocities. Variants differ only in how
//! the pairwise impulses are accumulated, which changes rounding but not the
//! physics.

use crate::physics::bodies::SolarSystem;
use crate::physics::math::Scalar;

pub mod deferred;
pub mod registry;
pub mod sequential;

pub use deferred::DeferredPairwise;
pub use registry::AdvancerRegistry;
pub use sequential::{SequentialPairwise, advance};

/// A fixed-step update of a [`SolarSystem`]
pub trait Advancer: Send + Sync {
    /// Clone this advancer into a new box
    fn clone_box(&self) -> Box<dyn Advancer>;

    /// Advance every body by one step of `dt`
    fn advance(&self, dt: Scalar, system: &mut SolarSystem);

    /// Canonical name used for lookup and reporting
    fn name(&self) -> &'static str;

    /// Alternative names this advancer answers to
    fn aliases(&self) -> Vec<&'static str> {
        Vec::new()
    }
}
