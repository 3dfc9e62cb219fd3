//! Momentum normalization

use crate::physics::bodies::SolarSystem;
use crate::physics::error::SimulationError;
use crate::physics::math::Vector;

/// Give `reference_body` the velocity that cancels the system's momentum
///
/// Momentum is summed over every body in order, the reference body included
/// with its velocity before the call. The reference body's velocity is then
/// set to `-P / m_ref`. Only that one velocity changes. Total momentum ends
/// up zero when the reference body starts at rest, as the sun does.
///
/// Must run once, before the first energy report and the first step.
pub fn offset_momentum(
    system: &mut SolarSystem,
    reference_body: &str,
) -> Result<(), SimulationError> {
    let Some(reference) = system.index_of(reference_body) else {
        return Err(SimulationError::UnknownBody {
            name: reference_body.to_string(),
            available: system.names().to_vec(),
        });
    };

    let offset = system
        .bodies()
        .iter()
        .fold(Vector::ZERO, |offset, body| offset - body.velocity * body.mass());

    let body = &mut system.bodies_mut()[reference];
    body.velocity = offset / body.mass();

    Ok(())
}
