/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 3D vector type for positions and velocities
pub type Vector = bevy::math::DVec3;

/// `r2^(-1.5)`, the inverse cube of the distance given its square
///
/// Goes through `libm` so that the golden energy values do not depend on
/// the platform's `pow`.
#[inline]
pub fn inverse_cube(distance_squared: Scalar) -> Scalar {
    libm::pow(distance_squared, -1.5)
}

/// Euclidean length of `v`, computed as `sqrt(x² + y² + z²)` in that order
#[inline]
pub fn length(v: Vector) -> Scalar {
    libm::sqrt(v.length_squared())
}
