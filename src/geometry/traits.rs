use nalgebra::RealField;
use num_traits::Float;

/// Scalar type usable as mesh coordinates and decimation costs.
///
/// Combines `nalgebra`'s field requirements with `num_traits::Float` so both
/// linear-algebra code (quadric matrices, plane fitting) and plain scalar
/// arithmetic (cost comparisons, epsilon checks) work against one bound.
pub trait RealNumber: RealField + Float + Copy {}

impl<T> RealNumber for T where T: RealField + Float + Copy {}
