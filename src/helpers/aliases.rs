use nalgebra::Vector3;

pub type Vec3<S> = Vector3<S>;

pub type Vec3f = Vector3<f32>;
pub type Vec3d = Vector3<f64>;

/// Quadric error matrix (homogeneous 4x4) used by [`crate::decimation::criteria::QuadricErrorMeasure`].
pub type Quadric<S> = nalgebra::Matrix4<S>;
