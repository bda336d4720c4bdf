use nalgebra::{Point3, Vector3};

use crate::geometry::traits::RealNumber;

/// `n . x - d = 0`
pub struct Plane3<TScalar: RealNumber> {
    normal: Vector3<TScalar>,
    distance: TScalar,
}

impl<TScalar: RealNumber> Plane3<TScalar> {
    pub fn new(normal: Vector3<TScalar>, d: TScalar) -> Self {
        Self { normal, distance: d }
    }

    /// Given three noncollinear points (ordered ccw), compute the plane equation.
    pub fn from_points(a: &Point3<TScalar>, b: &Point3<TScalar>, c: &Point3<TScalar>) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        let d = normal.dot(&a.coords);

        Self { normal, distance: d }
    }

    #[inline]
    pub fn normal(&self) -> &Vector3<TScalar> {
        &self.normal
    }

    #[inline]
    pub fn distance_term(&self) -> TScalar {
        self.distance
    }
}
