//! Off-the-shelf cost/termination strategies (§11), mirroring the set the
//! teacher library ships alongside its own generic decimator
//! (`AlwaysDecimate`, `NeverDecimate`, `ConstantErrorDecimationCriteria`,
//! `BoundingSphereDecimationCriteria`, `QuadricError`).

use nalgebra::Matrix4;

use crate::{
    algo::utils::barycenter,
    geometry::{primitives::Plane3, traits::RealNumber},
    helpers::aliases::Quadric,
    mesh::{EdgeId, QuadEdgeMesh},
};

/// Cost function and termination predicate the driver treats as opaque
/// (§4.H).
pub trait CriterionAdapter<S: RealNumber> {
    /// Cost of collapsing `e`; lower is preferred.
    fn measure(&self, mesh: &QuadEdgeMesh<S>, e: EdgeId) -> S;

    /// Whether the driver should stop. `count` is the iteration counter,
    /// `current_measure` the priority of the edge about to be processed.
    fn is_satisfied(&self, mesh: &QuadEdgeMesh<S>, count: usize, current_measure: S) -> bool;
}

/// Decimates every edge the topology allows; never satisfied.
pub struct AlwaysSatisfied;

impl<S: RealNumber> CriterionAdapter<S> for AlwaysSatisfied {
    fn measure(&self, _mesh: &QuadEdgeMesh<S>, _e: EdgeId) -> S {
        S::zero()
    }

    fn is_satisfied(&self, _mesh: &QuadEdgeMesh<S>, _count: usize, _current_measure: S) -> bool {
        true
    }
}

/// Never satisfied on its own; pair with a queue that eventually empties.
pub struct NeverSatisfied;

impl<S: RealNumber> CriterionAdapter<S> for NeverSatisfied {
    fn measure(&self, _mesh: &QuadEdgeMesh<S>, _e: EdgeId) -> S {
        S::zero()
    }

    fn is_satisfied(&self, _mesh: &QuadEdgeMesh<S>, _count: usize, _current_measure: S) -> bool {
        false
    }
}

/// Satisfied once the mesh's live triangle count drops to or below `target`.
pub struct TriangleBudget {
    pub target: usize,
}

impl TriangleBudget {
    pub fn new(target: usize) -> Self {
        Self { target }
    }
}

impl<S: RealNumber> CriterionAdapter<S> for TriangleBudget {
    fn measure(&self, _mesh: &QuadEdgeMesh<S>, _e: EdgeId) -> S {
        S::zero()
    }

    fn is_satisfied(&self, mesh: &QuadEdgeMesh<S>, _count: usize, _current_measure: S) -> bool {
        mesh.triangle_count() <= self.target
    }
}

/// Satisfied once the current measure exceeds `threshold`. Correct without
/// assuming monotonicity (§4.H) because it only inspects the measure the
/// driver is about to process, never history.
pub struct MaxMeasure<S> {
    pub threshold: S,
}

impl<S: RealNumber> MaxMeasure<S> {
    pub fn new(threshold: S) -> Self {
        Self { threshold }
    }
}

impl<S: RealNumber> CriterionAdapter<S> for MaxMeasure<S> {
    fn measure(&self, _mesh: &QuadEdgeMesh<S>, _e: EdgeId) -> S {
        S::zero()
    }

    fn is_satisfied(&self, _mesh: &QuadEdgeMesh<S>, _count: usize, current_measure: S) -> bool {
        current_measure > self.threshold
    }
}

/// Garland-Heckbert quadric error, the same algorithm the teacher library's
/// `QuadricError` strategy implements, re-expressed against canonical edges
/// and the quad-edge mesh instead of `EdgeId`/`CornerTable`.
///
/// Each point's quadric is the sum of `n n^T` / `n d` / `d^2` planes over its
/// incident triangles, recomputed lazily from the current mesh rather than
/// cached, since the mesh has no attribute-map machinery to keep a cache
/// coherent across collapses.
pub struct QuadricErrorMeasure;

impl QuadricErrorMeasure {
    fn point_quadric<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Quadric<S> {
        let mut q = Matrix4::zeros();
        let Some(start) = mesh.find_edge(mesh.origin(e)) else {
            return q;
        };
        let mut cur = start;
        loop {
            if !mesh.edges[cur.0 as usize].is_boundary() && mesh.is_lnext_of_triangle(cur) {
                let a = (*mesh.get_point(mesh.origin(cur))).into();
                let b = (*mesh.get_point(mesh.destination(cur))).into();
                let c = (*mesh.get_point(mesh.destination(mesh.lnext(cur)))).into();
                let plane = Plane3::from_points(&a, &b, &c);
                let n = plane.normal();
                let d = -plane.distance_term();
                let row = nalgebra::Vector4::new(n.x, n.y, n.z, d);
                q += row * row.transpose();
            }
            cur = mesh.onext(cur);
            if cur == start {
                break;
            }
        }
        q
    }
}

impl<S: RealNumber> CriterionAdapter<S> for QuadricErrorMeasure {
    fn measure(&self, mesh: &QuadEdgeMesh<S>, e: EdgeId) -> S {
        let q = Self::point_quadric(mesh, e) + Self::point_quadric(mesh, mesh.sym(e));
        // Evaluated at the edge midpoint, matching the teacher's own
        // `QuadricError::get_cost`, which costs its default placement
        // rather than either endpoint.
        let endpoints = [*mesh.get_point(mesh.origin(e)), *mesh.get_point(mesh.destination(e))];
        let mid = barycenter(endpoints.iter());
        let v4 = nalgebra::Vector4::new(mid.x, mid.y, mid.z, S::one());
        (v4.transpose() * q * v4)[(0, 0)]
    }

    fn is_satisfied(&self, _mesh: &QuadEdgeMesh<S>, _count: usize, _current_measure: S) -> bool {
        false
    }
}
