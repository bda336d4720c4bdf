//! Where the surviving vertex of a collapse ends up (§11), mirroring the
//! placement strategies the teacher library's `QuadricError` and
//! `ConstantErrorDecimationCriteria` strategies bake in as
//! `get_placement`/default placement.

use crate::{
    algo::utils::barycenter,
    geometry::traits::RealNumber,
    helpers::aliases::Vec3,
    mesh::{EdgeId, QuadEdgeMesh},
};

/// Chooses a position for the vertex that survives collapsing `e`.
///
/// Returns `None` when asked to place a position for an edge that does not
/// support one (§12's `NullPoint`); none of the concrete relocators below
/// ever do, but the trait leaves room for one that looks up external data
/// keyed by point id and can fail to find an entry.
pub trait Relocator<S: RealNumber> {
    fn relocate(&self, mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Option<Vec3<S>>;
}

/// Places the survivor at the edge midpoint. The default relocator.
pub struct MidpointRelocator;

impl<S: RealNumber> Relocator<S> for MidpointRelocator {
    fn relocate(&self, mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Option<Vec3<S>> {
        let a = *mesh.get_point(mesh.origin(e));
        let b = *mesh.get_point(mesh.destination(e));
        Some(barycenter([a, b].iter()))
    }
}

/// Keeps the canonical (smaller-id) endpoint's current position, used when
/// relocation is switched off.
pub struct EndpointRelocator;

impl<S: RealNumber> Relocator<S> for EndpointRelocator {
    fn relocate(&self, mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Option<Vec3<S>> {
        let o = mesh.origin(e);
        let d = mesh.destination(e);
        let survivor = if o < d { o } else { d };
        Some(*mesh.get_point(survivor))
    }
}
