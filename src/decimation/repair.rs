//! Topology repair (§4.F): once the join-vertex operator refuses a collapse,
//! decides which canonical edges get permanently tagged dead so the driver
//! never reconsiders them.

use crate::{
    geometry::traits::RealNumber,
    mesh::{EdgeId, QuadEdgeMesh},
};

use super::join_vertex::Status;

/// The directed edges a given failure status tags dead, per §4.F. Returned
/// as directed edges; the caller canonicalizes each before tagging.
pub fn edges_to_tag_out<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId, status: Status) -> Vec<EdgeId> {
    match status {
        Status::EdgeNull | Status::MeshNull | Status::FaceIsolated => Vec::new(),
        Status::EdgeIsolated | Status::TooManyCommonVertices | Status::EdgeJoiningDifferentBorders => {
            vec![e]
        }
        Status::TetrahedronConfig => tetrahedron_cap(mesh, e),
        Status::SamosaConfig => remove_samosa(mesh, e),
        Status::EyeConfig => remove_eye(mesh, e),
    }
}

/// The 7 half-edges bounding the tetrahedral cap (glossary): `e`,
/// `onext(e)`, `oprev(e)`, `sym(e)`, `onext(sym(e))`, `oprev(sym(e))`,
/// `lnext(onext(e))`.
fn tetrahedron_cap<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Vec<EdgeId> {
    let se = mesh.sym(e);
    vec![
        e,
        mesh.onext(e),
        mesh.oprev(e),
        se,
        mesh.onext(se),
        mesh.oprev(se),
        mesh.lnext(mesh.onext(e)),
    ]
}

/// `Lnext`, `Lprev`, `Rnext`, `Rprev` of the failed edge.
fn remove_samosa<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Vec<EdgeId> {
    vec![mesh.lnext(e), mesh.lprev(e), mesh.rnext(e), mesh.rprev(e)]
}

/// The half-edge whose `sym` has order 2, its `Onext`, and its sym's `Onext`
/// and `Oprev`.
fn remove_eye<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Vec<EdgeId> {
    let se = mesh.sym(e);
    // e's own order-2 endpoint is origin(e); the edge whose *sym* has that
    // endpoint's order is whichever of e/se has the order-2 vertex as its
    // destination.
    let degree2_half = if mesh.get_order(se) == 2 { e } else { se };
    let its_sym = mesh.sym(degree2_half);
    vec![
        degree2_half,
        mesh.onext(degree2_half),
        mesh.onext(its_sym),
        mesh.oprev(its_sym),
    ]
}
