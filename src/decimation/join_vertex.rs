//! The join-vertex operator (§4.E): given a directed edge, either performs
//! the collapse and reports which point survived, or refuses and classifies
//! exactly why, as an exhaustive tagged variant so the driver's dispatch in
//! §4.F is exhaustive by construction.
//!
//! The common-neighbor count that drives `TooManyCommonVertices` is the
//! same check the teacher library's `is_topologically_safe` performs before
//! collapsing a corner-table edge, re-expressed against `onext` rings
//! instead of corner walks.

use std::collections::BTreeSet;

use crate::{
    geometry::traits::RealNumber,
    mesh::{EdgeId, PointId, QuadEdgeMesh},
};

/// Why a join-vertex call refused to collapse `e`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `e` is the invalid-edge sentinel.
    EdgeNull,
    /// No mesh reference was available to operate on.
    ///
    /// Unreachable through this crate's API: a `&mut QuadEdgeMesh` is
    /// always a valid reference in Rust, so nothing here ever constructs
    /// this variant. Kept in the taxonomy because the failure classes are
    /// specified as one exhaustive sum type, not because Rust code can
    /// produce it.
    MeshNull,
    /// One of `e`'s flanking faces degenerates into a 1- or 2-gon.
    FaceIsolated,
    /// Neither `e` nor `sym(e)` bounds a face.
    EdgeIsolated,
    /// The endpoints share more than two ring-neighbors; collapsing would
    /// create a non-manifold vertex.
    TooManyCommonVertices,
    /// The local subcomplex is a closed tetrahedron.
    TetrahedronConfig,
    /// Both endpoints have order 2.
    SamosaConfig,
    /// Exactly one endpoint has order 2.
    EyeConfig,
    /// The collapse would weld two distinct boundary loops.
    EdgeJoiningDifferentBorders,
}

/// The outcome of a join-vertex call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The collapse happened. `old_id` no longer has any incident edge;
    /// the caller deletes it from the mesh. `new_id` is the survivor.
    Success { old_id: PointId, new_id: PointId },
    /// The mesh is unchanged.
    Fail(Status),
}

fn face_degenerate<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> bool {
    let e1 = mesh.lnext(e);
    e1 == e || mesh.lnext(e1) == e
}

fn edge_is_boundary<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> bool {
    mesh.edges[e.0 as usize].is_boundary() || mesh.edges[mesh.sym(e).0 as usize].is_boundary()
}

fn is_boundary_vertex<S: RealNumber>(mesh: &QuadEdgeMesh<S>, p: PointId) -> bool {
    let Some(start) = mesh.find_edge(p) else {
        return false;
    };
    let mut cur = start;
    loop {
        if mesh.edges[cur.0 as usize].is_boundary() {
            return true;
        }
        cur = mesh.onext(cur);
        if cur == start {
            return false;
        }
    }
}

fn neighbors<S: RealNumber>(mesh: &QuadEdgeMesh<S>, p: PointId) -> BTreeSet<PointId> {
    let mut set = BTreeSet::new();
    if let Some(start) = mesh.find_edge(p) {
        let mut cur = start;
        loop {
            set.insert(mesh.destination(cur));
            cur = mesh.onext(cur);
            if cur == start {
                break;
            }
        }
    }
    set
}

fn classify<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Option<Status> {
    if e.is_none() {
        return Some(Status::EdgeNull);
    }

    let se = mesh.sym(e);
    if face_degenerate(mesh, e) || face_degenerate(mesh, se) {
        return Some(Status::FaceIsolated);
    }
    if mesh.edges[e.0 as usize].is_boundary() && mesh.edges[se.0 as usize].is_boundary() {
        return Some(Status::EdgeIsolated);
    }

    let o = mesh.origin(e);
    let d = mesh.origin(se);

    let shared = neighbors(mesh, o).intersection(&neighbors(mesh, d)).count();
    if shared > 2 {
        return Some(Status::TooManyCommonVertices);
    }

    if mesh.point_count() == 4 && mesh.get_order(e) == 3 && mesh.get_order(se) == 3 {
        return Some(Status::TetrahedronConfig);
    }

    let order_o = mesh.get_order(e);
    let order_d = mesh.get_order(se);
    if order_o == 2 && order_d == 2 {
        return Some(Status::SamosaConfig);
    }
    if order_o == 2 || order_d == 2 {
        return Some(Status::EyeConfig);
    }

    if !edge_is_boundary(mesh, e) && is_boundary_vertex(mesh, o) && is_boundary_vertex(mesh, d) {
        return Some(Status::EdgeJoiningDifferentBorders);
    }

    None
}

/// Attempts to collapse `e`. Leaves the mesh untouched on failure.
pub fn evaluate<S: RealNumber>(mesh: &mut QuadEdgeMesh<S>, e: EdgeId) -> Outcome {
    if let Some(status) = classify(mesh, e) {
        return Outcome::Fail(status);
    }

    let new_id = mesh.origin(e);
    let old_id = mesh.collapse_edge(e);
    Outcome::Success { old_id, new_id }
}
