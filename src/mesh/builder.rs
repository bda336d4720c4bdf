//! Construction of a [`QuadEdgeMesh`] from a point list and CCW triangles,
//! mirroring the teacher library's edge-opposite-matching construction pass,
//! adapted to pair `Sym` twins (quad-edge quads) instead of corner opposites.

use std::collections::HashMap;

use crate::{
    geometry::traits::RealNumber,
    helpers::aliases::Vec3,
    mesh::{EdgeId, HalfEdge, HalfEdgeFlags, Point, PointId, QuadEdgeMesh, NO_EDGE},
};

/// Builds a mesh from a triangle soup.
///
/// `triangles` holds counterclockwise vertex index triples into `points`.
/// Boundary edges (undirected edges bounding only one triangle) get a
/// synthetic twin so every directed edge has a `Sym`, per the quad-edge
/// contract; these synthetic edges carry no triangle.
///
/// # Panics
///
/// Panics if a directed edge `(a, b)` is shared by two triangles with the
/// same orientation (a non-manifold input) or if a vertex touches more than
/// one boundary loop. Construction is not part of the decimation core and is
/// not hardened against malformed input; validate upstream.
pub fn from_triangle_soup<S: RealNumber>(
    points: Vec<Vec3<S>>,
    triangles: &[[u32; 3]],
) -> QuadEdgeMesh<S> {
    let mut mesh = QuadEdgeMesh {
        points: points
            .into_iter()
            .map(|position| Point {
                position,
                edge: NO_EDGE,
                deleted: false,
            })
            .collect(),
        edges: Vec::with_capacity(triangles.len() * 3),
    };

    // directed (origin, destination) -> half-edge awaiting its Sym partner.
    let mut pending: HashMap<(u32, u32), EdgeId> = HashMap::new();
    let mut faces: Vec<[EdgeId; 3]> = Vec::with_capacity(triangles.len());

    for tri in triangles {
        let mut face = [NO_EDGE; 3];
        for corner in 0..3 {
            let a = tri[corner];
            let b = tri[(corner + 1) % 3];
            let id = EdgeId(mesh.edges.len() as u32);
            mesh.edges.push(HalfEdge {
                origin: PointId(a),
                sym: NO_EDGE,
                onext: NO_EDGE,
                oprev: NO_EDGE,
                flags: HalfEdgeFlags::empty(),
            });
            face[corner] = id;

            if let Some(twin) = pending.remove(&(b, a)) {
                mesh.edges[id.0 as usize].sym = twin;
                mesh.edges[twin.0 as usize].sym = id;
            } else {
                let clash = pending.insert((a, b), id);
                assert!(
                    clash.is_none(),
                    "non-manifold input: directed edge ({a}, {b}) reused by two triangles with the same orientation"
                );
            }
        }
        faces.push(face);
    }

    // Remaining pending entries are boundary edges; synthesize their twins.
    let mut boundary_by_origin: HashMap<u32, EdgeId> = HashMap::new();
    let mut boundary_by_dest: HashMap<u32, EdgeId> = HashMap::new();
    for (&(a, b), &real) in pending.iter() {
        let synthetic = EdgeId(mesh.edges.len() as u32);
        mesh.edges.push(HalfEdge {
            origin: PointId(b),
            sym: real,
            onext: NO_EDGE,
            oprev: NO_EDGE,
            flags: HalfEdgeFlags::BOUNDARY,
        });
        mesh.edges[real.0 as usize].sym = synthetic;

        assert!(
            boundary_by_origin.insert(b, synthetic).is_none(),
            "vertex {b} touches more than one boundary loop"
        );
        boundary_by_dest.insert(a, synthetic);
    }

    // Onext for real (triangle-owning) half-edges: the Sym of the previous
    // edge in the same triangle, which always exists now that every edge
    // (real or synthetic) has a Sym.
    for face in &faces {
        for corner in 0..3 {
            let prev = face[(corner + 2) % 3];
            let cur = face[corner];
            mesh.edges[cur.0 as usize].onext = mesh.edges[prev.0 as usize].sym;
        }
    }

    // Onext for synthetic boundary half-edges: walk the boundary loop. The
    // edge preceding `b` (origin v) in the loop is the synthetic edge whose
    // destination is v; `onext(b)` is that edge's Sym.
    for (&origin, &b) in boundary_by_origin.iter() {
        let prev_in_loop = *boundary_by_dest
            .get(&origin)
            .expect("boundary loop must close: every boundary vertex has one incoming boundary edge");
        mesh.edges[b.0 as usize].onext = mesh.edges[prev_in_loop.0 as usize].sym;
    }

    // Oprev is the inverse of the onext permutation.
    let onext: Vec<EdgeId> = mesh.edges.iter().map(|e| e.onext).collect();
    for (i, &next) in onext.iter().enumerate() {
        mesh.edges[next.0 as usize].oprev = EdgeId(i as u32);
    }

    // Point incident-edge hints: prefer a real edge, any edge otherwise.
    for (i, he) in mesh.edges.iter().enumerate() {
        let p = &mut mesh.points[he.origin.0 as usize];
        if p.edge.is_none() || (p.edge != NO_EDGE && mesh.edges[p.edge.0 as usize].is_boundary() && !he.is_boundary()) {
            p.edge = EdgeId(i as u32);
        }
    }

    mesh
}
