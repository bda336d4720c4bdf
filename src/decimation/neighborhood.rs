//! Enumerates the rings a collapse touches, so the driver knows which queue
//! entries need removing before the mutation and re-inserting after (§4.D).

use crate::{geometry::traits::RealNumber, mesh::{EdgeId, QuadEdgeMesh}};

/// The `onext*` traversal of `e`'s origin, excluding `e` itself.
pub fn origin_ring<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Vec<EdgeId> {
    let mut ring = Vec::new();
    let mut cur = mesh.onext(e);
    while cur != e {
        ring.push(cur);
        cur = mesh.onext(cur);
    }
    ring
}

/// The rings of both `e` and `sym(e)`: every edge whose cost may change once
/// `e` collapses.
pub fn affected_edges<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> Vec<EdgeId> {
    let mut affected = origin_ring(mesh, e);
    affected.extend(origin_ring(mesh, mesh.sym(e)));
    affected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::{builder::from_triangle_soup, PointId};
    use nalgebra::Vector3;

    #[test]
    fn origin_ring_excludes_the_edge_itself() {
        let mesh = from_triangle_soup(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        );
        let e = mesh.find_edge(PointId(0)).unwrap();
        let ring = origin_ring(&mesh, e);
        assert!(!ring.contains(&e));
        assert_eq!(ring.len() + 1, mesh.get_order(e));
    }
}
