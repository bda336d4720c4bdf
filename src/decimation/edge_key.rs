//! Canonicalizes a directed edge to its undirected representative, so the
//! two half-edges of one undirected edge always map to one queue slot
//! (§4.A).

use crate::{geometry::traits::RealNumber, mesh::{EdgeId, QuadEdgeMesh}};

/// The half-edge of an undirected edge whose origin id is smaller than its
/// destination id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalEdge(pub EdgeId);

impl CanonicalEdge {
    #[inline]
    pub fn edge(self) -> EdgeId {
        self.0
    }
}

/// `canonical(e) = e if origin(e) < destination(e) else sym(e)`.
pub fn canonical<S: RealNumber>(mesh: &QuadEdgeMesh<S>, e: EdgeId) -> CanonicalEdge {
    if mesh.origin(e) < mesh.destination(e) {
        CanonicalEdge(e)
    } else {
        CanonicalEdge(mesh.sym(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::builder::from_triangle_soup;
    use nalgebra::Vector3;

    fn triangle() -> crate::mesh::QuadEdgeMesh<f64> {
        from_triangle_soup(
            vec![
                Vector3::new(0.0, 0.0, 0.0),
                Vector3::new(1.0, 0.0, 0.0),
                Vector3::new(0.0, 1.0, 0.0),
            ],
            &[[0, 1, 2]],
        )
    }

    #[test]
    fn canonical_picks_the_smaller_origin_direction() {
        let mesh = triangle();
        let e = mesh.find_edge_between(crate::mesh::PointId(1), crate::mesh::PointId(0)).unwrap();
        let k = canonical(&mesh, e);
        assert_eq!(mesh.origin(k.edge()), crate::mesh::PointId(0));
        assert_eq!(mesh.destination(k.edge()), crate::mesh::PointId(1));
    }

    #[test]
    fn canonical_is_idempotent() {
        let mesh = triangle();
        let e = mesh.find_edge_between(crate::mesh::PointId(0), crate::mesh::PointId(1)).unwrap();
        let k1 = canonical(&mesh, e);
        let k2 = canonical(&mesh, k1.edge());
        assert_eq!(k1, k2);
    }
}
