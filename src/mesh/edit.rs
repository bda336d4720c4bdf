//! The one mutating entry point the join-vertex operator uses: splice the
//! quad-edge rings so that `origin(e)` absorbs `destination(e)`, excising
//! `e`/`sym(e)` and the two triangles (if any) that shared them.
//!
//! This is the quad-edge analogue of the teacher library's
//! `CornerTable::collapse_edge`, re-expressed as `Onext`-ring surgery
//! (Guibas-Stolfi `Splice`) instead of corner re-indexing.

use crate::{
    geometry::traits::RealNumber,
    mesh::{EdgeId, HalfEdgeFlags, PointId, QuadEdgeMesh},
};

impl<S: RealNumber> QuadEdgeMesh<S> {
    /// Merges `destination(e)` into `origin(e)` and removes `e`/`sym(e)`.
    ///
    /// Returns the id of the point that was absorbed (no longer incident to
    /// any edge; the caller deletes it via [`QuadEdgeMesh::delete_point`]).
    /// The survivor keeps its id and position; the caller relocates it
    /// separately if the configured relocator calls for that.
    ///
    /// # Preconditions
    ///
    /// The caller (the join-vertex operator, per its failure-status
    /// classification) must already have established that this collapse is
    /// topologically safe: neither endpoint has order 2, and the two faces
    /// flanking `e` (if present) are distinct from each other and from any
    /// face flanking `sym(e)`. Violating this leaves the mesh in an
    /// inconsistent state; it is not re-checked here.
    pub fn collapse_edge(&mut self, e: EdgeId) -> PointId {
        let se = self.sym(e);
        let o = self.origin(e);
        let d = self.origin(se);

        // A side only needs zipping when it bounds a real triangle: removing
        // e turns that triangle into a bigon (l, r) that has to be merged
        // into a single edge. A synthetic boundary edge's left face is a
        // hole loop that can be any length; removing e just shortens it by
        // one edge, so its two ring-neighbors here must survive untouched.
        let e_is_real = !self.edges[e.0 as usize].is_boundary();
        let se_is_real = !self.edges[se.0 as usize].is_boundary();

        let r = self.oprev(se); // lnext(e), origin d
        let l = self.sym(self.onext(e)); // lprev(e), apex of e's left face
        let r2 = self.oprev(e); // lnext(se), origin o
        let l2 = self.sym(self.onext(se)); // lprev(se), apex of se's left face

        let lp = self.sym(l);
        let rp = self.sym(r);
        let l2p = self.sym(l2);
        let r2p = self.sym(r2);

        // Ring continuations, snapshotted before any splice touches them.
        let d_rest = self.onext(se);
        let o_rest = self.onext(e);

        self.unlink_from_ring(e);
        self.unlink_from_ring(se);

        // Zip away a now-degenerate triangle: its surviving flank edges
        // become each other's Sym directly. Left untouched on the boundary
        // side, where r2/l2 belong to unrelated real triangles elsewhere on
        // the hole loop, not to a vanishing face of e/se.
        if e_is_real {
            self.unlink_from_ring(r);
            self.unlink_from_ring(l);
            self.pair_sym(lp, rp);
        }
        if se_is_real {
            self.unlink_from_ring(r2);
            self.unlink_from_ring(l2);
            self.pair_sym(l2p, r2p);
        }

        // Relabel the rest of d's ring to originate at o, then merge the two
        // rings (the Guibas-Stolfi Splice on two distinct rings).
        let mut cur = d_rest;
        loop {
            self.he_mut(cur).origin = o;
            let next = self.onext(cur);
            if next == d_rest {
                break;
            }
            cur = next;
        }
        self.splice(o_rest, d_rest);

        self.points[o.0 as usize].edge = o_rest;

        self.he_mut(e).flags.insert(HalfEdgeFlags::DELETED);
        self.he_mut(se).flags.insert(HalfEdgeFlags::DELETED);
        if e_is_real {
            self.he_mut(r).flags.insert(HalfEdgeFlags::DELETED);
            self.he_mut(l).flags.insert(HalfEdgeFlags::DELETED);
        }
        if se_is_real {
            self.he_mut(r2).flags.insert(HalfEdgeFlags::DELETED);
            self.he_mut(l2).flags.insert(HalfEdgeFlags::DELETED);
        }

        d
    }

    /// Removes `edge` from its `Onext` ring, leaving it a self-loop
    /// (`onext(edge) == oprev(edge) == edge`). Equivalent to
    /// `splice(edge, oprev(edge))`.
    fn unlink_from_ring(&mut self, edge: EdgeId) {
        let p = self.oprev(edge);
        self.splice(edge, p);
    }

    /// Guibas-Stolfi `Splice(a, b)`: exchanges the `Onext` successors of `a`
    /// and `b`. Applied to two edges in the same ring, splits it in two;
    /// applied to edges in different rings, merges them into one.
    fn splice(&mut self, a: EdgeId, b: EdgeId) {
        let a_next = self.onext(a);
        let b_next = self.onext(b);
        self.he_mut(a).onext = b_next;
        self.he_mut(b_next).oprev = a;
        self.he_mut(b).onext = a_next;
        self.he_mut(a_next).oprev = b;
    }

    fn pair_sym(&mut self, a: EdgeId, b: EdgeId) {
        self.he_mut(a).sym = b;
        self.he_mut(b).sym = a;
    }
}
