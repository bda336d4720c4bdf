//! A quad-edge triangle mesh: the concrete collaborator the decimation core
//! runs against.
//!
//! Every undirected edge is stored as two directed half-edges that are each
//! other's [`QuadEdgeMesh::sym`]. Navigation around a vertex (`onext`/`oprev`)
//! is a stored doubly-linked ring; navigation around a face (`lnext`/`lprev`)
//! and around the opposite face (`rnext`/`rprev`) are derived from `sym` and
//! the ring, the same way a minimal half-edge mesh derives `prev` and face
//! walks from `next`/`twin` alone. This keeps exactly one ring to maintain
//! under mutation instead of four.

pub mod builder;
pub mod edit;
mod display;
mod flags;

use crate::{geometry::traits::RealNumber, helpers::aliases::Vec3};

pub(crate) use flags::HalfEdgeFlags;

/// Stable handle into the point arena. `NO_POINT` is the sentinel for a
/// detached/uninitialized reference, mirroring the quad-edge mesh's own
/// `NoPoint` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PointId(pub u32);

pub const NO_POINT: PointId = PointId(u32::MAX);

/// Stable handle into the half-edge arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(pub u32);

pub const NO_EDGE: EdgeId = EdgeId(u32::MAX);

impl PointId {
    #[inline]
    pub fn is_none(self) -> bool {
        self == NO_POINT
    }
}

impl EdgeId {
    #[inline]
    pub fn is_none(self) -> bool {
        self == NO_EDGE
    }
}

#[derive(Debug, Clone)]
pub(crate) struct HalfEdge {
    pub(crate) origin: PointId,
    pub(crate) sym: EdgeId,
    pub(crate) onext: EdgeId,
    pub(crate) oprev: EdgeId,
    pub(crate) flags: HalfEdgeFlags,
}

impl HalfEdge {
    #[inline]
    pub(crate) fn deleted(&self) -> bool {
        self.flags.contains(HalfEdgeFlags::DELETED)
    }

    #[inline]
    pub(crate) fn is_boundary(&self) -> bool {
        self.flags.contains(HalfEdgeFlags::BOUNDARY)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Point<S: RealNumber> {
    pub(crate) position: Vec3<S>,
    pub(crate) edge: EdgeId,
    pub(crate) deleted: bool,
}

/// An arena-backed quad-edge triangle mesh, possibly with boundary.
#[derive(Debug, Clone)]
pub struct QuadEdgeMesh<S: RealNumber> {
    pub(crate) points: Vec<Point<S>>,
    pub(crate) edges: Vec<HalfEdge>,
}

impl<S: RealNumber> Default for QuadEdgeMesh<S> {
    fn default() -> Self {
        Self {
            points: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl<S: RealNumber> QuadEdgeMesh<S> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    fn he(&self, e: EdgeId) -> &HalfEdge {
        &self.edges[e.0 as usize]
    }

    #[inline]
    fn he_mut(&mut self, e: EdgeId) -> &mut HalfEdge {
        &mut self.edges[e.0 as usize]
    }

    /// Origin point of a directed edge.
    #[inline]
    pub fn origin(&self, e: EdgeId) -> PointId {
        self.he(e).origin
    }

    /// Destination point of a directed edge, derived via `origin(sym(e))`.
    #[inline]
    pub fn destination(&self, e: EdgeId) -> PointId {
        self.origin(self.sym(e))
    }

    /// The other directed half-edge of the same undirected edge.
    #[inline]
    pub fn sym(&self, e: EdgeId) -> EdgeId {
        self.he(e).sym
    }

    /// Next edge counterclockwise around `origin(e)`.
    #[inline]
    pub fn onext(&self, e: EdgeId) -> EdgeId {
        self.he(e).onext
    }

    /// Previous edge (next clockwise) around `origin(e)`.
    #[inline]
    pub fn oprev(&self, e: EdgeId) -> EdgeId {
        self.he(e).oprev
    }

    /// Next edge around the face to the left of `e`. Derived as `oprev(sym(e))`.
    #[inline]
    pub fn lnext(&self, e: EdgeId) -> EdgeId {
        self.oprev(self.sym(e))
    }

    /// Previous edge around the face to the left of `e`. Derived as `sym(onext(e))`.
    #[inline]
    pub fn lprev(&self, e: EdgeId) -> EdgeId {
        self.sym(self.onext(e))
    }

    /// Next edge around the face to the right of `e`. Derived as `sym(oprev(e))`.
    #[inline]
    pub fn rnext(&self, e: EdgeId) -> EdgeId {
        self.sym(self.oprev(e))
    }

    /// Previous edge around the face to the right of `e`. Derived as `onext(sym(e))`.
    #[inline]
    pub fn rprev(&self, e: EdgeId) -> EdgeId {
        self.onext(self.sym(e))
    }

    /// Valence of `origin(e)`: the number of directed edges in its `onext` ring.
    pub fn get_order(&self, e: EdgeId) -> usize {
        let mut count = 1;
        let mut cur = self.onext(e);
        while cur != e {
            count += 1;
            cur = self.onext(cur);
        }
        count
    }

    /// Whether the face to the left of `e` is a triangle: three `lnext` steps
    /// return to `e`, and the two intermediate edges are distinct from it.
    pub fn is_lnext_of_triangle(&self, e: EdgeId) -> bool {
        let e1 = self.lnext(e);
        let e2 = self.lnext(e1);
        e1 != e && e2 != e && self.lnext(e2) == e
    }

    /// Any live directed edge whose origin is `id`, using the point's
    /// incident-edge hint.
    pub fn find_edge(&self, id: PointId) -> Option<EdgeId> {
        if id.is_none() {
            return None;
        }
        let p = self.points.get(id.0 as usize)?;
        if p.deleted || p.edge.is_none() {
            return None;
        }
        Some(p.edge)
    }

    /// The directed edge `a -> b`, found by walking `a`'s `onext` ring.
    pub fn find_edge_between(&self, a: PointId, b: PointId) -> Option<EdgeId> {
        let start = self.find_edge(a)?;
        let mut cur = start;
        loop {
            if self.destination(cur) == b {
                return Some(cur);
            }
            cur = self.onext(cur);
            if cur == start {
                return None;
            }
        }
    }

    #[inline]
    pub fn get_point(&self, id: PointId) -> &Vec3<S> {
        &self.points[id.0 as usize].position
    }

    #[inline]
    pub fn set_point(&mut self, id: PointId, position: Vec3<S>) {
        self.points[id.0 as usize].position = position;
    }

    pub fn delete_point(&mut self, id: PointId) {
        self.points[id.0 as usize].deleted = true;
        self.points[id.0 as usize].edge = NO_EDGE;
    }

    pub fn is_point_deleted(&self, id: PointId) -> bool {
        id.is_none() || self.points[id.0 as usize].deleted
    }

    pub fn point_count(&self) -> usize {
        self.points.iter().filter(|p| !p.deleted).count()
    }

    /// One representative directed edge per live undirected edge: the one
    /// with the smaller of `e`/`sym(e)` as its arena index, so every pair is
    /// visited exactly once regardless of iteration order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.edges.iter().enumerate().filter_map(|(i, he)| {
            if he.deleted() {
                return None;
            }
            let id = EdgeId(i as u32);
            let sym = he.sym;
            if id.0 <= sym.0 {
                Some(id)
            } else {
                None
            }
        })
    }

    /// One representative directed edge per live triangular face bounding an
    /// input triangle (excludes boundary-hole loops that happen to also
    /// close in three `lnext` steps): the `lnext`-minimal edge among the
    /// face's three, for a stable count independent of which corner the
    /// iteration happened to reach first.
    pub fn triangles(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).filter_map(move |i| {
            let e = EdgeId(i as u32);
            if self.edges[i].deleted() || self.edges[i].is_boundary() || !self.is_lnext_of_triangle(e)
            {
                return None;
            }
            let e1 = self.lnext(e);
            let e2 = self.lnext(e1);
            if self.edges[e1.0 as usize].is_boundary() || self.edges[e2.0 as usize].is_boundary() {
                return None;
            }
            if e.0 < e1.0 && e.0 < e2.0 {
                Some(e)
            } else {
                None
            }
        })
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles().count()
    }

    /// A cheap, local manifoldness check: every live half-edge's `sym` is an
    /// involution and its ring pointers agree with its partners'. Does not
    /// check global embeddability (self-intersections, orientation).
    pub fn is_manifold(&self) -> bool {
        for (i, he) in self.edges.iter().enumerate() {
            if he.deleted() {
                continue;
            }
            let id = EdgeId(i as u32);
            if he.sym.is_none() || self.sym(he.sym) != id {
                return false;
            }
            if he.onext.is_none() || self.oprev(he.onext) != id {
                return false;
            }
            if he.oprev.is_none() || self.onext(he.oprev) != id {
                return false;
            }
            if self.origin(id).is_none() || self.is_point_deleted(self.origin(id)) {
                return false;
            }
        }
        true
    }
}
