//! Per-half-edge status bits, mirroring the teacher library's
//! `TopologyFlags` bitset on its own corner-table connectivity records.

use bitflags::bitflags;

bitflags! {
    pub(crate) struct HalfEdgeFlags: u8 {
        const DELETED = 0b0000_0001;
        /// Set by the builder for the synthetic half-edges it synthesizes to
        /// complete a `Sym` pair on a mesh boundary. These edges bound no
        /// input triangle; they exist only so every directed edge has a twin.
        const BOUNDARY = 0b0000_0010;
    }
}

impl Default for HalfEdgeFlags {
    fn default() -> Self {
        Self::empty()
    }
}
