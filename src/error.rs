//! Fatal failures the decimation engine can report.
//!
//! Everything else — transient skips, topological refusals, tombstone hits —
//! is absorbed internally by the driver and never surfaces here.

use thiserror::Error;

/// Errors that can abort a decimation run before or during initialization.
#[derive(Debug, Error)]
pub enum DecimationError {
    /// The mesh failed its topology check before any collapse was attempted.
    #[error("mesh is not a valid 2-manifold quad-edge structure")]
    NonManifoldMesh,

    /// A collaborator (typically the relocator) returned the sentinel point
    /// id where a real point was required.
    #[error("collaborator returned NoPoint in context: {context}")]
    NullPoint {
        /// What the engine was doing when the null point was observed.
        context: &'static str,
    },
}
