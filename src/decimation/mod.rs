//! Priority-driven edge-collapse decimation over a quad-edge mesh.
//!
//! Reading order mirrors the data flow: edge keys feed the priority queue,
//! the queue mapper keeps them in sync, the neighborhood walker finds what a
//! collapse touches, the join-vertex operator does the mutation, topology
//! repair handles its refusals, and the driver in [`driver`] runs the whole
//! loop to convergence.

pub mod criteria;
pub mod driver;
pub mod edge_key;
pub mod join_vertex;
pub mod mapper;
pub mod neighborhood;
pub mod priority;
pub mod relocator;
pub mod repair;

#[cfg(test)]
mod scenarios;

pub use driver::{DecimationConfig, Decimator};
