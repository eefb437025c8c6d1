//! # Network representation
//!
//! Representing capacitated directed networks on integer-indexed vertices.
pub mod max_flow;

/// A capacitated arc of a directed network: tail, head and capacity.
///
/// Vertices are identified by their index. Parallel arcs, as well as arcs in both
/// directions between the same pair of vertices, are allowed.
pub type Arc<F> = (usize, usize, F);
