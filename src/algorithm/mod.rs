//! # Algorithms
use crate::algorithm::preflow_push::strategy::selection_rule::SelectionRule;

pub mod preflow_push;

/// A problem of which the maximum flow can be computed.
///
/// The selection rule decides which active vertex is discharged next. It influences the
/// running time but not the computed value, and is chosen through the type parameter at
/// the call site.
pub trait SolveMaxFlow {
    /// Numeric type the flow amounts are expressed in.
    type Flow;

    /// Compute the maximum flow from the source to the sink.
    ///
    /// # Return value
    ///
    /// The largest amount of flow that can be routed. Zero when the sink is not reachable
    /// from the source.
    fn solve_max_flow<R: SelectionRule>(&self) -> Self::Flow;
}
