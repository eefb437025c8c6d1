//! # Residual network
//!
//! Bookkeeping of the capacities that remain while flow is being pushed through the
//! network.
use std::collections::HashMap;

use itertools::Itertools;

use crate::data::network::Arc;
use crate::data::number_types::FlowValue;

/// Remaining forwarding capacity between pairs of vertices.
///
/// Sparse: only positive residual capacities are stored. Pushing flow over an arc lowers
/// its residual capacity and creates capacity in the reverse direction, so the structure
/// both shrinks and grows during a computation.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResidualNetwork<F> {
    /// For each vertex, the residual capacity toward each of its neighbors.
    capacity: Vec<HashMap<usize, F>>,
}

impl<F: FlowValue> ResidualNetwork<F> {
    /// Aggregate an arc list into residual capacities.
    ///
    /// Parallel arcs are summed. Arcs without positive capacity and self-arcs can never
    /// carry flow and are not stored.
    pub fn new(nr_vertices: usize, arcs: &[Arc<F>]) -> Self {
        debug_assert!(arcs.iter().all(|(from, to, _)| *from < nr_vertices && *to < nr_vertices));

        let mut capacity = vec![HashMap::new(); nr_vertices];
        for (from, to, value) in arcs {
            if from != to && value > &F::zero() {
                let total = capacity[*from].entry(*to).or_insert_with(F::zero);
                *total = total.clone() + value.clone();
            }
        }

        Self { capacity }
    }

    /// Residual capacity of the arc between two vertices, if there is any left.
    pub fn residual(&self, from: usize, to: usize) -> Option<&F> {
        self.capacity[from].get(&to)
    }

    /// Vertices reachable from a vertex over an arc with positive residual capacity, in
    /// increasing index order.
    pub fn neighbors(&self, vertex: usize) -> Vec<usize> {
        self.capacity[vertex].keys().copied().sorted().collect()
    }

    /// Total residual capacity leaving a vertex.
    pub fn total_leaving(&self, vertex: usize) -> F {
        self.capacity[vertex].values()
            .fold(F::zero(), |total, value| total + value.clone())
    }

    /// Move a quantity of flow over the arc between two vertices.
    ///
    /// The arc's residual capacity drops by the quantity, the reverse arc's capacity
    /// rises by the same amount. A saturated arc (residual capacity exactly zero) is
    /// removed from the structure.
    pub fn push(&mut self, from: usize, to: usize, quantity: F) {
        debug_assert!(from != to);
        debug_assert!(quantity > F::zero());
        debug_assert!(self.capacity[from].get(&to).is_some_and(|value| value >= &quantity));

        let reverse = self.capacity[to].entry(from).or_insert_with(F::zero);
        *reverse = reverse.clone() + quantity.clone();

        let remaining = self.capacity[from].get_mut(&to).unwrap();
        *remaining = remaining.clone() - quantity;
        if remaining.is_zero() {
            self.capacity[from].remove(&to);
        }
    }
}
