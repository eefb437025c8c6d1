//! # Preflow push
//!
//! Maximum flows are computed by maintaining a preflow: vertices are allowed to
//! temporarily hold more incoming than outgoing flow. That surplus, the excess, is pushed
//! toward the sink over arcs that still have residual capacity, guided by height labels
//! that only ever increase. Excess that cannot reach the sink drains back toward the
//! source over the reverse arcs that earlier pushes created. The method is also known as
//! push-relabel.
//!
//! The order in which active vertices are discharged is left to a
//! [`SelectionRule`](strategy::selection_rule::SelectionRule): first-in-first-out gives a
//! running time of O(|V|³), selection by smallest height label gives
//! O(|V|² · √|E| · log |V|).
use crate::algorithm::SolveMaxFlow;
use crate::algorithm::preflow_push::residual::ResidualNetwork;
use crate::algorithm::preflow_push::strategy::selection_rule::SelectionRule;
use crate::data::network::max_flow::MaxFlow;
use crate::data::number_types::FlowValue;

pub(crate) mod residual;
pub mod strategy;

impl<F: FlowValue> SolveMaxFlow for MaxFlow<F> {
    type Flow = F;

    fn solve_max_flow<R: SelectionRule>(&self) -> Self::Flow {
        let mut engine = PreflowPush::<_, R>::new(self);
        engine.run()
    }
}

/// All mutable state of a single computation.
///
/// Constructed fresh per call and exclusively owned by it; nothing is shared with other
/// invocations or persisted across them.
struct PreflowPush<F, R> {
    residual: ResidualNetwork<F>,
    /// Height labels. The source is fixed at the number of vertices, all other labels
    /// start at zero and only ever increase.
    height: Vec<usize>,
    /// Flow that arrived at a vertex but was not yet routed onward.
    excess: Vec<F>,
    /// Vertices holding excess, awaiting discharge.
    active: R,
    s: usize,
    t: usize,
}

impl<F: FlowValue, R: SelectionRule> PreflowPush<F, R> {
    /// Set up the initial preflow.
    ///
    /// The source is lifted to height `nr_vertices` and handed an excess equal to the
    /// total capacity leaving it, which its first discharge pushes out entirely.
    fn new(problem: &MaxFlow<F>) -> Self {
        let nr_vertices = problem.nr_vertices();
        let (s, t) = (problem.source(), problem.sink());

        let residual = ResidualNetwork::new(nr_vertices, problem.arcs());

        let mut height = vec![0; nr_vertices];
        height[s] = nr_vertices;
        let mut excess = vec![F::zero(); nr_vertices];
        excess[s] = residual.total_leaving(s);

        let mut active = R::new();
        active.add(s, nr_vertices);

        Self {
            residual,
            height,
            excess,
            active,

            s,
            t,
        }
    }

    /// Discharge vertices until none is active anymore, then read off the flow that
    /// accumulated at the sink.
    fn run(&mut self) -> F {
        while let Some(vertex) = self.active.next() {
            self.discharge(vertex);
        }

        self.excess[self.t].clone()
    }

    /// Push the vertex's excess onward until none is left.
    ///
    /// Each pass scans the vertex's residual neighbors in increasing index order and
    /// pushes over every admissible arc. A receiving vertex other than the source and the
    /// sink becomes active and is queued. When a full pass leaves excess behind, the
    /// vertex is relabeled so that further pushes become admissible.
    fn discharge(&mut self, vertex: usize) {
        while !self.excess[vertex].is_zero() {
            for neighbor in self.residual.neighbors(vertex) {
                if self.excess[vertex].is_zero() {
                    break;
                }

                if self.is_admissible(vertex, neighbor) {
                    self.push(vertex, neighbor);
                    if neighbor != self.s && neighbor != self.t {
                        self.active.add(neighbor, self.height[neighbor]);
                    }
                }
            }

            if !self.excess[vertex].is_zero() {
                self.relabel(vertex);
            }
        }
    }

    /// An arc is admissible when it leads exactly one height level down. The source may
    /// push over any residual arc; it only ever discharges once, directly after
    /// initialization, and drains completely doing so.
    fn is_admissible(&self, from: usize, to: usize) -> bool {
        self.height[from] == self.height[to] + 1 || from == self.s
    }

    /// Push as much excess over the arc as its residual capacity allows.
    fn push(&mut self, from: usize, to: usize) {
        let quantity = {
            let available = self.residual.residual(from, to).unwrap();
            if self.excess[from] < *available {
                self.excess[from].clone()
            } else {
                available.clone()
            }
        };

        self.excess[from] = self.excess[from].clone() - quantity.clone();
        self.excess[to] = self.excess[to].clone() + quantity.clone();
        self.residual.push(from, to, quantity);
    }

    /// Lift the vertex to one above its lowest residual neighbor, the least height at
    /// which it can push again. A vertex without residual arcs is left untouched.
    fn relabel(&mut self, vertex: usize) {
        let lowest = self.residual.neighbors(vertex).into_iter()
            .map(|neighbor| self.height[neighbor])
            .min();
        if let Some(lowest) = lowest {
            self.height[vertex] = lowest + 1;
        }
    }
}

#[cfg(test)]
mod test {
    use num_traits::Zero;

    use crate::algorithm::preflow_push::PreflowPush;
    use crate::algorithm::preflow_push::strategy::selection_rule::{Fifo, LowestLabel, SelectionRule};
    use crate::data::network::max_flow::MaxFlow;

    fn solved<R: SelectionRule>(problem: &MaxFlow<i64>) -> PreflowPush<i64, R> {
        let mut engine = PreflowPush::new(problem);
        engine.run();
        engine
    }

    #[test]
    fn conservation_after_termination() {
        let problem = MaxFlow::new(4, vec![(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3);
        let engine = solved::<Fifo>(&problem);

        for vertex in 0..problem.nr_vertices() {
            if vertex != problem.source() && vertex != problem.sink() {
                assert!(engine.excess[vertex].is_zero());
            }
        }
    }

    #[test]
    fn source_height_remains_fixed() {
        let problem = MaxFlow::new(4, vec![(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3);
        let engine = solved::<LowestLabel>(&problem);

        assert_eq!(engine.height[problem.source()], problem.nr_vertices());
    }

    #[test]
    fn undeliverable_excess_returns_to_the_source() {
        let problem = MaxFlow::new(4, vec![(0, 1, 10), (1, 2, 1), (2, 3, 5)], 0, 3);
        let engine = solved::<Fifo>(&problem);

        assert_eq!(engine.excess[3], 1);
        // What the source pushed out either reached the sink or came back.
        assert_eq!(engine.excess[0] + engine.excess[3], 10);
        assert!(engine.excess[1].is_zero() && engine.excess[2].is_zero());
    }
}
