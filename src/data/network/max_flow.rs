//! # Maximum flow problem
use crate::data::network::Arc;
use crate::data::number_types::FlowValue;

/// Maximum flow problem on a capacitated directed network.
///
/// Flow should be routed from the source vertex to the sink vertex, respecting the arc
/// capacities. This struct is the immutable problem statement; solving it is done through
/// [`SolveMaxFlow`](crate::algorithm::SolveMaxFlow).
///
/// Preconditions are not validated outside of debug builds: arc endpoints as well as the
/// source and the sink must lie in `[0, nr_vertices)`, capacities must be nonnegative and
/// the source must differ from the sink. The computed value is unspecified when any of
/// these is violated.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxFlow<F> {
    nr_vertices: usize,
    /// Arcs as supplied by the caller; parallel arcs are summed during solving.
    arcs: Vec<Arc<F>>,
    /// Source.
    s: usize,
    /// Sink.
    t: usize,
}

impl<F: FlowValue> MaxFlow<F> {
    /// Create a new instance.
    ///
    /// # Arguments
    ///
    /// * `nr_vertices`: Number of vertices in the network.
    /// * `arcs`: Capacitated arcs. Parallel arcs are allowed and are summed; self-arcs
    ///   and arcs with zero capacity carry no flow.
    /// * `s`: Source vertex.
    /// * `t`: Sink vertex, different from the source.
    pub fn new(nr_vertices: usize, arcs: Vec<Arc<F>>, s: usize, t: usize) -> Self {
        debug_assert!(s < nr_vertices && t < nr_vertices);
        debug_assert!(s != t);
        debug_assert!(arcs.iter().all(|(from, to, _)| *from < nr_vertices && *to < nr_vertices));
        debug_assert!(arcs.iter().all(|(_, _, capacity)| capacity >= &F::zero()));

        Self {
            nr_vertices,
            arcs,

            s,
            t,
        }
    }

    /// Number of vertices in the network.
    pub fn nr_vertices(&self) -> usize {
        self.nr_vertices
    }

    /// The capacitated arcs as supplied at construction.
    pub fn arcs(&self) -> &[Arc<F>] {
        &self.arcs
    }

    /// Vertex the flow originates from.
    pub fn source(&self) -> usize {
        self.s
    }

    /// Vertex the flow is routed toward.
    pub fn sink(&self) -> usize {
        self.t
    }
}

#[cfg(test)]
mod test {
    use crate::data::network::max_flow::MaxFlow;

    #[test]
    fn construction() {
        let problem = MaxFlow::new(3, vec![(0, 1, 2), (1, 2, 3)], 0, 2);

        assert_eq!(problem.nr_vertices(), 3);
        assert_eq!(problem.arcs(), &[(0, 1, 2), (1, 2, 3)]);
        assert_eq!(problem.source(), 0);
        assert_eq!(problem.sink(), 2);
    }
}
