//! # Selection rules
//!
//! Strategies for choosing the next active vertex to discharge.
use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// Deciding which active vertex to discharge next.
///
/// During the preflow push algorithm, vertices holding excess flow are queued and
/// discharged one at a time. The selection rule describes the order. Any rule yields the
/// same maximum flow value; the order determines how many push and relabel steps are
/// needed and with that the worst case running time.
pub trait SelectionRule {
    /// Create an empty instance.
    fn new() -> Self;

    /// Queue a vertex under the given height label.
    ///
    /// A vertex may be queued multiple times; each occurrence is returned separately.
    fn add(&mut self, vertex: usize, label: usize);

    /// Remove and return the next vertex to discharge, if any is queued.
    fn next(&mut self) -> Option<usize>;

    /// Whether no vertices are queued.
    fn is_empty(&self) -> bool;
}

/// Discharge vertices in their order of arrival.
///
/// The height label is ignored. Leads to an overall running time of O(|V|³).
pub struct Fifo {
    queue: VecDeque<usize>,
}

impl SelectionRule for Fifo {
    fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    fn add(&mut self, vertex: usize, _label: usize) {
        self.queue.push_back(vertex);
    }

    fn next(&mut self) -> Option<usize> {
        self.queue.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// Discharge the queued vertex with the smallest height label first.
///
/// Ties are broken by order of arrival. Heights only increase during a run, so this rule
/// finishes work low in the network before returning to vertices that were lifted. Leads
/// to an overall running time of O(|V|² · √|E| · log |V|).
pub struct LowestLabel {
    /// Ordered by `(label, arrival)`; the `Reverse` turns the max-heap into extraction of
    /// the smallest label.
    heap: BinaryHeap<Reverse<(usize, u64, usize)>>,
    /// Number of additions so far, the tie breaker.
    arrivals: u64,
}

impl SelectionRule for LowestLabel {
    fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            arrivals: 0,
        }
    }

    fn add(&mut self, vertex: usize, label: usize) {
        self.heap.push(Reverse((label, self.arrivals, vertex)));
        self.arrivals += 1;
    }

    fn next(&mut self) -> Option<usize> {
        self.heap.pop().map(|Reverse((_, _, vertex))| vertex)
    }

    fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
