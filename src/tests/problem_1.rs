//! Small networks with known maximum flow values.
//!
//! Every network is solved under both selection rules.
use crate::algorithm::SolveMaxFlow;
use crate::algorithm::preflow_push::strategy::selection_rule::{Fifo, LowestLabel};
use crate::data::network::Arc;
use crate::data::network::max_flow::MaxFlow;

fn solve_both(nr_vertices: usize, arcs: Vec<Arc<u64>>, s: usize, t: usize, expected: u64) {
    let problem = MaxFlow::new(nr_vertices, arcs, s, t);

    assert_eq!(problem.solve_max_flow::<Fifo>(), expected);
    assert_eq!(problem.solve_max_flow::<LowestLabel>(), expected);
}

#[test]
fn diamond() {
    solve_both(4, vec![(0, 1, 3), (0, 2, 2), (1, 3, 2), (2, 3, 3)], 0, 3, 4);
}

#[test]
fn parallel_paths_with_shared_bottleneck() {
    solve_both(
        6,
        vec![
            (0, 1, 10), (0, 2, 10),
            (1, 3, 4), (2, 3, 4), (1, 2, 2),
            (3, 4, 10), (4, 5, 10), (3, 5, 0),
        ],
        0, 5,
        8,
    );
}

#[test]
fn unreachable_sink() {
    solve_both(3, vec![(0, 1, 5)], 0, 2, 0);
}

#[test]
fn no_arcs_at_all() {
    solve_both(2, vec![], 0, 1, 0);
}

#[test]
fn single_arc() {
    solve_both(2, vec![(0, 1, 7)], 0, 1, 7);
}

#[test]
fn cycle_with_bottleneck() {
    solve_both(3, vec![(0, 1, 5), (1, 2, 3), (2, 0, 1), (1, 0, 1)], 0, 2, 3);
}

#[test]
fn textbook_network() {
    // Cormen et al., Introduction to Algorithms, figure 26.1.
    solve_both(
        6,
        vec![
            (0, 1, 16), (0, 2, 13),
            (1, 3, 12), (2, 1, 4), (2, 4, 14),
            (3, 2, 9), (3, 5, 20),
            (4, 3, 7), (4, 5, 4),
        ],
        0, 5,
        23,
    );
}

#[test]
fn antiparallel_arcs() {
    solve_both(
        4,
        vec![(0, 1, 4), (0, 2, 3), (1, 2, 3), (2, 1, 2), (1, 3, 2), (2, 3, 5)],
        0, 3,
        7,
    );
}

#[test]
fn sink_behind_long_path() {
    solve_both(5, vec![(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 4, 2)], 0, 4, 2);
}
