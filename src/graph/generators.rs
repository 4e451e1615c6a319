use crate::graph::{DirectedGraph, MutableGraph};
use rand::prelude::*;

/// Generates a random directed multigraph on nodes `0..n`
///
/// Every node gets an adjacency entry, so isolated nodes are still part of
/// the graph. Weights are drawn uniformly from `0..=max_weight`; self-loops
/// and parallel edges may occur.
pub fn generate_random<R: Rng + ?Sized>(
    n: usize,
    edge_count: usize,
    max_weight: u64,
    rng: &mut R,
) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
    }
    if n == 0 {
        return graph;
    }

    for _ in 0..edge_count {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = rng.gen_range(0..=max_weight);
        graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a 2D grid graph with dimensions width*height (4-connectivity)
///
/// Node `(i, j)` has id `j * width + i`. Every neighbouring pair is joined in
/// both directions with the same weight.
pub fn generate_grid(width: usize, height: usize, weight: u64) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let get_index = |i: usize, j: usize| -> usize { j * width + i };

    for j in 0..height {
        for i in 0..width {
            let current = get_index(i, j);
            graph.add_node(current);

            if i > 0 {
                graph.add_edge(current, get_index(i - 1, j), weight);
            }
            if i + 1 < width {
                graph.add_edge(current, get_index(i + 1, j), weight);
            }
            if j > 0 {
                graph.add_edge(current, get_index(i, j - 1), weight);
            }
            if j + 1 < height {
                graph.add_edge(current, get_index(i, j + 1), weight);
            }
        }
    }

    graph
}

/// Generates a directed path `0 -> 1 -> ... -> n-1` with the given weight
pub fn generate_path(n: usize, weight: u64) -> DirectedGraph<usize, u64> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_node(v);
        if v + 1 < n {
            graph.add_edge(v, v + 1, weight);
        }
    }
    graph
}
