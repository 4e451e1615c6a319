use std::collections::HashMap;

use crate::graph::{Graph, NodeId, Weight};
use crate::Result;

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Distance from the source to every known node; unreached nodes hold `W::infinity()`
    pub distances: HashMap<N, W>,

    /// Source node
    pub source: N,
}

impl<N, W> ShortestPathResult<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Returns the finite distance to `node`, or `None` if it was not reached
    pub fn distance(&self, node: N) -> Option<W> {
        self.distances
            .get(&node)
            .copied()
            .filter(|distance| !distance.is_infinity())
    }

    /// Returns true if `node` was reached from the source
    pub fn is_reachable(&self, node: N) -> bool {
        self.distance(node).is_some()
    }

    /// Number of nodes with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances
            .values()
            .filter(|distance| !distance.is_infinity())
            .count()
    }

    /// All entries ordered by node
    pub fn sorted(&self) -> Vec<(N, W)> {
        let mut entries: Vec<(N, W)> = self.distances.iter().map(|(&n, &d)| (n, d)).collect();
        entries.sort_unstable_by_key(|&(node, _)| node);
        entries
    }

    /// Consumes the result and returns the raw distance table
    pub fn into_distances(self) -> HashMap<N, W> {
        self.distances
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<G>
where
    G: Graph + ?Sized,
{
    /// Compute shortest paths from a source node to all other nodes
    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Node,
    ) -> Result<ShortestPathResult<G::Node, G::Weight>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
