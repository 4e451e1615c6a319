use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

use num_traits::{Bounded, CheckedAdd, Zero};
use serde::{Deserialize, Serialize};

/// Identifier of a vertex: opaque, totally ordered and hashable
pub trait NodeId: Copy + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> NodeId for T where T: Copy + Eq + Hash + Ord + Debug + Send + Sync {}

/// Edge weight type. `max_value()` is reserved as the "unreached" sentinel.
pub trait Weight: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + Send + Sync {
    /// The sentinel distance for nodes that have not been reached
    fn infinity() -> Self {
        Self::max_value()
    }

    /// Returns true if this value is the unreached sentinel
    fn is_infinity(&self) -> bool {
        *self == Self::max_value()
    }
}

impl<T> Weight for T where T: Copy + Ord + Debug + Zero + Bounded + CheckedAdd + Send + Sync {}

/// A directed edge, owned by the adjacency list of its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N, W> {
    /// Destination node
    pub to: N,
    /// Weight of the edge
    pub weight: W,
}

impl<N, W> Edge<N, W> {
    pub fn new(to: N, weight: W) -> Self {
        Edge { to, weight }
    }
}

/// Trait representing a weighted directed graph
///
/// Adjacency lookups never fail: a node without outgoing edges, or one that
/// only ever appears as a destination, yields an empty slice.
pub trait Graph {
    type Node: NodeId;
    type Weight: Weight;

    /// Returns an iterator over the nodes that own an adjacency entry
    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;

    /// Returns the outgoing edges of a node, in insertion order
    fn outgoing_edges(&self, node: Self::Node) -> &[Edge<Self::Node, Self::Weight>];

    /// Returns true if the node owns an adjacency entry
    fn has_node(&self, node: Self::Node) -> bool;

    /// Returns the number of nodes that own an adjacency entry
    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize {
        self.nodes().map(|n| self.outgoing_edges(n).len()).sum()
    }

    /// Finds an edge with a weight below zero, if any
    fn find_negative_edge(&self) -> Option<(Self::Node, Self::Node)> {
        for from in self.nodes() {
            if let Some(edge) = self
                .outgoing_edges(from)
                .iter()
                .find(|edge| edge.weight < Self::Weight::zero())
            {
                return Some((from, edge.to));
            }
        }
        None
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph: Graph {
    /// Registers a node with an empty adjacency list; returns false if it already existed
    fn add_node(&mut self, node: Self::Node) -> bool;

    /// Appends a directed edge. Parallel edges and self-loops are kept as given.
    fn add_edge(&mut self, from: Self::Node, to: Self::Node, weight: Self::Weight);

    /// Removes every edge from `from` to `to` and returns how many were removed
    fn remove_edges(&mut self, from: Self::Node, to: Self::Node) -> usize;
}

impl<N: NodeId, W: Weight> Graph for HashMap<N, Vec<Edge<N, W>>> {
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.keys().copied())
    }

    fn outgoing_edges(&self, node: N) -> &[Edge<N, W>] {
        self.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn has_node(&self, node: N) -> bool {
        self.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}

impl<N: NodeId, W: Weight> Graph for BTreeMap<N, Vec<Edge<N, W>>> {
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.keys().copied())
    }

    fn outgoing_edges(&self, node: N) -> &[Edge<N, W>] {
        self.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    fn has_node(&self, node: N) -> bool {
        self.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.len()
    }
}
