use crate::graph::traits::{Edge, Graph, MutableGraph, NodeId, Weight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A directed multigraph using adjacency lists
///
/// Only sources of edges (and nodes added explicitly) own an adjacency entry.
/// A node that is only ever a destination is still a valid node for every
/// lookup; it simply has no outgoing edges.
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W> {
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<Edge<N, W>>>,

    /// Total number of edges
    edge_count: usize,
}

/// One `from -> to` edge as it appears in an edge list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord<N, W> {
    pub from: N,
    pub to: N,
    pub weight: W,
}

impl<N, W> DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
            edge_count: 0,
        }
    }

    /// Creates a new directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(from, to, weight)` triples, keeping their order
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        edges.into_iter().collect()
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.find_negative_edge().is_none()
    }

    /// Returns every edge as an `EdgeRecord`, grouped by source node
    pub fn edge_records(&self) -> Vec<EdgeRecord<N, W>> {
        let mut sources: Vec<N> = self.outgoing_edges.keys().copied().collect();
        sources.sort();
        sources
            .into_iter()
            .flat_map(move |from| {
                self.outgoing_edges[&from].iter().map(move |edge| EdgeRecord {
                    from,
                    to: edge.to,
                    weight: edge.weight,
                })
            })
            .collect()
    }
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> Graph for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    type Node = N;
    type Weight = W;

    fn nodes(&self) -> Box<dyn Iterator<Item = N> + '_> {
        Box::new(self.outgoing_edges.keys().copied())
    }

    fn outgoing_edges(&self, node: N) -> &[Edge<N, W>] {
        self.outgoing_edges
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    fn has_node(&self, node: N) -> bool {
        self.outgoing_edges.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }
}

impl<N, W> MutableGraph for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, weight: W) {
        self.outgoing_edges
            .entry(from)
            .or_default()
            .push(Edge::new(to, weight));
        self.edge_count += 1;
    }

    fn remove_edges(&mut self, from: N, to: N) -> usize {
        let Some(outgoing) = self.outgoing_edges.get_mut(&from) else {
            return 0;
        };
        let len_before = outgoing.len();
        outgoing.retain(|edge| edge.to != to);
        let removed = len_before - outgoing.len();
        self.edge_count -= removed;
        removed
    }
}

impl<N, W> FromIterator<(N, N, W)> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = (N, N, W)>>(iter: I) -> Self {
        let mut graph = DirectedGraph::new();
        graph.extend(iter);
        graph
    }
}

impl<N, W> Extend<(N, N, W)> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn extend<I: IntoIterator<Item = (N, N, W)>>(&mut self, iter: I) {
        for (from, to, weight) in iter {
            self.add_edge(from, to, weight);
        }
    }
}

impl<N, W> FromIterator<EdgeRecord<N, W>> for DirectedGraph<N, W>
where
    N: NodeId,
    W: Weight,
{
    fn from_iter<I: IntoIterator<Item = EdgeRecord<N, W>>>(iter: I) -> Self {
        iter.into_iter()
            .map(|record| (record.from, record.to, record.weight))
            .collect()
    }
}
