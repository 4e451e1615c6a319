//! Dijkstra SSSP - single-source shortest paths over weighted directed graphs
//!
//! The crate computes, for a start node, the minimum total edge weight to every
//! node of a directed multigraph with non-negative weights. The engine drives
//! relaxation through an indexed binary min-heap and uses lazy deletion by
//! default: improved distances are re-pushed and superseded queue entries are
//! discarded when popped.
//!
//! ```
//! use dijkstra_sssp::{shortest_paths, DirectedGraph, MutableGraph};
//!
//! let mut graph: DirectedGraph<u32, i64> = DirectedGraph::new();
//! graph.add_edge(1, 2, 2);
//! graph.add_edge(2, 3, 1);
//! graph.add_edge(1, 3, 4);
//!
//! let distances = shortest_paths(&graph, 1);
//! assert_eq!(distances[&3], 3);
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{
        shortest_paths, shortest_paths_from_many, Dijkstra, DijkstraConfig, QueueStrategy, RunStats,
    },
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Edge, Graph, MutableGraph, NodeId, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Pop from an empty priority queue")]
    EmptyQueue,

    #[error("Queue item handle no longer refers to a queued item")]
    StaleHandle,

    #[error("New priority is larger than the current priority")]
    PriorityIncrease,

    #[error("Negative edge weight: from {from} to {to}")]
    NegativeWeight { from: String, to: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
