pub mod traits;
pub mod directed;
pub mod generators;
pub mod parse;

pub use traits::{Edge, Graph, MutableGraph, NodeId, Weight};
pub use directed::{DirectedGraph, EdgeRecord};
pub use parse::{parse_edge_json, parse_edge_list};
