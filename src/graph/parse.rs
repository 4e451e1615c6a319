use std::str::FromStr;

use serde::de::DeserializeOwned;

use crate::graph::{DirectedGraph, EdgeRecord, MutableGraph, NodeId, Weight};
use crate::{Error, Result};

/// Parses a whitespace-separated edge list
///
/// Each non-empty line holds `from to weight`. Text after `#` is ignored.
/// Edges keep the order in which they appear.
pub fn parse_edge_list<N, W>(input: &str) -> Result<DirectedGraph<N, W>>
where
    N: NodeId + FromStr,
    W: Weight + FromStr,
{
    let mut graph = DirectedGraph::new();

    for (index, raw) in input.lines().enumerate() {
        let line = raw.split('#').next().unwrap_or("").trim();
        if line.is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        let [from, to, weight] = fields.as_slice() else {
            return Err(Error::InvalidInput(format!(
                "line {}: expected `from to weight`, got {:?}",
                index + 1,
                line
            )));
        };

        graph.add_edge(
            parse_field(from, "source node", index)?,
            parse_field(to, "destination node", index)?,
            parse_field(weight, "weight", index)?,
        );
    }

    Ok(graph)
}

/// Parses a JSON array of `{"from": .., "to": .., "weight": ..}` objects
pub fn parse_edge_json<N, W>(input: &str) -> Result<DirectedGraph<N, W>>
where
    N: NodeId + DeserializeOwned,
    W: Weight + DeserializeOwned,
{
    let records: Vec<EdgeRecord<N, W>> =
        serde_json::from_str(input).map_err(|e| Error::InvalidInput(e.to_string()))?;
    Ok(records.into_iter().collect())
}

fn parse_field<T: FromStr>(field: &str, what: &str, index: usize) -> Result<T> {
    field.parse().map_err(|_| {
        Error::InvalidInput(format!("line {}: invalid {} {:?}", index + 1, what, field))
    })
}
