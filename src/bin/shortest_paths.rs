use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use dijkstra_sssp::algorithm::ShortestPathAlgorithm;
use dijkstra_sssp::graph::{parse_edge_json, parse_edge_list, DirectedGraph, Weight};
use dijkstra_sssp::{Dijkstra, QueueStrategy};

/// Print the shortest distance from a start node to every node of a graph
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge list file with one `from to weight` per line, `-` for stdin.
    /// Without it the built-in reference graph is used.
    file: Option<PathBuf>,

    /// Start node
    #[arg(default_value_t = 1)]
    start: i64,

    /// Read the edge list as a JSON array of {"from", "to", "weight"} objects
    #[arg(long)]
    json: bool,

    /// Update queued priorities in place instead of re-pushing
    #[arg(long)]
    decrease_key: bool,

    /// Reject graphs with negative edge weights
    #[arg(long)]
    check_weights: bool,
}

/// The reference graph used when no edge file is given
fn reference_graph() -> DirectedGraph<i64, i64> {
    DirectedGraph::from_edges([
        (1, 2, 2),
        (1, 3, 4),
        (2, 3, 1),
        (2, 4, 7),
        (3, 5, 3),
        (4, 6, 1),
        (5, 4, 2),
        (5, 6, 5),
    ])
}

fn load_graph(cli: &Cli) -> Result<DirectedGraph<i64, i64>, Box<dyn std::error::Error>> {
    let Some(path) = &cli.file else {
        return Ok(reference_graph());
    };

    let input = if path.as_os_str() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        fs::read_to_string(path)?
    };

    let graph = if cli.json {
        parse_edge_json(&input)?
    } else {
        parse_edge_list(&input)?
    };
    Ok(graph)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    let graph = load_graph(&cli)?;

    let strategy = if cli.decrease_key {
        QueueStrategy::DecreaseKey
    } else {
        QueueStrategy::LazyDeletion
    };
    let dijkstra = Dijkstra::new()
        .with_strategy(strategy)
        .with_negative_weight_check(cli.check_weights);

    let result = dijkstra.compute_shortest_paths(&graph, cli.start)?;
    for (node, distance) in result.sorted() {
        if distance.is_infinity() {
            println!("Distance from {} to {}: unreachable", cli.start, node);
        } else {
            println!("Distance from {} to {}: {}", cli.start, node, distance);
        }
    }

    Ok(())
}
