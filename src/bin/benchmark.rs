use std::time::{Duration, Instant};

use dijkstra_sssp::graph::generators::generate_random;
use dijkstra_sssp::graph::{DirectedGraph, Graph};
use dijkstra_sssp::{Dijkstra, QueueStrategy, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm(
    algorithm: &Dijkstra,
    graph: &DirectedGraph<usize, u64>,
    source: usize,
) -> Duration {
    let name = <Dijkstra as ShortestPathAlgorithm<DirectedGraph<usize, u64>>>::name(algorithm);
    println!("Running {} on graph with {} nodes...", name, graph.node_count());

    let start = Instant::now();
    let result = algorithm.run(graph, source);
    let duration = start.elapsed();

    println!(
        "  - Found {} reachable nodes in {:?}",
        result.reachable_count(),
        duration
    );

    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = [1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per node
    let edge_factor = 4;

    println!("=====================================================");
    println!("Benchmark: lazy deletion vs decrease-key");
    println!("Edge factor: {} edges per node (on average)", edge_factor);
    println!("=====================================================");

    let lazy = Dijkstra::new();
    let decrease_key = Dijkstra::new().with_strategy(QueueStrategy::DecreaseKey);
    let mut rng = StdRng::seed_from_u64(42);

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} nodes...", size);
        let graph = generate_random(size, size * edge_factor, 100, &mut rng);

        let lazy_time = benchmark_algorithm(&lazy, &graph, 0);
        let decrease_key_time = benchmark_algorithm(&decrease_key, &graph, 0);

        results.push((size, lazy_time, decrease_key_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<18} | {:<10}",
        "Nodes", "Lazy (ms)", "Decrease-key (ms)", "Ratio"
    );
    println!("-----------------------------------------------------");

    for (size, lazy_time, decrease_key_time) in &results {
        let ratio = decrease_key_time.as_secs_f64() / lazy_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<15} | {:<18} | {:<10.2}",
            size,
            lazy_time.as_millis(),
            decrease_key_time.as_millis(),
            ratio
        );
    }
}
