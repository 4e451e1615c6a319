use std::collections::HashMap;

use log::{debug, trace};
use num_traits::{CheckedAdd, Zero};
use rayon::prelude::*;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::{ItemHandle, PriorityQueue};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// How the engine keeps the queue in step with improved distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QueueStrategy {
    /// Push a new item on every improvement and skip superseded items when popped
    #[default]
    LazyDeletion,
    /// Lower the priority of a node's queued item in place when it is still queued
    DecreaseKey,
}

/// Configuration for a [`Dijkstra`] run
#[derive(Debug, Clone, Default)]
pub struct DijkstraConfig {
    pub strategy: QueueStrategy,
    /// Reject graphs containing a negative edge weight before running
    pub check_negative_weights: bool,
}

/// Classic Dijkstra's algorithm implementation
///
/// Each run owns its own distance table and queue, so one instance (and one
/// read-only graph) can serve any number of runs, including concurrent ones.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    config: DijkstraConfig,
}

/// Queue activity counted during one run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunStats {
    pub pushes: usize,
    pub pops: usize,
    /// Popped items discarded because a shorter distance was already recorded
    pub stale_skips: usize,
    /// Popped items whose outgoing edges were relaxed
    pub expansions: usize,
    pub decrease_keys: usize,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates an instance from an explicit configuration
    pub fn with_config(config: DijkstraConfig) -> Self {
        Dijkstra { config }
    }

    /// Set the queue strategy
    pub fn with_strategy(mut self, strategy: QueueStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Enable or disable rejection of negative edge weights
    pub fn with_negative_weight_check(mut self, enabled: bool) -> Self {
        self.config.check_negative_weights = enabled;
        self
    }

    /// Returns the active configuration
    pub fn config(&self) -> &DijkstraConfig {
        &self.config
    }

    /// Runs the algorithm without any input validation
    ///
    /// Edge weights must be non-negative. Negative weights are not detected
    /// here and give non-minimal distances; a negative cycle reachable from
    /// `source` keeps the run going until the distances bottom out.
    pub fn run<G>(&self, graph: &G, source: G::Node) -> ShortestPathResult<G::Node, G::Weight>
    where
        G: Graph + ?Sized,
    {
        self.run_with_stats(graph, source).0
    }

    /// Same as [`Dijkstra::run`], also returning the queue activity of the run
    pub fn run_with_stats<G>(
        &self,
        graph: &G,
        source: G::Node,
    ) -> (ShortestPathResult<G::Node, G::Weight>, RunStats)
    where
        G: Graph + ?Sized,
    {
        debug!(
            "Dijkstra ({:?}) from {:?} over {} nodes",
            self.config.strategy,
            source,
            graph.node_count()
        );

        let mut distances = initial_distances(graph, source);
        let stats = match self.config.strategy {
            QueueStrategy::LazyDeletion => relax_lazy(graph, source, &mut distances),
            QueueStrategy::DecreaseKey => relax_decrease_key(graph, source, &mut distances),
        };

        debug!(
            "Dijkstra finished: {} pushes, {} pops, {} stale skips, {} expansions, {} decrease-keys",
            stats.pushes, stats.pops, stats.stale_skips, stats.expansions, stats.decrease_keys
        );

        (ShortestPathResult { distances, source }, stats)
    }
}

impl<G> ShortestPathAlgorithm<G> for Dijkstra
where
    G: Graph + ?Sized,
{
    fn name(&self) -> &'static str {
        match self.config.strategy {
            QueueStrategy::LazyDeletion => "Dijkstra",
            QueueStrategy::DecreaseKey => "Dijkstra (decrease-key)",
        }
    }

    fn compute_shortest_paths(
        &self,
        graph: &G,
        source: G::Node,
    ) -> Result<ShortestPathResult<G::Node, G::Weight>> {
        if self.config.check_negative_weights {
            if let Some((from, to)) = graph.find_negative_edge() {
                return Err(Error::NegativeWeight {
                    from: format!("{:?}", from),
                    to: format!("{:?}", to),
                });
            }
        }

        Ok(self.run(graph, source))
    }
}

/// Computes the distance from `start` to every node of `graph`
///
/// The table holds every adjacency key and every edge destination; nodes that
/// cannot be reached carry `W::infinity()`.
pub fn shortest_paths<G>(graph: &G, start: G::Node) -> HashMap<G::Node, G::Weight>
where
    G: Graph + ?Sized,
{
    Dijkstra::new().run(graph, start).into_distances()
}

/// Runs one independent computation per start node, in parallel
///
/// Results are returned in the order of `starts`.
pub fn shortest_paths_from_many<G>(
    graph: &G,
    starts: &[G::Node],
) -> Vec<ShortestPathResult<G::Node, G::Weight>>
where
    G: Graph + Sync + ?Sized,
{
    starts
        .par_iter()
        .map(|&start| Dijkstra::new().run(graph, start))
        .collect()
}

fn initial_distances<G>(graph: &G, source: G::Node) -> HashMap<G::Node, G::Weight>
where
    G: Graph + ?Sized,
{
    let mut distances = HashMap::with_capacity(graph.node_count() + 1);
    for node in graph.nodes() {
        distances.entry(node).or_insert_with(G::Weight::infinity);
        for edge in graph.outgoing_edges(node) {
            distances.entry(edge.to).or_insert_with(G::Weight::infinity);
        }
    }
    distances.insert(source, G::Weight::zero());
    distances
}

fn relax_lazy<G>(
    graph: &G,
    source: G::Node,
    distances: &mut HashMap<G::Node, G::Weight>,
) -> RunStats
where
    G: Graph + ?Sized,
{
    let mut stats = RunStats::default();
    let mut queue = PriorityQueue::new();
    queue.push(source, G::Weight::zero());
    stats.pushes += 1;

    while let Ok((u, dist_u)) = queue.pop() {
        stats.pops += 1;
        let current = distances
            .get(&u)
            .copied()
            .unwrap_or_else(G::Weight::infinity);

        // Superseded by an earlier, shorter pop
        if dist_u > current {
            stats.stale_skips += 1;
            trace!("Skipping stale entry {:?} at {:?}", u, dist_u);
            continue;
        }
        stats.expansions += 1;

        for edge in graph.outgoing_edges(u) {
            let Some(candidate) = current.checked_add(&edge.weight) else {
                continue;
            };
            let best = distances
                .entry(edge.to)
                .or_insert_with(G::Weight::infinity);
            if candidate < *best {
                *best = candidate;
                queue.push(edge.to, candidate);
                stats.pushes += 1;
            }
        }
    }

    stats
}

fn relax_decrease_key<G>(
    graph: &G,
    source: G::Node,
    distances: &mut HashMap<G::Node, G::Weight>,
) -> RunStats
where
    G: Graph + ?Sized,
{
    let mut stats = RunStats::default();
    let mut queue = PriorityQueue::new();
    let mut queued: HashMap<G::Node, ItemHandle> = HashMap::new();
    queued.insert(source, queue.push(source, G::Weight::zero()));
    stats.pushes += 1;

    while let Ok((u, dist_u)) = queue.pop() {
        stats.pops += 1;
        queued.remove(&u);
        let current = distances
            .get(&u)
            .copied()
            .unwrap_or_else(G::Weight::infinity);

        if dist_u > current {
            stats.stale_skips += 1;
            continue;
        }
        stats.expansions += 1;

        for edge in graph.outgoing_edges(u) {
            let Some(candidate) = current.checked_add(&edge.weight) else {
                continue;
            };
            let best = distances
                .entry(edge.to)
                .or_insert_with(G::Weight::infinity);
            if candidate >= *best {
                continue;
            }
            *best = candidate;

            let decreased = match queued.get(&edge.to) {
                Some(&handle) => queue.decrease_priority(handle, candidate).is_ok(),
                None => false,
            };
            if decreased {
                stats.decrease_keys += 1;
            } else {
                queued.insert(edge.to, queue.push(edge.to, candidate));
                stats.pushes += 1;
            }
        }
    }

    stats
}
