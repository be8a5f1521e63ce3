use std::collections::HashMap;
use std::fmt::Debug;
use log::{debug, trace};
use num_traits::{Float, Zero};

use crate::algorithm::path::ParentMap;
use crate::algorithm::{DistanceRecord, RunStats, ShortestPathAlgorithm, ShortestShortestResult};
use crate::data_structures::Frontier;
use crate::graph::traits::is_valid_weight;
use crate::graph::{Vertex, WeightedGraph};
use crate::{Error, Result};

/// Dijkstra's algorithm with a second objective: among the lightest paths to a
/// vertex, keep the one with the fewest edges.
///
/// The frontier is ordered by `(distance, edges)`. A vertex is pushed again
/// whenever its record improves, either in weight or in edge count at equal
/// weight, and superseded entries are skipped when popped.
#[derive(Debug, Default, Clone)]
pub struct ShortestShortestPaths {
    /// Whether to validate every edge of the graph before the run
    eager_validation: bool,
}

impl ShortestShortestPaths {
    /// Creates a new instance that checks edges lazily, as they are relaxed
    pub fn new() -> Self {
        ShortestShortestPaths {
            eager_validation: false,
        }
    }

    /// Validate the whole graph before running, so a bad edge is reported even
    /// when it is not reachable from the source
    pub fn with_eager_validation(mut self, enabled: bool) -> Self {
        self.eager_validation = enabled;
        self
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for ShortestShortestPaths
where
    V: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: WeightedGraph<V, W>,
{
    fn name(&self) -> &'static str {
        "ShortestShortestPaths"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestShortestResult<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::unknown_vertex(source));
        }
        if self.eager_validation {
            graph.validate()?;
        }

        let mut records: HashMap<V, DistanceRecord<W>> = graph
            .vertices()
            .map(|v| (v.clone(), DistanceRecord::unreachable()))
            .collect();
        records.insert(source.clone(), DistanceRecord::origin());

        let mut predecessors = ParentMap::with_root(source.clone());
        let mut stats = RunStats::default();
        let mut overflowed: Vec<(V, V)> = Vec::new();

        let mut frontier = Frontier::new();
        frontier.push(source.clone(), W::zero(), 0);
        stats.pushes += 1;

        while let Some((u, distance_u, edges_u)) = frontier.pop() {
            stats.pops += 1;

            let popped = DistanceRecord {
                distance: distance_u,
                edges: edges_u,
            };
            // A later push for u already beat this entry
            if records.get(&u).map_or(false, |current| current.improves_on(&popped)) {
                stats.stale_pops += 1;
                continue;
            }

            for (v, weight) in graph.outgoing_edges(&u) {
                stats.relaxations += 1;

                if !is_valid_weight(weight) {
                    return Err(Error::invalid_weight(&u, v, weight));
                }

                let candidate = DistanceRecord {
                    distance: distance_u + weight,
                    edges: edges_u + 1,
                };
                let record = records
                    .get_mut(v)
                    .ok_or_else(|| Error::dangling_edge(&u, v))?;

                // Finite weights can still sum past the largest finite value
                if !candidate.distance.is_finite() {
                    overflowed.push((u.clone(), v.clone()));
                    continue;
                }

                if candidate.improves_on(record) {
                    trace!(
                        "{:?} -> {:?}: ({:?}, {}) replaces ({:?}, {})",
                        u, v, candidate.distance, candidate.edges, record.distance, record.edges
                    );
                    *record = candidate;
                    predecessors.insert(v.clone(), Some(u.clone()));
                    frontier.push(v.clone(), candidate.distance, candidate.edges);
                    stats.pushes += 1;
                }
            }
        }

        // Only an error when no other path gave the vertex a finite record
        if let Some((from, to)) = overflowed
            .iter()
            .find(|(_, to)| records.get(to).map_or(false, |r| !r.is_reachable()))
        {
            return Err(Error::distance_overflow(from, to));
        }

        debug!(
            "{} from {:?}: {} pops ({} stale), {} relaxations, {} pushes",
            <Self as ShortestPathAlgorithm<V, W, G>>::name(self),
            source,
            stats.pops,
            stats.stale_pops,
            stats.relaxations,
            stats.pushes
        );

        Ok(ShortestShortestResult {
            records,
            predecessors,
            source: source.clone(),
            stats,
        })
    }
}

/// Runs `ShortestShortestPaths` with default settings
pub fn compute_shortest_shortest_paths<V, W, G>(graph: &G, source: &V) -> Result<ShortestShortestResult<V, W>>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy + Ord,
    G: WeightedGraph<V, W>,
{
    ShortestShortestPaths::new().compute_shortest_paths(graph, source)
}
