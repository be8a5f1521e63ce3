use std::collections::HashMap;
use std::fmt::Debug;
use num_traits::{Float, Zero};
use serde::Serialize;

use crate::algorithm::path::{ParentMap, PathRenderer};
use crate::graph::{Vertex, WeightedGraph};
use crate::{Error, Result};

/// Best known way to reach a vertex: total weight, then the fewest edges that
/// achieve exactly that weight.
///
/// `edges` only has meaning relative to `distance`; it is not the global minimum
/// number of edges to the vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DistanceRecord<W> {
    /// Total weight from the source, infinite when unreachable
    pub distance: W,
    /// Fewest edges among paths of weight `distance`, zero when unreachable
    pub edges: usize,
}

impl<W> DistanceRecord<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Record of the source vertex
    pub fn origin() -> Self {
        DistanceRecord {
            distance: W::zero(),
            edges: 0,
        }
    }

    /// Record of a vertex no path reaches
    pub fn unreachable() -> Self {
        DistanceRecord {
            distance: W::infinity(),
            edges: 0,
        }
    }

    pub fn is_reachable(&self) -> bool {
        self.distance.is_finite()
    }

    /// True if `self` is strictly lighter than `other`, or equally heavy with
    /// fewer edges.
    pub fn improves_on(&self, other: &Self) -> bool {
        self.distance < other.distance
            || (self.distance == other.distance && self.edges < other.edges)
    }
}

/// Counters collected during a weighted run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Entries taken from the frontier
    pub pops: usize,
    /// Popped entries that were already superseded
    pub stale_pops: usize,
    /// Edges examined
    pub relaxations: usize,
    /// Entries pushed onto the frontier, the seed included
    pub pushes: usize,
}

/// Result of a shortest-shortest path computation
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestShortestResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Record for every vertex of the graph
    pub records: HashMap<V, DistanceRecord<W>>,

    /// Predecessor that produced each reachable vertex's final record
    pub predecessors: ParentMap<V>,

    /// Source vertex
    pub source: V,

    /// Run counters
    pub stats: RunStats,
}

impl<V, W> ShortestShortestResult<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    pub fn get(&self, vertex: &V) -> Option<&DistanceRecord<W>> {
        self.records.get(vertex)
    }

    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.records.get(vertex).map(|record| record.distance)
    }

    pub fn edge_count(&self, vertex: &V) -> Option<usize> {
        self.records.get(vertex).map(|record| record.edges)
    }

    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.records
            .get(vertex)
            .map_or(false, |record| record.is_reachable())
    }

    /// Number of vertices reachable from the source, the source included
    pub fn reachable_count(&self) -> usize {
        self.records.values().filter(|r| r.is_reachable()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &DistanceRecord<W>)> {
        self.records.iter()
    }

    pub fn source(&self) -> &V {
        &self.source
    }

    pub fn parent_map(&self) -> &ParentMap<V> {
        &self.predecessors
    }

    /// Full path from the source to `target`, both included.
    ///
    /// Its weight and length match the record of `target`. Returns `None` for
    /// unreachable vertices.
    pub fn path_to(&self, target: &V) -> Result<Option<Vec<V>>> {
        if !self.records.contains_key(target) {
            return Err(Error::unknown_vertex(target));
        }
        if !self.is_reachable(target) {
            return Ok(None);
        }
        PathRenderer::new()
            .full_path(&self.predecessors, target)
            .map(Some)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
    G: WeightedGraph<V, W>,
{
    /// Compute the record of every vertex from a source vertex
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestShortestResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
