use std::fmt::Debug;
use std::hash::Hash;
use num_traits::{Float, Zero};

use crate::{Error, Result};

/// Anything usable as a vertex identifier.
///
/// Vertices are opaque: the algorithms only hash and compare them for equality,
/// never order them.
pub trait Vertex: Clone + Eq + Hash + Debug {}

impl<T> Vertex for T where T: Clone + Eq + Hash + Debug {}

/// Trait representing the unweighted view of a directed graph
pub trait Graph<V>: Debug
where
    V: Vertex,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex is a key of the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns an iterator over every vertex of the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the successors of a vertex
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_>;
}

/// Trait representing a weighted directed graph
pub trait WeightedGraph<V, W>: Graph<V>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Returns an iterator over the outgoing edges from a vertex.
    ///
    /// Parallel edges to the same neighbor are yielded separately.
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_>;

    /// Checks every edge: weights must be finite and non-negative, and targets
    /// must be vertices of the graph.
    fn validate(&self) -> Result<()> {
        for from in self.vertices() {
            for (to, weight) in self.outgoing_edges(from) {
                if !is_valid_weight(weight) {
                    return Err(Error::invalid_weight(from, to, weight));
                }
                if !self.has_vertex(to) {
                    return Err(Error::dangling_edge(from, to));
                }
            }
        }
        Ok(())
    }
}

/// A weight is usable when it is finite and not below zero.
///
/// Infinity is rejected: it is the distance of an unreachable vertex.
pub fn is_valid_weight<W: Float>(weight: W) -> bool {
    weight.is_finite() && weight >= W::zero()
}
