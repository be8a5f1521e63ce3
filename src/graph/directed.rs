use crate::graph::traits::{is_valid_weight, Graph, Vertex, WeightedGraph};
use crate::{Error, Result};
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// A weighted directed graph implementation using adjacency lists
///
/// Every endpoint of every edge is a key of the adjacency map, so algorithms can
/// look up any vertex they reach. Parallel edges are kept as independent
/// candidates.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Outgoing edges for each vertex: vertex -> [(target_vertex, weight)]
    outgoing_edges: HashMap<V, Vec<(V, W)>>,
}

impl<V, W> DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new empty directed graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(vertices),
        }
    }

    /// Builds a graph from an adjacency description.
    ///
    /// Every edge target must itself appear as a key, and every weight must be
    /// finite and non-negative.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let entries: Vec<(V, Vec<(V, W)>)> = adjacency
            .into_iter()
            .map(|(vertex, edges)| (vertex, edges.into_iter().collect()))
            .collect();

        let mut graph = DirectedGraph::with_capacity(entries.len());
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }

        for (from, edges) in entries {
            for (to, weight) in edges {
                if !graph.has_vertex(&to) {
                    return Err(Error::dangling_edge(&from, &to));
                }
                graph.add_edge(from.clone(), to, weight)?;
            }
        }

        Ok(graph)
    }

    /// Adds a vertex without edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.outgoing_edges.contains_key(&vertex) {
            return false;
        }
        self.outgoing_edges.insert(vertex, Vec::new());
        true
    }

    /// Adds a directed edge, registering both endpoints as vertices.
    ///
    /// An existing edge between the same endpoints is kept; the new one is an
    /// additional candidate.
    pub fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        if !is_valid_weight(weight) {
            return Err(Error::invalid_weight(&from, &to, weight));
        }

        self.insert_edge(from, to, weight);
        Ok(())
    }

    /// Edge insertion for callers that already know the weight is valid.
    pub(crate) fn insert_edge(&mut self, from: V, to: V, weight: W) {
        self.add_vertex(to.clone());
        self.outgoing_edges
            .entry(from)
            .or_insert_with(Vec::new)
            .push((to, weight));
    }

    /// Removes every edge from `from` to `to`. Returns true if any was removed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }

    /// Returns true if there's at least one edge between the two vertices
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.outgoing_edges
            .get(from)
            .map_or(false, |edges| edges.iter().any(|(target, _)| target == to))
    }

    /// Gets the lightest weight among the edges from `from` to `to`
    pub fn min_edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.outgoing_edges.get(from).and_then(|edges| {
            edges
                .iter()
                .filter(|(target, _)| target == to)
                .map(|(_, weight)| *weight)
                .fold(None, |best: Option<W>, weight| match best {
                    Some(current) if current <= weight => Some(current),
                    _ => Some(weight),
                })
        })
    }
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> Graph<V> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.outgoing_edges.contains_key(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.outgoing_edges.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, _)| target))
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<V, W> WeightedGraph<V, W> for DirectedGraph<V, W>
where
    V: Vertex,
    W: Float + Zero + Debug + Copy,
{
    fn outgoing_edges(&self, vertex: &V) -> Box<dyn Iterator<Item = (&V, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(vertex) {
            Box::new(edges.iter().map(|(target, weight)| (target, *weight)))
        } else {
            Box::new(std::iter::empty())
        }
    }
}
