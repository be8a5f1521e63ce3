use crate::graph::traits::{Graph, Vertex};
use crate::{Error, Result};
use std::collections::HashMap;

/// An unweighted directed graph: each vertex maps to a set of successors.
///
/// Successors keep their insertion order so traversals are reproducible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnweightedGraph<V>
where
    V: Vertex,
{
    successors: HashMap<V, Vec<V>>,
}

impl<V> UnweightedGraph<V>
where
    V: Vertex,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        UnweightedGraph {
            successors: HashMap::new(),
        }
    }

    /// Builds a graph from an adjacency description whose edge targets must all
    /// be keys of the description.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = V>,
    {
        let entries: Vec<(V, Vec<V>)> = adjacency
            .into_iter()
            .map(|(vertex, targets)| (vertex, targets.into_iter().collect()))
            .collect();

        let mut graph = UnweightedGraph::new();
        for (vertex, _) in &entries {
            graph.add_vertex(vertex.clone());
        }

        for (from, targets) in entries {
            for to in targets {
                if !graph.has_vertex(&to) {
                    return Err(Error::dangling_edge(&from, &to));
                }
                graph.add_edge(from.clone(), to);
            }
        }

        Ok(graph)
    }

    /// Adds a vertex without edges. Returns false if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.successors.contains_key(&vertex) {
            return false;
        }
        self.successors.insert(vertex, Vec::new());
        true
    }

    /// Adds an edge, registering both endpoints. Returns false if the edge
    /// already existed.
    pub fn add_edge(&mut self, from: V, to: V) -> bool {
        self.add_vertex(to.clone());
        let targets = self.successors.entry(from).or_insert_with(Vec::new);
        if targets.contains(&to) {
            return false;
        }
        targets.push(to);
        true
    }
}

impl<V> Default for UnweightedGraph<V>
where
    V: Vertex,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V> for UnweightedGraph<V>
where
    V: Vertex,
{
    fn vertex_count(&self) -> usize {
        self.successors.len()
    }

    fn edge_count(&self) -> usize {
        self.successors.values().map(|targets| targets.len()).sum()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.successors.contains_key(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.successors.keys())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.successors.get(vertex) {
            Some(targets) => Box::new(targets.iter()),
            None => Box::new(std::iter::empty()),
        }
    }
}
