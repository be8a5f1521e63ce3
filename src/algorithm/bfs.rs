use std::collections::VecDeque;
use log::debug;

use crate::algorithm::path::ParentMap;
use crate::graph::{Graph, Vertex};
use crate::{Error, Result};

/// Breadth-first parent tree from `source`, ignoring edge weights.
///
/// A vertex is recorded the first time it is enqueued, so its parent lies on a
/// path with the fewest edges from `source`. Vertices that cannot be reached
/// are absent from the map.
pub fn breadth_first_parents<V, G>(graph: &G, source: &V) -> Result<ParentMap<V>>
where
    V: Vertex,
    G: Graph<V> + ?Sized,
{
    if !graph.has_vertex(source) {
        return Err(Error::unknown_vertex(source));
    }

    let mut parents = ParentMap::with_root(source.clone());
    let mut queue = VecDeque::new();
    queue.push_back(source.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in graph.neighbors(&current) {
            if parents.contains(neighbor) {
                continue;
            }
            if !graph.has_vertex(neighbor) {
                return Err(Error::dangling_edge(&current, neighbor));
            }
            parents.insert(neighbor.clone(), Some(current.clone()));
            queue.push_back(neighbor.clone());
        }
    }

    debug!(
        "BFS from {:?}: reached {} of {} vertices",
        source,
        parents.len(),
        graph.vertex_count()
    );

    Ok(parents)
}
