use std::collections::{HashMap, HashSet};
use std::fmt::Display;
use log::warn;
use serde::Serialize;

use crate::graph::Vertex;
use crate::{Error, Result};

/// Separator used by the textual form of a rendered path
pub const DEFAULT_SEPARATOR: &str = " -> ";

/// Mapping from each visited vertex to the vertex that discovered it.
///
/// The root maps to `None`. Maps produced by this crate always form a tree,
/// but maps assembled by callers through `FromIterator` or `From` may not, so
/// walks over them are checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ParentMap<V>
where
    V: Vertex,
{
    parents: HashMap<V, Option<V>>,
}

impl<V> ParentMap<V>
where
    V: Vertex,
{
    /// A map holding only `root`, which has no parent
    pub fn with_root(root: V) -> Self {
        let mut parents = HashMap::new();
        parents.insert(root, None);
        ParentMap { parents }
    }

    pub(crate) fn insert(&mut self, vertex: V, parent: Option<V>) {
        self.parents.insert(vertex, parent);
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.parents.contains_key(vertex)
    }

    /// Parent of `vertex`, `None` for a root.
    pub fn parent_of(&self, vertex: &V) -> Result<Option<&V>> {
        self.parents
            .get(vertex)
            .map(Option::as_ref)
            .ok_or_else(|| Error::unknown_vertex(vertex))
    }

    /// Number of links followed from `vertex` to its root
    pub fn depth(&self, vertex: &V) -> Result<usize> {
        PathRenderer::new()
            .full_path(self, vertex)
            .map(|path| path.len() - 1)
    }

    /// Root of the tree containing `vertex`
    pub fn root_of(&self, vertex: &V) -> Result<V> {
        let mut path = PathRenderer::new().full_path(self, vertex)?;
        // full_path always contains at least `vertex` itself
        Ok(path.swap_remove(0))
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&V>)> {
        self.parents.iter().map(|(v, p)| (v, p.as_ref()))
    }

    pub fn into_inner(self) -> HashMap<V, Option<V>> {
        self.parents
    }
}

impl<V> FromIterator<(V, Option<V>)> for ParentMap<V>
where
    V: Vertex,
{
    fn from_iter<I: IntoIterator<Item = (V, Option<V>)>>(iter: I) -> Self {
        ParentMap {
            parents: iter.into_iter().collect(),
        }
    }
}

impl<V> From<HashMap<V, Option<V>>> for ParentMap<V>
where
    V: Vertex,
{
    fn from(parents: HashMap<V, Option<V>>) -> Self {
        ParentMap { parents }
    }
}

/// Turns parent links into the sequence of vertices leading to a destination
#[derive(Debug, Clone)]
pub struct PathRenderer {
    /// Separator for `render_string`
    separator: String,
}

impl PathRenderer {
    /// Create a renderer using `DEFAULT_SEPARATOR`
    pub fn new() -> Self {
        PathRenderer {
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }

    /// Set the separator placed between vertices by `render_string`
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Root-to-destination walk, both ends included.
    pub fn full_path<V: Vertex>(&self, parents: &ParentMap<V>, destination: &V) -> Result<Vec<V>> {
        if !parents.contains(destination) {
            return Err(Error::unknown_vertex(destination));
        }

        let mut path = Vec::new();
        let mut visited = HashSet::new();
        let mut current = destination;

        loop {
            if !visited.insert(current) {
                warn!("Cycle in parent chain at {:?} while walking from {:?}", current, destination);
                return Err(Error::MalformedParentChain {
                    vertex: format!("{:?}", current),
                    reason: "parent links form a cycle",
                });
            }
            path.push(current.clone());

            match parents.parents.get(current) {
                Some(Some(parent)) => current = parent,
                Some(None) => break,
                None => {
                    warn!("Parent chain from {:?} leaves the map at {:?}", destination, current);
                    return Err(Error::MalformedParentChain {
                        vertex: format!("{:?}", current),
                        reason: "parent is missing from the map",
                    });
                }
            }
        }

        path.reverse();
        Ok(path)
    }

    /// Vertices from the root up to, but excluding, `destination`.
    ///
    /// Empty when `destination` is the root.
    pub fn render<V: Vertex>(&self, parents: &ParentMap<V>, destination: &V) -> Result<Vec<V>> {
        let mut path = self.full_path(parents, destination)?;
        path.pop();
        Ok(path)
    }

    /// `render` joined with the separator, e.g. `s -> b -> c`
    pub fn render_string<V>(&self, parents: &ParentMap<V>, destination: &V) -> Result<String>
    where
        V: Vertex + Display,
    {
        let path = self.render(parents, destination)?;
        Ok(path
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(&self.separator))
    }
}

impl Default for PathRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Path from the root of `parents` to `destination`, destination excluded
pub fn render_path<V: Vertex>(parents: &ParentMap<V>, destination: &V) -> Result<Vec<V>> {
    PathRenderer::new().render(parents, destination)
}

/// `render_path` joined with `" -> "`
pub fn render_path_string<V>(parents: &ParentMap<V>, destination: &V) -> Result<String>
where
    V: Vertex + Display,
{
    PathRenderer::new().render_string(parents, destination)
}
