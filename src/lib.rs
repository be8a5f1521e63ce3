//! Shortest-Shortest Paths - minimum weight, then fewest edges
//!
//! This library computes, for a weighted directed graph and a source vertex, the
//! minimum total edge weight to every vertex together with the smallest number of
//! edges among the paths achieving that weight. It also provides a breadth-first
//! parent tree over the unweighted view of a graph and a renderer that turns a
//! parent map into the sequence of vertices leading to a destination.
//!
//! Edge weights must be finite and non-negative; negative, infinite or NaN
//! weights are rejected. A vertex reachable only along paths whose total weight
//! does not fit in a finite value makes the computation fail with
//! `Error::DistanceOverflow`.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    bfs::breadth_first_parents,
    path::{render_path, render_path_string, ParentMap, PathRenderer},
    shortest_shortest::{compute_shortest_shortest_paths, ShortestShortestPaths},
    DistanceRecord, RunStats, ShortestPathAlgorithm, ShortestShortestResult,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, UnweightedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("Invalid weight {weight} on edge from {from} to {to}")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Edge from {from} to {to} points at a vertex missing from the graph")]
    DanglingEdge { from: String, to: String },

    #[error("Path weight overflows along the edge from {from} to {to}")]
    DistanceOverflow { from: String, to: String },

    #[error("Malformed parent chain at vertex {vertex}: {reason}")]
    MalformedParentChain { vertex: String, reason: &'static str },
}

impl Error {
    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: &V) -> Self {
        Error::UnknownVertex(format!("{:?}", vertex))
    }

    pub(crate) fn invalid_weight<V, W>(from: &V, to: &V, weight: W) -> Self
    where
        V: std::fmt::Debug,
        W: std::fmt::Debug,
    {
        Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        }
    }

    pub(crate) fn distance_overflow<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::DistanceOverflow {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub(crate) fn dangling_edge<V: std::fmt::Debug>(from: &V, to: &V) -> Self {
        Error::DanglingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
