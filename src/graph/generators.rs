use crate::graph::{DirectedGraph, UnweightedGraph};
use ordered_float::OrderedFloat;
use rand::prelude::*;
use std::ops::RangeInclusive;

/// Weighted graph type produced by the generators
pub type SampleGraph<V> = DirectedGraph<V, OrderedFloat<f64>>;

/// The small unweighted graph `s→{a,b}, a→{b}, b→{c}, c→{a,d}, d→{}`.
///
/// A breadth-first search from `s` gives the parents
/// `{s: none, a: s, b: s, c: b, d: c}`.
pub fn sample_graph() -> UnweightedGraph<&'static str> {
    let mut graph = UnweightedGraph::new();
    for vertex in ["s", "a", "b", "c", "d"] {
        graph.add_vertex(vertex);
    }
    graph.add_edge("s", "a");
    graph.add_edge("s", "b");
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "a");
    graph.add_edge("c", "d");
    graph
}

/// A weighted graph where several vertices have equal-weight routes of
/// different lengths.
///
/// Expected records from `s`:
/// `s: (0, 0), a: (1, 1), b: (3, 2), c: (4, 1), d: (7, 2), e: (8, 3)`.
pub fn sample_weighted_graph() -> SampleGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    for vertex in ["s", "a", "b", "c", "d", "e"] {
        graph.add_vertex(vertex);
    }
    graph.insert_edge("s", "a", OrderedFloat(1.0));
    graph.insert_edge("s", "c", OrderedFloat(4.0));
    graph.insert_edge("a", "b", OrderedFloat(2.0));
    graph.insert_edge("b", "c", OrderedFloat(1.0));
    graph.insert_edge("b", "d", OrderedFloat(4.0));
    graph.insert_edge("c", "d", OrderedFloat(3.0));
    graph.insert_edge("d", "e", OrderedFloat(1.0));
    graph
}

/// A graph where `c` is first reached over three zero-heavy edges and later
/// over a two-edge route of the same weight.
///
/// Expected records from `s`:
/// `s: (0, 0), a: (0, 1), b: (0, 2), x: (1, 1), c: (2, 2), d: (3, 3)`.
pub fn tie_break_graph() -> SampleGraph<&'static str> {
    let mut graph = DirectedGraph::new();
    graph.add_vertex("s");
    graph.insert_edge("s", "a", OrderedFloat(0.0));
    graph.insert_edge("a", "b", OrderedFloat(0.0));
    graph.insert_edge("b", "c", OrderedFloat(2.0));
    graph.insert_edge("s", "x", OrderedFloat(1.0));
    graph.insert_edge("x", "c", OrderedFloat(1.0));
    graph.insert_edge("c", "d", OrderedFloat(1.0));
    graph
}

/// Generates a seeded random directed graph on vertices `0..n`.
///
/// Roughly `edge_factor * n` edges are drawn uniformly, with integer-valued
/// weights taken from `weights`. Small weight ranges produce many equal-weight
/// alternatives. Self-loops and parallel edges may occur.
///
/// # Panics
///
/// Panics if `weights` is empty, e.g. `5..=3`.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    weights: RangeInclusive<u32>,
    seed: u64,
) -> SampleGraph<usize> {
    assert!(!weights.is_empty(), "weight range {:?} is empty", weights);

    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n == 0 {
        return graph;
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(f64::from(rng.gen_range(weights.clone())));
        graph.insert_edge(u, v, weight);
    }

    graph
}

/// Generates an 8-connected `width` x `height` grid keyed by `(x, y)`.
///
/// Cardinal moves cost 1 and diagonal moves cost 2, so a diagonal ties in
/// weight with two cardinal moves while using one edge fewer.
pub fn grid_graph(width: usize, height: usize) -> SampleGraph<(usize, usize)> {
    let mut graph = DirectedGraph::with_capacity(width * height);

    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 2.0), (1, 1, 2.0), (-1, 1, 2.0), (-1, -1, 2.0),
    ];

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y));

            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    graph.insert_edge((x, y), (nx as usize, ny as usize), OrderedFloat(cost));
                }
            }
        }
    }

    graph
}
