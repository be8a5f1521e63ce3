use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A pending candidate: ordered by `(distance, edges)`, then by insertion order.
#[derive(Debug)]
struct FrontierEntry<V, W> {
    distance: W,
    edges: usize,
    seq: u64,
    vertex: V,
}

impl<V, W: Ord> FrontierEntry<V, W> {
    fn key(&self) -> (&W, usize, u64) {
        (&self.distance, self.edges, self.seq)
    }
}

impl<V, W: Ord> PartialEq for FrontierEntry<V, W> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<V, W: Ord> Eq for FrontierEntry<V, W> {}

impl<V, W: Ord> PartialOrd for FrontierEntry<V, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, W: Ord> Ord for FrontierEntry<V, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// A min-priority frontier of `(distance, edges, vertex)` candidates built on
/// `BinaryHeap`.
///
/// Entries pop in ascending `(distance, edges)` order. Equal keys pop in the
/// order they were pushed; the vertex itself never takes part in the ordering.
/// The same vertex may be pushed several times.
#[derive(Debug)]
pub struct Frontier<V, W>
where
    V: Debug,
    W: Copy + Debug + Ord,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<FrontierEntry<V, W>>>,
    /// Insertion counter
    next_seq: u64,
}

impl<V, W> Frontier<V, W>
where
    V: Debug,
    W: Copy + Debug + Ord,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of pending entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a candidate
    pub fn push(&mut self, vertex: V, distance: W, edges: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(FrontierEntry {
            distance,
            edges,
            seq,
            vertex,
        }));
    }

    /// Removes the candidate with the smallest `(distance, edges)`
    pub fn pop(&mut self) -> Option<(V, W, usize)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.vertex, entry.distance, entry.edges))
    }

    /// Returns the key of the next candidate without removing it
    pub fn peek_key(&self) -> Option<(W, usize)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (entry.distance, entry.edges))
    }
}

impl<V, W> Default for Frontier<V, W>
where
    V: Debug,
    W: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn pops_by_distance_then_edges() {
        let mut frontier = Frontier::new();
        frontier.push("far", OrderedFloat(3.0), 1);
        frontier.push("long", OrderedFloat(2.0), 4);
        frontier.push("short", OrderedFloat(2.0), 1);
        frontier.push("near", OrderedFloat(0.5), 9);

        assert_eq!(frontier.len(), 4);
        assert_eq!(frontier.peek_key(), Some((OrderedFloat(0.5), 9)));

        let order: Vec<&str> = std::iter::from_fn(|| frontier.pop().map(|(v, _, _)| v)).collect();
        assert_eq!(order, vec!["near", "short", "long", "far"]);
        assert!(frontier.is_empty());
    }

    #[test]
    fn equal_keys_pop_in_push_order() {
        let mut frontier = Frontier::new();
        for vertex in ["z", "y", "x"] {
            frontier.push(vertex, OrderedFloat(1.0), 2);
        }

        assert_eq!(frontier.pop(), Some(("z", OrderedFloat(1.0), 2)));
        assert_eq!(frontier.pop(), Some(("y", OrderedFloat(1.0), 2)));
        assert_eq!(frontier.pop(), Some(("x", OrderedFloat(1.0), 2)));
        assert_eq!(frontier.pop(), None);
        assert_eq!(frontier.peek_key(), None);
    }

    #[test]
    fn same_vertex_can_be_pushed_twice() {
        let mut frontier = Frontier::new();
        frontier.push(7usize, OrderedFloat(4.0), 3);
        frontier.push(7usize, OrderedFloat(4.0), 2);

        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.pop(), Some((7, OrderedFloat(4.0), 2)));
        assert_eq!(frontier.pop(), Some((7, OrderedFloat(4.0), 3)));
    }
}
