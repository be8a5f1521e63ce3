pub mod traits;
pub mod shortest_shortest;
pub mod bfs;
pub mod path;

pub use traits::{DistanceRecord, RunStats, ShortestPathAlgorithm, ShortestShortestResult};
