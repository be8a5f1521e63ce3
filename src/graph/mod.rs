pub mod traits;
pub mod directed;
pub mod unweighted;
pub mod generators;

pub use traits::{Graph, Vertex, WeightedGraph};
pub use directed::DirectedGraph;
pub use unweighted::UnweightedGraph;
