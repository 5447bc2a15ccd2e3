pub mod facts;
pub mod graph;
pub mod marker;

mod edge;
mod error;

pub use edge::{Edge, WeightedEdge};
pub use error::RegistryError;
