pub mod core;
pub mod registry;
pub mod storage;

pub mod prelude {
    #[doc(hidden)]
    pub use crate::core::graph::{
        Graph, MutableGraph, MutableWeightedGraph, SimpleGraph, WeightedGraph,
    };
}
