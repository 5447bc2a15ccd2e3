//! Adjacency-list graph storage.
//!
//! [`AdjList`] is the single storage engine; the directed/undirected and
//! weighted/unweighted flavors are selected through its type parameters. The
//! aliases below name the four common combinations.
//!
//! | Operation      | Cost      |
//! |----------------|-----------|
//! | ensure vertex  | _O*(1)_   |
//! | add edge       | _O*(1)_   |
//! | out-degree     | _O(1)_    |
//! | in-degree      | _O(V·d)_ directed, _O(1)_ undirected |
//! | remove vertex  | _O(V·d)_ directed, _O(d)_ undirected |
//! | remove edge    | _O(1)_    |
//!
//! * _V_ – vertex count
//! * _d_ – average degree
//! * _O*(..)_ – amortized
//!
//! There is no reverse index: directed in-degree pays a full scan in exchange
//! for the simplicity and space footprint of a plain adjacency list.

pub mod adj_list;

mod frozen;
mod raw;

pub use adj_list::AdjList;
pub use frozen::Frozen;

use crate::core::marker::{Directed, Undirected};

/// Unweighted directed graph.
pub type DiGraph<V> = AdjList<V, (), Directed>;
/// Unweighted undirected graph.
pub type UnGraph<V> = AdjList<V, (), Undirected>;
/// Weighted directed graph.
pub type WeightedDiGraph<V, W = i64> = AdjList<V, W, Directed>;
/// Weighted undirected graph.
pub type WeightedUnGraph<V, W = i64> = AdjList<V, W, Undirected>;

#[cfg(test)]
pub(crate) mod tests {
    use crate::core::graph::{Graph, MutableGraph};

    pub fn test_new_edge_grows_order_and_size<G>()
    where
        G: MutableGraph<&'static str> + Default,
    {
        let graph = G::default();

        graph.add_edges([("u", "v")]);

        assert_eq!(graph.order(), 2);
        assert_eq!(graph.size(), 1);
        assert!(graph.has_vertex(&"u"));
        assert!(graph.has_vertex(&"v"));
    }

    pub fn test_ensure_idempotent<G>()
    where
        G: MutableGraph<&'static str> + Default,
    {
        let graph = G::default();

        graph.ensure_vertices(["v"]);
        assert_eq!(graph.order(), 1);

        graph.ensure_vertices(["v"]);
        assert_eq!(graph.order(), 1);
        assert_eq!(graph.size(), 0);
    }

    pub fn test_absent_vertex_queries<G>()
    where
        G: MutableGraph<&'static str> + Default,
    {
        let graph = G::default();
        graph.ensure_vertices(["present"]);

        assert!(!graph.has_vertex(&"missing"));
        assert_eq!(graph.out_degree(&"missing"), None);
        assert_eq!(graph.in_degree(&"missing"), None);

        let mut calls = 0;
        graph.each_adjacent(&"missing", |_| {
            calls += 1;
            false
        });
        assert_eq!(calls, 0);

        graph.remove_vertices(["missing"]);
        assert_eq!(graph.order(), 1);
    }

    pub fn test_early_termination<G>()
    where
        G: MutableGraph<&'static str> + Default,
    {
        let graph = G::default();
        graph.add_edges([("a", "b"), ("b", "c"), ("c", "a")]);

        let mut calls = 0;
        graph.each_vertex(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);

        let mut calls = 0;
        graph.each_edge(|_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);

        let mut calls = 0;
        graph.each_adjacent(&"a", |_| {
            calls += 1;
            true
        });
        assert_eq!(calls, 1);
    }
}
