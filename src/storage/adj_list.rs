use std::{hash::Hash, marker::PhantomData};

use parking_lot::RwLock;
use rustc_hash::FxHashSet;

use crate::core::{
    facts,
    graph::{Graph, MutableGraph, MutableWeightedGraph, SimpleGraph, WeightedGraph},
    marker::EdgeKind,
    Edge, WeightedEdge,
};

use super::raw::RawAdjList;

/// Adjacency-list graph storage guarded by a per-instance reader/writer lock.
///
/// `V` is the caller-supplied vertex identity (anything `Eq + Hash + Clone`),
/// `W` the edge weight (`()` for unweighted flavors) and `K` the
/// [`Directed`](crate::core::marker::Directed)/
/// [`Undirected`](crate::core::marker::Undirected) marker selecting edge
/// semantics. Undirected storage is kept doubly-linked: whenever v is a
/// neighbor of u with weight w, u is a neighbor of v with the same weight.
///
/// All operations take `&self`; reads share the lock, mutations hold it
/// exclusively. See the [`Graph`] trait for the enumeration contract and its
/// re-entrancy restriction.
#[derive(Debug)]
pub struct AdjList<V, W, K> {
    raw: RwLock<RawAdjList<V, W>>,
    kind: PhantomData<fn() -> K>,
}

impl<V, W, K> AdjList<V, W, K> {
    pub fn new() -> Self {
        Self {
            raw: RwLock::new(RawAdjList::new()),
            kind: PhantomData,
        }
    }

    pub fn with_capacity(order: usize) -> Self {
        Self {
            raw: RwLock::new(RawAdjList::with_capacity(order)),
            kind: PhantomData,
        }
    }
}

impl<V, W, K> AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy,
    K: EdgeKind,
{
    /// Builds a graph from an edge collection in one pass.
    pub fn from_edges<I, T>(edges: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<WeightedEdge<V, W>>,
    {
        let mut raw = RawAdjList::new();

        for edge in edges {
            if K::is_directed() {
                raw.add_directed(edge.into());
            } else {
                raw.add_undirected(edge.into());
            }
        }

        Self {
            raw: RwLock::new(raw),
            kind: PhantomData,
        }
    }
}

impl<V, W, K> Default for AdjList<V, W, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W, K> Clone for AdjList<V, W, K>
where
    V: Clone,
    W: Clone,
{
    fn clone(&self) -> Self {
        Self {
            raw: RwLock::new(self.raw.read().clone()),
            kind: PhantomData,
        }
    }
}

impl<V, W, K> Graph<V> for AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy,
    K: EdgeKind,
{
    fn each_vertex<F>(&self, mut f: F)
    where
        F: FnMut(&V) -> bool,
    {
        let raw = self.raw.read();

        for vertex in raw.vertices() {
            if f(vertex) {
                return;
            }
        }
    }

    fn each_edge<F>(&self, mut f: F)
    where
        F: FnMut(Edge<&V>) -> bool,
    {
        let raw = self.raw.read();

        if K::is_directed() {
            // Directed storage is not symmetric, so every stored arc is a
            // distinct edge.
            for (from, to, _) in raw.arcs() {
                if f(Edge::new(from, to)) {
                    return;
                }
            }
        } else {
            // Both direction slots of a logical edge are stored; report it
            // only if its reverse has not been reported yet.
            let mut visited = FxHashSet::default();

            for (from, to, _) in raw.arcs() {
                let edge = Edge::new(from, to);

                if visited.contains(&edge.reversed()) {
                    continue;
                }
                visited.insert(edge);

                if f(edge) {
                    return;
                }
            }
        }
    }

    fn each_adjacent<F>(&self, vertex: &V, mut f: F)
    where
        F: FnMut(&V) -> bool,
    {
        let raw = self.raw.read();

        if let Some(adjacent) = raw.neighbors(vertex) {
            for neighbor in adjacent.keys() {
                if f(neighbor) {
                    return;
                }
            }
        }
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.raw.read().has_vertex(vertex)
    }

    fn order(&self) -> usize {
        self.raw.read().order()
    }

    fn size(&self) -> usize {
        self.raw.read().size()
    }

    fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.raw.read().neighbors(vertex).map(|adjacent| adjacent.len())
    }

    fn in_degree(&self, vertex: &V) -> Option<usize> {
        let raw = self.raw.read();

        if K::is_directed() {
            if !raw.has_vertex(vertex) {
                return None;
            }

            // Full scan under the already-held guard; no lock re-entry.
            Some(raw.scan_in_degree(vertex))
        } else {
            // Symmetry makes the in/out distinction meaningless.
            raw.neighbors(vertex).map(|adjacent| adjacent.len())
        }
    }
}

impl<V, W, K> SimpleGraph<V> for AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy,
    K: EdgeKind,
{
    fn density(&self) -> f64 {
        let raw = self.raw.read();
        let max = facts::complete_graph_edge_count::<K>(raw.order());

        if max == 0 {
            return 0.0;
        }

        raw.size() as f64 / max as f64
    }
}

impl<V, W, K> MutableGraph<V> for AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy + Default,
    K: EdgeKind,
{
    fn ensure_vertices<I>(&self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        let mut raw = self.raw.write();

        for vertex in vertices {
            raw.ensure_vertex(&vertex);
        }
    }

    fn remove_vertices<I>(&self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        let mut raw = self.raw.write();

        for vertex in vertices {
            if K::is_directed() {
                raw.remove_vertex_directed(&vertex);
            } else {
                raw.remove_vertex_undirected(&vertex);
            }
        }
    }

    fn add_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<V>>,
    {
        let mut raw = self.raw.write();

        for edge in edges {
            let Edge { from, to } = edge.into();
            let edge = WeightedEdge::new(from, to, W::default());

            if K::is_directed() {
                raw.add_directed(edge);
            } else {
                raw.add_undirected(edge);
            }
        }
    }

    fn remove_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<V>>,
    {
        let mut raw = self.raw.write();

        for edge in edges {
            let edge = edge.into();

            if K::is_directed() {
                raw.remove_directed(&edge);
            } else {
                raw.remove_undirected(&edge);
            }
        }
    }
}

impl<V, W, K> WeightedGraph<V, W> for AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy,
    K: EdgeKind,
{
    fn each_weighted_edge<F>(&self, mut f: F)
    where
        F: FnMut(WeightedEdge<&V, W>) -> bool,
    {
        let raw = self.raw.read();

        if K::is_directed() {
            for (from, to, weight) in raw.arcs() {
                if f(WeightedEdge::new(from, to, weight)) {
                    return;
                }
            }
        } else {
            let mut visited = FxHashSet::default();

            for (from, to, weight) in raw.arcs() {
                let edge = Edge::new(from, to);

                if visited.contains(&edge.reversed()) {
                    continue;
                }
                visited.insert(edge);

                if f(WeightedEdge::new(from, to, weight)) {
                    return;
                }
            }
        }
    }
}

impl<V, W, K> MutableWeightedGraph<V, W> for AdjList<V, W, K>
where
    V: Eq + Hash + Clone,
    W: Copy + Default,
    K: EdgeKind,
{
    fn add_weighted_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<WeightedEdge<V, W>>,
    {
        let mut raw = self.raw.write();

        for edge in edges {
            if K::is_directed() {
                raw.add_directed(edge.into());
            } else {
                raw.add_undirected(edge.into());
            }
        }
    }
}
