use crate::core::{
    graph::{Graph, SimpleGraph, WeightedGraph},
    Edge, WeightedEdge,
};

/// A graph wrapper that exposes only the read capabilities of the inner
/// graph. Produced by the registry's initializer to enforce the build-once,
/// then read-only lifecycle.
///
/// There is no `Deref` to the inner graph on purpose: mutation methods take
/// `&self`, so derefing would defeat the freeze.
#[derive(Debug, Clone)]
pub struct Frozen<G> {
    inner: G,
}

impl<G> Frozen<G> {
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Unwraps the inner graph, giving up the read-only guarantee. Consumes
    /// the wrapper, so the opt-out is explicit.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G> From<G> for Frozen<G> {
    fn from(inner: G) -> Self {
        Self::new(inner)
    }
}

impl<V, G: Graph<V>> Graph<V> for Frozen<G> {
    fn each_vertex<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.each_vertex(f)
    }

    fn each_edge<F>(&self, f: F)
    where
        F: FnMut(Edge<&V>) -> bool,
    {
        self.inner.each_edge(f)
    }

    fn each_adjacent<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        self.inner.each_adjacent(vertex, f)
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.inner.has_vertex(vertex)
    }

    fn order(&self) -> usize {
        self.inner.order()
    }

    fn size(&self) -> usize {
        self.inner.size()
    }

    fn out_degree(&self, vertex: &V) -> Option<usize> {
        self.inner.out_degree(vertex)
    }

    fn in_degree(&self, vertex: &V) -> Option<usize> {
        self.inner.in_degree(vertex)
    }
}

impl<V, G: SimpleGraph<V>> SimpleGraph<V> for Frozen<G> {
    fn density(&self) -> f64 {
        self.inner.density()
    }
}

impl<V, W, G: WeightedGraph<V, W>> WeightedGraph<V, W> for Frozen<G> {
    fn each_weighted_edge<F>(&self, f: F)
    where
        F: FnMut(WeightedEdge<&V, W>) -> bool,
    {
        self.inner.each_weighted_edge(f)
    }
}
