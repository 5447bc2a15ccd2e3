//! A named-template registry minting write-once graph instances.
//!
//! The registry maps template names to factory functions producing a fresh
//! empty graph of a registered variant. [`Registry::create`] wraps the new
//! instance in an [`Initializer`] that exposes only the write operations;
//! [`Initializer::into_graph`] consumes the initializer and returns the
//! built graph behind [`Frozen`], which exposes only reads. Reuse of a spent
//! initializer is therefore a compile error, not a runtime one.
//!
//! The registry itself is an ordinary value with a populate-then-share
//! lifecycle: registration needs `&mut self`, creation only `&self`, so a
//! populated registry can be handed out behind a shared reference without
//! further synchronization.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::{
    graph::{Graph, MutableGraph, MutableWeightedGraph, SimpleGraph, WeightedGraph},
    marker::{Directed, Undirected},
    Edge, RegistryError, WeightedEdge,
};
use crate::storage::{AdjList, Frozen};

/// A graph of one of the variants a registry can mint, dispatching the
/// capability traits to the underlying storage.
#[derive(Debug, Clone)]
pub enum AnyGraph<V, W = i64> {
    Directed(AdjList<V, W, Directed>),
    Undirected(AdjList<V, W, Undirected>),
}

impl<V, W> AnyGraph<V, W> {
    pub fn directed() -> Self {
        AnyGraph::Directed(AdjList::new())
    }

    pub fn undirected() -> Self {
        AnyGraph::Undirected(AdjList::new())
    }
}

macro_rules! dispatch {
    ($self:expr, $graph:pat => $body:expr) => {
        match $self {
            AnyGraph::Directed($graph) => $body,
            AnyGraph::Undirected($graph) => $body,
        }
    };
}

impl<V, W> Graph<V> for AnyGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn each_vertex<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        dispatch!(self, graph => graph.each_vertex(f))
    }

    fn each_edge<F>(&self, f: F)
    where
        F: FnMut(Edge<&V>) -> bool,
    {
        dispatch!(self, graph => graph.each_edge(f))
    }

    fn each_adjacent<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> bool,
    {
        dispatch!(self, graph => graph.each_adjacent(vertex, f))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        dispatch!(self, graph => graph.has_vertex(vertex))
    }

    fn order(&self) -> usize {
        dispatch!(self, graph => graph.order())
    }

    fn size(&self) -> usize {
        dispatch!(self, graph => graph.size())
    }

    fn out_degree(&self, vertex: &V) -> Option<usize> {
        dispatch!(self, graph => graph.out_degree(vertex))
    }

    fn in_degree(&self, vertex: &V) -> Option<usize> {
        dispatch!(self, graph => graph.in_degree(vertex))
    }
}

impl<V, W> SimpleGraph<V> for AnyGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn density(&self) -> f64 {
        dispatch!(self, graph => graph.density())
    }
}

impl<V, W> WeightedGraph<V, W> for AnyGraph<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy,
{
    fn each_weighted_edge<F>(&self, f: F)
    where
        F: FnMut(WeightedEdge<&V, W>) -> bool,
    {
        dispatch!(self, graph => graph.each_weighted_edge(f))
    }
}

type Factory<V, W> = Box<dyn Fn() -> AnyGraph<V, W> + Send + Sync>;

/// Explicit registry of named graph templates.
pub struct Registry<V, W = i64> {
    templates: FxHashMap<String, Factory<V, W>>,
}

impl<V, W> Registry<V, W> {
    pub fn new() -> Self {
        Self {
            templates: FxHashMap::default(),
        }
    }

    /// Registers a factory under `name`. Registering a name twice is
    /// rejected rather than silently overwriting the earlier template.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Result<(), RegistryError>
    where
        F: Fn() -> AnyGraph<V, W> + Send + Sync + 'static,
    {
        let name = name.into();

        if self.templates.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }

        self.templates.insert(name, Box::new(factory));
        Ok(())
    }

    /// Mints a fresh instance of the template registered under `name`,
    /// wrapped in a write-only [`Initializer`].
    pub fn create(&self, name: &str) -> Result<Initializer<V, W>, RegistryError> {
        let factory = self
            .templates
            .get(name)
            .ok_or_else(|| RegistryError::NotFound(name.to_owned()))?;

        Ok(Initializer { graph: factory() })
    }
}

impl<V, W> Default for Registry<V, W> {
    fn default() -> Self {
        Self::new()
    }
}

/// Write-only handle for populating a registry-minted graph.
#[derive(Debug)]
pub struct Initializer<V, W = i64> {
    graph: AnyGraph<V, W>,
}

impl<V, W> Initializer<V, W>
where
    V: Eq + Hash + Clone,
    W: Copy + Default,
{
    pub fn ensure_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        match &self.graph {
            AnyGraph::Directed(graph) => graph.ensure_vertices(vertices),
            AnyGraph::Undirected(graph) => graph.ensure_vertices(vertices),
        }
    }

    pub fn add_edges<I, T>(&mut self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<WeightedEdge<V, W>>,
    {
        match &self.graph {
            AnyGraph::Directed(graph) => graph.add_weighted_edges(edges),
            AnyGraph::Undirected(graph) => graph.add_weighted_edges(edges),
        }
    }

    /// Finishes the build and freezes the graph for read-only use. Consumes
    /// the initializer, so it cannot be used again.
    pub fn into_graph(self) -> Frozen<AnyGraph<V, W>> {
        Frozen::new(self.graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_template_is_an_error() {
        let registry = Registry::<&str>::new();

        let err = registry.create("missing").unwrap_err();
        assert_eq!(err, RegistryError::NotFound("missing".to_owned()));
    }

    #[test]
    fn duplicate_registration_is_an_error() {
        let mut registry = Registry::<&str>::new();

        registry.register("social", AnyGraph::undirected).unwrap();
        let err = registry
            .register("social", AnyGraph::undirected)
            .unwrap_err();

        assert_eq!(err, RegistryError::Duplicate("social".to_owned()));
    }

    #[test]
    fn build_freeze_read_lifecycle() {
        let mut registry = Registry::<&str>::new();
        registry.register("deps", AnyGraph::directed).unwrap();

        let mut initializer = registry.create("deps").unwrap();
        initializer.ensure_vertices(["orphan"]);
        initializer.add_edges([("app", "lib", 1), ("lib", "std", 1)]);

        let graph = initializer.into_graph();

        assert_eq!(graph.order(), 4);
        assert_eq!(graph.size(), 2);
        assert!(graph.has_vertex(&"orphan"));
        assert_eq!(graph.out_degree(&"app"), Some(1));
        assert_eq!(graph.in_degree(&"std"), Some(1));

        let mut weights = 0;
        graph.each_weighted_edge(|edge| {
            weights += edge.weight;
            false
        });
        assert_eq!(weights, 2);
    }

    #[test]
    fn minted_instances_are_structurally_independent() {
        let mut registry = Registry::<u32>::new();
        registry.register("ring", AnyGraph::undirected).unwrap();

        let mut first = registry.create("ring").unwrap();
        first.add_edges([(1, 2, 1)]);

        let second = registry.create("ring").unwrap();

        assert_eq!(first.into_graph().size(), 1);
        assert_eq!(second.into_graph().size(), 0);
    }

    #[test]
    fn frozen_graph_answers_simple_queries() {
        let mut registry = Registry::<&str>::new();
        registry.register("pair", AnyGraph::undirected).unwrap();

        let mut initializer = registry.create("pair").unwrap();
        initializer.add_edges([("a", "b", 1)]);
        let graph = initializer.into_graph();

        assert_eq!(graph.density(), 1.0);

        let mut vertices = Vec::new();
        graph.each_vertex(|vertex| {
            vertices.push(*vertex);
            false
        });
        vertices.sort_unstable();
        assert_eq!(vertices, vec!["a", "b"]);
    }
}
