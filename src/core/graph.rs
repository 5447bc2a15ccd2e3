use super::edge::{Edge, WeightedEdge};

/// Read-only capability surface shared by all graph representations.
///
/// # Enumeration protocol
///
/// Every `each_*` method invokes the callback once per matching element, in
/// unspecified order, with duplicate suppression as defined by the concrete
/// representation (an undirected edge is reported exactly once even though it
/// is stored in both directions). The callback returns a `bool`: returning
/// `true` terminates the enumeration immediately and no further invocations
/// occur. This is the sole cancellation mechanism.
///
/// Enumeration holds the instance's read lock for its entire duration.
/// Mutating the same graph from inside the callback deadlocks against the
/// write lock and is forbidden.
///
/// # Absence
///
/// Querying a vertex that is not present is not an error: degree queries
/// return `None` and [`each_adjacent`](Graph::each_adjacent) is a no-op.
pub trait Graph<V> {
    /// Invokes `f` once per vertex.
    fn each_vertex<F>(&self, f: F)
    where
        F: FnMut(&V) -> bool;

    /// Invokes `f` once per edge. Undirected representations report each
    /// logical edge exactly once regardless of storage direction.
    fn each_edge<F>(&self, f: F)
    where
        F: FnMut(Edge<&V>) -> bool;

    /// Invokes `f` once per vertex adjacent to `vertex`. No-op if `vertex`
    /// is absent.
    fn each_adjacent<F>(&self, vertex: &V, f: F)
    where
        F: FnMut(&V) -> bool;

    fn has_vertex(&self, vertex: &V) -> bool;

    /// Number of vertices.
    fn order(&self) -> usize;

    /// Number of edges, counting each undirected edge once.
    fn size(&self) -> usize;

    /// Number of successors of `vertex`, or `None` if absent. O(1).
    fn out_degree(&self, vertex: &V) -> Option<usize>;

    /// Number of predecessors of `vertex`, or `None` if absent.
    ///
    /// Directed adjacency lists maintain no reverse index, so this is a full
    /// scan of the edge set. Undirected representations answer in O(1),
    /// where in-degree equals out-degree.
    fn in_degree(&self, vertex: &V) -> Option<usize>;
}

/// A simple graph: no parallel edges. Adds density on top of [`Graph`].
pub trait SimpleGraph<V>: Graph<V> {
    /// Ratio of the edge count to the maximum possible edge count for the
    /// graph's kind and order. Zero for graphs with fewer than two vertices.
    fn density(&self) -> f64;
}

/// Vertex and edge mutation. Methods take `&self`: every representation
/// guards its storage with an interior reader/writer lock, so instances can
/// be shared across threads directly.
///
/// Each batch method is atomic as a single write-lock hold; two separate
/// calls are never atomic with respect to each other.
pub trait MutableGraph<V>: Graph<V> {
    /// Inserts each vertex not already present, with an empty neighbor set.
    /// Present vertices are untouched.
    fn ensure_vertices<I>(&self, vertices: I)
    where
        I: IntoIterator<Item = V>;

    /// Removes each present vertex together with all edges incident to it.
    /// Absent vertices are a no-op.
    fn remove_vertices<I>(&self, vertices: I)
    where
        I: IntoIterator<Item = V>;

    /// Inserts edges carrying the default weight, creating missing endpoints.
    /// Re-adding an existing edge is a no-op.
    fn add_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<V>>;

    /// Removes edges. Endpoint vertices are kept.
    fn remove_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<Edge<V>>;
}

/// Weight-aware read capability.
pub trait WeightedGraph<V, W>: Graph<V> {
    /// Invokes `f` once per edge together with its weight, with the same
    /// contract as [`each_edge`](Graph::each_edge).
    fn each_weighted_edge<F>(&self, f: F)
    where
        F: FnMut(WeightedEdge<&V, W>) -> bool;
}

/// Weight-aware mutation.
pub trait MutableWeightedGraph<V, W>: WeightedGraph<V, W> + MutableGraph<V> {
    /// Inserts edges with explicit weights, creating missing endpoints.
    ///
    /// First write wins: re-adding an existing edge leaves the stored weight
    /// untouched and does not change the edge count.
    fn add_weighted_edges<I, T>(&self, edges: I)
    where
        I: IntoIterator<Item = T>,
        T: Into<WeightedEdge<V, W>>;
}

/// Directed-only queries built on top of the read capability.
///
/// The storage core deliberately provides no implementation; algorithm
/// collaborators implement this for their own wrappers on top of [`Graph`].
pub trait DirectedGraph<V>: Graph<V> {
    fn transpose(&self) -> Self
    where
        Self: Sized;

    fn is_acyclic(&self) -> bool;
}
