use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::core::{Edge, WeightedEdge};

/// The adjacency mapping plus the running edge counter.
///
/// Completely lock-free: the owning storage acquires its reader/writer lock
/// once and composes these primitives under that single guard, so no
/// operation here ever re-enters a lock. The counter is mutated only
/// together with the structural change it accounts for, which keeps it equal
/// to the true edge cardinality at every guard boundary.
#[derive(Debug, Clone)]
pub(crate) struct RawAdjList<V, W> {
    list: FxHashMap<V, FxHashMap<V, W>>,
    size: usize,
}

impl<V, W> RawAdjList<V, W> {
    pub(crate) fn new() -> Self {
        Self {
            list: FxHashMap::default(),
            size: 0,
        }
    }

    pub(crate) fn with_capacity(order: usize) -> Self {
        Self {
            list: FxHashMap::with_capacity_and_hasher(order, Default::default()),
            size: 0,
        }
    }

    pub(crate) fn order(&self) -> usize {
        self.list.len()
    }

    pub(crate) fn size(&self) -> usize {
        self.size
    }

    pub(crate) fn vertices(&self) -> impl Iterator<Item = &V> {
        self.list.keys()
    }
}

impl<V, W> RawAdjList<V, W>
where
    V: Eq + Hash + Clone,
{
    pub(crate) fn has_vertex(&self, vertex: &V) -> bool {
        self.list.contains_key(vertex)
    }

    pub(crate) fn neighbors(&self, vertex: &V) -> Option<&FxHashMap<V, W>> {
        self.list.get(vertex)
    }

    /// Every stored arc as a (from, to, weight) triple. Undirected callers
    /// are responsible for reverse-pair suppression.
    pub(crate) fn arcs(&self) -> impl Iterator<Item = (&V, &V, W)>
    where
        W: Copy,
    {
        self.list.iter().flat_map(|(from, adjacent)| {
            adjacent
                .iter()
                .map(move |(to, weight)| (from, to, *weight))
        })
    }

    pub(crate) fn ensure_vertex(&mut self, vertex: &V) {
        if !self.list.contains_key(vertex) {
            self.list.insert(vertex.clone(), FxHashMap::default());
        }
    }

    /// Number of vertices whose successor set contains `vertex`. A full scan
    /// of the adjacency mapping; the directed in-degree trade-off.
    pub(crate) fn scan_in_degree(&self, vertex: &V) -> usize {
        self.list
            .values()
            .filter(|adjacent| adjacent.contains_key(vertex))
            .count()
    }

    /// Inserts the arc from→to unless it is already present. First write
    /// wins: an existing weight is kept. Missing endpoints are created.
    pub(crate) fn add_directed(&mut self, edge: WeightedEdge<V, W>) {
        self.ensure_vertex(&edge.from);
        self.ensure_vertex(&edge.to);

        if let Some(adjacent) = self.list.get_mut(&edge.from) {
            if !adjacent.contains_key(&edge.to) {
                adjacent.insert(edge.to, edge.weight);
                self.size += 1;
            }
        }
    }

    /// Inserts both direction slots of the logical edge unless it is already
    /// present, bumping the counter once. A self-loop occupies a single slot.
    pub(crate) fn add_undirected(&mut self, edge: WeightedEdge<V, W>)
    where
        W: Copy,
    {
        self.ensure_vertex(&edge.from);
        self.ensure_vertex(&edge.to);

        let present = self
            .list
            .get(&edge.from)
            .is_some_and(|adjacent| adjacent.contains_key(&edge.to));

        if present {
            return;
        }

        if let Some(adjacent) = self.list.get_mut(&edge.from) {
            adjacent.insert(edge.to.clone(), edge.weight);
        }
        if let Some(adjacent) = self.list.get_mut(&edge.to) {
            adjacent.insert(edge.from, edge.weight);
        }
        self.size += 1;
    }

    /// Removes the stored forward direction only. Endpoints are kept.
    pub(crate) fn remove_directed(&mut self, edge: &Edge<V>) {
        if let Some(adjacent) = self.list.get_mut(&edge.from) {
            if adjacent.remove(&edge.to).is_some() {
                self.size -= 1;
            }
        }
    }

    /// Removes both direction slots of the logical edge, decrementing the
    /// counter once. Endpoints are kept.
    pub(crate) fn remove_undirected(&mut self, edge: &Edge<V>) {
        let removed = self
            .list
            .get_mut(&edge.from)
            .is_some_and(|adjacent| adjacent.remove(&edge.to).is_some());

        if removed {
            if edge.from != edge.to {
                if let Some(adjacent) = self.list.get_mut(&edge.to) {
                    adjacent.remove(&edge.from);
                }
            }
            self.size -= 1;
        }
    }

    /// Removes the vertex as a source, then strips it as a target from every
    /// remaining successor set. O(V·d) per removed vertex.
    pub(crate) fn remove_vertex_directed(&mut self, vertex: &V) {
        if let Some(adjacent) = self.list.remove(vertex) {
            self.size -= adjacent.len();

            for successors in self.list.values_mut() {
                if successors.remove(vertex).is_some() {
                    self.size -= 1;
                }
            }
        }
    }

    /// Removes the vertex and walks its neighbor set to strip the mirror
    /// slots. Each neighbor holds the vertex exactly once by the symmetry
    /// invariant, so the counter drops by exactly the neighbor count.
    pub(crate) fn remove_vertex_undirected(&mut self, vertex: &V) {
        if let Some(adjacent) = self.list.remove(vertex) {
            self.size -= adjacent.len();

            for neighbor in adjacent.keys() {
                if neighbor != vertex {
                    if let Some(mirror) = self.list.get_mut(neighbor) {
                        mirror.remove(vertex);
                    }
                }
            }
        }
    }
}
