/// An ordered pair of vertices, written (from, to).
///
/// Directed storages interpret the pair as an arc from `from` to `to`.
/// Undirected storages treat an edge and its [reverse](Edge::reversed) as the
/// same logical edge; that equivalence is derived where needed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge<V> {
    pub from: V,
    pub to: V,
}

impl<V> Edge<V> {
    pub fn new(from: V, to: V) -> Self {
        Self { from, to }
    }

    pub fn source(&self) -> &V {
        &self.from
    }

    pub fn target(&self) -> &V {
        &self.to
    }

    pub fn both(self) -> (V, V) {
        (self.from, self.to)
    }

    #[must_use]
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    pub fn as_ref(&self) -> Edge<&V> {
        Edge {
            from: &self.from,
            to: &self.to,
        }
    }
}

impl<V> From<(V, V)> for Edge<V> {
    fn from((from, to): (V, V)) -> Self {
        Self { from, to }
    }
}

/// An [`Edge`] carrying a weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeightedEdge<V, W = i64> {
    pub from: V,
    pub to: V,
    pub weight: W,
}

impl<V, W> WeightedEdge<V, W> {
    pub fn new(from: V, to: V, weight: W) -> Self {
        Self { from, to, weight }
    }

    pub fn source(&self) -> &V {
        &self.from
    }

    pub fn target(&self) -> &V {
        &self.to
    }

    pub fn both(self) -> (V, V) {
        (self.from, self.to)
    }

    pub fn edge(&self) -> Edge<&V> {
        Edge {
            from: &self.from,
            to: &self.to,
        }
    }

    pub fn into_edge(self) -> Edge<V> {
        Edge {
            from: self.from,
            to: self.to,
        }
    }
}

impl<V, W> From<(V, V, W)> for WeightedEdge<V, W> {
    fn from((from, to, weight): (V, V, W)) -> Self {
        Self { from, to, weight }
    }
}

impl<V, W: Default> From<(V, V)> for WeightedEdge<V, W> {
    fn from((from, to): (V, V)) -> Self {
        Self {
            from,
            to,
            weight: W::default(),
        }
    }
}

impl<V, W: Default> From<Edge<V>> for WeightedEdge<V, W> {
    fn from(edge: Edge<V>) -> Self {
        Self {
            from: edge.from,
            to: edge.to,
            weight: W::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = Edge::new("u", "v");
        assert_eq!(edge.reversed(), Edge::new("v", "u"));
        assert_eq!(edge.reversed().reversed(), edge);
    }

    #[test]
    fn both_returns_endpoints_in_order() {
        assert_eq!(Edge::new(1, 2).both(), (1, 2));
        assert_eq!(WeightedEdge::new(1, 2, 3).both(), (1, 2));
    }

    #[test]
    fn tuple_conversions() {
        let edge: Edge<_> = ("u", "v").into();
        assert_eq!(edge, Edge::new("u", "v"));

        let weighted: WeightedEdge<_, i64> = ("u", "v", 7).into();
        assert_eq!(weighted, WeightedEdge::new("u", "v", 7));

        let defaulted: WeightedEdge<_, i64> = ("u", "v").into();
        assert_eq!(defaulted.weight, 0);
    }

    #[test]
    fn as_ref_preserves_identity() {
        let edge = Edge::new(String::from("u"), String::from("v"));
        let by_ref = edge.as_ref();
        assert_eq!(*by_ref.source(), edge.source());
    }
}
