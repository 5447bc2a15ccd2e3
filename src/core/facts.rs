//! Small helpers for graph-theoretic quantities.

use super::marker::EdgeKind;

/// Returns the number of edges in a complete simple graph on `order`
/// vertices, respecting directionality. Density calculations use this as
/// their denominator.
///
/// # Examples
///
/// ```
/// use arclist::core::{facts::complete_graph_edge_count, marker::{Directed, Undirected}};
///
/// assert_eq!(complete_graph_edge_count::<Undirected>(5), 10);
/// assert_eq!(complete_graph_edge_count::<Directed>(5), 20);
/// ```
pub fn complete_graph_edge_count<K: EdgeKind>(order: usize) -> usize {
    let ordered_pairs = order * order.saturating_sub(1);

    if K::is_directed() {
        ordered_pairs
    } else {
        ordered_pairs / 2
    }
}
