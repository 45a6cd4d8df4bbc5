//! Trait definitions for graph abstractions.
//!
//! The algorithms in [`algorithms`](crate::utils::graph::algorithms) are written
//! against these traits rather than against [`Graph`](crate::Graph) directly, so
//! they only see node indices and adjacency, never vertex names.
//!
//! - [`GraphBase`] - Node count and node iteration in key order
//! - [`Successors`] - Forward edge traversal (outgoing edges)

use crate::utils::graph::NodeId;

/// Base trait providing core graph properties.
pub trait GraphBase {
    /// Returns the number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Returns an iterator over all node identifiers in the graph.
    ///
    /// The iteration order is the graph's key order (ascending `NodeId`). Root
    /// selection in strongly connected component search follows this order.
    fn node_ids(&self) -> impl Iterator<Item = NodeId>;
}

/// Trait for graphs that support forward edge traversal.
pub trait Successors: GraphBase {
    /// Returns an iterator over the successor nodes of the given node.
    ///
    /// Successors are yielded in edge insertion order, including duplicates and
    /// self-edges.
    ///
    /// # Panics
    ///
    /// May panic if `node` is not a valid node in the graph.
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId>;
}
