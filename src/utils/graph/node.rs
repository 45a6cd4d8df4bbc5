//! Arena index for vertices.
//!
//! Every vertex of a [`Graph`](crate::Graph) lives in a dense arena and is
//! addressed by a [`NodeId`]. Successor lists store `NodeId`s rather than
//! references, so a vertex can point at itself or at any other vertex without
//! ownership cycles.

use std::fmt;

/// A strongly-typed index of a vertex inside its owning graph's arena.
///
/// Node IDs are handed out sequentially starting from 0, in the order vertices
/// are first referenced. That order is the graph's key order: strongly connected
/// component search uses it to pick roots and DOT rendering uses it to emit
/// edges.
///
/// A `NodeId` is only meaningful for the graph that produced it. Per-run
/// traversal state is stored in vectors indexed by [`NodeId::index`].
///
/// # Examples
///
/// ```rust
/// use depcycle::Graph;
///
/// let mut graph = Graph::new();
/// graph.add("app", ["core"]);
///
/// // "core" is created before "app"
/// let core = graph.node_id("core").unwrap();
/// let app = graph.node_id("app").unwrap();
/// assert!(core < app);
/// assert_eq!(core.index(), 0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Creates a new `NodeId` from a raw arena position.
    ///
    /// Intended for algorithm internals and tests; regular callers obtain IDs
    /// from [`Graph::node_id`](crate::Graph::node_id).
    #[must_use]
    #[inline]
    pub const fn new(index: usize) -> Self {
        NodeId(index)
    }

    /// Returns the raw arena position, suitable for indexing per-vertex tables.
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

impl From<usize> for NodeId {
    #[inline]
    fn from(index: usize) -> Self {
        NodeId(index)
    }
}

impl From<NodeId> for usize {
    #[inline]
    fn from(node: NodeId) -> Self {
        node.0
    }
}
