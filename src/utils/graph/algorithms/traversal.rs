//! Depth-first traversal.
//!
//! The traversal here is the one dependency enumeration relies on: an explicit
//! stack, pre-order, where a node is marked visited when it is *popped* rather
//! than when it is pushed. Successors are pushed in successor-list order, so
//! among siblings the last-inserted edge is explored first. Callers depend on
//! this order for reproducible descendant listings; do not "fix" it by
//! reversing the push order.

use crate::utils::graph::{NodeId, Successors};

/// Depth-first search iterator over graph nodes.
///
/// Yields each node reachable from the start exactly once, in pre-order. The
/// visited table is allocated fresh when the iterator is created, so no state
/// carries over between traversals.
pub struct DfsIterator<'g, G: Successors> {
    graph: &'g G,
    stack: Vec<NodeId>,
    visited: Vec<bool>,
}

impl<'g, G: Successors> DfsIterator<'g, G> {
    fn new(graph: &'g G, start: NodeId) -> Self {
        let node_count = graph.node_count();
        if start.index() >= node_count {
            return DfsIterator {
                graph,
                stack: Vec::new(),
                visited: Vec::new(),
            };
        }

        DfsIterator {
            graph,
            stack: vec![start],
            visited: vec![false; node_count],
        }
    }
}

impl<G: Successors> Iterator for DfsIterator<'_, G> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            if self.visited[node.index()] {
                continue;
            }
            self.visited[node.index()] = true;

            // Already-visited successors are filtered again on pop
            self.stack.extend(self.graph.successors(node));

            return Some(node);
        }
        None
    }
}

/// Returns a depth-first search iterator starting from the given node.
///
/// An out-of-range `start` yields an empty traversal. Name resolution and the
/// corresponding error live in [`Graph::dfs`](crate::Graph::dfs).
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E), since a node may sit on the stack once per incoming edge
///
/// # Examples
///
/// ```rust,ignore
/// use depcycle::utils::graph::algorithms::dfs;
///
/// // a -> [b, c]: c is pushed last, so it is visited before b
/// let order: Vec<NodeId> = dfs(&graph, a).collect();
/// assert_eq!(order, vec![a, c, b]);
/// ```
pub fn dfs<G: Successors>(graph: &G, start: NodeId) -> DfsIterator<'_, G> {
    DfsIterator::new(graph, start)
}
