//! Graph algorithms for dependency analysis.
//!
//! # Available Algorithms
//!
//! - [`dfs`] - Pre-order depth-first traversal with visit-on-pop semantics
//! - [`strongly_connected_components`] - Tarjan's SCC algorithm, iterative
//!
//! | Algorithm | Time Complexity | Use Case |
//! |-----------|-----------------|----------|
//! | DFS | O(V + E) | Descendant enumeration |
//! | SCC | O(V + E) | Circular dependency detection |
//!
//! Both algorithms own their traversal state. Nothing is stored on the graph,
//! so running one never influences a later run of either.

mod scc;
mod traversal;

pub use scc::strongly_connected_components;
pub use traversal::{dfs, DfsIterator};
