//! Index-based directed graph infrastructure.
//!
//! This layer knows nothing about vertex names. It provides:
//!
//! - [`NodeId`] - Strongly-typed arena index
//! - [`GraphBase`] and [`Successors`] - The adjacency view algorithms consume
//! - [`algorithms`] - Traversal and strongly connected components
//!
//! [`Graph`](crate::Graph) implements the traits and translates between names
//! and `NodeId`s at its public boundary.

mod node;
mod traits;

pub mod algorithms;

pub use node::NodeId;
pub use traits::{GraphBase, Successors};
