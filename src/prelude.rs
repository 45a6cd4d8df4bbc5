//! # depcycle Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and traits from the depcycle library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all depcycle operations
pub use crate::Error;

/// The result type used throughout depcycle
pub use crate::Result;

/// Configuration for verification-on-write
pub use crate::VerifyConfig;

// ================================================================================================
// Graph
// ================================================================================================

/// The dependency graph
pub use crate::Graph;

/// A named vertex and its outgoing edges
pub use crate::Vertex;

/// Conversion trait for descendant arguments
pub use crate::IntoNames;

/// Arena index of a vertex
pub use crate::utils::graph::NodeId;
