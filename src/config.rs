//! Verification configuration for dependency insertion
//!
//! This module provides the options consulted by
//! [`Graph::add_and_verify`](crate::Graph::add_and_verify). Plain construction
//! and the cycle queries themselves are unaffected by it.

/// Configuration for verification-on-write
///
/// The default reproduces the classic contract: an insertion is rejected when it
/// leaves the graph with a strongly connected component of two or more vertices.
/// A vertex that depends on itself is a singleton component and passes unless
/// `reject_self_loops` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifyConfig {
    /// Run cycle detection after each verified insertion (recommended: always true)
    /// When false, `add_and_verify` behaves exactly like `add`
    pub enable_cycle_check: bool,

    /// Treat a direct self-edge (`a -> a`) as a verification failure
    /// Reported as `Error::SelfDependency`, after the multi-vertex cycle check
    pub reject_self_loops: bool,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            enable_cycle_check: true,
            reject_self_loops: false,
        }
    }
}

impl VerifyConfig {
    /// Creates a configuration with verification turned off
    ///
    /// Useful while bulk-loading a graph that is checked once at the end.
    #[must_use]
    pub fn disabled() -> Self {
        Self {
            enable_cycle_check: false,
            reject_self_loops: false,
        }
    }

    /// Creates a configuration that also rejects self-dependencies
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_cycle_check: true,
            reject_self_loops: true,
        }
    }

    /// Returns `true` if `add_and_verify` has any check to run
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enable_cycle_check || self.reject_self_loops
    }
}
