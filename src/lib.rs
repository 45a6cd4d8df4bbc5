// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # depcycle
//!
//! An incremental dependency graph that rejects circular dependencies.
//!
//! Callers declare dependencies one key at a time ("`app` depends on `core`,
//! `log`"). The graph can verify every insertion, reporting each cycle it closes
//! as an ordered list of names, and answers descendant queries for any vertex.
//!
//! ## Features
//!
//! - **Incremental construction** - Vertices are created on first reference; re-inserting a key replaces its edges
//! - **Verification-on-write** - [`Graph::add_and_verify`] inserts and checks the whole graph in one call
//! - **Tarjan SCC** - Iterative strongly connected component search, safe on arbitrarily deep chains
//! - **Reproducible output** - Cycles, descendants and DOT edges follow a deterministic key order
//! - **Graphviz export** - [`Graph::to_dot`] highlights every cycle as a red cluster
//!
//! ## Quick Start
//!
//! ```rust
//! use depcycle::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_and_verify("app", ["core", "log"])?;
//! graph.add_and_verify("log", "core")?;
//!
//! assert_eq!(graph.descendants("app")?, vec!["log", "core"]);
//!
//! let err = graph.add_and_verify("core", "app").unwrap_err();
//! assert!(matches!(err, Error::CycleDetected { .. }));
//! # Ok::<(), depcycle::Error>(())
//! ```
//!
//! ## Cycle Semantics
//!
//! A cycle is a strongly connected component with at least two vertices. A
//! vertex that depends directly on itself forms a singleton component and is
//! reported by [`Graph::self_loops`] rather than [`Graph::cycles`];
//! [`VerifyConfig::strict`] turns self-dependencies into verification failures.
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`trace` per insertion, `debug` per SCC
//! run, `warn` per rejected insertion) and never installs a subscriber.

pub(crate) mod error;

/// Verification options for dependency insertion.
pub mod config;

/// The named dependency graph: construction, traversal and cycle detection.
pub mod graph;

/// Convenient re-exports of the most commonly used types and traits.
///
/// ```rust
/// use depcycle::prelude::*;
///
/// let mut graph = Graph::with_config(VerifyConfig::strict());
/// assert!(graph.add_and_verify("a", "a").is_err());
/// ```
pub mod prelude;

/// Index-based graph primitives, algorithms and DOT helpers.
///
/// These are the building blocks behind [`Graph`]; most callers never need
/// them directly.
pub mod utils;

/// `depcycle` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `depcycle` Error type
///
/// Returned by verification-on-write and by traversals of unknown vertices.
pub use error::Error;

/// Verification configuration consulted by [`Graph::add_and_verify`].
pub use config::VerifyConfig;

/// The dependency graph and its vertices.
pub use graph::{Graph, IntoNames, Vertex};
