//! Named dependency graph with cycle detection.
//!
//! [`Graph`] is an arena of [`Vertex`] records plus a name lookup table. Names
//! are resolved to [`NodeId`]s once, at insertion time; edges are stored as
//! indices, and the index-based algorithms in
//! [`utils::graph::algorithms`](crate::utils::graph::algorithms) run directly on
//! the arena.
//!
//! # Key Order
//!
//! Vertices are numbered in the order their names are first referenced. When an
//! insertion introduces new names, its descendants are created first (in list
//! order) and the key last. This key order determines which vertices are tried
//! as roots during strongly connected component search, and therefore the
//! order cycles are reported in, and the order of edges in DOT output.
//!
//! # Verification
//!
//! [`Graph::add_and_verify`] inserts and then checks the whole graph. A failed
//! check leaves the insertion in place:
//!
//! ```rust
//! use depcycle::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_and_verify("app", ["core", "log"])?;
//! graph.add_and_verify("log", ["core"])?;
//!
//! // Speculative insertion on a copy keeps the original intact
//! let mut trial = graph.clone();
//! assert!(trial.add_and_verify("core", ["app"]).is_err());
//! assert!(!graph.has_cycle());
//! assert!(trial.has_cycle());
//! # Ok::<(), depcycle::Error>(())
//! ```

mod dot;
mod names;
mod report;
mod vertex;

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::{
    config::VerifyConfig,
    utils::graph::{algorithms, GraphBase, NodeId, Successors},
    Error, Result,
};

pub use names::IntoNames;
pub use report::render_cycle_report;
pub use vertex::Vertex;

/// A directed graph of named vertices and their dependency edges.
///
/// Construction never fails: referencing an unknown name creates an edgeless
/// vertex for it. Re-inserting a key replaces its successor list. Vertices are
/// never removed; [`Graph::clone_filtered`] builds a reduced copy instead.
///
/// All queries take `&self`. Traversal state is allocated per call, so queries
/// are independent of each other and of any earlier call.
///
/// # Thread Safety
///
/// `Graph` is [`Send`] and [`Sync`]. Concurrent readers are fine; mutation
/// needs `&mut`, so writers are serialized by the borrow checker or by whatever
/// lock the caller wraps the graph in.
#[derive(Debug, Default)]
pub struct Graph {
    /// Vertex arena, indexed by `NodeId`
    vertices: Vec<Vertex>,
    /// Name to arena index
    lookup: HashMap<String, NodeId>,
    /// Options consulted by `add_and_verify`
    config: VerifyConfig,
}

impl Graph {
    /// Creates a new empty graph with the default [`VerifyConfig`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new empty graph that verifies insertions according to `config`.
    #[must_use]
    pub fn with_config(config: VerifyConfig) -> Self {
        Graph {
            vertices: Vec::new(),
            lookup: HashMap::new(),
            config,
        }
    }

    /// Returns the verification configuration.
    #[must_use]
    pub fn config(&self) -> VerifyConfig {
        self.config
    }

    /// Replaces the verification configuration for subsequent insertions.
    pub fn set_config(&mut self, config: VerifyConfig) {
        self.config = config;
    }

    /// Returns the vertex for `name`, creating an edgeless one if needed.
    fn upsert(&mut self, name: &str) -> NodeId {
        if let Some(&node_id) = self.lookup.get(name) {
            return node_id;
        }

        let node_id = NodeId::new(self.vertices.len());
        self.vertices.push(Vertex::new(node_id, name.to_string()));
        self.lookup.insert(name.to_string(), node_id);
        node_id
    }

    fn resolve(&self, name: &str) -> Result<NodeId> {
        self.lookup
            .get(name)
            .copied()
            .ok_or_else(|| Error::UnknownVertex(name.to_string()))
    }

    /// Sets `key`'s dependencies to exactly `descendants`.
    ///
    /// Missing vertices are created for the key and every descendant. The key's
    /// previous successor list is discarded, not merged; descendants that
    /// already existed keep their own edges. Duplicates and self-edges are
    /// stored as given.
    ///
    /// # Arguments
    ///
    /// * `key` - The depending vertex
    /// * `descendants` - A single name or a list of names, see [`IntoNames`]
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depcycle::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add("a", ["b"]).add("a", "c");
    ///
    /// assert_eq!(graph.successors("a")?, vec!["c"]);
    /// assert!(graph.contains("b"));
    /// # Ok::<(), depcycle::Error>(())
    /// ```
    pub fn add<D: IntoNames>(&mut self, key: &str, descendants: D) -> &mut Self {
        self.add_and_filter_descendants(key, descendants, None)
    }

    /// Like [`add`](Graph::add), but only keeps descendants accepted by `filter`.
    ///
    /// Rejected names get no edge and are not created by this call (they may
    /// already exist from earlier insertions). With `filter` set to `None` this
    /// is identical to `add`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depcycle::Graph;
    ///
    /// let mut graph = Graph::new();
    /// let external = |name: &str| !name.starts_with("std::");
    /// graph.add_and_filter_descendants("app", ["std::fs", "core"], Some(&external));
    ///
    /// assert_eq!(graph.successors("app")?, vec!["core"]);
    /// assert!(!graph.contains("std::fs"));
    /// # Ok::<(), depcycle::Error>(())
    /// ```
    pub fn add_and_filter_descendants<D: IntoNames>(
        &mut self,
        key: &str,
        descendants: D,
        filter: Option<&dyn Fn(&str) -> bool>,
    ) -> &mut Self {
        let names = descendants.into_names();
        let requested = names.len();

        let successors: Vec<NodeId> = names
            .iter()
            .filter(|name| filter.map_or(true, |accept| accept(name.as_str())))
            .map(|name| self.upsert(name))
            .collect();

        let key_id = self.upsert(key);
        trace!(
            key,
            requested,
            kept = successors.len(),
            "setting dependencies"
        );

        self.vertices[key_id.index()].successors = successors;
        self
    }

    /// Inserts like [`add`](Graph::add), then verifies the whole graph.
    ///
    /// The checks run are selected by the graph's [`VerifyConfig`]. The
    /// insertion is **not** rolled back on failure: the graph keeps the new
    /// edges and the caller is responsible for repairing it, or for verifying
    /// against a clone in the first place.
    ///
    /// # Errors
    ///
    /// - [`Error::CycleDetected`] if any strongly connected component has more
    ///   than one vertex; carries every such cycle and the rendered report
    /// - [`Error::SelfDependency`] if self-loops are rejected and any vertex
    ///   depends on itself
    pub fn add_and_verify<D: IntoNames>(&mut self, key: &str, dependencies: D) -> Result<&mut Self> {
        self.add(key, dependencies);

        if !self.config.is_enabled() {
            trace!(key, "verification disabled");
            return Ok(self);
        }

        if self.config.enable_cycle_check {
            let cycles = self.cycle_names();
            if !cycles.is_empty() {
                warn!(key, cycles = cycles.len(), "insertion closed a dependency cycle");
                return Err(Error::CycleDetected {
                    message: render_cycle_report(&cycles),
                    cycles,
                });
            }
        }

        if self.config.reject_self_loops {
            let loops: Vec<String> = self.self_loops().into_iter().map(str::to_string).collect();
            if !loops.is_empty() {
                warn!(key, vertices = loops.len(), "insertion left a self-dependency");
                return Err(Error::SelfDependency(loops));
            }
        }

        Ok(self)
    }

    /// Walks every vertex reachable from `key` in depth-first pre-order.
    ///
    /// Each vertex is handed to `visitor` at most once, starting with `key`
    /// itself. Successors are pushed in list order, so the last-listed
    /// dependency of a vertex is explored first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `key` was never added.
    pub fn dfs<F>(&self, key: &str, mut visitor: F) -> Result<()>
    where
        F: FnMut(&Vertex),
    {
        let start = self.resolve(key)?;
        for node in algorithms::dfs(self, start) {
            visitor(self.at(node));
        }
        Ok(())
    }

    /// Returns every vertex reachable from `key`, excluding `key`, in
    /// [`dfs`](Graph::dfs) order.
    ///
    /// `key` is never part of the result, even when it lies on a cycle.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `key` was never added.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depcycle::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add("app", ["core", "log"]).add("log", "core");
    ///
    /// assert_eq!(graph.descendants("app")?, vec!["log", "core"]);
    /// # Ok::<(), depcycle::Error>(())
    /// ```
    pub fn descendants(&self, key: &str) -> Result<Vec<&str>> {
        let start = self.resolve(key)?;
        Ok(algorithms::dfs(self, start)
            .skip(1)
            .map(|node| self.at(node).name())
            .collect())
    }

    /// Computes the strongly connected components using Tarjan's algorithm.
    ///
    /// Components are listed in the order they close, which is reverse
    /// topological order of the condensation. Within a component vertices are
    /// in stack pop order, with the component's root last. Every vertex belongs
    /// to exactly one component; a vertex with a self-edge is a singleton.
    #[must_use]
    pub fn strongly_connected_components(&self) -> Vec<Vec<&Vertex>> {
        algorithms::strongly_connected_components(self)
            .into_iter()
            .map(|scc| scc.into_iter().map(|node| self.at(node)).collect())
            .collect()
    }

    /// Returns the strongly connected components with more than one vertex.
    ///
    /// A vertex whose only cycle is a direct self-edge is **not** reported here;
    /// see [`self_loops`](Graph::self_loops).
    #[must_use]
    pub fn cycles(&self) -> Vec<Vec<&Vertex>> {
        self.strongly_connected_components()
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .collect()
    }

    /// Returns [`cycles`](Graph::cycles) as vertex names.
    #[must_use]
    pub fn cycle_names(&self) -> Vec<Vec<String>> {
        self.cycles()
            .into_iter()
            .map(|scc| scc.into_iter().map(|v| v.name().to_string()).collect())
            .collect()
    }

    /// Returns `true` if [`cycles`](Graph::cycles) is non-empty.
    #[must_use]
    pub fn has_cycle(&self) -> bool {
        !self.cycles().is_empty()
    }

    /// Returns the names of vertices with an edge to themselves, in key order.
    #[must_use]
    pub fn self_loops(&self) -> Vec<&str> {
        self.vertices
            .iter()
            .filter(|v| v.has_self_loop())
            .map(Vertex::name)
            .collect()
    }

    /// Builds a new graph holding only the vertices accepted by `filter`.
    ///
    /// Vertices are re-inserted in key order through
    /// [`add_and_filter_descendants`](Graph::add_and_filter_descendants), so
    /// edges to rejected vertices are dropped as well. The configuration is
    /// carried over.
    #[must_use]
    pub fn clone_filtered<F>(&self, filter: F) -> Graph
    where
        F: Fn(&str) -> bool,
    {
        let mut graph = Graph::with_config(self.config);
        for vertex in self.vertices.iter().filter(|v| filter(v.name())) {
            let names: Vec<&str> = vertex
                .successor_ids()
                .iter()
                .map(|&succ| self.at(succ).name())
                .collect();
            graph.add_and_filter_descendants(vertex.name(), names, Some(&filter));
        }
        graph
    }

    /// Returns `true` if a vertex named `name` exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup.contains_key(name)
    }

    /// Returns the arena index of `name`, if it exists.
    #[must_use]
    pub fn node_id(&self, name: &str) -> Option<NodeId> {
        self.lookup.get(name).copied()
    }

    /// Returns the vertex named `name`, if it exists.
    #[must_use]
    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.node_id(name).map(|node| self.at(node))
    }

    /// Returns the vertex at `node`, or `None` if `node` is out of range.
    #[must_use]
    pub fn vertex_at(&self, node: NodeId) -> Option<&Vertex> {
        self.vertices.get(node.index())
    }

    /// Arena access for ids this graph handed out itself.
    fn at(&self, node: NodeId) -> &Vertex {
        &self.vertices[node.index()]
    }

    /// Returns the direct dependencies of `name`, in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownVertex`] if `name` was never added.
    pub fn successors(&self, name: &str) -> Result<Vec<&str>> {
        let node = self.resolve(name)?;
        Ok(self
            .at(node)
            .successor_ids()
            .iter()
            .map(|&succ| self.at(succ).name())
            .collect())
    }

    /// Returns an iterator over all vertices in key order.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Returns an iterator over all vertex names in key order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(Vertex::name)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the number of edges, counting duplicates.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(Vertex::out_degree).sum()
    }
}

/// Rebuilds the graph by re-adding every vertex in key order.
///
/// Each re-insertion creates new descendants ahead of its key, so the clone's
/// key order can differ from the source's when a key gained dependencies on
/// vertices created after it. Successor lists and the configuration are
/// copied exactly.
impl Clone for Graph {
    fn clone(&self) -> Self {
        self.clone_filtered(|_| true)
    }
}

impl GraphBase for Graph {
    fn node_count(&self) -> usize {
        self.vertices.len()
    }

    fn node_ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.vertices.len()).map(NodeId::new)
    }
}

impl Successors for Graph {
    fn successors(&self, node: NodeId) -> impl Iterator<Item = NodeId> {
        self.vertices[node.index()].successors.iter().copied()
    }
}
