use thiserror::Error;

/// The generic Error type, which covers every failure this library can return.
///
/// Graph construction is total: adding vertices and edges never fails. Errors
/// only arise from verification-on-write and from traversals that name a vertex
/// the graph has never seen.
///
/// # Error Categories
///
/// ## Verification Errors
/// - [`Error::CycleDetected`] - An insertion closed one or more dependency cycles
/// - [`Error::SelfDependency`] - An insertion made a vertex depend on itself
///   (only reported under [`VerifyConfig::strict`](crate::VerifyConfig::strict))
///
/// ## Lookup Errors
/// - [`Error::UnknownVertex`] - A traversal started from a name never added
///
/// Verification errors do **not** undo the insertion that triggered them. After
/// one is returned, the graph contains the offending edges. Callers that need
/// all-or-nothing behavior verify against a [`clone`](crate::Graph::clone).
///
/// # Examples
///
/// ```rust
/// use depcycle::{Error, Graph};
///
/// let mut graph = Graph::new();
/// graph.add_and_verify("a", ["b"])?;
///
/// match graph.add_and_verify("b", ["a"]) {
///     Err(Error::CycleDetected { cycles, .. }) => {
///         assert_eq!(cycles, vec![vec!["a".to_string(), "b".to_string()]]);
///     }
///     other => panic!("expected a cycle, got {other:?}"),
/// }
/// # Ok::<(), depcycle::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// One or more dependency cycles were found after an insertion.
    ///
    /// # Fields
    ///
    /// * `message` - Human-readable report, one `n1 -> n2 -> ... -> n1` line per cycle
    /// * `cycles` - Each cycle as vertex names, in strongly connected component pop order
    #[error("{message}")]
    CycleDetected {
        /// The rendered multi-line cycle report
        message: String,
        /// The detected cycles, as ordered vertex names
        cycles: Vec<Vec<String>>,
    },

    /// One or more vertices have an edge to themselves.
    ///
    /// Self-edges form singleton components and are not cycles in the sense of
    /// [`Graph::cycles`](crate::Graph::cycles); this error is opt-in.
    #[error("Detected self-dependency: {}", .0.join(", "))]
    SelfDependency(Vec<String>),

    /// A traversal was requested for a vertex that does not exist in the graph.
    #[error("Unknown vertex '{0}'")]
    UnknownVertex(String),
}
