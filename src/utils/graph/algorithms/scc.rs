//! Strongly Connected Components (SCC) using Tarjan's algorithm.
//!
//! A strongly connected component is a maximal set of vertices such that there
//! is a path from every vertex to every other vertex in the set. Dependency
//! validation uses them to find circular dependencies: every component with
//! more than one member is a cycle.
//!
//! The search is iterative. Each active call of the textbook recursive
//! `strongconnect` is represented by a [`Frame`] on an explicit stack, so the
//! depth of the dependency chain is bounded by heap rather than by the thread's
//! call stack.

use tracing::debug;

use crate::utils::graph::{NodeId, Successors};

/// Computes the strongly connected components of a directed graph.
///
/// Roots are tried in key order ([`GraphBase::node_ids`](crate::utils::graph::GraphBase::node_ids)),
/// skipping nodes already discovered. Successors are explored in
/// successor-list order.
///
/// # Returns
///
/// A vector of SCCs, each a vector of `NodeId`s in stack pop order (the SCC
/// root is last). SCCs are returned in the order they are closed, which is
/// **reverse topological order** of the condensation graph: if there is an
/// edge from SCC A to SCC B, then B appears before A.
///
/// # Complexity
///
/// - Time: O(V + E)
/// - Space: O(V + E)
///
/// # Examples
///
/// ```rust,ignore
/// use depcycle::utils::graph::algorithms::strongly_connected_components;
///
/// // a -> b -> c -> a
/// let sccs = strongly_connected_components(&graph);
/// assert_eq!(sccs.len(), 1);
/// assert_eq!(sccs[0].len(), 3);
/// ```
pub fn strongly_connected_components<G>(graph: &G) -> Vec<Vec<NodeId>>
where
    G: Successors,
{
    let node_count = graph.node_count();
    if node_count == 0 {
        return Vec::new();
    }

    let mut state = TarjanState::new(node_count);

    for node in graph.node_ids() {
        if state.index[node.index()].is_none() {
            state.strongconnect(graph, node);
        }
    }

    debug!(
        vertices = node_count,
        components = state.sccs.len(),
        "computed strongly connected components"
    );

    state.sccs
}

/// One suspended `strongconnect(node)` invocation.
struct Frame {
    /// The vertex being explored
    node: NodeId,
    /// Successors of `node`, snapshotted on entry
    successors: Vec<NodeId>,
    /// Position of the next successor to examine
    next: usize,
}

/// Per-run state for Tarjan's algorithm.
///
/// Created fresh for every search, which is what resets discovery indices,
/// low-links and stack membership between independent runs.
struct TarjanState {
    /// Discovery index for each node (None if not yet discovered)
    index: Vec<Option<usize>>,
    /// Lowlink value for each node
    lowlink: Vec<usize>,
    /// Whether a node is currently on the component stack
    on_stack: Vec<bool>,
    /// The component stack
    stack: Vec<NodeId>,
    /// Current index counter
    current_index: usize,
    /// Collected SCCs
    sccs: Vec<Vec<NodeId>>,
}

impl TarjanState {
    fn new(n: usize) -> Self {
        Self {
            index: vec![None; n],
            lowlink: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            current_index: 0,
            sccs: Vec::new(),
        }
    }

    /// Assigns the next discovery index to `v` and pushes it on the component stack.
    fn discover<G: Successors>(&mut self, graph: &G, v: NodeId) -> Frame {
        let v_idx = v.index();
        self.index[v_idx] = Some(self.current_index);
        self.lowlink[v_idx] = self.current_index;
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack[v_idx] = true;

        Frame {
            node: v,
            successors: graph.successors(v).collect(),
            next: 0,
        }
    }

    fn strongconnect<G: Successors>(&mut self, graph: &G, root: NodeId) {
        let mut frames = vec![self.discover(graph, root)];

        while let Some(frame) = frames.last_mut() {
            let v = frame.node;

            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;

                match self.index[w.index()] {
                    None => {
                        // Descend; the parent's lowlink is folded in when w's frame returns
                        let child = self.discover(graph, w);
                        frames.push(child);
                    }
                    Some(w_index) if self.on_stack[w.index()] => {
                        self.lowlink[v.index()] = self.lowlink[v.index()].min(w_index);
                    }
                    // w belongs to an already closed component
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            self.close(v);

            if let Some(parent) = frames.last() {
                let p_idx = parent.node.index();
                self.lowlink[p_idx] = self.lowlink[p_idx].min(self.lowlink[v.index()]);
            }
        }
    }

    /// Emits the component rooted at `v` if `v` is a root.
    fn close(&mut self, v: NodeId) {
        if Some(self.lowlink[v.index()]) != self.index[v.index()] {
            return;
        }

        let mut scc = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack[w.index()] = false;
            scc.push(w);
            if w == v {
                break;
            }
        }
        self.sccs.push(scc);
    }
}
