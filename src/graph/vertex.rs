//! Named vertices and their outgoing edges.

use crate::utils::graph::NodeId;

/// A named node of the dependency graph.
///
/// A vertex is created the first time its name is referenced, either as the key
/// of an insertion or as one of its descendants, and lives as long as the graph.
/// Its name never changes. Its successor list is replaced wholesale whenever the
/// name is inserted again as a key.
///
/// Vertices carry no traversal bookkeeping; algorithms keep discovery indices,
/// low-links and visited flags in their own per-run tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    id: NodeId,
    name: String,
    pub(crate) successors: Vec<NodeId>,
}

impl Vertex {
    pub(crate) fn new(id: NodeId, name: String) -> Self {
        Vertex {
            id,
            name,
            successors: Vec::new(),
        }
    }

    /// Returns the arena index of this vertex in its owning graph.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the unique name of this vertex.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the outgoing edges in insertion order, duplicates included.
    #[must_use]
    pub fn successor_ids(&self) -> &[NodeId] {
        &self.successors
    }

    /// Returns the number of outgoing edges.
    #[must_use]
    pub fn out_degree(&self) -> usize {
        self.successors.len()
    }

    /// Returns `true` if this vertex has an edge to itself.
    #[must_use]
    pub fn has_self_loop(&self) -> bool {
        self.successors.contains(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_starts_edgeless() {
        let vertex = Vertex::new(NodeId::new(3), "core".to_string());
        assert_eq!(vertex.id(), NodeId::new(3));
        assert_eq!(vertex.name(), "core");
        assert!(vertex.successor_ids().is_empty());
        assert_eq!(vertex.out_degree(), 0);
        assert!(!vertex.has_self_loop());
    }

    #[test]
    fn test_vertex_self_loop() {
        let mut vertex = Vertex::new(NodeId::new(1), "a".to_string());
        vertex.successors = vec![NodeId::new(0), NodeId::new(1)];
        assert!(vertex.has_self_loop());
        assert_eq!(vertex.out_degree(), 2);
    }
}
