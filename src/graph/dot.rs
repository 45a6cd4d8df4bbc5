//! Graphviz rendering of a dependency graph.

use std::fmt::{self, Write};

use crate::{graph::Graph, utils::dot::dot_id};

impl Graph {
    /// Renders the graph in Graphviz DOT format.
    ///
    /// Every detected cycle becomes a red `clusterN` subgraph (N counting from
    /// 0 in [`cycles`](Graph::cycles) order), followed by one `src -> dst` line
    /// per edge, vertices in key order and edges in successor order. Vertices
    /// without outgoing edges only appear as edge targets or cluster members.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use depcycle::Graph;
    ///
    /// let mut graph = Graph::new();
    /// graph.add("a", "b");
    /// assert_eq!(graph.to_dot(), "digraph {\n  a -> b\n}\n");
    /// ```
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail
        let _ = self.write_dot(&mut out);
        out
    }

    /// Writes the DOT rendering of [`to_dot`](Graph::to_dot) into `out`.
    ///
    /// # Errors
    ///
    /// Propagates errors from the underlying writer.
    pub fn write_dot<W: Write>(&self, out: &mut W) -> fmt::Result {
        writeln!(out, "digraph {{")?;

        for (i, cycle) in self.cycles().iter().enumerate() {
            let members: Vec<String> = cycle.iter().map(|v| dot_id(v.name())).collect();
            writeln!(out, "  subgraph cluster{i} {{")?;
            writeln!(out, "    color=red;")?;
            writeln!(out, "    {};", members.join("; "))?;
            writeln!(out, "  }}")?;
        }

        for vertex in self.vertices() {
            for &succ in vertex.successor_ids() {
                writeln!(
                    out,
                    "  {} -> {}",
                    dot_id(vertex.name()),
                    dot_id(self.at(succ).name())
                )?;
            }
        }

        writeln!(out, "}}")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dot(f)
    }
}

#[cfg(test)]
mod tests {
    use crate::Graph;

    #[test]
    fn test_dot_empty_graph() {
        assert_eq!(Graph::new().to_dot(), "digraph {\n}\n");
    }

    #[test]
    fn test_dot_acyclic_pair() {
        let mut graph = Graph::new();
        graph.add("a", ["b"]);
        assert_eq!(graph.to_dot(), "digraph {\n  a -> b\n}\n");
    }

    #[test]
    fn test_dot_cycle_cluster() {
        let mut graph = Graph::new();
        graph.add("a", ["b"]);
        graph.add("b", ["a"]);

        let expected = "digraph {\n  subgraph cluster0 {\n    color=red;\n    a; b;\n  }\n  b -> a\n  a -> b\n}\n";
        assert_eq!(graph.to_dot(), expected);
    }

    #[test]
    fn test_dot_edges_in_key_then_successor_order() {
        let mut graph = Graph::new();
        graph.add("app", ["log", "core"]);
        graph.add("log", ["core"]);

        // log and core were created before app
        let expected = "digraph {\n  log -> core\n  app -> log\n  app -> core\n}\n";
        assert_eq!(graph.to_dot(), expected);
    }

    #[test]
    fn test_dot_quotes_non_identifiers() {
        let mut graph = Graph::new();
        graph.add("@scope/app", ["left-pad"]);
        assert_eq!(
            graph.to_dot(),
            "digraph {\n  \"@scope/app\" -> \"left-pad\"\n}\n"
        );
    }

    #[test]
    fn test_dot_self_loop_has_no_cluster() {
        let mut graph = Graph::new();
        graph.add("a", ["a"]);
        assert_eq!(graph.to_dot(), "digraph {\n  a -> a\n}\n");
    }

    #[test]
    fn test_display_matches_to_dot() {
        let mut graph = Graph::new();
        graph.add("x", ["y", "z"]);
        assert_eq!(graph.to_string(), graph.to_dot());
    }
}
