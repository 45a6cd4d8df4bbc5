/// DOT identifier escaping.
pub mod dot;

/// Generic directed graph layer: node ids, adjacency traits, algorithms.
pub mod graph;
