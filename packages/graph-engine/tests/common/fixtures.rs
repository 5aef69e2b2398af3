//! Canned graphs

use super::builders::{BuiltGraph, GraphBuilder};

/// A-B 1, B-C 1, A-C 10 (undirected)
pub fn weighted_triangle() -> BuiltGraph {
    GraphBuilder::undirected()
        .with_edge("A", "B", 1)
        .with_edge("B", "C", 1)
        .with_edge("A", "C", 10)
        .build()
}

/// A→B→C (directed)
pub fn directed_chain() -> BuiltGraph {
    GraphBuilder::directed()
        .with_edge("A", "B", 0)
        .with_edge("B", "C", 0)
        .build()
}

/// Two undirected components plus an isolated vertex
///
/// ```text
/// A-B 4, B-C 2, A-C 3, C-D 7      E-F 1, F-G 5, E-G 2      H
/// ```
pub fn three_components() -> BuiltGraph {
    GraphBuilder::undirected()
        .with_edge("A", "B", 4)
        .with_edge("B", "C", 2)
        .with_edge("A", "C", 3)
        .with_edge("C", "D", 7)
        .with_edge("E", "F", 1)
        .with_edge("F", "G", 5)
        .with_edge("E", "G", 2)
        .with_vertex("H")
        .build()
}

/// Classic 7-vertex textbook graph, MST weight 39
///
/// ```text
/// A-B 7, A-D 5, B-C 8, B-D 9, B-E 7, C-E 5,
/// D-E 15, D-F 6, E-F 8, E-G 9, F-G 11
/// ```
pub fn textbook_graph() -> BuiltGraph {
    GraphBuilder::undirected()
        .with_edge("A", "B", 7)
        .with_edge("A", "D", 5)
        .with_edge("B", "C", 8)
        .with_edge("B", "D", 9)
        .with_edge("B", "E", 7)
        .with_edge("C", "E", 5)
        .with_edge("D", "E", 15)
        .with_edge("D", "F", 6)
        .with_edge("E", "F", 8)
        .with_edge("E", "G", 9)
        .with_edge("F", "G", 11)
        .build()
}
