//! Graph Store
//!
//! Directed/undirected graph backed by a dense adjacency table indexed by
//! vertex number. Cell `(i, j)` holds the edge from vertex `i` to vertex `j`;
//! undirected graphs populate `(i, j)` and `(j, i)` with the same edge.
//!
//! ```rust,ignore
//! let mut g = AdjacencyMatrixGraph::new(false);
//! let a = g.insert_vertex("A")?;
//! let b = g.insert_vertex("B")?;
//! let ab = g.insert_edge(a, b, 1)?;
//! assert_eq!(g.connecting_edge(b, a)?, ab);
//! ```

pub mod infrastructure;
pub mod ports;

pub use infrastructure::AdjacencyMatrixGraph;
pub use ports::Graph;
