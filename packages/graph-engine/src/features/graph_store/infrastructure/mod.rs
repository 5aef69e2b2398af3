//! Graph store implementations

pub mod adjacency_matrix;

pub use adjacency_matrix::AdjacencyMatrixGraph;
