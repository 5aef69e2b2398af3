pub mod pagerank;

pub use pagerank::{PageRankEngine, PageRankReport};
