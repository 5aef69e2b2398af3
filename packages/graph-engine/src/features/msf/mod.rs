//! Minimum Spanning Forest
//!
//! Prim-Jarnik expansion driven by an adaptable priority queue, extended so
//! that every connected component gets its own tree. Scratch state (cost,
//! predecessor edge, visited flag, queue handle) lives in decorators keyed
//! by vertex id; the graph itself is never modified.

pub mod infrastructure;
pub mod ports;

pub use infrastructure::{forest_weight, PrimJarnikMsf};
pub use ports::MinSpanForest;
