//! Feature modules
//!
//! - graph_store: adjacency-matrix graph (vertex/edge CRUD, topology queries)
//! - msf: minimum spanning forest (generalized Prim-Jarnik)
//! - pagerank: iterative PageRank with sink handling

pub mod graph_store;
pub mod msf;
pub mod pagerank;
