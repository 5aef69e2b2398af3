//! Graph entity models

pub mod edge;
pub mod vertex;

pub use edge::{Edge, EdgeId};
pub use vertex::{Vertex, VertexId};
