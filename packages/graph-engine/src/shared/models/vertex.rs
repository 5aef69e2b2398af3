//! Vertex model

use std::fmt;

/// Vertex identity: the unique number assigned at insertion (starts at 1)
///
/// Vertices are compared by this number, never by payload. `epoch` is the
/// owning graph's clear-count at insertion, so ids that outlive a `clear()`
/// never alias the renumbered vertices.
///
/// Ids are only issued by a graph; they cannot be built from external data:
///
/// ```compile_fail
/// let forged: graph_engine::VertexId =
///     serde_json::from_str(r#"{"epoch":0,"number":1}"#).unwrap();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId {
    epoch: u32,
    number: u32,
}

impl VertexId {
    pub(crate) const fn new(number: u32, epoch: u32) -> Self {
        Self { epoch, number }
    }

    /// The vertex number
    pub fn number(self) -> usize {
        self.number as usize
    }

    pub(crate) fn epoch(self) -> u32 {
        self.epoch
    }

    /// Row/column of this vertex in the adjacency table
    pub(crate) fn index(self) -> usize {
        self.number as usize - 1
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.number)
    }
}

/// A live vertex and its payload
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<V> {
    pub id: VertexId,
    pub element: V,
}

impl<V> Vertex<V> {
    pub fn new(id: VertexId, element: V) -> Self {
        Self { id, element }
    }
}
