//! Graph port
//!
//! Read/write contract the engines are written against. Every operation that
//! takes a vertex or edge fails with `InvalidVertex` / `InvalidEdge` when the
//! id is not live in this graph.

use crate::errors::Result;
use crate::shared::models::{EdgeId, VertexId};

/// Vertex/edge store with topology queries
pub trait Graph {
    /// Caller-chosen vertex payload
    type VertexElement;

    /// Caller-chosen edge payload (a weight for MSF, optional for PageRank)
    type EdgeElement;

    /// Live vertices, no ordering guarantee
    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_>;

    /// Live edges, no ordering guarantee
    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_>;

    /// Register a vertex under a fresh number
    fn insert_vertex(&mut self, element: Self::VertexElement) -> Result<VertexId>;

    /// Create `v1 → v2` (both ways for undirected graphs, same edge)
    fn insert_edge(&mut self, v1: VertexId, v2: VertexId, element: Self::EdgeElement) -> Result<EdgeId>;

    /// Remove every incident edge, then the vertex; returns its payload
    fn remove_vertex(&mut self, v: VertexId) -> Result<Self::VertexElement>;

    fn remove_edge(&mut self, e: EdgeId) -> Result<Self::EdgeElement>;

    /// Edge from `v1` to `v2`, or `NoSuchEdge`
    fn connecting_edge(&self, v1: VertexId, v2: VertexId) -> Result<EdgeId>;

    /// Edges whose head is `v` (every incident edge when undirected)
    fn incoming_edges(&self, v: VertexId) -> Result<Vec<EdgeId>>;

    /// Edges whose tail is `v` (every incident edge when undirected)
    fn outgoing_edges(&self, v: VertexId) -> Result<Vec<EdgeId>>;

    /// Every edge touching `v`, regardless of direction, each once
    fn incident_edges(&self, v: VertexId) -> Result<Vec<EdgeId>>;

    /// Out-degree; directed graphs only (`Direction` otherwise)
    fn num_outgoing_edges(&self, v: VertexId) -> Result<usize>;

    /// Endpoint of `e` other than `v`; `NoSuchVertex` if `e` is not incident
    fn opposite(&self, v: VertexId, e: EdgeId) -> Result<VertexId>;

    /// `(first, second)` endpoints of `e`
    fn end_vertices(&self, e: EdgeId) -> Result<(VertexId, VertexId)>;

    fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> Result<bool>;

    /// Flip directedness. Destructive: discards all vertices and edges.
    fn toggle_directed(&mut self);

    fn clear(&mut self);

    fn num_vertices(&self) -> usize;

    fn num_edges(&self) -> usize;

    fn is_directed(&self) -> bool;

    fn contains_vertex(&self, v: VertexId) -> bool;

    fn contains_edge(&self, e: EdgeId) -> bool;

    fn vertex_element(&self, v: VertexId) -> Result<&Self::VertexElement>;

    fn vertex_element_mut(&mut self, v: VertexId) -> Result<&mut Self::VertexElement>;

    fn edge_element(&self, e: EdgeId) -> Result<&Self::EdgeElement>;
}
