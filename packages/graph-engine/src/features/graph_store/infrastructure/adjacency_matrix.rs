//! Adjacency-matrix graph
//!
//! # Layout
//! - `vertices`: arena indexed by `number - 1`; a removed vertex leaves `None`
//! - `matrix`: one row per issued vertex number, rows grow lazily to the
//!   highest column written, so inserting a vertex is O(1)
//! - `edges`: live edge set keyed by id
//!
//! Numbers are handed out monotonically from 1 and never reused until the
//! graph is cleared. Clearing bumps `epoch`, which invalidates every id issued
//! before it.
//!
//! # Complexity
//! | operation | cost |
//! |---|---|
//! | insert_vertex / insert_edge / remove_edge | O(1) |
//! | connecting_edge / are_adjacent / opposite / end_vertices | O(1) |
//! | remove_vertex | O(\|V\|) |
//! | incoming / outgoing / incident edges | O(\|E\|) |

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::config::{ConfigResult, GraphConfig, Validatable};
use crate::errors::{GraphError, Result};
use crate::features::graph_store::ports::Graph;
use crate::shared::models::{Edge, EdgeId, Vertex, VertexId};

/// Graph backed by a dense adjacency table
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph<V, E> {
    matrix: Vec<Vec<Option<EdgeId>>>,
    vertices: Vec<Option<Vertex<V>>>,
    edges: FxHashMap<EdgeId, Edge<E>>,
    num_vertices: usize,
    next_edge: u32,
    epoch: u32,
    directed: bool,
    max_vertices: usize,
}

impl<V, E> AdjacencyMatrixGraph<V, E> {
    /// Create an empty graph with the default vertex capacity
    pub fn new(directed: bool) -> Self {
        Self::from_config(GraphConfig::default().directed(directed))
    }

    /// Create an empty graph from a validated `GraphConfig`
    pub fn with_config(config: GraphConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    fn from_config(config: GraphConfig) -> Self {
        Self {
            matrix: Vec::new(),
            vertices: Vec::new(),
            edges: FxHashMap::default(),
            num_vertices: 0,
            next_edge: 0,
            epoch: 0,
            directed: config.directed,
            max_vertices: config.max_vertices,
        }
    }

    pub fn max_vertices(&self) -> usize {
        self.max_vertices
    }

    pub fn vertex(&self, v: VertexId) -> Result<&Vertex<V>> {
        if v.epoch() != self.epoch {
            return Err(GraphError::invalid_vertex(format!(
                "{} belongs to a cleared graph",
                v
            )));
        }
        self.vertices
            .get(v.index())
            .and_then(Option::as_ref)
            .ok_or_else(|| GraphError::invalid_vertex(format!("{} is not a live vertex", v)))
    }

    pub fn edge(&self, e: EdgeId) -> Result<&Edge<E>> {
        if e.epoch() != self.epoch {
            return Err(GraphError::invalid_edge(format!(
                "{} belongs to a cleared graph",
                e
            )));
        }
        self.edges
            .get(&e)
            .ok_or_else(|| GraphError::invalid_edge(format!("{} is not a live edge", e)))
    }

    fn cell(&self, from: VertexId, to: VertexId) -> Option<EdgeId> {
        self.matrix
            .get(from.index())
            .and_then(|row| row.get(to.index()))
            .copied()
            .flatten()
    }

    fn set_cell(&mut self, from: VertexId, to: VertexId, value: Option<EdgeId>) {
        let Some(row) = self.matrix.get_mut(from.index()) else {
            return;
        };
        let col = to.index();
        if col >= row.len() {
            if value.is_none() {
                return;
            }
            row.resize(col + 1, None);
        }
        row[col] = value;
    }

    /// Clear the cell(s) of `edge` if they still point at it
    fn unlink(&mut self, edge: &Edge<E>) {
        if self.cell(edge.first, edge.second) == Some(edge.id) {
            self.set_cell(edge.first, edge.second, None);
        }
        if !self.directed && self.cell(edge.second, edge.first) == Some(edge.id) {
            self.set_cell(edge.second, edge.first, None);
        }
    }

    fn detach_edge(&mut self, e: EdgeId) -> Option<Edge<E>> {
        let edge = self.edges.remove(&e)?;
        self.unlink(&edge);
        Some(edge)
    }

    fn edges_where<F>(&self, v: VertexId, keep: F) -> Result<Vec<EdgeId>>
    where
        F: Fn(&Edge<E>) -> bool,
    {
        self.vertex(v)?;
        Ok(self
            .edges
            .values()
            .filter(|edge| keep(edge))
            .map(|edge| edge.id)
            .collect())
    }
}

impl<V, E> Graph for AdjacencyMatrixGraph<V, E> {
    type VertexElement = V;
    type EdgeElement = E;

    fn vertices(&self) -> Box<dyn Iterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().flatten().map(|vertex| vertex.id))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = EdgeId> + '_> {
        Box::new(self.edges.keys().copied())
    }

    fn insert_vertex(&mut self, element: V) -> Result<VertexId> {
        let number = self.vertices.len() + 1;
        if number > self.max_vertices {
            return Err(GraphError::CapacityExceeded {
                max: self.max_vertices,
            });
        }

        let id = VertexId::new(number as u32, self.epoch);
        self.vertices.push(Some(Vertex::new(id, element)));
        self.matrix.push(Vec::new());
        self.num_vertices += 1;

        trace!("inserted vertex {}", id);
        Ok(id)
    }

    fn insert_edge(&mut self, v1: VertexId, v2: VertexId, element: E) -> Result<EdgeId> {
        self.vertex(v1)?;
        self.vertex(v2)?;

        // An occupied cell is superseded so the table never points at a
        // stale edge or hides a live one.
        if let Some(previous) = self.cell(v1, v2) {
            debug!("edge {} superseded by new {} -> {} edge", previous, v1, v2);
            self.detach_edge(previous);
        }

        self.next_edge += 1;
        let id = EdgeId::new(self.next_edge, self.epoch);
        self.edges.insert(id, Edge::new(id, element, v1, v2));

        self.set_cell(v1, v2, Some(id));
        if !self.directed {
            self.set_cell(v2, v1, Some(id));
        }

        trace!("inserted edge {}: {} -> {}", id, v1, v2);
        Ok(id)
    }

    fn remove_vertex(&mut self, v: VertexId) -> Result<V> {
        self.vertex(v)?;

        // Collect first: nothing below can fail, so removal is all-or-nothing.
        let mut incident: Vec<EdgeId> = Vec::new();
        for u in self.vertices.iter().flatten().map(|vertex| vertex.id) {
            for cell in [self.cell(v, u), self.cell(u, v)] {
                if let Some(e) = cell {
                    if !incident.contains(&e) {
                        incident.push(e);
                    }
                }
            }
        }

        for e in &incident {
            self.detach_edge(*e);
        }

        let vertex = self.vertices[v.index()]
            .take()
            .ok_or_else(|| GraphError::invalid_vertex(format!("{} is not a live vertex", v)))?;
        self.matrix[v.index()] = Vec::new();
        self.num_vertices -= 1;

        debug!("removed vertex {} and {} incident edges", v, incident.len());
        Ok(vertex.element)
    }

    fn remove_edge(&mut self, e: EdgeId) -> Result<E> {
        self.edge(e)?;
        let edge = self
            .detach_edge(e)
            .ok_or_else(|| GraphError::invalid_edge(format!("{} is not a live edge", e)))?;

        trace!("removed edge {}", e);
        Ok(edge.element)
    }

    fn connecting_edge(&self, v1: VertexId, v2: VertexId) -> Result<EdgeId> {
        self.vertex(v1)?;
        self.vertex(v2)?;
        self.cell(v1, v2)
            .ok_or_else(|| GraphError::no_such_edge(format!("no edge connecting {} to {}", v1, v2)))
    }

    fn incoming_edges(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        let directed = self.directed;
        self.edges_where(v, |edge| edge.second == v || (!directed && edge.first == v))
    }

    fn outgoing_edges(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        let directed = self.directed;
        self.edges_where(v, |edge| edge.first == v || (!directed && edge.second == v))
    }

    fn incident_edges(&self, v: VertexId) -> Result<Vec<EdgeId>> {
        self.edges_where(v, |edge| edge.is_incident(v))
    }

    fn num_outgoing_edges(&self, v: VertexId) -> Result<usize> {
        self.vertex(v)?;
        if !self.directed {
            return Err(GraphError::direction(
                "out-degree is only defined on directed graphs",
            ));
        }
        Ok(self.edges.values().filter(|edge| edge.first == v).count())
    }

    fn opposite(&self, v: VertexId, e: EdgeId) -> Result<VertexId> {
        self.vertex(v)?;
        let edge = self.edge(e)?;
        edge.other(v)
            .ok_or_else(|| GraphError::no_such_vertex(format!("{} is not incident on {}", e, v)))
    }

    fn end_vertices(&self, e: EdgeId) -> Result<(VertexId, VertexId)> {
        let edge = self.edge(e)?;
        Ok((edge.first, edge.second))
    }

    fn are_adjacent(&self, v1: VertexId, v2: VertexId) -> Result<bool> {
        self.vertex(v1)?;
        self.vertex(v2)?;
        let forward = self.cell(v1, v2).is_some();
        if self.directed {
            Ok(forward)
        } else {
            Ok(forward && self.cell(v2, v1).is_some())
        }
    }

    fn toggle_directed(&mut self) {
        self.directed = !self.directed;
        self.clear();
        debug!("graph is now {}", if self.directed { "directed" } else { "undirected" });
    }

    fn clear(&mut self) {
        self.matrix = Vec::new();
        self.vertices = Vec::new();
        self.edges = FxHashMap::default();
        self.num_vertices = 0;
        self.next_edge = 0;
        self.epoch = self.epoch.wrapping_add(1);
    }

    fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn contains_vertex(&self, v: VertexId) -> bool {
        self.vertex(v).is_ok()
    }

    fn contains_edge(&self, e: EdgeId) -> bool {
        self.edge(e).is_ok()
    }

    fn vertex_element(&self, v: VertexId) -> Result<&V> {
        self.vertex(v).map(|vertex| &vertex.element)
    }

    fn vertex_element_mut(&mut self, v: VertexId) -> Result<&mut V> {
        self.vertex(v)?;
        self.vertices
            .get_mut(v.index())
            .and_then(Option::as_mut)
            .map(|vertex| &mut vertex.element)
            .ok_or_else(|| GraphError::invalid_vertex(format!("{} is not a live vertex", v)))
    }

    fn edge_element(&self, e: EdgeId) -> Result<&E> {
        self.edge(e).map(|edge| &edge.element)
    }
}
