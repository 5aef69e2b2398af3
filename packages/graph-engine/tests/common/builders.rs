//! Test data builders

use std::collections::HashMap;

use graph_engine::{AdjacencyMatrixGraph, EdgeId, Graph, VertexId};

pub type LabeledGraph = AdjacencyMatrixGraph<&'static str, i64>;

/// Builder for labeled graphs with integer weights
///
/// Vertices are created in first-mention order, so numbering is predictable.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    directed: bool,
    vertices: Vec<&'static str>,
    edges: Vec<(&'static str, &'static str, i64)>,
}

impl GraphBuilder {
    pub fn undirected() -> Self {
        Self::default()
    }

    pub fn directed() -> Self {
        Self {
            directed: true,
            ..Self::default()
        }
    }

    /// Add a vertex (no-op if the label already exists)
    pub fn with_vertex(mut self, label: &'static str) -> Self {
        if !self.vertices.contains(&label) {
            self.vertices.push(label);
        }
        self
    }

    /// Add several vertices
    pub fn with_vertices(self, labels: &[&'static str]) -> Self {
        labels.iter().fold(self, |b, &label| b.with_vertex(label))
    }

    /// Add an edge, creating missing endpoints
    pub fn with_edge(self, from: &'static str, to: &'static str, weight: i64) -> Self {
        let mut builder = self.with_vertex(from).with_vertex(to);
        builder.edges.push((from, to, weight));
        builder
    }

    /// Build the graph and the label → id lookup
    pub fn build(self) -> BuiltGraph {
        let mut graph = AdjacencyMatrixGraph::new(self.directed);
        let mut ids = HashMap::new();
        for label in self.vertices {
            ids.insert(label, graph.insert_vertex(label).unwrap());
        }

        let mut edges = HashMap::new();
        for (from, to, weight) in self.edges {
            let e = graph.insert_edge(ids[from], ids[to], weight).unwrap();
            edges.insert((from, to), e);
        }

        BuiltGraph { graph, ids, edges }
    }
}

/// Built graph plus lookups by label
#[derive(Debug)]
pub struct BuiltGraph {
    pub graph: LabeledGraph,
    pub ids: HashMap<&'static str, VertexId>,
    pub edges: HashMap<(&'static str, &'static str), EdgeId>,
}

impl BuiltGraph {
    pub fn v(&self, label: &str) -> VertexId {
        self.ids[label]
    }

    pub fn e(&self, from: &'static str, to: &'static str) -> EdgeId {
        self.edges[&(from, to)]
    }
}
