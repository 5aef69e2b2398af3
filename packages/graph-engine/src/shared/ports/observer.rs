//! Progress hook for algorithm runs
//!
//! Engines accept `Option<&mut dyn GraphObserver>`; with `None` no
//! notification is attempted. Every method has a no-op default so an
//! observer only implements what it draws.

use crate::shared::models::{EdgeId, VertexId};

/// Receives structural progress from an algorithm run
pub trait GraphObserver {
    /// A vertex was finalized (MSF: removed from the frontier queue)
    fn vertex_visited(&mut self, _vertex: VertexId) {}

    /// An edge joined the minimum spanning forest
    fn forest_edge_added(&mut self, _edge: EdgeId) {}

    /// PageRank inserted a real edge out of a sink
    fn sink_edge_added(&mut self, _edge: EdgeId) {}

    /// PageRank finished an iteration (1-based)
    fn iteration_completed(&mut self, _iteration: usize) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl GraphObserver for NoopObserver {}

/// One recorded notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphEvent {
    VertexVisited(VertexId),
    ForestEdgeAdded(EdgeId),
    SinkEdgeAdded(EdgeId),
    IterationCompleted(usize),
}

/// Observer that keeps every event in order
#[derive(Debug, Default, Clone)]
pub struct RecordingObserver {
    pub events: Vec<GraphEvent>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn forest_edges(&self) -> Vec<EdgeId> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GraphEvent::ForestEdgeAdded(e) => Some(*e),
                _ => None,
            })
            .collect()
    }

    pub fn iterations(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, GraphEvent::IterationCompleted(_)))
            .count()
    }
}

impl GraphObserver for RecordingObserver {
    fn vertex_visited(&mut self, vertex: VertexId) {
        self.events.push(GraphEvent::VertexVisited(vertex));
    }

    fn forest_edge_added(&mut self, edge: EdgeId) {
        self.events.push(GraphEvent::ForestEdgeAdded(edge));
    }

    fn sink_edge_added(&mut self, edge: EdgeId) {
        self.events.push(GraphEvent::SinkEdgeAdded(edge));
    }

    fn iteration_completed(&mut self, iteration: usize) {
        self.events.push(GraphEvent::IterationCompleted(iteration));
    }
}
