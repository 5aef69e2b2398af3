//! PageRank port

use std::collections::HashMap;

use crate::errors::Result;
use crate::features::graph_store::Graph;
use crate::shared::models::VertexId;
use crate::shared::ports::GraphObserver;

/// Rank distribution over the vertices of a directed graph
pub trait PageRank {
    /// Map every vertex to its rank; empty graph → empty map
    ///
    /// Fails with `Direction` on undirected graphs. May insert edges into
    /// `graph` (see the sink strategy of the implementation).
    fn calc_page_rank<G>(
        &self,
        graph: &mut G,
        observer: Option<&mut dyn GraphObserver>,
    ) -> Result<HashMap<VertexId, f64>>
    where
        G: Graph + ?Sized,
        G::EdgeElement: Default;
}
