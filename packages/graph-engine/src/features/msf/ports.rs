//! MSF port

use std::collections::HashSet;

use crate::errors::Result;
use crate::features::graph_store::Graph;
use crate::shared::models::EdgeId;
use crate::shared::ports::GraphObserver;

/// Minimum spanning forest constructor
///
/// Edge payloads are the weights and must be ordered. Directed graphs are
/// spanned ignoring direction.
pub trait MinSpanForest {
    /// Unordered set of forest edges; `|V| - components` of them
    fn gen_min_span_forest<G>(
        &self,
        graph: &G,
        observer: Option<&mut dyn GraphObserver>,
    ) -> Result<HashSet<EdgeId>>
    where
        G: Graph + ?Sized,
        G::EdgeElement: Clone + PartialOrd;
}
