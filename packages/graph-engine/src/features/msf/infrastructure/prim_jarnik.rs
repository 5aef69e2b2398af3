//! Prim-Jarnik minimum spanning forest
//!
//! # Algorithm
//! 1. One arbitrary vertex gets cost `Root`, every other vertex `Unreached`;
//!    all of them go into the queue keyed by cost.
//! 2. Repeatedly remove the cheapest vertex `v` and mark it visited. If it has
//!    a predecessor edge, that edge joins the forest. For each edge `v-u` with
//!    `u` unvisited and weight below `u`'s cost, lower `u`'s cost and key.
//! 3. A vertex that leaves the queue still `Unreached` starts a new component,
//!    so disconnected graphs yield one tree per component.
//!
//! # Complexity
//! One O(|E|) pass builds the incidence lists, then O((|V| + |E|) log |V|)
//! queue work: |V| removals, at most |E| key changes.

use std::collections::HashSet;
use std::iter::Sum;

use tracing::{debug, info};

use crate::errors::{GraphError, Result};
use crate::features::graph_store::Graph;
use crate::features::msf::ports::MinSpanForest;
use crate::shared::collections::{AdaptablePriorityQueue, Decorator, EntryHandle};
use crate::shared::models::{EdgeId, VertexId};
use crate::shared::ports::GraphObserver;

/// Queue key: `Root < Finite(_) < Unreached`, whatever the weight type
#[derive(Debug, Clone, PartialEq, PartialOrd)]
enum Cost<W> {
    Root,
    Finite(W),
    Unreached,
}

/// Prim-Jarnik forest builder (stateless; each run is independent)
#[derive(Debug, Default, Clone, Copy)]
pub struct PrimJarnikMsf;

impl PrimJarnikMsf {
    pub fn new() -> Self {
        Self
    }
}

impl MinSpanForest for PrimJarnikMsf {
    fn gen_min_span_forest<G>(
        &self,
        graph: &G,
        mut observer: Option<&mut dyn GraphObserver>,
    ) -> Result<HashSet<EdgeId>>
    where
        G: Graph + ?Sized,
        G::EdgeElement: Clone + PartialOrd,
    {
        let vertices: Vec<VertexId> = graph.vertices().collect();
        let n = vertices.len();

        let mut cost: Decorator<VertexId, Cost<G::EdgeElement>> = Decorator::with_capacity(n);
        let mut prev: Decorator<VertexId, Option<EdgeId>> = Decorator::with_capacity(n);
        let mut visited: Decorator<VertexId, bool> = Decorator::with_capacity(n);
        let mut entries: Decorator<VertexId, EntryHandle> = Decorator::with_capacity(n);
        let mut queue: AdaptablePriorityQueue<Cost<G::EdgeElement>, VertexId> =
            AdaptablePriorityQueue::with_capacity(n);

        for (i, &v) in vertices.iter().enumerate() {
            let key = if i == 0 { Cost::Root } else { Cost::Unreached };
            cost.set(v, key.clone());
            prev.set(v, None);
            visited.set(v, false);
            entries.set(v, queue.insert(key, v));
        }

        let incidence = build_incidence(graph, &vertices)?;

        let mut forest = HashSet::with_capacity(n.saturating_sub(1));
        let mut components = 0usize;

        while let Some((_, v)) = queue.remove_min() {
            visited.set(v, true);
            entries.remove(&v);
            if let Some(obs) = observer.as_deref_mut() {
                obs.vertex_visited(v);
            }

            match prev.get(&v).copied().flatten() {
                Some(edge) => {
                    forest.insert(edge);
                    if let Some(obs) = observer.as_deref_mut() {
                        obs.forest_edge_added(edge);
                    }
                }
                None => {
                    components += 1;
                    debug!("MSF component {} rooted at {}", components, v);
                }
            }

            let around = incidence
                .get(&v)
                .ok_or_else(|| GraphError::invalid_vertex(v.to_string()))?;
            for &(edge, u) in around {
                if visited.get(&u).copied().unwrap_or(true) {
                    continue;
                }

                let weight = Cost::Finite(graph.edge_element(edge)?.clone());
                let improves = cost.get(&u).map_or(false, |current| weight < *current);
                if !improves {
                    continue;
                }

                cost.set(u, weight.clone());
                prev.set(u, Some(edge));
                if let Some(&handle) = entries.get(&u) {
                    queue.replace_key(handle, weight);
                }
            }
        }

        info!(
            "Computed MSF: {} edges over {} vertices in {} components",
            forest.len(),
            n,
            components
        );
        Ok(forest)
    }
}

/// Per-vertex `(edge, opposite)` lists from a single pass over the edges.
/// Self-loops never improve a cost and are left out.
fn build_incidence<G>(
    graph: &G,
    vertices: &[VertexId],
) -> Result<Decorator<VertexId, Vec<(EdgeId, VertexId)>>>
where
    G: Graph + ?Sized,
{
    let mut incidence = Decorator::with_capacity(vertices.len());
    for &v in vertices {
        incidence.set(v, Vec::new());
    }

    for edge in graph.edges() {
        let (a, b) = graph.end_vertices(edge)?;
        if a == b {
            continue;
        }
        incidence
            .get_mut(&a)
            .ok_or_else(|| GraphError::invalid_vertex(a.to_string()))?
            .push((edge, b));
        incidence
            .get_mut(&b)
            .ok_or_else(|| GraphError::invalid_vertex(b.to_string()))?
            .push((edge, a));
    }
    Ok(incidence)
}

/// Sum of the payload weights of `forest`
pub fn forest_weight<'a, G>(
    graph: &G,
    forest: impl IntoIterator<Item = &'a EdgeId>,
) -> Result<G::EdgeElement>
where
    G: Graph + ?Sized,
    G::EdgeElement: Clone + Sum,
{
    forest
        .into_iter()
        .map(|edge| graph.edge_element(*edge).cloned())
        .sum()
}
