//! PageRank Engine - iterative rank distribution
//!
//! # Algorithm
//! ```text
//! PR(v) = (1-d)/N + d * Σ(PR(u) / outdegree(u))
//!                       u→v
//!
//! where:
//!   d = damping factor (0.85)
//!   N = number of vertices
//!   u→v = edge from u to v
//! ```
//!
//! 1. Every vertex starts at 1/N.
//! 2. Sinks (out-degree 0) are dealt with once, before iterating:
//!    - `Materialize`: real edges sink→w for every vertex w (self-loop
//!      included) are inserted into the graph.
//!    - `Redistribute`: each iteration adds `d * Σ PR(sink) / N` to every
//!      vertex, which yields the same ranks without mutating the graph.
//! 3. Iterate. At the top of every iteration after the first, the previous
//!    and current vectors are compared; if the convergence rule holds, the
//!    iteration still runs once more and then the loop stops.
//!
//! # Performance
//! - **Complexity**: O(E) to build incoming lists and out-degrees, then
//!   O(E * iterations)
//! - **Memory**: O(N + E)

use std::collections::HashMap;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use crate::config::{ConfigResult, ConvergenceRule, PageRankConfig, SinkStrategy, Validatable};
use crate::errors::{GraphError, Result};
use crate::features::graph_store::Graph;
use crate::features::pagerank::ports::PageRank;
use crate::shared::models::VertexId;
use crate::shared::ports::GraphObserver;

/// Outcome of a PageRank run
#[derive(Debug, Clone, PartialEq)]
pub struct PageRankReport {
    /// Vertex → rank
    pub ranks: HashMap<VertexId, f64>,

    /// Iterations actually computed
    pub iterations: usize,

    /// Whether the convergence rule stopped the loop (vs. the iteration cap)
    pub converged: bool,

    /// Edges inserted into the graph for sinks
    pub sink_edges_added: usize,
}

impl PageRankReport {
    fn empty() -> Self {
        Self {
            ranks: HashMap::new(),
            iterations: 0,
            converged: true,
            sink_edges_added: 0,
        }
    }

    /// Sum of all ranks (≈ 1.0 for a non-empty graph)
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }
}

/// PageRank engine
///
/// # Example
/// ```ignore
/// let config = PageRankConfig::default();
/// let engine = PageRankEngine::new(&config)?;
///
/// let ranks = engine.calc_page_rank(&mut graph, None)?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct PageRankEngine {
    config: PageRankConfig,
}

impl PageRankEngine {
    /// Create a new PageRank engine; the config is validated first
    pub fn new(config: &PageRankConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &PageRankConfig {
        &self.config
    }

    /// Full run with iteration statistics
    ///
    /// Empty graph → empty report, whatever the graph's direction.
    /// Undirected non-empty graph → `Direction` error, graph untouched.
    pub fn calc_page_rank_with_report<G>(
        &self,
        graph: &mut G,
        mut observer: Option<&mut dyn GraphObserver>,
    ) -> Result<PageRankReport>
    where
        G: Graph + ?Sized,
        G::EdgeElement: Default,
    {
        let vertices: Vec<VertexId> = graph.vertices().collect();
        let n = vertices.len();
        if n == 0 {
            return Ok(PageRankReport::empty());
        }

        let index: FxHashMap<VertexId, usize> = vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        if !graph.is_directed() {
            return Err(GraphError::direction(
                "PageRank is only defined on directed graphs",
            ));
        }

        let Adjacency {
            mut incoming,
            mut out_degree,
        } = build_adjacency(graph, &index, n)?;

        let sinks: Vec<usize> = (0..n).filter(|&i| out_degree[i] == 0).collect();
        debug!(
            "PageRank over {} vertices, {} sinks ({:?})",
            n,
            sinks.len(),
            self.config.sinks
        );

        let mut sink_edges_added = 0usize;
        if self.config.sinks == SinkStrategy::Materialize {
            for &s in &sinks {
                for (w, &target) in vertices.iter().enumerate() {
                    let edge = graph.insert_edge(vertices[s], target, G::EdgeElement::default())?;
                    incoming[w].push(s);
                    sink_edges_added += 1;
                    if let Some(obs) = observer.as_deref_mut() {
                        obs.sink_edge_added(edge);
                    }
                }
                out_degree[s] = n;
            }
        }

        let redistribute: &[usize] = match self.config.sinks {
            SinkStrategy::Materialize => &[],
            SinkStrategy::Redistribute => &sinks,
        };

        let damping = self.config.damping;
        let base = (1.0 - damping) / n as f64;

        let mut ranks = vec![1.0 / n as f64; n];
        let mut previous = ranks.clone();
        let mut iterations = 0usize;
        let mut converged = false;

        for iteration in 0..self.config.max_iterations {
            let stop = iteration > 0 && self.has_converged(&previous, &ranks);
            previous.copy_from_slice(&ranks);

            let sink_share =
                damping * redistribute.iter().map(|&s| previous[s]).sum::<f64>() / n as f64;

            for (v, rank) in ranks.iter_mut().enumerate() {
                let incoming_sum: f64 = incoming[v]
                    .iter()
                    .map(|&u| previous[u] / out_degree[u] as f64)
                    .sum();
                *rank = base + sink_share + damping * incoming_sum;
            }

            iterations += 1;
            if let Some(obs) = observer.as_deref_mut() {
                obs.iteration_completed(iterations);
            }

            if stop {
                converged = true;
                debug!("PageRank converged after {} iterations", iterations);
                break;
            }
        }

        info!(
            "Computed PageRank for {} vertices in {} iterations (converged: {})",
            n, iterations, converged
        );

        Ok(PageRankReport {
            ranks: vertices.into_iter().zip(ranks).collect(),
            iterations,
            converged,
            sink_edges_added,
        })
    }

    fn has_converged(&self, previous: &[f64], current: &[f64]) -> bool {
        let tolerance = self.config.tolerance;
        let mut deltas = previous
            .iter()
            .zip(current)
            .map(|(p, c)| (p - c).abs());

        match self.config.convergence {
            ConvergenceRule::AnyVertex => deltas.any(|delta| delta <= tolerance),
            ConvergenceRule::AllVertices => deltas.all(|delta| delta <= tolerance),
        }
    }
}

impl PageRank for PageRankEngine {
    fn calc_page_rank<G>(
        &self,
        graph: &mut G,
        observer: Option<&mut dyn GraphObserver>,
    ) -> Result<HashMap<VertexId, f64>>
    where
        G: Graph + ?Sized,
        G::EdgeElement: Default,
    {
        self.calc_page_rank_with_report(graph, observer)
            .map(|report| report.ranks)
    }
}

/// Incoming source indices per target index, one entry per edge
/// Incoming lists and out-degrees, by vertex index
struct Adjacency {
    incoming: Vec<Vec<usize>>,
    out_degree: Vec<usize>,
}

/// One pass over the edges; self-loops count on both sides.
fn build_adjacency<G>(
    graph: &G,
    index: &FxHashMap<VertexId, usize>,
    n: usize,
) -> Result<Adjacency>
where
    G: Graph + ?Sized,
{
    let mut incoming = vec![Vec::new(); n];
    let mut out_degree = vec![0usize; n];
    for edge in graph.edges() {
        let (source, target) = graph.end_vertices(edge)?;
        let source = *index
            .get(&source)
            .ok_or_else(|| GraphError::invalid_vertex(source.to_string()))?;
        let target = *index
            .get(&target)
            .ok_or_else(|| GraphError::invalid_vertex(target.to_string()))?;
        incoming[target].push(source);
        out_degree[source] += 1;
    }
    Ok(Adjacency {
        incoming,
        out_degree,
    })
}
