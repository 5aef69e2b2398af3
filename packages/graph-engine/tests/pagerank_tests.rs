//! PageRank integration tests

mod common;

use std::collections::HashMap;

use common::*;
use graph_engine::{
    AdjacencyMatrixGraph, ConfigError, ConvergenceRule, ErrorKind, Graph, PageRank,
    PageRankConfig, PageRankEngine, SinkStrategy, VertexId,
};
use pretty_assertions::assert_eq;

/// Directed graph whose edges carry no payload
fn unweighted(
    labels: &[&'static str],
    edges: &[(&'static str, &'static str)],
) -> (AdjacencyMatrixGraph<&'static str, Option<i64>>, HashMap<&'static str, VertexId>) {
    let mut g = AdjacencyMatrixGraph::new(true);
    let ids: HashMap<_, _> = labels
        .iter()
        .map(|&label| (label, g.insert_vertex(label).unwrap()))
        .collect();
    for &(from, to) in edges {
        g.insert_edge(ids[from], ids[to], None).unwrap();
    }
    (g, ids)
}

/// Ranks by label, computed with the default engine
fn ranks_by_label(
    labels: &[&'static str],
    edges: &[(&'static str, &'static str)],
) -> HashMap<&'static str, f64> {
    let (mut g, ids) = unweighted(labels, edges);
    let ranks = PageRankEngine::default().calc_page_rank(&mut g, None).unwrap();
    assert_rank_sum(ranks.values(), 0.03);
    ids.into_iter().map(|(label, v)| (label, ranks[&v])).collect()
}

#[test]
fn test_chain_ranks() {
    init_tracing();
    let mut built = directed_chain();
    let (a, b, c) = (built.v("A"), built.v("B"), built.v("C"));

    let ranks = PageRankEngine::default()
        .calc_page_rank(&mut built.graph, None)
        .unwrap();

    assert_eq!(ranks.len(), 3);
    assert_close(ranks[&a], 0.186, 0.03);
    assert_close(ranks[&b], 0.342, 0.03);
    assert_close(ranks[&c], 0.471, 0.03);
    assert!(ranks[&a] < ranks[&b] && ranks[&b] < ranks[&c]);
    assert_rank_sum(ranks.values(), 0.03);
}

#[test]
fn test_empty_graph() {
    let mut g: LabeledGraph = AdjacencyMatrixGraph::new(true);
    let ranks = PageRankEngine::default().calc_page_rank(&mut g, None).unwrap();
    assert!(ranks.is_empty());
}

#[test]
fn test_isolated_vertices_are_uniform() {
    let mut built = GraphBuilder::directed()
        .with_vertices(&["A", "B", "C", "D", "E"])
        .build();

    let report = PageRankEngine::default()
        .calc_page_rank_with_report(&mut built.graph, None)
        .unwrap();

    for rank in report.ranks.values() {
        assert_close(*rank, 0.2, 1e-9);
    }
    assert_eq!(report.sink_edges_added, 25);
    assert_eq!(built.graph.num_edges(), 25);
}

#[test]
fn test_star_hub_ranks_lowest() {
    let mut built = GraphBuilder::directed()
        .with_edge("A", "B", 0)
        .with_edge("A", "C", 0)
        .with_edge("A", "D", 0)
        .build();

    let ranks = PageRankEngine::default()
        .calc_page_rank(&mut built.graph, None)
        .unwrap();

    assert_close(ranks[&built.v("A")], 0.2058, 1e-3);
    for leaf in ["B", "C", "D"] {
        assert_close(ranks[&built.v(leaf)], 0.2647, 1e-3);
    }
    assert_rank_sum(ranks.values(), 0.03);
}

#[test]
fn test_undirected_graph_rejected() {
    let mut built = weighted_triangle();
    assert_error_kind(
        PageRankEngine::default().calc_page_rank(&mut built.graph, None),
        ErrorKind::Direction,
    );
    assert_eq!(built.graph.num_edges(), 3);
}

#[test]
fn test_sink_materialization_mutates_graph() {
    let mut built = directed_chain();
    let c = built.v("C");
    assert_eq!(built.graph.num_outgoing_edges(c).unwrap(), 0);

    PageRankEngine::default()
        .calc_page_rank(&mut built.graph, None)
        .unwrap();

    assert_eq!(built.graph.num_outgoing_edges(c).unwrap(), 3);
    assert!(built.graph.are_adjacent(c, c).unwrap());
    assert_eq!(*built.graph.edge_element(built.graph.connecting_edge(c, c).unwrap()).unwrap(), 0);
}

#[test]
fn test_rerun_on_materialized_graph_is_stable() {
    let mut built = directed_chain();
    let engine = PageRankEngine::default();
    let first = engine.calc_page_rank(&mut built.graph, None).unwrap();
    let edges_after_first = built.graph.num_edges();

    let second = engine
        .calc_page_rank_with_report(&mut built.graph, None)
        .unwrap();

    assert_eq!(second.sink_edges_added, 0);
    assert_eq!(built.graph.num_edges(), edges_after_first);
    for (v, rank) in &first {
        assert_close(second.ranks[v], *rank, 1e-12);
    }
}

#[test]
fn test_redistribute_leaves_graph_untouched() {
    let mut built = directed_chain();
    let config = PageRankConfig::default().sinks(SinkStrategy::Redistribute);

    let report = PageRankEngine::new(&config)
        .unwrap()
        .calc_page_rank_with_report(&mut built.graph, None)
        .unwrap();

    assert_eq!(built.graph.num_edges(), 2);
    assert_eq!(report.sink_edges_added, 0);
    assert_close(report.ranks[&built.v("C")], 0.4808, 1e-3);
    assert_rank_sum(report.ranks.values(), 1e-9);
}

#[test]
fn test_all_vertices_rule_tighter() {
    let mut loose = directed_chain();
    let mut tight = directed_chain();

    let any = PageRankEngine::default()
        .calc_page_rank_with_report(&mut loose.graph, None)
        .unwrap();

    let config = PageRankConfig::default()
        .convergence(ConvergenceRule::AllVertices)
        .tolerance(1e-9);
    let all = PageRankEngine::new(&config)
        .unwrap()
        .calc_page_rank_with_report(&mut tight.graph, None)
        .unwrap();

    assert!(all.iterations > any.iterations);
    assert!(all.converged);
    assert_close(all.ranks[&tight.v("B")], 0.3412, 1e-3);
}

#[test]
fn test_custom_damping() {
    let mut built = directed_chain();
    let config = PageRankConfig::default()
        .damping(0.5)
        .convergence(ConvergenceRule::AllVertices)
        .tolerance(1e-12);

    let report = PageRankEngine::new(&config)
        .unwrap()
        .calc_page_rank_with_report(&mut built.graph, None)
        .unwrap();

    assert_rank_sum(report.ranks.values(), 1e-9);
    assert!(report.ranks[&built.v("C")] > report.ranks[&built.v("A")]);
}

#[test]
fn test_new_rejects_out_of_range_config() {
    match PageRankEngine::new(&PageRankConfig::default().damping(1.5)) {
        Err(ConfigError::Range { field, .. }) => assert_eq!(field, "pagerank.damping"),
        other => panic!("expected a damping range error, got {:?}", other),
    }
    assert!(PageRankEngine::new(&PageRankConfig::default().max_iterations(0)).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════
// Unweighted graphs (edge payload `None`)
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_two_sinks() {
    let r = ranks_by_label(&["A", "B", "C", "D"], &[("A", "B"), ("B", "C"), ("B", "D")]);

    assert_close(r["C"], r["D"], 0.03);
    assert!(r["A"] < r["B"]);
    assert_close(r["C"], r["B"], 0.03);
}

#[test]
fn test_many_sinks() {
    let r = ranks_by_label(
        &["A", "B", "C", "D", "E", "F"],
        &[("A", "B"), ("A", "E"), ("D", "E"), ("F", "B"), ("F", "C")],
    );

    assert_close(r["A"], r["D"], 0.03);
    assert!(r["C"] > r["F"]);
    assert!(r["E"] > r["B"]);
    assert_close(r["A"], r["F"], 0.03);
}

#[test]
fn test_unconnected_parts() {
    let r = ranks_by_label(
        &["A", "B", "C", "D", "E", "F"],
        &[("C", "A"), ("A", "B"), ("B", "C"), ("E", "F"), ("D", "E")],
    );

    assert_close(r["A"], r["C"], 0.03);
    assert_close(r["B"], r["C"], 0.03);
    assert!(r["C"] > r["F"]);
    assert!(r["E"] < r["B"]);
    assert!(r["F"] > r["E"]);
    assert!(r["D"] < r["E"]);
}

#[test]
fn test_complicated_graph_without_sinks() {
    let labels = ["A", "B", "C", "D", "E", "F"];
    let edges = [
        ("F", "A"),
        ("A", "B"),
        ("B", "E"),
        ("E", "F"),
        ("B", "C"),
        ("C", "D"),
        ("D", "B"),
    ];
    let (mut g, ids) = unweighted(&labels, &edges);
    let report = PageRankEngine::default()
        .calc_page_rank_with_report(&mut g, None)
        .unwrap();
    assert_eq!(report.sink_edges_added, 0);
    assert_rank_sum(report.ranks.values(), 0.03);

    let r: HashMap<_, _> = ids
        .into_iter()
        .map(|(label, v)| (label, report.ranks[&v]))
        .collect();
    assert_close(r["F"], r["D"], 0.03);
    for other in ["A", "C", "D", "E"] {
        assert!(r["B"] > r[other], "B should outrank {}", other);
    }
}

#[test]
fn test_disconnected_pair_splits_evenly() {
    let r = ranks_by_label(&["A", "B"], &[]);
    assert_close(r["A"], 0.5, 0.03);
    assert_close(r["B"], 0.5, 0.03);
}
