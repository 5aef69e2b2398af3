/*
 * Graph Engine - Adjacency-matrix graph store with MSF and PageRank
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Identities (VertexId, EdgeId), decorator, adaptable heap, observer port
 * - features/    : Vertical slices (graph_store → msf, pagerank)
 * - config/      : Validated engine configuration (YAML v1)
 *
 * Identities:
 * - Vertex numbers start at 1 and are never reused within a graph epoch
 * - clear()/toggle_directed() start a new epoch; older ids become invalid
 */

// Crate-level lint configuration
#![allow(clippy::new_without_default)] // Default impl not always needed
#![allow(clippy::module_inception)] // Module naming intentional
#![allow(clippy::type_complexity)] // Decorator/heap generics

pub mod config;
pub mod errors;
pub mod features;
pub mod shared;

// ═══════════════════════════════════════════════════════════════════════════
// Public API re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{
    ConfigError, ConfigResult, ConvergenceRule, EngineConfig, GraphConfig, PageRankConfig,
    SinkStrategy, Validatable,
};
pub use errors::{ErrorKind, GraphError, Result};
pub use features::graph_store::{AdjacencyMatrixGraph, Graph};
pub use features::msf::{forest_weight, MinSpanForest, PrimJarnikMsf};
pub use features::pagerank::{PageRank, PageRankEngine, PageRankReport};
pub use shared::{
    AdaptablePriorityQueue, Decorator, EdgeId, EntryHandle, GraphEvent, GraphObserver,
    NoopObserver, RecordingObserver, VertexId,
};
