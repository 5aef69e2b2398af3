//! Configuration
//!
//! The graph store takes a single directedness flag (plus a capacity bound);
//! PageRank exposes its constants and the two behaviour switches. Both can be
//! loaded together from a versioned YAML file:
//!
//! ```rust,ignore
//! use graph_engine::config::EngineConfig;
//!
//! let config = EngineConfig::from_yaml("engine.yaml")?;
//! let graph = AdjacencyMatrixGraph::<&str, Option<i64>>::with_config(config.graph.clone())?;
//! let engine = PageRankEngine::new(&config.pagerank)?;
//! ```

pub mod engine_config;
pub mod error;
pub mod validation;

pub use engine_config::{
    ConvergenceRule, EngineConfig, GraphConfig, PageRankConfig, SinkStrategy, CONFIG_VERSION,
    MAX_VERTICES,
};
pub use error::{ConfigError, ConfigResult};
pub use validation::Validatable;
