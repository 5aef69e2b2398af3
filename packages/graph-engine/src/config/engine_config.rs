//! Graph and algorithm configuration types

use super::error::{ConfigError, ConfigResult};
use super::validation::Validatable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Default bound on vertex numbers handed out by a single graph
pub const MAX_VERTICES: usize = 1024;

/// Current YAML schema version
pub const CONFIG_VERSION: u32 = 1;

// ============================================================================
// Graph Store Configuration
// ============================================================================

/// Graph store configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Directed (edges run first→second) or undirected semantics
    pub directed: bool,

    /// Highest vertex number the graph may issue (1..=1_000_000)
    pub max_vertices: usize,
}

impl GraphConfig {
    pub fn directed(mut self, v: bool) -> Self {
        self.directed = v;
        self
    }

    pub fn max_vertices(mut self, v: usize) -> Self {
        self.max_vertices = v;
        self
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            directed: false,
            max_vertices: MAX_VERTICES,
        }
    }
}

impl Validatable for GraphConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_vertices == 0 || self.max_vertices > 1_000_000 {
            return Err(ConfigError::range_with_hint(
                "graph.max_vertices",
                self.max_vertices,
                1,
                1_000_000,
                "The adjacency table is dense; keep capacity modest",
            ));
        }
        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "GraphConfig"
    }
}

// ============================================================================
// PageRank Configuration
// ============================================================================

/// When the PageRank iteration is allowed to stop early
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConvergenceRule {
    /// Stop once any single vertex moved by at most the tolerance
    AnyVertex,
    /// Stop only when every vertex moved by at most the tolerance
    AllVertices,
}

/// How vertices without outgoing edges are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SinkStrategy {
    /// Insert a real edge from every sink to every vertex (mutates the graph)
    Materialize,
    /// Spread sink rank uniformly without touching the graph
    Redistribute,
}

/// PageRank configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor (0, 1)
    pub damping: f64,

    /// Maximum iterations (1..=100000)
    pub max_iterations: usize,

    /// Convergence tolerance, compared against per-vertex rank deltas
    pub tolerance: f64,

    pub convergence: ConvergenceRule,

    pub sinks: SinkStrategy,
}

impl PageRankConfig {
    /// Builder: Set damping
    pub fn damping(mut self, v: f64) -> Self {
        self.damping = v;
        self
    }

    /// Builder: Set max_iterations
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.max_iterations = v;
        self
    }

    /// Builder: Set tolerance
    pub fn tolerance(mut self, v: f64) -> Self {
        self.tolerance = v;
        self
    }

    /// Builder: Set convergence rule
    pub fn convergence(mut self, v: ConvergenceRule) -> Self {
        self.convergence = v;
        self
    }

    /// Builder: Set sink strategy
    pub fn sinks(mut self, v: SinkStrategy) -> Self {
        self.sinks = v;
        self
    }
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 100,
            tolerance: 0.01,
            convergence: ConvergenceRule::AnyVertex,
            sinks: SinkStrategy::Materialize,
        }
    }
}

impl Validatable for PageRankConfig {
    fn validate(&self) -> ConfigResult<()> {
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(ConfigError::range_with_hint(
                "pagerank.damping",
                self.damping,
                "0 (exclusive)",
                "1 (exclusive)",
                "The usual damping factor is 0.85",
            ));
        }

        if self.max_iterations == 0 || self.max_iterations > 100_000 {
            return Err(ConfigError::range_with_hint(
                "pagerank.max_iterations",
                self.max_iterations,
                1,
                100_000,
                "Iteration cap is the only termination guarantee",
            ));
        }

        if !(self.tolerance > 0.0 && self.tolerance <= 1.0) {
            return Err(ConfigError::range_with_hint(
                "pagerank.tolerance",
                self.tolerance,
                "0 (exclusive)",
                1,
                "Ranks live in [0, 1]; a larger tolerance stops immediately",
            ));
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "PageRankConfig"
    }
}

// ============================================================================
// Engine Configuration (YAML v1)
// ============================================================================

/// Complete engine configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub graph: GraphConfig,
    pub pagerank: PageRankConfig,
}

/// YAML schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineConfigFileV1 {
    version: u32,

    #[serde(default)]
    graph: GraphConfig,

    #[serde(default)]
    pagerank: PageRankConfig,
}

impl EngineConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: EngineConfigFileV1 = serde_yaml::from_str(content)?;

        if file.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
                supported: vec![CONFIG_VERSION],
            });
        }

        let config = Self {
            graph: file.graph,
            pagerank: file.pagerank,
        };
        config.validate()?;
        debug!("Loaded {} (schema v{})", config.config_name(), file.version);
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = EngineConfigFileV1 {
            version: CONFIG_VERSION,
            graph: self.graph.clone(),
            pagerank: self.pagerank.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }

    pub fn to_json(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Validatable for EngineConfig {
    fn validate(&self) -> ConfigResult<()> {
        self.graph.validate()?;
        self.pagerank.validate()
    }

    fn config_name(&self) -> &'static str {
        "EngineConfig"
    }
}
